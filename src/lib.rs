//! Road Adventure - A lane-crossing arcade game
//!
//! Core modules:
//! - `sim`: Game simulation (level generation, motion, collisions, game modes)
//! - `ui`: Buttons and text labels, laid out through a text-measuring capability
//! - `render`: Draw command lists for an external renderer
//! - `assets`: Sprite manifest with placeholder fallback
//! - `settings`: JSON configuration

pub mod assets;
pub mod render;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical canvas size
    pub const SCREEN_WIDTH: f32 = 640.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;

    /// Base layout unit (grid cells are square)
    pub const CELL_SIZE: f32 = 32.0;
    pub const GRID_WIDTH: u32 = 20;
    pub const GRID_HEIGHT: u32 = 15;

    /// Player speed in cells per second, per held direction
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_SIZE: u32 = 32;

    /// Cars are two cells wide, one cell high
    pub const CAR_WIDTH: u32 = 64;
    pub const CAR_HEIGHT: u32 = 32;

    /// Vertical distance between lane origins (1.5 cells)
    pub const LANE_SPACING: f32 = CELL_SIZE * 1.5;

    /// Height of the HUD band at the top. Also the player's finish line.
    pub const TEXT_AREA_HEIGHT: f32 = 5.0;
    pub const TOP_BOUNDARY: f32 = TEXT_AREA_HEIGHT;
}
