//! Game simulation module
//!
//! All gameplay logic lives here. Nothing in this module draws, loads files,
//! or polls devices:
//! - Time enters only as an elapsed-seconds value (or an `Instant` in `tick_at`)
//! - Randomness comes from an injected generator
//! - Cars are stored lane-major, in creation order

pub mod collision;
pub mod generate;
pub mod level;
pub mod motion;
pub mod object;
pub mod state;
pub mod tick;

pub use collision::{check_collision, first_collision};
pub use generate::{LevelLayout, generate_level};
pub use level::{Difficulty, LevelConfig};
pub use motion::{HeldKeys, move_car, move_cars, move_player, reached_goal};
pub use object::{Direction, GameObject, Rect, SpriteId};
pub use state::{GameMode, GameSession, LoseReason};
pub use tick::{TickInput, TickOutcome, tick, tick_at};
