//! Positioned, sized, moving entities (the player and the cars)

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Opaque handle to a renderable. Resolved by the renderer, never by the sim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    Player,
    Car,
    Background,
}

/// Horizontal travel direction of a car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Sign applied to horizontal displacement
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Pixel-snapped axis-aligned bounding box, half-open on both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub fn new(x0: i32, y0: i32, width: u32, height: u32) -> Self {
        Self {
            x0,
            y0,
            x1: x0 + width as i32,
            y1: y0 + height as i32,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    /// True when the intersection has nonzero width and height.
    /// Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x0 < other.x1
            && other.x0 < self.x1
            && self.y0 < other.y1
            && other.y0 < self.y1
    }
}

/// A player or car
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameObject {
    /// Top-left corner in pixels
    pub pos: Vec2,
    pub width: u32,
    pub height: u32,
    /// Cells per second
    pub speed: f32,
    /// `None` for the player
    pub direction: Option<Direction>,
    pub sprite: SpriteId,
}

impl GameObject {
    /// Player at its spawn cell: middle column, bottom row
    pub fn player() -> Self {
        Self {
            pos: Vec2::new(
                (GRID_WIDTH / 2) as f32 * CELL_SIZE,
                (GRID_HEIGHT - 1) as f32 * CELL_SIZE,
            ),
            width: PLAYER_SIZE,
            height: PLAYER_SIZE,
            speed: PLAYER_SPEED,
            direction: None,
            sprite: SpriteId::Player,
        }
    }

    pub fn car(pos: Vec2, speed: f32, direction: Direction) -> Self {
        Self {
            pos,
            width: CAR_WIDTH,
            height: CAR_HEIGHT,
            speed: speed.max(0.0),
            direction: Some(direction),
            sprite: SpriteId::Car,
        }
    }

    /// Bounding box snapped to whole pixels (truncating toward zero)
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.pos.x as i32,
            self.pos.y as i32,
            self.width,
            self.height,
        )
    }
}
