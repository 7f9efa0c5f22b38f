//! Player and car motion
//!
//! Displacement is `CELL_SIZE * dt * speed`, so speeds are in cells/second.

use serde::{Deserialize, Serialize};

use super::object::{Direction, GameObject};
use crate::consts::*;

/// Directional keys held down this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Move the player by the held keys, then clamp it to the playfield.
///
/// Each axis moves independently, so diagonals are not normalized. Opposite
/// keys cancel before scaling, so an overflowing step still clamps cleanly.
pub fn move_player(player: &mut GameObject, keys: HeldKeys, dt: f32) {
    let step = CELL_SIZE * dt * player.speed;
    if step.is_nan() || step <= 0.0 {
        return;
    }

    match (keys.left, keys.right) {
        (true, false) => player.pos.x -= step,
        (false, true) => player.pos.x += step,
        _ => {}
    }
    match (keys.up, keys.down) {
        (true, false) => player.pos.y -= step,
        (false, true) => player.pos.y += step,
        _ => {}
    }

    player.pos.x = player.pos.x.clamp(0.0, SCREEN_WIDTH - CELL_SIZE);
    player.pos.y = player.pos.y.clamp(TOP_BOUNDARY, SCREEN_HEIGHT - CELL_SIZE);
}

/// Whether the player has crossed to the finish line
pub fn reached_goal(player: &GameObject) -> bool {
    player.pos.y <= TOP_BOUNDARY
}

/// Advance one car and wrap it to the opposite edge once it leaves the screen.
///
/// The wrap runs on every frame that moves the car. A zero-length frame (or a
/// parked car) is the one exception: it leaves the car where it is, even past
/// an edge, so pausing and resuming never shifts the layout.
pub fn move_car(car: &mut GameObject, dt: f32) {
    let step = car.speed * dt;
    if step.is_nan() || step <= 0.0 {
        return;
    }
    let width = car.width as f32;
    match car.direction {
        Some(Direction::Right) => {
            car.pos.x += step * CELL_SIZE;
            if car.pos.x > SCREEN_WIDTH {
                car.pos.x = -width;
            }
        }
        Some(Direction::Left) => {
            car.pos.x -= step * CELL_SIZE;
            if car.pos.x < -width {
                car.pos.x = SCREEN_WIDTH;
            }
        }
        None => {}
    }
}

pub fn move_cars(cars: &mut [GameObject], dt: f32) {
    for car in cars {
        move_car(car, dt);
    }
}
