//! Level generation
//!
//! Builds the starting player and car layout for a difficulty. Cars are laid
//! out lane by lane, left to right, each one a random gap after the previous
//! car's origin. The gap is measured origin-to-origin and ignores car width,
//! so a tight gap range can spawn overlapping cars.

use glam::Vec2;
use rand::Rng;

use super::level::Difficulty;
use super::object::{Direction, GameObject};
use crate::consts::*;

/// Freshly generated level contents
#[derive(Debug, Clone)]
pub struct LevelLayout {
    pub player: GameObject,
    /// Lane-major, creation order within a lane
    pub cars: Vec<GameObject>,
}

/// Uniform sample from `[low, high)`, or `low` for an empty range
fn sample_range<R: Rng>(rng: &mut R, low: f32, high: f32) -> f32 {
    if low < high {
        rng.random_range(low..high)
    } else {
        low
    }
}

/// Vertical origin of a lane
pub fn lane_y(lane: u32) -> f32 {
    lane as f32 * LANE_SPACING + TEXT_AREA_HEIGHT
}

/// Generate the player and cars for `difficulty`
pub fn generate_level<R: Rng>(difficulty: Difficulty, rng: &mut R) -> LevelLayout {
    let cfg = difficulty.config();
    let mut cars = Vec::with_capacity(cfg.car_count());

    let min_gap = cfg.min_car_gap as f32 * CELL_SIZE;
    let max_gap = cfg.max_car_gap as f32 * CELL_SIZE;

    for lane in 0..cfg.lane_count {
        let y = lane_y(lane);
        // First car is measured from one cell off the left edge
        let mut last_x = -CELL_SIZE;

        for _ in 0..cfg.cars_per_lane {
            let x = sample_range(rng, last_x + min_gap, last_x + max_gap);
            let speed = sample_range(rng, cfg.car_speed_min, cfg.car_speed_max);
            let direction = if rng.random_bool(0.5) {
                Direction::Right
            } else {
                Direction::Left
            };

            cars.push(GameObject::car(Vec2::new(x, y), speed, direction));
            last_x = x;
        }
    }

    log::info!(
        "Generated {} level: {} lanes, {} cars",
        difficulty.as_str(),
        cfg.lane_count,
        cars.len()
    );

    LevelLayout {
        player: GameObject::player(),
        cars,
    }
}
