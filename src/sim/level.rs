//! Difficulty levels and their tuning table

use serde::{Deserialize, Serialize};

/// Difficulty selected from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Map a numeric level to a difficulty. Unknown values fall back to Easy.
    pub fn from_index(index: i32) -> Self {
        match index {
            0 => Difficulty::Easy,
            1 => Difficulty::Medium,
            2 => Difficulty::Hard,
            other => {
                log::warn!("Unknown difficulty index {}, using Easy", other);
                Difficulty::Easy
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn config(&self) -> &'static LevelConfig {
        match self {
            Difficulty::Easy => &EASY,
            Difficulty::Medium => &MEDIUM,
            Difficulty::Hard => &HARD,
        }
    }
}

/// Per-difficulty tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelConfig {
    pub lane_count: u32,
    pub cars_per_lane: u32,
    /// Car speed range in cells per second, `[min, max)`
    pub car_speed_min: f32,
    pub car_speed_max: f32,
    /// Gap between consecutive car origins in a lane, in cells
    pub min_car_gap: u32,
    pub max_car_gap: u32,
    pub level_time_secs: u32,
}

impl LevelConfig {
    pub fn car_count(&self) -> usize {
        (self.lane_count * self.cars_per_lane) as usize
    }
}

const EASY: LevelConfig = LevelConfig {
    lane_count: 7,
    cars_per_lane: 2,
    car_speed_min: 2.0,
    car_speed_max: 2.5,
    min_car_gap: 7,
    max_car_gap: 11,
    level_time_secs: 30,
};

const MEDIUM: LevelConfig = LevelConfig {
    lane_count: 8,
    cars_per_lane: 3,
    car_speed_min: 2.5,
    car_speed_max: 3.5,
    min_car_gap: 6,
    max_car_gap: 9,
    level_time_secs: 25,
};

const HARD: LevelConfig = LevelConfig {
    lane_count: 9,
    cars_per_lane: 4,
    car_speed_min: 3.0,
    car_speed_max: 4.5,
    min_car_gap: 5,
    max_car_gap: 7,
    level_time_secs: 10,
};
