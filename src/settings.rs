//! Game settings
//!
//! Stored as JSON next to the game. A missing or malformed file is not an
//! error for the player: defaults are used and a warning is logged.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::sim::Difficulty;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("could not read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title shown by the host
    pub window_title: String,
    /// Directories searched, in order, for sprite images
    pub asset_dirs: Vec<PathBuf>,
    /// Fixed level-generation seed; random per run when absent
    pub seed: Option<u64>,

    // === Headless driver ===
    /// Difficulty the driver plays, by name or index
    #[serde(deserialize_with = "lenient_difficulty")]
    pub demo_difficulty: Difficulty,
    /// Simulated frames per second
    pub demo_fps: u32,
}

/// Accept a difficulty name or index; anything else falls back to Easy
/// without discarding the rest of the file.
fn lenient_difficulty<'de, D>(deserializer: D) -> Result<Difficulty, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let difficulty = match &value {
        serde_json::Value::String(name) => Difficulty::from_str(name),
        serde_json::Value::Number(n) => n
            .as_i64()
            .map(|i| Difficulty::from_index(i.clamp(i32::MIN as i64, i32::MAX as i64) as i32)),
        _ => None,
    };
    Ok(difficulty.unwrap_or_else(|| {
        log::warn!("Unknown difficulty {}, using Easy", value);
        Difficulty::Easy
    }))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "ROAD ADVENTURE".to_string(),
            asset_dirs: vec![PathBuf::from("."), PathBuf::from("../image")],
            seed: None,
            demo_difficulty: Difficulty::Easy,
            demo_fps: 60,
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "road_adventure.json";

    pub fn try_load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Load settings, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Frame duration for the headless driver
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.demo_fps.max(1) as f32
    }
}
