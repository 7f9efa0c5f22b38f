//! Game session state and mode transitions
//!
//! The session owns the player, the cars and the countdown. Every mode change
//! goes through one of the transition methods below; a transition requested
//! from a mode that does not allow it is ignored.

use std::time::Instant;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::generate::generate_level;
use super::level::{Difficulty, LevelConfig};
use super::object::GameObject;
use crate::ui::Ui;

/// Why a round was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoseReason {
    /// The player overlapped a car
    Hit,
    /// The countdown reached zero
    TimeUp,
}

/// Current mode of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Difficulty selection screen
    #[default]
    Menu,
    /// Active round
    Playing,
    /// Round frozen, clock excluded
    Paused,
    /// Player reached the top
    Win,
    /// Round ended by a hit or a timeout
    Lose(LoseReason),
}

impl GameMode {
    pub fn is_over(&self) -> bool {
        matches!(self, GameMode::Win | GameMode::Lose(_))
    }
}

/// Complete mutable game state
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) mode: GameMode,
    pub(crate) difficulty: Difficulty,
    pub(crate) player: GameObject,
    /// Lane-major, creation order within a lane
    pub(crate) cars: Vec<GameObject>,
    /// Whole seconds left in the round
    pub(crate) remaining_time: u32,
    /// Seconds accumulated toward the next countdown step
    pub(crate) elapsed_accum: f32,
    /// Wall-clock reference for `tick_at`; `None` until the next frame
    pub(crate) clock_ref: Option<Instant>,
    pub(crate) ui: Ui,
    rng: Pcg32,
}

impl GameSession {
    /// Create a session in the menu with a seeded level generator
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed))
    }

    /// Create a session seeded from the process RNG
    pub fn from_entropy() -> Self {
        let seed = rand::random::<u64>();
        log::debug!("Session seed: {}", seed);
        Self::new(seed)
    }

    pub fn with_rng(mut rng: Pcg32) -> Self {
        let difficulty = Difficulty::default();
        let layout = generate_level(difficulty, &mut rng);
        Self {
            mode: GameMode::Menu,
            difficulty,
            player: layout.player,
            cars: layout.cars,
            remaining_time: difficulty.config().level_time_secs,
            elapsed_accum: 0.0,
            clock_ref: None,
            ui: Ui::new(),
            rng,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn level_config(&self) -> &'static LevelConfig {
        self.difficulty.config()
    }

    pub fn remaining_time(&self) -> u32 {
        self.remaining_time
    }

    pub fn player(&self) -> &GameObject {
        &self.player
    }

    pub fn cars(&self) -> &[GameObject] {
        &self.cars
    }

    pub fn ui(&self) -> &Ui {
        &self.ui
    }

    /// Replace the level with a fresh one for `difficulty` and reset the clock
    fn start_level(&mut self, difficulty: Difficulty) {
        let layout = generate_level(difficulty, &mut self.rng);
        self.difficulty = difficulty;
        self.player = layout.player;
        self.cars = layout.cars;
        self.remaining_time = difficulty.config().level_time_secs;
        self.elapsed_accum = 0.0;
        self.clock_ref = None;
        self.mode = GameMode::Playing;
    }

    /// Menu -> Playing
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        if self.mode != GameMode::Menu {
            log::debug!("Ignoring difficulty selection in {:?}", self.mode);
            return;
        }
        log::info!("Starting {} level", difficulty.as_str());
        self.start_level(difficulty);
    }

    /// Playing <-> Paused
    pub fn toggle_pause(&mut self) {
        match self.mode {
            GameMode::Playing => self.mode = GameMode::Paused,
            GameMode::Paused => {
                self.mode = GameMode::Playing;
                // Paused time must not count as elapsed
                self.clock_ref = None;
            }
            _ => {}
        }
    }

    /// Win/Lose -> Playing with the same difficulty and a new layout
    pub fn restart(&mut self) {
        if !self.mode.is_over() {
            log::debug!("Ignoring restart in {:?}", self.mode);
            return;
        }
        log::info!("Restarting {} level", self.difficulty.as_str());
        self.start_level(self.difficulty);
    }

    /// Paused/Win/Lose -> Menu
    pub fn back_to_menu(&mut self) {
        if self.mode == GameMode::Paused || self.mode.is_over() {
            self.mode = GameMode::Menu;
        }
    }

    /// Exit is only offered from the menu. Returns whether it was accepted.
    pub fn request_exit(&self) -> bool {
        self.mode == GameMode::Menu
    }

    pub(crate) fn finish(&mut self, mode: GameMode) {
        log::info!(
            "Round finished: {:?} ({} level, {}s left)",
            mode,
            self.difficulty.as_str(),
            self.remaining_time
        );
        self.mode = mode;
    }
}
