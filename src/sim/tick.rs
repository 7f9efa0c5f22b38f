//! Per-frame update
//!
//! Order within a frame is fixed: input, player motion, win check, car
//! motion, collision check, countdown, timeout check. A win is seen before a
//! same-frame hit, and a hit before a same-frame timeout.

use std::time::Instant;

use super::collision::first_collision;
use super::level::Difficulty;
use super::motion::{HeldKeys, move_cars, move_player, reached_goal};
use super::state::{GameMode, GameSession, LoseReason};
use crate::ui::ButtonId;

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Directional keys currently held
    pub keys: HeldKeys,
    /// Pause/resume key pressed this frame
    pub pause: bool,
    /// Back/escape key pressed this frame
    pub back: bool,
    /// Pointer position in canvas pixels, if over the canvas
    pub pointer: Option<(f32, f32)>,
    /// Primary button pressed this frame
    pub click: bool,
}

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// The player chose to quit
    Exit,
}

fn apply_button(session: &mut GameSession, id: ButtonId) -> TickOutcome {
    match id {
        ButtonId::Easy => session.select_difficulty(Difficulty::Easy),
        ButtonId::Medium => session.select_difficulty(Difficulty::Medium),
        ButtonId::Hard => session.select_difficulty(Difficulty::Hard),
        ButtonId::ExitGame => {
            if session.request_exit() {
                log::info!("Exit requested");
                return TickOutcome::Exit;
            }
        }
        ButtonId::BackToMenu | ButtonId::MainMenu => session.back_to_menu(),
        ButtonId::PlayAgain => session.restart(),
    }
    TickOutcome::Continue
}

/// Advance the session by `dt` seconds of real time
pub fn tick(session: &mut GameSession, input: &TickInput, dt: f32) -> TickOutcome {
    // NaN and negative frames advance nothing
    let dt = if dt.is_nan() { 0.0 } else { dt.max(0.0) };

    // Handle pause toggle
    if input.pause && matches!(session.mode, GameMode::Playing | GameMode::Paused) {
        session.toggle_pause();
        if session.mode == GameMode::Paused {
            return TickOutcome::Continue;
        }
    }

    if input.back && (session.mode == GameMode::Paused || session.mode.is_over()) {
        session.back_to_menu();
        return TickOutcome::Continue;
    }

    // Buttons of the mode at the start of input handling
    let mode = session.mode;
    let pressed = session.ui.handle_pointer(mode, input.pointer, input.click);
    for id in pressed {
        if apply_button(session, id) == TickOutcome::Exit {
            return TickOutcome::Exit;
        }
    }
    if mode != GameMode::Playing || session.mode != GameMode::Playing {
        return TickOutcome::Continue;
    }

    move_player(&mut session.player, input.keys, dt);
    if reached_goal(&session.player) {
        session.finish(GameMode::Win);
        return TickOutcome::Continue;
    }

    move_cars(&mut session.cars, dt);
    if let Some(index) = first_collision(&session.player, &session.cars) {
        log::debug!("Player hit by car {}", index);
        session.finish(GameMode::Lose(LoseReason::Hit));
        return TickOutcome::Continue;
    }

    session.elapsed_accum += dt;
    if session.elapsed_accum >= 1.0 {
        session.remaining_time = session.remaining_time.saturating_sub(1);
        session.elapsed_accum = 0.0;

        if session.remaining_time == 0 {
            session.finish(GameMode::Lose(LoseReason::TimeUp));
        }
    }

    TickOutcome::Continue
}

/// Advance the session to wall-clock instant `now`.
///
/// Elapsed time is measured from the previous frame while playing; frames in
/// any other mode, and the first frame after a transition into Playing,
/// advance by zero.
pub fn tick_at(session: &mut GameSession, input: &TickInput, now: Instant) -> TickOutcome {
    let dt = match (session.mode, session.clock_ref) {
        (GameMode::Playing, Some(last)) => now.saturating_duration_since(last).as_secs_f32(),
        _ => 0.0,
    };
    let outcome = tick(session, input, dt);
    session.clock_ref = Some(now);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::object::{Direction, GameObject};
    use glam::Vec2;
    use std::time::Duration;

    fn playing(difficulty: Difficulty, seed: u64) -> GameSession {
        let mut session = GameSession::new(seed);
        session.select_difficulty(difficulty);
        session
    }

    fn car_xs(session: &GameSession) -> Vec<f32> {
        session.cars().iter().map(|c| c.pos.x).collect()
    }

    fn click_at(x: f32, y: f32) -> TickInput {
        TickInput {
            pointer: Some((x + 5.0, y + 5.0)),
            click: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_timeout_exactly_at_zero() {
        let mut session = playing(Difficulty::Easy, 12345);
        let input = TickInput::default();

        for second in 1..30 {
            tick(&mut session, &input, 1.0);
            assert_eq!(session.mode(), GameMode::Playing, "lost early at {}s", second);
            assert_eq!(session.remaining_time(), 30 - second);
        }

        tick(&mut session, &input, 1.0);
        assert_eq!(session.remaining_time(), 0);
        assert_eq!(session.mode(), GameMode::Lose(LoseReason::TimeUp));
    }

    #[test]
    fn test_zero_dt_never_counts_down() {
        let mut session = playing(Difficulty::Easy, 1);
        for _ in 0..1000 {
            tick(&mut session, &TickInput::default(), 0.0);
        }
        assert_eq!(session.remaining_time(), 30);
        assert_eq!(session.mode(), GameMode::Playing);
    }

    #[test]
    fn test_sub_second_frames_accumulate() {
        let mut session = playing(Difficulty::Medium, 1);
        for _ in 0..4 {
            tick(&mut session, &TickInput::default(), 0.25);
        }
        assert_eq!(session.remaining_time(), 24);
    }

    #[test]
    fn test_overflowing_frame_keeps_player_on_screen() {
        let mut session = playing(Difficulty::Easy, 4);
        let input = TickInput {
            keys: HeldKeys {
                up: true,
                down: true,
                left: true,
                right: true,
            },
            ..Default::default()
        };
        tick(&mut session, &input, 1.0e37);
        let pos = session.player().pos;
        assert!(pos.is_finite());
        assert!(pos.x >= 0.0 && pos.x <= SCREEN_WIDTH - CELL_SIZE);
        assert!(pos.y >= TOP_BOUNDARY && pos.y <= SCREEN_HEIGHT - CELL_SIZE);

        tick(&mut session, &TickInput::default(), f32::NAN);
        assert!(session.player().pos.is_finite());
    }

    #[test]
    fn test_win_preempts_collision() {
        let mut session = playing(Difficulty::Easy, 9);
        session.player.pos = Vec2::new(100.0, TOP_BOUNDARY + 1.0);
        // Parked car sitting on the finish line, right over the player
        session.cars = vec![GameObject::car(
            Vec2::new(90.0, TOP_BOUNDARY),
            0.0,
            Direction::Right,
        )];

        let input = TickInput {
            keys: HeldKeys {
                up: true,
                ..Default::default()
            },
            ..Default::default()
        };
        tick(&mut session, &input, 0.1);
        assert_eq!(session.mode(), GameMode::Win);
    }

    #[test]
    fn test_collision_loses() {
        let mut session = playing(Difficulty::Easy, 9);
        let player = session.player.pos;
        session.cars = vec![GameObject::car(player - Vec2::new(10.0, 0.0), 0.0, Direction::Left)];
        tick(&mut session, &TickInput::default(), 0.016);
        assert_eq!(session.mode(), GameMode::Lose(LoseReason::Hit));
    }

    #[test]
    fn test_collision_beats_timeout() {
        let mut session = playing(Difficulty::Hard, 9);
        session.remaining_time = 1;
        session.elapsed_accum = 0.99;
        let player = session.player.pos;
        session.cars = vec![GameObject::car(player, 0.0, Direction::Left)];

        tick(&mut session, &TickInput::default(), 0.5);
        assert_eq!(session.mode(), GameMode::Lose(LoseReason::Hit));
        assert_eq!(session.remaining_time(), 1);
    }

    #[test]
    fn test_pause_freezes_world() {
        let mut session = playing(Difficulty::Hard, 77);
        let before = car_xs(&session);
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };

        tick(&mut session, &pause, 0.5);
        assert_eq!(session.mode(), GameMode::Paused);
        tick(&mut session, &TickInput::default(), 3.0);
        assert_eq!(car_xs(&session), before);

        // Resume frame runs the simulation, with zero elapsed here
        tick(&mut session, &pause, 0.0);
        assert_eq!(session.mode(), GameMode::Playing);
        assert_eq!(session.remaining_time(), 10);
        assert_eq!(car_xs(&session), before);
    }

    #[test]
    fn test_menu_click_starts_level() {
        let mut session = GameSession::new(5);
        let medium = session.ui().button(ButtonId::Medium).clone();
        let outcome = tick(&mut session, &click_at(medium.x, medium.y), 0.0);
        assert_eq!(outcome, TickOutcome::Continue);
        assert_eq!(session.mode(), GameMode::Playing);
        assert_eq!(session.difficulty(), Difficulty::Medium);
        assert_eq!(session.cars().len(), 24);
    }

    #[test]
    fn test_exit_from_menu() {
        let mut session = GameSession::new(5);
        let exit = session.ui().button(ButtonId::ExitGame).clone();
        let outcome = tick(&mut session, &click_at(exit.x, exit.y), 0.0);
        assert_eq!(outcome, TickOutcome::Exit);
    }

    #[test]
    fn test_game_over_buttons() {
        let mut session = playing(Difficulty::Hard, 5);
        session.finish(GameMode::Lose(LoseReason::TimeUp));

        let again = session.ui().button(ButtonId::PlayAgain).clone();
        tick(&mut session, &click_at(again.x, again.y), 0.0);
        assert_eq!(session.mode(), GameMode::Playing);
        assert_eq!(session.remaining_time(), 10);

        session.finish(GameMode::Win);
        let menu = session.ui().button(ButtonId::MainMenu).clone();
        tick(&mut session, &click_at(menu.x, menu.y), 0.0);
        assert_eq!(session.mode(), GameMode::Menu);
    }

    #[test]
    fn test_back_key() {
        let mut session = playing(Difficulty::Easy, 5);
        let back = TickInput {
            back: true,
            ..Default::default()
        };
        tick(&mut session, &back, 0.0);
        assert_eq!(session.mode(), GameMode::Playing);

        session.toggle_pause();
        tick(&mut session, &back, 0.0);
        assert_eq!(session.mode(), GameMode::Menu);
    }

    #[test]
    fn test_clicks_ignored_while_playing() {
        let mut session = playing(Difficulty::Easy, 5);
        let again = session.ui().button(ButtonId::PlayAgain).clone();
        tick(&mut session, &click_at(again.x, again.y), 0.0);
        assert_eq!(session.mode(), GameMode::Playing);
        assert_eq!(session.remaining_time(), 30);
    }

    #[test]
    fn test_tick_at_excludes_paused_time() {
        let mut session = playing(Difficulty::Easy, 8);
        let t0 = Instant::now();
        tick_at(&mut session, &TickInput::default(), t0);
        let before = car_xs(&session);

        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick_at(&mut session, &pause, t0);
        tick_at(&mut session, &pause, t0 + Duration::from_secs(20));
        assert_eq!(session.mode(), GameMode::Playing);
        assert_eq!(session.remaining_time(), 30);
        assert_eq!(car_xs(&session), before);

        tick_at(&mut session, &TickInput::default(), t0 + Duration::from_millis(21_500));
        assert_eq!(session.remaining_time(), 29);
    }

    #[test]
    fn test_tick_at_first_frame_is_zero() {
        let mut session = playing(Difficulty::Easy, 8);
        let before = car_xs(&session);
        tick_at(&mut session, &TickInput::default(), Instant::now());
        assert_eq!(car_xs(&session), before);
    }
}
