//! Road Adventure headless driver
//!
//! Plays one round without a window: picks the configured difficulty from the
//! menu, then steers the player with a one-frame look-ahead autopilot. A host
//! with a real window feeds `tick_at` from its frame callback instead.

use std::path::{Path, PathBuf};

use road_adventure::Settings;
use road_adventure::assets::{AssetError, ImageSource, SpriteSet};
use road_adventure::render::build_frame;
use road_adventure::sim::{
    Difficulty, GameMode, GameSession, HeldKeys, SpriteId, TickInput, TickOutcome, tick,
};
use road_adventure::ui::{ButtonId, MonospaceMeasure};

/// Reads image files as raw bytes; decoding is left to a real renderer
struct RawFiles;

impl ImageSource for RawFiles {
    type Image = Vec<u8>;

    fn load(&mut self, path: &Path, _width: u32, _height: u32) -> Result<Vec<u8>, AssetError> {
        let bytes = std::fs::read(path)?;
        if bytes.is_empty() {
            return Err(AssetError::Decode {
                path: path.to_path_buf(),
                message: "empty file".to_string(),
            });
        }
        Ok(bytes)
    }
}

fn difficulty_button(difficulty: Difficulty) -> ButtonId {
    match difficulty {
        Difficulty::Easy => ButtonId::Easy,
        Difficulty::Medium => ButtonId::Medium,
        Difficulty::Hard => ButtonId::Hard,
    }
}

/// Prefer moving up, then waiting, then sidestepping; pick the first that
/// survives the next frame.
fn autopilot(session: &GameSession, dt: f32) -> HeldKeys {
    let candidates = [
        HeldKeys { up: true, ..Default::default() },
        HeldKeys::default(),
        HeldKeys { left: true, ..Default::default() },
        HeldKeys { right: true, ..Default::default() },
        HeldKeys { down: true, ..Default::default() },
    ];

    candidates
        .into_iter()
        .find(|keys| {
            let mut probe = session.clone();
            let input = TickInput {
                keys: *keys,
                ..Default::default()
            };
            tick(&mut probe, &input, dt);
            !matches!(probe.mode(), GameMode::Lose(_))
        })
        .unwrap_or_default()
}

fn main() {
    env_logger::init();

    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(Settings::FILE_NAME));
    let settings = Settings::load(&settings_path);
    log::info!("{} (headless) starting...", settings.window_title);

    let sprites = SpriteSet::load(&mut RawFiles, &settings.asset_dirs);
    for id in [SpriteId::Background, SpriteId::Player, SpriteId::Car] {
        log::debug!("{:?} placeholder: {}", id, sprites.get(id).is_placeholder());
    }

    let mut session = match settings.seed {
        Some(seed) => GameSession::new(seed),
        None => GameSession::from_entropy(),
    };
    let measure = MonospaceMeasure::default();
    let dt = settings.frame_dt();

    // Click the difficulty button on the menu
    let button = session
        .ui()
        .button(difficulty_button(settings.demo_difficulty))
        .clone();
    let click = TickInput {
        pointer: Some((button.x + button.width / 2.0, button.y + button.height / 2.0)),
        click: true,
        ..Default::default()
    };
    tick(&mut session, &click, 0.0);

    let max_frames = settings.demo_fps.max(1) * (session.level_config().level_time_secs + 1);
    let mut frames = 0;
    while session.mode() == GameMode::Playing && frames < max_frames {
        let input = TickInput {
            keys: autopilot(&session, dt),
            ..Default::default()
        };
        if tick(&mut session, &input, dt) == TickOutcome::Exit {
            break;
        }
        frames += 1;
    }

    let frame = build_frame(&session, &measure);
    log::debug!("Final frame has {} draw commands", frame.len());

    let summary = serde_json::json!({
        "difficulty": session.difficulty(),
        "mode": session.mode(),
        "remaining_time": session.remaining_time(),
        "frames": frames,
        "player": session.player(),
    });
    println!("{}", summary);
}
