//! Sprite assets
//!
//! Decoding and scaling images belongs to the host; this module only decides
//! which files to try and what to show when none of them load. A failed load
//! never stops the game: the sprite becomes a solid placeholder of the same
//! size, since collisions only depend on object geometry.

use std::path::{Path, PathBuf};

use crate::consts::*;
use crate::render::Rgba;
use crate::sim::SpriteId;

/// Failure to produce an image from a file
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Loads an image file scaled to a target size
pub trait ImageSource {
    type Image;

    fn load(&mut self, path: &Path, width: u32, height: u32) -> Result<Self::Image, AssetError>;
}

/// Where a sprite comes from and what replaces it on failure
#[derive(Debug, Clone)]
pub struct AssetSpec {
    pub sprite: SpriteId,
    pub file_name: &'static str,
    pub width: u32,
    pub height: u32,
    pub placeholder: Rgba,
}

pub const MANIFEST: [AssetSpec; 3] = [
    AssetSpec {
        sprite: SpriteId::Car,
        file_name: "bus.png",
        width: CAR_WIDTH,
        height: CAR_HEIGHT,
        placeholder: [255, 0, 0, 255],
    },
    AssetSpec {
        sprite: SpriteId::Player,
        file_name: "player.png",
        width: PLAYER_SIZE,
        height: PLAYER_SIZE,
        placeholder: [0, 255, 0, 255],
    },
    AssetSpec {
        sprite: SpriteId::Background,
        file_name: "back.png",
        width: SCREEN_WIDTH as u32,
        height: SCREEN_HEIGHT as u32,
        placeholder: [200, 200, 200, 255],
    },
];

/// A loaded image or its stand-in
#[derive(Debug, Clone, PartialEq)]
pub enum Sprite<I> {
    Image(I),
    Placeholder { color: Rgba, width: u32, height: u32 },
}

impl<I> Sprite<I> {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Sprite::Placeholder { .. })
    }
}

/// Try each directory in order; the first file that loads wins
fn load_first<S: ImageSource>(
    source: &mut S,
    spec: &AssetSpec,
    dirs: &[PathBuf],
) -> Result<S::Image, AssetError> {
    let mut last_err = AssetError::NotFound(PathBuf::from(spec.file_name));
    for dir in dirs {
        let path = dir.join(spec.file_name);
        if !path.exists() {
            last_err = AssetError::NotFound(path);
            continue;
        }
        match source.load(&path, spec.width, spec.height) {
            Ok(image) => {
                log::info!("Loaded {:?} sprite from {}", spec.sprite, path.display());
                return Ok(image);
            }
            Err(e) => {
                log::debug!("Could not load {}: {}", path.display(), e);
                last_err = e;
            }
        }
    }
    Err(last_err)
}

/// Load one sprite, falling back to a placeholder on any failure
pub fn load_or_placeholder<S: ImageSource>(
    source: &mut S,
    spec: &AssetSpec,
    dirs: &[PathBuf],
) -> Sprite<S::Image> {
    match load_first(source, spec, dirs) {
        Ok(image) => Sprite::Image(image),
        Err(e) => {
            log::warn!(
                "Failed to load {:?} image: {}, using placeholder",
                spec.sprite,
                e
            );
            Sprite::Placeholder {
                color: spec.placeholder,
                width: spec.width,
                height: spec.height,
            }
        }
    }
}

/// Every sprite the game draws
#[derive(Debug, Clone)]
pub struct SpriteSet<I> {
    car: Sprite<I>,
    player: Sprite<I>,
    background: Sprite<I>,
}

impl<I> SpriteSet<I> {
    pub fn load<S: ImageSource<Image = I>>(source: &mut S, dirs: &[PathBuf]) -> Self {
        let [car, player, background] =
            MANIFEST.map(|spec| load_or_placeholder(source, &spec, dirs));
        Self {
            car,
            player,
            background,
        }
    }

    pub fn get(&self, sprite: SpriteId) -> &Sprite<I> {
        match sprite {
            SpriteId::Car => &self.car,
            SpriteId::Player => &self.player,
            SpriteId::Background => &self.background,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Records requests; "decodes" files whose contents are `ok`
    #[derive(Default)]
    struct FakeSource {
        requests: Vec<(PathBuf, u32, u32)>,
    }

    impl ImageSource for FakeSource {
        type Image = String;

        fn load(&mut self, path: &Path, width: u32, height: u32) -> Result<String, AssetError> {
            self.requests.push((path.to_path_buf(), width, height));
            let data = fs::read_to_string(path)?;
            if data.trim() == "ok" {
                Ok(path.display().to_string())
            } else {
                Err(AssetError::Decode {
                    path: path.to_path_buf(),
                    message: "not an image".to_string(),
                })
            }
        }
    }

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("road-adventure-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_files_become_placeholders() {
        let mut source = FakeSource::default();
        let dirs = vec![temp_dir("missing")];
        let set = SpriteSet::load(&mut source, &dirs);

        assert_eq!(
            *set.get(SpriteId::Car),
            Sprite::Placeholder { color: [255, 0, 0, 255], width: 64, height: 32 }
        );
        assert_eq!(
            *set.get(SpriteId::Background),
            Sprite::Placeholder { color: [200, 200, 200, 255], width: 640, height: 480 }
        );
        // Nothing existed, so the decoder was never called
        assert!(source.requests.is_empty());
    }

    #[test]
    fn test_decode_failure_falls_back() {
        let dir = temp_dir("corrupt");
        fs::write(dir.join("player.png"), "garbage").unwrap();
        let mut source = FakeSource::default();

        let sprite = load_or_placeholder(&mut source, &MANIFEST[1], &[dir]);
        assert!(sprite.is_placeholder());
        assert_eq!(source.requests.len(), 1);
        assert_eq!((source.requests[0].1, source.requests[0].2), (32, 32));
    }

    #[test]
    fn test_later_directory_is_searched() {
        let first = temp_dir("first");
        let second = temp_dir("second");
        fs::write(first.join("bus.png"), "garbage").unwrap();
        fs::write(second.join("bus.png"), "ok").unwrap();
        let mut source = FakeSource::default();

        let sprite = load_or_placeholder(&mut source, &MANIFEST[0], &[first, second.clone()]);
        assert_eq!(sprite, Sprite::Image(second.join("bus.png").display().to_string()));
        assert_eq!(source.requests.len(), 2);
    }

    #[test]
    fn test_error_messages() {
        let err = AssetError::NotFound(PathBuf::from("bus.png"));
        assert_eq!(err.to_string(), "file not found: bus.png");
    }
}
