//! Sprite loading
//!
//! Images are loaded once at startup by filename. A missing or unreadable
//! image is not fatal: it is logged and replaced by a solid placeholder of
//! the entity's size, so the game stays playable.
//!
//! [`DirAssets`] decodes PNG files with the `image` crate. A sprite whose
//! scaled mask has no solid pixel is treated like a failed load, since it
//! could never be hit.

use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use glam::Vec2;
use image::{ImageReader, Limits};

use crate::error::AssetError;
use crate::renderer::{Palette, colors};
use crate::sim::{CollisionMask, CollisionMasks};
use crate::tuning::Tuning;

/// Asset filenames
pub const PLAYER_IMAGE: &str = "ship.png";
pub const PLAYER_BULLET_IMAGE: &str = "bullet.png";
pub const ENEMY_IMAGE: &str = "enemy.png";
pub const ENEMY_BULLET_IMAGE: &str = "enemy_bullet.png";

/// Largest accepted image edge, in pixels
pub const MAX_IMAGE_DIMENSION: u32 = 4096;

/// Decoded RGBA8 image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA, 4 bytes per pixel
    pub rgba: Vec<u8>,
}

impl SpriteImage {
    /// Mean color of the solid pixels, if there are any
    pub fn average_color(&self) -> Option<[f32; 4]> {
        let mut sum = [0u64; 3];
        let mut n = 0u64;
        for px in self.rgba.chunks_exact(4) {
            if px[3] > crate::sim::mask::ALPHA_THRESHOLD {
                sum[0] += px[0] as u64;
                sum[1] += px[1] as u64;
                sum[2] += px[2] as u64;
                n += 1;
            }
        }
        if n == 0 {
            return None;
        }
        let channel = |s: u64| s as f32 / n as f32 / 255.0;
        Some([channel(sum[0]), channel(sum[1]), channel(sum[2]), 1.0])
    }
}

/// Where sprite images come from
pub trait AssetSource {
    fn load_image(&self, name: &str) -> Result<SpriteImage, AssetError>;
}

/// Images read from files in a directory
#[derive(Debug, Clone)]
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirAssets {
    fn load_image(&self, name: &str) -> Result<SpriteImage, AssetError> {
        let path = self.root.join(name);
        let bytes = fs::read(&path).map_err(|e| AssetError::from_io(path.clone(), e))?;
        decode_image(&path, &bytes)
    }
}

/// Images held in memory (embedded assets, tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    images: HashMap<String, SpriteImage>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, image: SpriteImage) {
        self.images.insert(name.into(), image);
    }
}

impl AssetSource for MemoryAssets {
    fn load_image(&self, name: &str) -> Result<SpriteImage, AssetError> {
        self.images
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::NotFound {
                path: PathBuf::from(name),
            })
    }
}

/// Decode PNG bytes to RGBA8, rejecting empty or oversized images
pub fn decode_image(path: &Path, bytes: &[u8]) -> Result<SpriteImage, AssetError> {
    let bad = |reason: String| AssetError::decode(path.to_path_buf(), reason);

    let mut reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| bad(e.to_string()))?;
    let mut limits = Limits::default();
    limits.max_image_width = Some(MAX_IMAGE_DIMENSION);
    limits.max_image_height = Some(MAX_IMAGE_DIMENSION);
    reader.limits(limits);

    let rgba = reader.decode().map_err(|e| bad(e.to_string()))?.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(bad(format!("empty image ({width}x{height})")));
    }

    Ok(SpriteImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

/// A sprite scaled to its entity's extent
#[derive(Debug, Clone)]
pub struct Sprite {
    pub width: u32,
    pub height: u32,
    /// Flat color for untextured drawing
    pub color: [f32; 4],
    pub mask: CollisionMask,
    /// True when the image failed to load
    pub placeholder: bool,
}

impl Sprite {
    /// Solid rectangle stand-in
    pub fn placeholder(size: Vec2, color: [f32; 4]) -> Self {
        let (width, height) = pixel_size(size);
        Self {
            width,
            height,
            color,
            mask: CollisionMask::solid(width, height),
            placeholder: true,
        }
    }

    /// Scale a decoded image to `size`
    pub fn from_image(image: &SpriteImage, size: Vec2, fallback_color: [f32; 4]) -> Self {
        let (width, height) = pixel_size(size);
        Self {
            width,
            height,
            color: image.average_color().unwrap_or(fallback_color),
            mask: CollisionMask::from_rgba(image.width, image.height, &image.rgba, width, height),
            placeholder: false,
        }
    }
}

fn pixel_size(size: Vec2) -> (u32, u32) {
    (size.x.round().max(0.0) as u32, size.y.round().max(0.0) as u32)
}

/// Load one sprite, substituting a placeholder on failure
pub fn load_sprite(
    source: &dyn AssetSource,
    name: &str,
    size: Vec2,
    placeholder_color: [f32; 4],
) -> Sprite {
    match source.load_image(name) {
        Ok(image) => {
            let sprite = Sprite::from_image(&image, size, placeholder_color);
            if sprite.mask.count() == 0 {
                log::warn!(
                    "{name} ({}x{}) has no opaque pixels; using {}x{} placeholder",
                    image.width,
                    image.height,
                    size.x,
                    size.y
                );
                return Sprite::placeholder(size, placeholder_color);
            }
            log::debug!("Loaded {name} ({}x{})", image.width, image.height);
            sprite
        }
        Err(e) => {
            log::warn!("{e}; using {}x{} placeholder", size.x, size.y);
            Sprite::placeholder(size, placeholder_color)
        }
    }
}

/// Every sprite the game draws
#[derive(Debug, Clone)]
pub struct SpriteSet {
    pub player: Sprite,
    pub player_bullet: Sprite,
    pub enemy: Sprite,
    pub enemy_bullet: Sprite,
}

impl SpriteSet {
    pub fn load(source: &dyn AssetSource, tuning: &Tuning) -> Self {
        Self {
            player: load_sprite(source, PLAYER_IMAGE, tuning.player_size(), colors::PLAYER),
            player_bullet: load_sprite(
                source,
                PLAYER_BULLET_IMAGE,
                tuning.bullet_size(),
                colors::PLAYER_BULLET,
            ),
            enemy: load_sprite(source, ENEMY_IMAGE, tuning.enemy_size(), colors::ENEMY),
            enemy_bullet: load_sprite(
                source,
                ENEMY_BULLET_IMAGE,
                tuning.enemy_bullet_size(),
                colors::ENEMY_BULLET,
            ),
        }
    }

    /// All placeholders, no I/O
    pub fn placeholders(tuning: &Tuning) -> Self {
        Self {
            player: Sprite::placeholder(tuning.player_size(), colors::PLAYER),
            player_bullet: Sprite::placeholder(tuning.bullet_size(), colors::PLAYER_BULLET),
            enemy: Sprite::placeholder(tuning.enemy_size(), colors::ENEMY),
            enemy_bullet: Sprite::placeholder(tuning.enemy_bullet_size(), colors::ENEMY_BULLET),
        }
    }

    pub fn masks(&self) -> CollisionMasks {
        CollisionMasks {
            player: self.player.mask.clone(),
            player_bullet: self.player_bullet.mask.clone(),
            enemy: self.enemy.mask.clone(),
            enemy_bullet: self.enemy_bullet.mask.clone(),
        }
    }

    pub fn palette(&self) -> Palette {
        Palette {
            background: colors::BACKGROUND,
            player: self.player.color,
            player_bullet: self.player_bullet.color,
            enemy: self.enemy.color,
            enemy_bullet: self.enemy_bullet.color,
        }
    }

    pub fn placeholder_count(&self) -> usize {
        [&self.player, &self.player_bullet, &self.enemy, &self.enemy_bullet]
            .iter()
            .filter(|s| s.placeholder)
            .count()
    }
}
