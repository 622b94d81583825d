//! Invaders - a fixed-screen arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, formation, combat, collisions)
//! - `assets`: Sprite loading with placeholder fallback
//! - `renderer`: Backend-agnostic frame draw lists
//! - `platform`: Input, timing and presentation seam
//! - `game`: The frame loop
//! - `settings` / `tuning`: JSON configuration and game balance

pub mod assets;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{AssetError, ConfigError};
pub use game::{Game, RunSummary};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 960.0;

    /// Frame cap
    pub const TARGET_FPS: u32 = 60;
    /// Clamp range for the frame delta (seconds)
    pub const MIN_DT: f32 = 0.001;
    pub const MAX_DT: f32 = 0.1;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 640.0;
    pub const PLAYER_WIDTH: f32 = 120.0;
    pub const PLAYER_HEIGHT: f32 = 120.0;
    /// Gap between the player's bottom edge and the screen bottom
    pub const PLAYER_BOTTOM_MARGIN: f32 = 20.0;
    pub const PLAYER_HEALTH: u32 = 3;
    pub const PLAYER_SHOT_COOLDOWN_MS: u64 = 300;

    /// Player bullet defaults
    pub const BULLET_WIDTH: f32 = 10.0;
    pub const BULLET_HEIGHT: f32 = 20.0;
    pub const BULLET_SPEED: f32 = 960.0;

    /// Enemy defaults
    pub const ENEMY_WIDTH: f32 = 80.0;
    pub const ENEMY_HEIGHT: f32 = 60.0;
    pub const ENEMY_SPEED: f32 = 100.0;
    pub const ENEMY_ROWS: u32 = 4;
    pub const ENEMY_COLS: u32 = 8;
    pub const ENEMY_SPACING_X: f32 = 120.0;
    pub const ENEMY_SPACING_Y: f32 = 80.0;
    pub const FORMATION_ORIGIN_X: f32 = 100.0;
    pub const FORMATION_ORIGIN_Y: f32 = 60.0;
    /// Vertical shift applied to the whole formation on each edge bounce
    pub const FORMATION_STEP_DOWN: f32 = 20.0;

    /// Enemy bullet defaults
    pub const ENEMY_BULLET_WIDTH: f32 = 10.0;
    pub const ENEMY_BULLET_HEIGHT: f32 = 20.0;
    pub const ENEMY_BULLET_SPEED: f32 = 480.0;
    pub const ENEMY_SHOT_COOLDOWN_MIN_MS: u64 = 500;
    pub const ENEMY_SHOT_COOLDOWN_MAX_MS: u64 = 1500;
    /// Cooldown before the first enemy shot of a run
    pub const ENEMY_SHOT_INITIAL_COOLDOWN_MS: u64 = 1000;
}
