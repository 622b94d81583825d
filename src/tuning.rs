//! Data-driven game balance
//!
//! [`Tuning`] mirrors every constant in [`crate::consts`]. A JSON file can
//! override any subset of fields; missing keys keep the compile-time default.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Gameplay constants for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Player ===
    pub player_speed: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub player_bottom_margin: f32,
    pub player_health: u32,
    pub player_shot_cooldown_ms: u64,

    // === Player bullets ===
    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_speed: f32,

    // === Formation ===
    pub enemy_width: f32,
    pub enemy_height: f32,
    pub enemy_speed: f32,
    pub enemy_rows: u32,
    pub enemy_cols: u32,
    pub enemy_spacing_x: f32,
    pub enemy_spacing_y: f32,
    pub formation_origin_x: f32,
    pub formation_origin_y: f32,
    pub formation_step_down: f32,

    // === Enemy bullets ===
    pub enemy_bullet_width: f32,
    pub enemy_bullet_height: f32,
    pub enemy_bullet_speed: f32,
    pub enemy_shot_cooldown_min_ms: u64,
    pub enemy_shot_cooldown_max_ms: u64,
    pub enemy_shot_initial_cooldown_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            player_speed: PLAYER_SPEED,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_bottom_margin: PLAYER_BOTTOM_MARGIN,
            player_health: PLAYER_HEALTH,
            player_shot_cooldown_ms: PLAYER_SHOT_COOLDOWN_MS,

            bullet_width: BULLET_WIDTH,
            bullet_height: BULLET_HEIGHT,
            bullet_speed: BULLET_SPEED,

            enemy_width: ENEMY_WIDTH,
            enemy_height: ENEMY_HEIGHT,
            enemy_speed: ENEMY_SPEED,
            enemy_rows: ENEMY_ROWS,
            enemy_cols: ENEMY_COLS,
            enemy_spacing_x: ENEMY_SPACING_X,
            enemy_spacing_y: ENEMY_SPACING_Y,
            formation_origin_x: FORMATION_ORIGIN_X,
            formation_origin_y: FORMATION_ORIGIN_Y,
            formation_step_down: FORMATION_STEP_DOWN,

            enemy_bullet_width: ENEMY_BULLET_WIDTH,
            enemy_bullet_height: ENEMY_BULLET_HEIGHT,
            enemy_bullet_speed: ENEMY_BULLET_SPEED,
            enemy_shot_cooldown_min_ms: ENEMY_SHOT_COOLDOWN_MIN_MS,
            enemy_shot_cooldown_max_ms: ENEMY_SHOT_COOLDOWN_MAX_MS,
            enemy_shot_initial_cooldown_ms: ENEMY_SHOT_INITIAL_COOLDOWN_MS,
        }
    }
}

impl Tuning {
    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    pub fn player_size(&self) -> Vec2 {
        Vec2::new(self.player_width, self.player_height)
    }

    pub fn bullet_size(&self) -> Vec2 {
        Vec2::new(self.bullet_width, self.bullet_height)
    }

    pub fn enemy_size(&self) -> Vec2 {
        Vec2::new(self.enemy_width, self.enemy_height)
    }

    pub fn enemy_bullet_size(&self) -> Vec2 {
        Vec2::new(self.enemy_bullet_width, self.enemy_bullet_height)
    }

    /// Parse tuning from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut tuning: Tuning = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tuning.sanitize();
        Ok(tuning)
    }

    /// Load tuning, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("{e}; using default tuning");
                Self::default()
            }
        }
    }

    /// Repair values that would make the simulation misbehave
    fn sanitize(&mut self) {
        if self.enemy_shot_cooldown_min_ms > self.enemy_shot_cooldown_max_ms {
            log::warn!(
                "enemy_shot_cooldown_min_ms ({}) > max ({}); swapping",
                self.enemy_shot_cooldown_min_ms,
                self.enemy_shot_cooldown_max_ms
            );
            std::mem::swap(
                &mut self.enemy_shot_cooldown_min_ms,
                &mut self.enemy_shot_cooldown_max_ms,
            );
        }
        if self.player_width > self.screen_width {
            log::warn!("player wider than screen; clamping");
            self.player_width = self.screen_width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "player_health": 5 }"#).unwrap();
        assert_eq!(tuning.player_health, 5);
        assert_eq!(tuning.screen_width, SCREEN_WIDTH);
        assert_eq!(tuning.formation_step_down, FORMATION_STEP_DOWN);
    }

    #[test]
    fn test_sanitize_swaps_inverted_cooldowns() {
        let mut tuning = Tuning {
            enemy_shot_cooldown_min_ms: 2000,
            enemy_shot_cooldown_max_ms: 100,
            ..Default::default()
        };
        tuning.sanitize();
        assert_eq!(tuning.enemy_shot_cooldown_min_ms, 100);
        assert_eq!(tuning.enemy_shot_cooldown_max_ms, 2000);
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let tuning = Tuning::load_or_default(Path::new("/nonexistent/tuning.json"));
        assert_eq!(tuning, Tuning::default());
    }
}
