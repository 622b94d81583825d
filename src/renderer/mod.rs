//! Frame composition
//!
//! Turns a [`GameState`] into a backend-agnostic draw list. The platform owns
//! the actual surface; it either blits sprites per [`DrawCommand`] or uploads
//! [`RenderFrame::vertices`] as colored quads.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};

use glam::Vec2;

use crate::sim::{Body, GameState, Rect, Side};

/// Which sprite a draw command shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Player,
    PlayerBullet,
    Enemy,
    EnemyBullet,
}

/// Flat colors per sprite kind (used when drawing without textures)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: [f32; 4],
    pub player: [f32; 4],
    pub player_bullet: [f32; 4],
    pub enemy: [f32; 4],
    pub enemy_bullet: [f32; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: colors::BACKGROUND,
            player: colors::PLAYER,
            player_bullet: colors::PLAYER_BULLET,
            enemy: colors::ENEMY,
            enemy_bullet: colors::ENEMY_BULLET,
        }
    }
}

impl Palette {
    pub fn color(&self, kind: SpriteKind) -> [f32; 4] {
        match kind {
            SpriteKind::Player => self.player,
            SpriteKind::PlayerBullet => self.player_bullet,
            SpriteKind::Enemy => self.enemy,
            SpriteKind::EnemyBullet => self.enemy_bullet,
        }
    }
}

/// One sprite placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub kind: SpriteKind,
    pub rect: Rect,
    pub color: [f32; 4],
}

/// Everything needed to draw one frame, in draw order
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub screen: Vec2,
    pub clear_color: [f32; 4],
    /// Player, then bullets, then enemies
    pub draws: Vec<DrawCommand>,
    /// Overlay text (FPS counter) drawn last
    pub overlay: Option<String>,
    pub overlay_color: [f32; 4],
}

impl RenderFrame {
    /// Compose the frame for the current state
    pub fn build(state: &GameState, palette: &Palette, fps: Option<u32>) -> Self {
        let mut draws = Vec::with_capacity(1 + state.bullets.len() + state.formation.len());
        let mut push = |kind: SpriteKind, rect: Rect| {
            draws.push(DrawCommand {
                kind,
                rect,
                color: palette.color(kind),
            });
        };

        push(SpriteKind::Player, state.player.bounds());
        for bullet in &state.bullets {
            let kind = match bullet.side {
                Side::Player => SpriteKind::PlayerBullet,
                Side::Enemy => SpriteKind::EnemyBullet,
            };
            push(kind, bullet.bounds());
        }
        for enemy in state.formation.enemies() {
            push(SpriteKind::Enemy, enemy.bounds());
        }

        Self {
            screen: state.tuning.screen_size(),
            clear_color: palette.background,
            draws,
            overlay: fps.map(|fps| format!("FPS: {fps}")),
            overlay_color: colors::OVERLAY_TEXT,
        }
    }

    /// Triangle-list vertices for every draw, in NDC
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut vertices = Vec::with_capacity(self.draws.len() * 6);
        for draw in &self.draws {
            vertices.extend_from_slice(&shapes::quad(&draw.rect, draw.color));
        }
        shapes::to_ndc(&mut vertices, self.screen);
        vertices
    }

    pub fn count(&self, kind: SpriteKind) -> usize {
        self.draws.iter().filter(|d| d.kind == kind).count()
    }
}
