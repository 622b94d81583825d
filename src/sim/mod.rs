//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay deterministic:
//! - Randomness only through the injected `Rng`
//! - Time only through `TickInput::now_ms` and the frame delta
//! - Stable iteration order (spawn order for bullets, grid order for enemies)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod combat;
pub mod entity;
pub mod formation;
pub mod geom;
pub mod mask;
pub mod state;
pub mod tick;

pub use autopilot::demo_input;
pub use collision::{masks_overlap, resolve_collisions, resolve_enemy_bullets, resolve_player_bullets};
pub use combat::{aim_velocity, cull_offscreen, try_enemy_shoot, try_player_shoot, update_bullets};
pub use entity::{Body, Bullet, Enemy, Player, Side};
pub use formation::{Formation, Sweep};
pub use geom::Rect;
pub use mask::{CollisionMask, CollisionMasks};
pub use state::{EndReason, GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
