//! Frame simulation step
//!
//! Advances the game by one variable frame delta. Given the same state,
//! seed, inputs, deltas and timestamps, the result is identical.

use rand::Rng;

use super::collision::resolve_collisions;
use super::combat::{cull_offscreen, try_enemy_shoot, try_player_shoot, update_bullets};
use super::entity::Body;
use super::mask::CollisionMasks;
use super::state::{EndReason, GameEvent, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Quit signal (window closed)
    pub quit: bool,
    /// Shoot key went down this frame
    pub shoot: bool,
    /// Left movement key held
    pub left: bool,
    /// Right movement key held
    pub right: bool,
    /// Monotonic timestamp for cooldown timers
    pub now_ms: u64,
}

/// Advance the game state by one frame
pub fn tick<R: Rng + ?Sized>(
    state: &mut GameState,
    masks: &CollisionMasks,
    rng: &mut R,
    input: &TickInput,
    dt: f32,
) {
    if !state.is_running() {
        return;
    }
    state.events.clear();

    if input.quit {
        state.terminate(EndReason::Quit);
        return;
    }

    state.time_ticks += 1;
    let now = input.now_ms;

    // Spawns
    if input.shoot && try_player_shoot(state, now) {
        state.events.push(GameEvent::PlayerFired);
    }
    if let Some(enemy) = try_enemy_shoot(state, rng, now) {
        state.events.push(GameEvent::EnemyFired { enemy });
    }

    // Movement
    state.player.steer(input.left, input.right);
    state.player.step(dt);

    update_bullets(&mut state.bullets, dt);
    let screen = state.screen();
    cull_offscreen(&mut state.bullets, &screen);

    state.formation.advance(dt);

    // Collisions (may end the run)
    resolve_collisions(state, masks);
    if !state.is_running() {
        return;
    }

    if state.formation.update_bounds(state.tuning.screen_width) {
        state.events.push(GameEvent::FormationReversed);
    }
}
