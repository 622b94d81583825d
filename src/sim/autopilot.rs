//! Demo mode - the game plays itself
//!
//! Tracks the lowest enemy closest to the ship and keeps the trigger held;
//! the shot cooldown does the rate limiting.

use super::entity::Body;
use super::state::GameState;
use super::tick::TickInput;

/// Horizontal slack before the ship bothers to move (pixels)
const DEADZONE: f32 = 8.0;

/// Build the autopilot's input for the next tick
pub fn demo_input(state: &GameState, now_ms: u64) -> TickInput {
    let ship_x = state.player.bounds().center().x;

    // Lowest row first, then nearest in x
    let target = state
        .formation
        .enemies()
        .iter()
        .map(|e| e.bounds())
        .min_by(|a, b| {
            b.bottom()
                .total_cmp(&a.bottom())
                .then((a.center().x - ship_x).abs().total_cmp(&(b.center().x - ship_x).abs()))
        })
        .map(|r| r.center().x);

    let (left, right) = match target {
        Some(x) if x < ship_x - DEADZONE => (true, false),
        Some(x) if x > ship_x + DEADZONE => (false, true),
        _ => (false, false),
    };

    TickInput {
        quit: false,
        shoot: target.is_some(),
        left,
        right,
        now_ms,
    }
}
