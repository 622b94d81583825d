//! Collision detection and response
//!
//! Rectangles are only a cheap pretest; hits are decided per pixel by the
//! sprites' collision masks. Removals are marked during the scan and applied
//! once it finishes.

use super::entity::{Body, Side};
use super::geom::Rect;
use super::mask::{CollisionMask, CollisionMasks};
use super::state::{EndReason, GameEvent, GameState, retain_unmarked};

/// Pixel-accurate overlap of two placed masks
pub fn masks_overlap(a: &CollisionMask, a_rect: Rect, b: &CollisionMask, b_rect: Rect) -> bool {
    if !a_rect.intersects(&b_rect) {
        return false;
    }
    let (ax, ay) = a_rect.pixel_origin();
    let (bx, by) = b_rect.pixel_origin();
    a.overlaps(b, (bx - ax, by - ay))
}

/// Player bullets against the formation.
///
/// Each bullet destroys at most one enemy (the first in formation order it
/// touches); an enemy already claimed this pass cannot absorb a second bullet.
/// Returns the number of enemies destroyed.
pub fn resolve_player_bullets(state: &mut GameState, masks: &CollisionMasks) -> usize {
    let enemies = state.formation.enemies();
    let mut bullet_hit = vec![false; state.bullets.len()];
    let mut enemy_hit = vec![false; enemies.len()];

    for (bi, bullet) in state.bullets.iter().enumerate() {
        if bullet.side != Side::Player {
            continue;
        }
        let bullet_rect = bullet.bounds();
        for (ei, enemy) in enemies.iter().enumerate() {
            if enemy_hit[ei] {
                continue;
            }
            if masks_overlap(&masks.player_bullet, bullet_rect, &masks.enemy, enemy.bounds()) {
                bullet_hit[bi] = true;
                enemy_hit[ei] = true;
                break;
            }
        }
    }

    let kills = state.formation.remove_marked(&enemy_hit);
    if kills > 0 {
        retain_unmarked(&mut state.bullets, &bullet_hit);
        state.kills += kills as u32;
        state
            .events
            .extend(std::iter::repeat_n(GameEvent::EnemyDestroyed, kills));
    }
    kills
}

/// Enemy bullets against the player.
///
/// Every touching bullet is consumed and costs one health point. Reaching zero
/// terminates the run. Returns the number of hits taken.
pub fn resolve_enemy_bullets(state: &mut GameState, masks: &CollisionMasks) -> usize {
    let player_rect = state.player.bounds();
    let marks: Vec<bool> = state
        .bullets
        .iter()
        .map(|bullet| {
            bullet.side == Side::Enemy
                && masks_overlap(&masks.enemy_bullet, bullet.bounds(), &masks.player, player_rect)
        })
        .collect();

    let hits = retain_unmarked(&mut state.bullets, &marks);
    for _ in 0..hits {
        state.player.health = state.player.health.saturating_sub(1);
        state.events.push(GameEvent::PlayerHit {
            health: state.player.health,
        });
    }

    if hits > 0 && !state.player.is_alive() {
        state.terminate(EndReason::PlayerDestroyed);
    }
    hits
}

/// Run both collision passes
pub fn resolve_collisions(state: &mut GameState, masks: &CollisionMasks) {
    resolve_player_bullets(state, masks);
    resolve_enemy_bullets(state, masks);
}
