//! Shooting and bullet lifecycle
//!
//! The player fires on a shoot edge, limited by a fixed cooldown. One random
//! enemy fires on a randomized cooldown, aiming at the player's center.

use glam::Vec2;
use rand::Rng;

use super::entity::{Body, Bullet};
use super::geom::Rect;
use super::state::GameState;
use crate::tuning::Tuning;

/// Velocity of magnitude `speed` pointing from `from` toward `to`.
/// Coincident points fire straight down.
pub fn aim_velocity(from: Vec2, to: Vec2, speed: f32) -> Vec2 {
    let delta = to - from;
    let distance = delta.length();
    if distance <= f32::EPSILON {
        return Vec2::new(0.0, speed);
    }
    delta / distance * speed
}

/// Fire a player bullet if the cooldown has elapsed.
/// Returns true if a bullet was spawned.
pub fn try_player_shoot(state: &mut GameState, now_ms: u64) -> bool {
    let player = &state.player;
    if let Some(last) = player.last_shot_ms {
        if now_ms.saturating_sub(last) <= player.shot_cooldown_ms {
            return false;
        }
    }

    let muzzle = player.bounds().midtop();
    state.bullets.push(Bullet::player_shot(muzzle, &state.tuning));
    state.player.last_shot_ms = Some(now_ms);
    true
}

/// Fire from one random enemy if the enemy timer has elapsed.
/// Returns the index of the enemy that fired.
pub fn try_enemy_shoot<R: Rng + ?Sized>(
    state: &mut GameState,
    rng: &mut R,
    now_ms: u64,
) -> Option<usize> {
    if now_ms.saturating_sub(state.last_enemy_shot_ms) <= state.enemy_shot_cooldown_ms {
        return None;
    }
    if state.formation.is_empty() {
        return None;
    }

    let index = rng.random_range(0..state.formation.len());
    let muzzle = state.formation.enemies()[index].bounds().midbottom();
    let target = state.player.bounds().center();
    let vel = aim_velocity(muzzle, target, state.tuning.enemy_bullet_speed);
    state.bullets.push(Bullet::enemy_shot(muzzle, vel, &state.tuning));

    state.last_enemy_shot_ms = now_ms;
    state.enemy_shot_cooldown_ms = next_enemy_cooldown(rng, &state.tuning);
    Some(index)
}

/// Draw the next enemy cooldown uniformly from the tuned range (inclusive)
pub fn next_enemy_cooldown<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> u64 {
    let min = tuning.enemy_shot_cooldown_min_ms;
    let max = tuning.enemy_shot_cooldown_max_ms.max(min);
    rng.random_range(min..=max)
}

/// Move every bullet by its velocity
pub fn update_bullets(bullets: &mut [Bullet], dt: f32) {
    for bullet in bullets {
        bullet.step(dt);
    }
}

/// Remove bullets that left the screen. Returns how many were removed.
pub fn cull_offscreen(bullets: &mut Vec<Bullet>, screen: &Rect) -> usize {
    let before = bullets.len();
    bullets.retain(|b| !b.is_offscreen(screen));
    before - bullets.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::Side;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_aim_three_four_five() {
        let speed = 480.0;
        let vel = aim_velocity(Vec2::ZERO, Vec2::new(3.0, 4.0), speed);
        assert!((vel.x - 0.6 * speed).abs() < 1e-3);
        assert!((vel.y - 0.8 * speed).abs() < 1e-3);
    }

    #[test]
    fn test_aim_zero_distance_fires_down() {
        let p = Vec2::new(10.0, 10.0);
        assert_eq!(aim_velocity(p, p, 300.0), Vec2::new(0.0, 300.0));
    }

    #[test]
    fn test_player_shot_spawns_at_nose() {
        let mut state = GameState::new(Tuning::default());
        assert!(try_player_shoot(&mut state, 0));
        let bullet = &state.bullets[0];
        assert_eq!(bullet.side, Side::Player);
        assert_eq!(bullet.vel, Vec2::new(0.0, -960.0));
        assert_eq!(bullet.bounds().midbottom(), state.player.bounds().midtop());
        assert_eq!(state.player.last_shot_ms, Some(0));
    }

    #[test]
    fn test_player_cooldown() {
        let mut state = GameState::new(Tuning::default());
        assert!(try_player_shoot(&mut state, 1000));
        // Exactly at the cooldown is still too early
        assert!(!try_player_shoot(&mut state, 1300));
        assert!(try_player_shoot(&mut state, 1301));
        assert_eq!(state.bullets.len(), 2);
    }

    #[test]
    fn test_enemy_waits_for_timer() {
        let mut state = GameState::new(Tuning::default());
        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(try_enemy_shoot(&mut state, &mut rng, 1000), None);
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_enemy_shot_aims_at_player() {
        let mut state = GameState::new(Tuning::default());
        let mut rng = Pcg32::seed_from_u64(7);
        let index = try_enemy_shoot(&mut state, &mut rng, 1001).expect("timer elapsed");

        let bullet = &state.bullets[0];
        assert_eq!(bullet.side, Side::Enemy);
        let muzzle = state.formation.enemies()[index].bounds().midbottom();
        assert_eq!(bullet.bounds().midtop(), muzzle);

        let expected = aim_velocity(muzzle, state.player.bounds().center(), 480.0);
        assert_eq!(bullet.vel, expected);
        assert!((bullet.vel.length() - 480.0).abs() < 1e-2);

        assert_eq!(state.last_enemy_shot_ms, 1001);
        assert!((500..=1500).contains(&state.enemy_shot_cooldown_ms));
    }

    #[test]
    fn test_enemy_shot_is_seed_deterministic() {
        let fire = |seed| {
            let mut state = GameState::new(Tuning::default());
            let mut rng = Pcg32::seed_from_u64(seed);
            let index = try_enemy_shoot(&mut state, &mut rng, 5000);
            (index, state.enemy_shot_cooldown_ms)
        };
        assert_eq!(fire(99), fire(99));
    }

    #[test]
    fn test_empty_formation_holds_fire() {
        let mut state = GameState::new(Tuning::default());
        let marks = vec![true; state.formation.len()];
        state.formation.remove_marked(&marks);
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(try_enemy_shoot(&mut state, &mut rng, 10_000), None);
        assert_eq!(state.last_enemy_shot_ms, 0);
    }

    #[test]
    fn test_cooldown_range_is_inclusive() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..1000 {
            let c = next_enemy_cooldown(&mut rng, &tuning);
            assert!((500..=1500).contains(&c));
        }
    }

    #[test]
    fn test_cull_offscreen() {
        let tuning = Tuning::default();
        let screen = Rect::screen(tuning.screen_size());
        let mut bullets = vec![
            Bullet::player_shot(Vec2::new(100.0, 10.0), &tuning),
            Bullet::player_shot(Vec2::new(100.0, 500.0), &tuning),
        ];
        update_bullets(&mut bullets, 0.1);
        // First bullet's bottom went from 10 to -86
        assert_eq!(cull_offscreen(&mut bullets, &screen), 1);
        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets[0].bounds().bottom(), 404.0);
    }
}
