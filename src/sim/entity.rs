//! Entity records: the player ship, bullets and enemies

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use crate::tuning::Tuning;

/// Shared capability of everything that moves on screen
pub trait Body {
    /// Advance by one frame delta
    fn step(&mut self, dt: f32);
    /// Current bounding rectangle
    fn bounds(&self) -> Rect;
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Left edge (continuous)
    pub x: f32,
    /// Top edge (fixed for the whole run)
    pub y: f32,
    pub size: Vec2,
    pub speed: f32,
    /// Horizontal velocity for the current frame, set by [`Player::steer`]
    pub vel_x: f32,
    /// Upper bound for `x` (`screen_width - width`)
    pub max_x: f32,
    /// Hits the player can still take
    pub health: u32,
    /// Timestamp (ms) of the last shot, `None` until the first one
    pub last_shot_ms: Option<u64>,
    pub shot_cooldown_ms: u64,
}

impl Player {
    /// Player centered horizontally near the bottom of the screen
    pub fn new(tuning: &Tuning) -> Self {
        let size = tuning.player_size();
        let anchor = Vec2::new(
            tuning.screen_width / 2.0,
            tuning.screen_height - tuning.player_bottom_margin,
        );
        let rect = Rect::from_midbottom(anchor, size);
        Self {
            x: rect.left(),
            y: rect.top(),
            size,
            speed: tuning.player_speed,
            vel_x: 0.0,
            max_x: (tuning.screen_width - size.x).max(0.0),
            health: tuning.player_health,
            last_shot_ms: None,
            shot_cooldown_ms: tuning.player_shot_cooldown_ms,
        }
    }

    /// Set horizontal velocity from the held movement keys.
    /// Holding both cancels out.
    pub fn steer(&mut self, left: bool, right: bool) {
        self.vel_x = match (left, right) {
            (true, false) => -self.speed,
            (false, true) => self.speed,
            _ => 0.0,
        };
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

impl Body for Player {
    fn step(&mut self, dt: f32) {
        self.x = (self.x + self.vel_x * dt).clamp(0.0, self.max_x);
    }

    fn bounds(&self) -> Rect {
        Rect::new(Vec2::new(self.x, self.y), self.size)
    }
}

/// Which side fired a bullet (selects its collision group)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

/// A bullet in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub side: Side,
}

impl Bullet {
    /// Player bullet leaving the ship's nose, travelling straight up
    pub fn player_shot(muzzle: Vec2, tuning: &Tuning) -> Self {
        let rect = Rect::from_midbottom(muzzle, tuning.bullet_size());
        Self {
            pos: rect.pos,
            vel: Vec2::new(0.0, -tuning.bullet_speed),
            size: rect.size,
            side: Side::Player,
        }
    }

    /// Enemy bullet hanging below the shooter, travelling along `vel`
    pub fn enemy_shot(muzzle: Vec2, vel: Vec2, tuning: &Tuning) -> Self {
        let rect = Rect::from_midtop(muzzle, tuning.enemy_bullet_size());
        Self {
            pos: rect.pos,
            vel,
            size: rect.size,
            side: Side::Enemy,
        }
    }

    /// True once the bullet no longer overlaps the screen at all
    pub fn is_offscreen(&self, screen: &Rect) -> bool {
        !self.bounds().intersects(screen)
    }
}

impl Body for Bullet {
    fn step(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// A single invader
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal speed magnitude
    pub speed: f32,
    /// +1.0 moving right, -1.0 moving left. Owned by the formation.
    pub heading: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            pos,
            size,
            speed,
            heading: 1.0,
        }
    }
}

impl Body for Enemy {
    fn step(&mut self, dt: f32) {
        self.pos.x += self.speed * dt * self.heading;
    }

    fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_player_spawn_position() {
        let tuning = Tuning::default();
        let player = Player::new(&tuning);
        let r = player.bounds();
        assert_eq!(r.midbottom(), Vec2::new(640.0, 940.0));
        assert_eq!(player.health, 3);
        assert_eq!(player.max_x, 1160.0);
    }

    #[test]
    fn test_bullet_linear_motion() {
        let mut bullet = Bullet {
            pos: Vec2::new(100.0, 200.0),
            vel: Vec2::new(30.0, -960.0),
            size: Vec2::new(10.0, 20.0),
            side: Side::Player,
        };
        let start = bullet.pos;
        let dt = 0.016;
        bullet.step(dt);
        assert_eq!(bullet.pos, start + Vec2::new(30.0, -960.0) * dt);
    }

    #[test]
    fn test_bullet_offscreen_each_edge() {
        let screen = Rect::screen(Vec2::new(100.0, 100.0));
        let size = Vec2::new(10.0, 20.0);
        let at = |x: f32, y: f32| Bullet {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            size,
            side: Side::Enemy,
        };

        // Fully out past each edge
        assert!(at(50.0, -20.0).is_offscreen(&screen));
        assert!(at(50.0, 100.0).is_offscreen(&screen));
        assert!(at(-10.0, 50.0).is_offscreen(&screen));
        assert!(at(100.0, 50.0).is_offscreen(&screen));

        // Partially visible stays
        assert!(!at(50.0, -19.0).is_offscreen(&screen));
        assert!(!at(95.0, 50.0).is_offscreen(&screen));
        assert!(!at(50.0, 50.0).is_offscreen(&screen));
    }

    #[test]
    fn test_enemy_step_follows_heading() {
        let mut enemy = Enemy::new(Vec2::new(10.0, 10.0), Vec2::new(80.0, 60.0), 100.0);
        enemy.step(0.5);
        assert_eq!(enemy.pos.x, 60.0);
        enemy.heading = -1.0;
        enemy.step(0.25);
        assert_eq!(enemy.pos.x, 35.0);
        assert_eq!(enemy.pos.y, 10.0);
    }

    #[test]
    fn test_steer_both_keys_cancel() {
        let mut player = Player::new(&Tuning::default());
        let x = player.x;
        player.steer(true, true);
        player.step(0.1);
        assert_eq!(player.x, x);
    }

    proptest! {
        #[test]
        fn prop_player_stays_on_screen(
            start in -500.0f32..2000.0,
            moves in proptest::collection::vec((any::<bool>(), any::<bool>(), 0.001f32..0.1), 1..200),
        ) {
            let tuning = Tuning::default();
            let mut player = Player::new(&tuning);
            player.x = start.clamp(0.0, player.max_x);
            for (left, right, dt) in moves {
                player.steer(left, right);
                player.step(dt);
                prop_assert!(player.x >= 0.0);
                prop_assert!(player.x <= tuning.screen_width - tuning.player_width);
            }
        }

        #[test]
        fn prop_bullet_removed_iff_no_overlap(x in -200.0f32..1500.0, y in -200.0f32..1200.0) {
            let tuning = Tuning::default();
            let screen = Rect::screen(tuning.screen_size());
            let bullet = Bullet {
                pos: Vec2::new(x, y),
                vel: Vec2::ZERO,
                size: tuning.bullet_size(),
                side: Side::Player,
            };
            let r = bullet.bounds();
            let outside = r.bottom() <= 0.0
                || r.top() >= screen.bottom()
                || r.right() <= 0.0
                || r.left() >= screen.right();
            prop_assert_eq!(bullet.is_offscreen(&screen), outside);
        }
    }
}
