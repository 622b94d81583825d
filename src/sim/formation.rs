//! The enemy formation: a grid that sweeps sideways and steps down at the edges

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Body, Enemy};
use super::state::retain_unmarked;
use crate::tuning::Tuning;

/// Horizontal sweep direction shared by every enemy in a formation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sweep {
    Right,
    Left,
}

impl Sweep {
    /// +1.0 for right, -1.0 for left
    pub fn sign(self) -> f32 {
        match self {
            Sweep::Right => 1.0,
            Sweep::Left => -1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Sweep::Right => Sweep::Left,
            Sweep::Left => Sweep::Right,
        }
    }
}

/// Enemy grid (iteration order is row-major from the top-left)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Formation {
    enemies: Vec<Enemy>,
    direction: Sweep,
    step_down: f32,
}

impl Formation {
    /// Build the starting grid from tuning
    pub fn grid(tuning: &Tuning) -> Self {
        let size = tuning.enemy_size();
        let mut enemies = Vec::with_capacity((tuning.enemy_rows * tuning.enemy_cols) as usize);
        for row in 0..tuning.enemy_rows {
            for col in 0..tuning.enemy_cols {
                let pos = Vec2::new(
                    tuning.formation_origin_x + col as f32 * tuning.enemy_spacing_x,
                    tuning.formation_origin_y + row as f32 * tuning.enemy_spacing_y,
                );
                enemies.push(Enemy::new(pos, size, tuning.enemy_speed));
            }
        }
        Self::from_enemies(enemies, tuning.formation_step_down)
    }

    /// Formation from an explicit list, sweeping right
    pub fn from_enemies(mut enemies: Vec<Enemy>, step_down: f32) -> Self {
        let direction = Sweep::Right;
        for enemy in &mut enemies {
            enemy.heading = direction.sign();
        }
        Self {
            enemies,
            direction,
            step_down,
        }
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn direction(&self) -> Sweep {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Move every enemy sideways by `speed * dt * direction`
    pub fn advance(&mut self, dt: f32) {
        for enemy in &mut self.enemies {
            enemy.step(dt);
        }
    }

    /// Reverse the sweep if an enemy's leading edge reached the screen edge.
    ///
    /// Stops at the first enemy past the bound, in formation order.
    /// Returns true when a step-down is due.
    pub fn check_bounds(&mut self, screen_width: f32) -> bool {
        let direction = self.direction;
        let hit_edge = self.enemies.iter().any(|enemy| {
            let r = enemy.bounds();
            match direction {
                Sweep::Right => r.right() >= screen_width,
                Sweep::Left => r.left() <= 0.0,
            }
        });
        if hit_edge {
            self.set_direction(direction.reversed());
        }
        hit_edge
    }

    /// Shift every surviving enemy down by the fixed increment
    pub fn step_down(&mut self) {
        for enemy in &mut self.enemies {
            enemy.pos.y += self.step_down;
        }
    }

    /// Bounds check plus the step-down it may trigger.
    /// Returns true if the formation reversed this call.
    pub fn update_bounds(&mut self, screen_width: f32) -> bool {
        let reversed = self.check_bounds(screen_width);
        if reversed {
            self.step_down();
        }
        reversed
    }

    /// Drop every enemy whose mark is set (marks are in `enemies()` order)
    pub fn remove_marked(&mut self, marks: &[bool]) -> usize {
        debug_assert_eq!(marks.len(), self.enemies.len());
        retain_unmarked(&mut self.enemies, marks)
    }

    fn set_direction(&mut self, direction: Sweep) {
        self.direction = direction;
        for enemy in &mut self.enemies {
            enemy.heading = direction.sign();
        }
    }
}
