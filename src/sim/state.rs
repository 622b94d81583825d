//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives here; the RNG and collision masks
//! are passed in alongside it.

use serde::{Deserialize, Serialize};

use super::entity::{Bullet, Player, Side};
use super::formation::Formation;
use super::geom::Rect;
use crate::tuning::Tuning;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended; ticks are ignored
    Terminated,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// External quit signal (window closed)
    Quit,
    /// Player health reached zero
    PlayerDestroyed,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PlayerFired,
    /// Enemy at this formation index fired
    EnemyFired { enemy: usize },
    EnemyDestroyed,
    /// Player took a hit, `health` left
    PlayerHit { health: u32 },
    /// Formation bounced off a screen edge and stepped down
    FormationReversed,
    GameOver(EndReason),
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Balance constants for this run
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub end_reason: Option<EndReason>,
    pub player: Player,
    /// Bullets of both sides, in spawn order
    pub bullets: Vec<Bullet>,
    pub formation: Formation,
    /// Timestamp (ms) of the last enemy shot
    pub last_enemy_shot_ms: u64,
    /// Current wait before the next enemy shot
    pub enemy_shot_cooldown_ms: u64,
    /// Enemies destroyed this run
    pub kills: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh run: player at the bottom, full formation at the top
    pub fn new(tuning: Tuning) -> Self {
        Self {
            player: Player::new(&tuning),
            formation: Formation::grid(&tuning),
            bullets: Vec::new(),
            phase: GamePhase::Running,
            end_reason: None,
            last_enemy_shot_ms: 0,
            enemy_shot_cooldown_ms: tuning.enemy_shot_initial_cooldown_ms,
            kills: 0,
            time_ticks: 0,
            events: Vec::new(),
            tuning,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn screen(&self) -> Rect {
        Rect::screen(self.tuning.screen_size())
    }

    /// End the run (first reason wins)
    pub fn terminate(&mut self, reason: EndReason) {
        if self.phase == GamePhase::Terminated {
            return;
        }
        self.phase = GamePhase::Terminated;
        self.end_reason = Some(reason);
        self.events.push(GameEvent::GameOver(reason));
    }

    pub fn bullets_of(&self, side: Side) -> impl Iterator<Item = &Bullet> {
        self.bullets.iter().filter(move |b| b.side == side)
    }
}

/// Drop every element whose mark is set (marks index the vector)
pub(crate) fn retain_unmarked<T>(items: &mut Vec<T>, marks: &[bool]) -> usize {
    let before = items.len();
    let mut i = 0;
    items.retain(|_| {
        let keep = !marks.get(i).copied().unwrap_or(false);
        i += 1;
        keep
    });
    before - items.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(Tuning::default());
        assert!(state.is_running());
        assert_eq!(state.player.health, 3);
        assert_eq!(state.formation.len(), 32);
        assert!(state.bullets.is_empty());
        assert_eq!(state.enemy_shot_cooldown_ms, 1000);
    }

    #[test]
    fn test_terminate_keeps_first_reason() {
        let mut state = GameState::new(Tuning::default());
        state.terminate(EndReason::PlayerDestroyed);
        state.terminate(EndReason::Quit);
        assert_eq!(state.phase, GamePhase::Terminated);
        assert_eq!(state.end_reason, Some(EndReason::PlayerDestroyed));
        assert_eq!(state.events, vec![GameEvent::GameOver(EndReason::PlayerDestroyed)]);
    }

    #[test]
    fn test_retain_unmarked() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        let removed = retain_unmarked(&mut items, &[false, true, false, true]);
        assert_eq!(removed, 2);
        assert_eq!(items, vec!['a', 'c']);
    }

    #[test]
    fn test_state_serializes() {
        let state = GameState::new(Tuning::default());
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.formation.len(), state.formation.len());
        assert_eq!(back.player.x, state.player.x);
    }
}
