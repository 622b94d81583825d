//! The frame loop
//!
//! Per frame: poll input → tick the simulation → compose and present the
//! frame → advance the clock. Runs until the simulation terminates (quit or
//! game over) or an optional frame limit is reached.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::assets::SpriteSet;
use crate::platform::input::{shoot_pressed, wants_quit};
use crate::platform::{FpsCounter, FrameClock, Platform};
use crate::renderer::{Palette, RenderFrame};
use crate::settings::Settings;
use crate::sim::{
    CollisionMasks, EndReason, GameEvent, GamePhase, GameState, TickInput, demo_input, tick,
};
use crate::tuning::Tuning;

/// Outcome of a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    /// None when the frame limit stopped the loop
    pub end_reason: Option<EndReason>,
    pub kills: u32,
    pub health: u32,
    pub enemies_left: usize,
}

/// Game instance holding all state
pub struct Game<P: Platform> {
    platform: P,
    state: GameState,
    masks: CollisionMasks,
    palette: Palette,
    rng: Pcg32,
    fps: FpsCounter,
    settings: Settings,
    frames: u64,
}

impl<P: Platform> Game<P> {
    pub fn new(platform: P, settings: Settings, tuning: Tuning, sprites: &SpriteSet, seed: u64) -> Self {
        log::info!("New game with seed {seed}");
        Self {
            platform,
            state: GameState::new(tuning),
            masks: sprites.masks(),
            palette: sprites.palette(),
            rng: Pcg32::seed_from_u64(seed),
            fps: FpsCounter::new(),
            settings,
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one iteration of the loop at `now_ms` with frame delta `dt`
    pub fn step_frame(&mut self, now_ms: u64, dt: f32) -> GamePhase {
        let events = self.platform.poll_events();
        let held = self.platform.held_keys();

        let quit = wants_quit(&events);
        let input = if self.settings.demo {
            TickInput {
                quit,
                ..demo_input(&self.state, now_ms)
            }
        } else {
            TickInput {
                quit,
                shoot: shoot_pressed(&events),
                left: held.left,
                right: held.right,
                now_ms,
            }
        };

        tick(&mut self.state, &self.masks, &mut self.rng, &input, dt);
        self.log_events();

        let fps = self.fps.record(now_ms as f64);
        let overlay = self.settings.show_fps.then_some(fps);
        let frame = RenderFrame::build(&self.state, &self.palette, overlay);
        self.platform.present(&frame);

        self.frames += 1;
        self.state.phase
    }

    /// Loop with the real clock until the run ends
    pub fn run(&mut self) -> RunSummary {
        let mut clock = FrameClock::new(self.settings.target_fps);
        // First frame has no history; simulate it at the target rate
        let mut dt = clock.tick();

        loop {
            let phase = self.step_frame(clock.now_ms(), dt);
            if phase == GamePhase::Terminated {
                break;
            }
            if self
                .settings
                .frame_limit
                .is_some_and(|limit| self.frames >= limit)
            {
                log::info!("Frame limit of {} reached", self.frames);
                break;
            }
            dt = clock.tick();
        }

        self.platform.shutdown();
        self.summary()
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            frames: self.frames,
            end_reason: self.state.end_reason,
            kills: self.state.kills,
            health: self.state.player.health,
            enemies_left: self.state.formation.len(),
        }
    }

    fn log_events(&self) {
        for event in &self.state.events {
            match event {
                GameEvent::PlayerHit { health } => log::info!("Player hit, {health} health left"),
                GameEvent::GameOver(reason) => log::info!(
                    "Game over ({reason:?}) after {} ticks, {} kills",
                    self.state.time_ticks,
                    self.state.kills
                ),
                GameEvent::FormationReversed => {
                    log::debug!("Formation reversed to {:?}", self.state.formation.direction())
                }
                other => log::trace!("{other:?}"),
            }
        }
    }
}
