//! Frame timing: delta clamping, frame cap and FPS tracking

use std::thread;
use std::time::{Duration, Instant};

use crate::consts::{MAX_DT, MIN_DT};

/// Number of frame timestamps the FPS counter averages over
pub const FPS_WINDOW: usize = 60;

/// Clamp a raw frame delta (seconds) into the range physics stays stable in.
/// NaN maps to the minimum.
#[inline]
pub fn clamp_dt(raw: f32) -> f32 {
    if raw.is_nan() {
        return MIN_DT;
    }
    raw.clamp(MIN_DT, MAX_DT)
}

/// Monotonic frame clock with an optional frame cap
#[derive(Debug)]
pub struct FrameClock {
    started: Instant,
    last: Instant,
    /// Minimum frame duration (zero when uncapped)
    frame_budget: Duration,
}

impl FrameClock {
    /// Clock capped at `target_fps` frames per second (0 = uncapped)
    pub fn new(target_fps: u32) -> Self {
        let now = Instant::now();
        let frame_budget = if target_fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(1.0 / target_fps as f64)
        };
        Self {
            started: now,
            last: now,
            frame_budget,
        }
    }

    /// Wait out the rest of the frame budget, then return the clamped
    /// seconds since the previous call
    pub fn tick(&mut self) -> f32 {
        let elapsed = self.last.elapsed();
        if elapsed < self.frame_budget {
            thread::sleep(self.frame_budget - elapsed);
        }
        let now = Instant::now();
        let raw = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        clamp_dt(raw)
    }

    /// Milliseconds since the clock was created
    pub fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}

/// Rolling FPS estimate over the last [`FPS_WINDOW`] frames
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    recorded: usize,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            recorded: 0,
            fps: 0,
        }
    }

    /// Record a frame timestamp (ms) and refresh the estimate
    pub fn record(&mut self, time_ms: f64) -> u32 {
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.recorded = (self.recorded + 1).min(FPS_WINDOW);

        // Oldest entry is the next one to be overwritten once the ring is full
        if self.recorded == FPS_WINDOW {
            let oldest = self.frame_times[self.frame_index];
            let elapsed = time_ms - oldest;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
        self.fps
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}
