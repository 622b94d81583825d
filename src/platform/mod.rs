//! Platform abstraction layer
//!
//! The windowing/rendering backend plugs in here:
//! - Input events and held-key state
//! - Frame presentation
//! - Timing (frame cap, FPS)

pub mod headless;
pub mod input;
pub mod time;

pub use headless::{FrameScript, HeadlessPlatform};
pub use input::{HeldKeys, InputEvent, Key};
pub use time::{FpsCounter, FrameClock, clamp_dt};

use crate::renderer::RenderFrame;

/// A windowing/rendering backend driving the frame loop
pub trait Platform {
    /// Drain the discrete events raised since the previous call
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Movement keys held right now
    fn held_keys(&self) -> HeldKeys;

    /// Draw and flip one frame
    fn present(&mut self, frame: &RenderFrame);

    /// Release rendering resources once the loop has ended
    fn shutdown(&mut self) {}
}
