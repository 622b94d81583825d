//! Headless platform: scripted input, frames counted instead of drawn
//!
//! Used by the native demo binary and by frame-loop tests.

use std::collections::VecDeque;

use super::Platform;
use super::input::{HeldKeys, InputEvent};
use crate::renderer::RenderFrame;

/// Input for one scripted frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameScript {
    pub events: Vec<InputEvent>,
    pub held: HeldKeys,
}

impl FrameScript {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn events(events: Vec<InputEvent>) -> Self {
        Self {
            events,
            held: HeldKeys::NONE,
        }
    }

    pub fn held(held: HeldKeys) -> Self {
        Self {
            events: Vec::new(),
            held,
        }
    }
}

/// Platform with no window. Once the script runs out every frame is idle.
#[derive(Debug, Default)]
pub struct HeadlessPlatform {
    script: VecDeque<FrameScript>,
    held: HeldKeys,
    frames_presented: u64,
    last_frame: Option<RenderFrame>,
    shut_down: bool,
}

impl HeadlessPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_script(script: impl IntoIterator<Item = FrameScript>) -> Self {
        Self {
            script: script.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.last_frame.as_ref()
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }
}

impl Platform for HeadlessPlatform {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        match self.script.pop_front() {
            Some(frame) => {
                self.held = frame.held;
                frame.events
            }
            None => {
                self.held = HeldKeys::NONE;
                Vec::new()
            }
        }
    }

    fn held_keys(&self) -> HeldKeys {
        self.held
    }

    fn present(&mut self, frame: &RenderFrame) {
        self.frames_presented += 1;
        self.last_frame = Some(frame.clone());
    }

    fn shutdown(&mut self) {
        log::debug!("Headless platform shut down after {} frames", self.frames_presented);
        self.shut_down = true;
    }
}
