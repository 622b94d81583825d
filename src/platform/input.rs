//! Input events and key state

use serde::{Deserialize, Serialize};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Shoot,
    /// Treated like a window close
    Escape,
}

/// A discrete event from the platform's event queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
}

/// Polled movement key state for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    pub const NONE: Self = Self {
        left: false,
        right: false,
    };
    pub const LEFT: Self = Self {
        left: true,
        right: false,
    };
    pub const RIGHT: Self = Self {
        left: false,
        right: true,
    };
}

/// True if any event asks the game to close
pub fn wants_quit(events: &[InputEvent]) -> bool {
    events
        .iter()
        .any(|e| matches!(e, InputEvent::Quit | InputEvent::KeyDown(Key::Escape)))
}

/// True if the shoot key went down this frame
pub fn shoot_pressed(events: &[InputEvent]) -> bool {
    events.contains(&InputEvent::KeyDown(Key::Shoot))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_queries() {
        let events = [InputEvent::KeyDown(Key::Left), InputEvent::KeyDown(Key::Shoot)];
        assert!(shoot_pressed(&events));
        assert!(!wants_quit(&events));
        assert!(wants_quit(&[InputEvent::KeyDown(Key::Escape)]));
        assert!(wants_quit(&[InputEvent::Quit]));
        assert!(!shoot_pressed(&[]));
    }
}
