//! Keyboard input handling
//!
//! Device events are folded into an [`InputState`] once per tick, so a tick
//! always sees one consistent set of paddle motions no matter how events
//! arrive between frames.

use serde::{Deserialize, Serialize};

use crate::components::{Motion, Side};

/// The four logical controls of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    P1Up,
    P1Down,
    P2Up,
    P2Down,
}

impl Control {
    pub fn side(self) -> Side {
        match self {
            Control::P1Up | Control::P1Down => Side::Left,
            Control::P2Up | Control::P2Down => Side::Right,
        }
    }

    /// Motion applied while this control is held
    pub fn motion(self) -> Motion {
        match self {
            Control::P1Up | Control::P2Up => Motion::Up,
            Control::P1Down | Control::P2Down => Motion::Down,
        }
    }
}

/// A key transition on one logical control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub control: Control,
    pub pressed: bool,
}

/// Everything an input source can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Key(KeyEvent),
    /// Session should end (window closed, device gone)
    Quit,
}

impl InputEvent {
    pub fn press(control: Control) -> Self {
        InputEvent::Key(KeyEvent {
            control,
            pressed: true,
        })
    }

    pub fn release(control: Control) -> Self {
        InputEvent::Key(KeyEvent {
            control,
            pressed: false,
        })
    }
}

/// Last known motion of each paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    motions: [Motion; 2],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Press sets that control's motion (last event wins). Releasing either
    /// control of a paddle stops it, even if the other one is still held.
    pub fn apply(&mut self, key: KeyEvent) {
        let slot = &mut self.motions[key.control.side().index()];
        *slot = if key.pressed {
            key.control.motion()
        } else {
            Motion::Idle
        };
    }

    pub fn motion(&self, side: Side) -> Motion {
        self.motions[side.index()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: String,
    pub control: Control,
}

/// Physical key names mapped to logical controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings(pub Vec<KeyBinding>);

impl Default for KeyBindings {
    fn default() -> Self {
        let bind = |key: &str, control| KeyBinding {
            key: key.to_string(),
            control,
        };
        Self(vec![
            bind("w", Control::P1Up),
            bind("s", Control::P1Down),
            bind("ArrowUp", Control::P2Up),
            bind("ArrowDown", Control::P2Down),
        ])
    }
}

impl KeyBindings {
    /// Look up a key name, ignoring ASCII case
    pub fn control_for(&self, key: &str) -> Option<Control> {
        self.0
            .iter()
            .find(|b| b.key.eq_ignore_ascii_case(key))
            .map(|b| b.control)
    }
}
