//! Platform input backend contract.
//!
//! Signatures never talk to hardware themselves. Once per phase they ask an
//! [`InputBackend`] for the raw value of whatever they are bound to. Backends are total:
//! an id they do not recognise reads as the neutral default (`false` / `0.0`), and the
//! signatures treat that default like any other sample.

pub mod scripted;

use glam::Vec2;

pub use scripted::{Frame, ScriptedBackend};

/// Raw polling interface of the platform layer.
pub trait InputBackend {
    /// Is the named virtual button currently down.
    fn button(&self, id: &str) -> bool;

    /// Is the keyboard key currently down.
    fn key(&self, key: KeyCode) -> bool;

    /// Is the pointer (mouse) button currently down.
    fn pointer_button(&self, button: PointerButton) -> bool;

    /// Current value of the named analog axis, conventionally in `[-1, 1]`.
    fn axis(&self, id: &str) -> f32;

    /// Current pointer position in backend coordinates.
    fn pointer_position(&self) -> Vec2;
}

/// Keyboard key identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyCode {
    /// Printable character key
    Char(char),
    /// Function key F1..F24
    F(u8),
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    LeftShift,
    RightShift,
    LeftControl,
    RightControl,
    LeftAlt,
    RightAlt,
    /// Platform scan code with no named variant
    Other(u32),
}

/// Pointer buttons, indexed the conventional way (0 = left, 1 = right, 2 = middle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerButton {
    Left,
    Right,
    Middle,
    Other(u8),
}

impl PointerButton {
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => PointerButton::Left,
            1 => PointerButton::Right,
            2 => PointerButton::Middle,
            other => PointerButton::Other(other),
        }
    }

    pub fn index(self) -> u8 {
        match self {
            PointerButton::Left => 0,
            PointerButton::Right => 1,
            PointerButton::Middle => 2,
            PointerButton::Other(index) => index,
        }
    }
}
