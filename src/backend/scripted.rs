//! Deterministic backend driven from recorded frames.
//!
//! Holds exactly one [`Frame`] of raw input. Tests and the replay tool set the frame,
//! run a phase of sampling, then move on to the next frame.

use crate::backend::{InputBackend, KeyCode, PointerButton};
use glam::Vec2;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Raw input state for a single host frame.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct Frame {
    /// Virtual buttons currently down
    pub buttons: BTreeSet<String>,
    /// Keyboard keys currently down
    pub keys: HashSet<KeyCode>,
    /// Pointer buttons currently down
    pub pointer_buttons: HashSet<PointerButton>,
    /// Analog axis values; missing axes read as 0
    pub axes: BTreeMap<String, f32>,
    /// Pointer position
    pub pointer: Vec2,
}

/// [`InputBackend`] that answers from a scripted [`Frame`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedBackend {
    frame: Frame,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole raw state with the next recorded frame.
    pub fn load_frame(&mut self, frame: Frame) {
        self.frame = frame;
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn set_button(&mut self, id: impl Into<String>, down: bool) {
        let id = id.into();
        if down {
            self.frame.buttons.insert(id);
        } else {
            self.frame.buttons.remove(&id);
        }
    }

    pub fn set_key(&mut self, key: KeyCode, down: bool) {
        if down {
            self.frame.keys.insert(key);
        } else {
            self.frame.keys.remove(&key);
        }
    }

    pub fn set_pointer_button(&mut self, button: PointerButton, down: bool) {
        if down {
            self.frame.pointer_buttons.insert(button);
        } else {
            self.frame.pointer_buttons.remove(&button);
        }
    }

    pub fn set_axis_value(&mut self, id: impl Into<String>, value: f32) {
        self.frame.axes.insert(id.into(), value);
    }

    pub fn set_pointer_position(&mut self, position: Vec2) {
        self.frame.pointer = position;
    }

    /// Builder form of [`set_button`](Self::set_button) with `down = true`.
    pub fn press(mut self, id: impl Into<String>) -> Self {
        self.set_button(id, true);
        self
    }

    pub fn press_key(mut self, key: KeyCode) -> Self {
        self.set_key(key, true);
        self
    }

    pub fn press_pointer(mut self, button: PointerButton) -> Self {
        self.set_pointer_button(button, true);
        self
    }

    pub fn set_axis(mut self, id: impl Into<String>, value: f32) -> Self {
        self.set_axis_value(id, value);
        self
    }

    pub fn set_pointer(mut self, position: Vec2) -> Self {
        self.set_pointer_position(position);
        self
    }
}

impl InputBackend for ScriptedBackend {
    fn button(&self, id: &str) -> bool {
        self.frame.buttons.contains(id)
    }

    fn key(&self, key: KeyCode) -> bool {
        self.frame.keys.contains(&key)
    }

    fn pointer_button(&self, button: PointerButton) -> bool {
        self.frame.pointer_buttons.contains(&button)
    }

    fn axis(&self, id: &str) -> f32 {
        self.frame.axes.get(id).copied().unwrap_or(0.0)
    }

    fn pointer_position(&self) -> Vec2 {
        self.frame.pointer
    }
}
