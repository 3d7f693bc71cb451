//! Analog axis acting as a digital button.
//!
//! The axis value is compared against a threshold under an [`AxisConsideration`] and the
//! resulting boolean drives the usual edge detector. Lets a stick push count as a press.

use crate::backend::InputBackend;
use crate::engine::sanitize_dead_zone;
use crate::signature::digital::{DigitalSignature, DigitalSource};
use crate::signature::{tuned_dead_zone, InputSignature, SignatureHash, SignatureId};

/// Default press threshold, the axis value of a stick pushed along a 45 degree diagonal.
pub const DEFAULT_AXIS_BUTTON_THRESHOLD: f32 = 0.707;

/// Which side of the axis counts as pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum AxisConsideration {
    /// Pressed when `value >= threshold`.
    #[default]
    Positive,
    /// Pressed when `value <= -threshold`.
    Negative,
    /// Pressed when `|value| >= threshold`.
    Absolute,
}

impl AxisConsideration {
    pub fn is_pressed(self, value: f32, threshold: f32) -> bool {
        match self {
            AxisConsideration::Positive => value >= threshold,
            AxisConsideration::Negative => value <= -threshold,
            AxisConsideration::Absolute => value.abs() >= threshold,
        }
    }
}

/// Binding and tuning of an axis-as-button signature.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisButtonSource {
    input_id: String,
    threshold: f32,
    consideration: AxisConsideration,
    accept_button: bool,
}

impl AxisButtonSource {
    pub fn new(input_id: impl Into<String>, consideration: AxisConsideration) -> Self {
        Self {
            input_id: input_id.into(),
            threshold: DEFAULT_AXIS_BUTTON_THRESHOLD,
            consideration,
            accept_button: false,
        }
    }

    pub fn input_id(&self) -> &str {
        &self.input_id
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn consideration(&self) -> AxisConsideration {
        self.consideration
    }

    pub fn accept_button(&self) -> bool {
        self.accept_button
    }

    pub fn set_input_id(&mut self, input_id: impl Into<String>) {
        self.input_id = input_id.into();
    }

    /// Set the press threshold, clamped into `[0, 1)`.
    pub fn set_threshold(&mut self, threshold: f32) {
        self.threshold = sanitize_dead_zone(threshold);
    }

    pub fn set_consideration(&mut self, consideration: AxisConsideration) {
        self.consideration = consideration;
    }

    pub fn set_accept_button(&mut self, accept: bool) {
        self.accept_button = accept;
    }
}

impl DigitalSource for AxisButtonSource {
    fn is_down(&self, backend: &dyn InputBackend) -> bool {
        // Dual mode: the same id reported as a held button also counts.
        (self.accept_button && backend.button(&self.input_id))
            || self
                .consideration
                .is_pressed(backend.axis(&self.input_id), self.threshold)
    }
}

pub type AxisButtonSignature = DigitalSignature<AxisButtonSource>;

impl DigitalSignature<AxisButtonSource> {
    pub fn new(
        name: impl Into<String>,
        input_id: impl Into<String>,
        consideration: AxisConsideration,
    ) -> Self {
        Self::from_source(
            SignatureId::new(name),
            AxisButtonSource::new(input_id, consideration),
        )
    }

    pub fn with_hash(
        name: impl Into<String>,
        hash: SignatureHash,
        input_id: impl Into<String>,
        consideration: AxisConsideration,
    ) -> Self {
        Self::from_source(
            SignatureId::with_hash(name, hash),
            AxisButtonSource::new(input_id, consideration),
        )
    }

    pub fn input_id(&self) -> &str {
        self.source().input_id()
    }

    pub fn set_input_id(&mut self, input_id: impl Into<String>) {
        self.source_mut().set_input_id(input_id);
    }

    pub fn threshold(&self) -> f32 {
        self.source().threshold()
    }

    /// Set the press threshold, clamped into `[0, 1)` with a warning when it moves.
    pub fn set_threshold(&mut self, threshold: f32) {
        let threshold = tuned_dead_zone(self.id(), "threshold", threshold);
        self.source_mut().set_threshold(threshold);
    }

    pub fn consideration(&self) -> AxisConsideration {
        self.source().consideration()
    }

    pub fn set_consideration(&mut self, consideration: AxisConsideration) {
        self.source_mut().set_consideration(consideration);
    }

    pub fn accept_button(&self) -> bool {
        self.source().accept_button()
    }

    /// Also treat the backend reporting the bound id as a held button as pressed.
    pub fn set_accept_button(&mut self, accept: bool) {
        self.source_mut().set_accept_button(accept);
    }
}
