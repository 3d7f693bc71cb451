//! Single analog axis with a dead zone.

use crate::backend::InputBackend;
use crate::engine::{cutoff_axis, CutoffPolicy};
use crate::phase::Phase;
use crate::signature::{
    tuned_dead_zone, InputSignature, ScalarInput, SignalValue, SignatureHash, SignatureId,
    SignatureKind,
};

/// Axis read by string id, optionally inverted, then passed through [`cutoff_axis`].
///
/// Analog values carry no edge history, so only the variable-rate phase samples; a
/// fixed-rate sample leaves the cached value alone.
#[derive(Debug, Clone)]
pub struct AxisSignature {
    id: SignatureId,
    input_id: String,
    dead_zone: f32,
    cutoff: CutoffPolicy,
    invert: bool,
    current: f32,
}

impl AxisSignature {
    pub fn new(name: impl Into<String>, input_id: impl Into<String>) -> Self {
        Self::from_id(SignatureId::new(name), input_id.into())
    }

    pub fn with_hash(
        name: impl Into<String>,
        hash: SignatureHash,
        input_id: impl Into<String>,
    ) -> Self {
        Self::from_id(SignatureId::with_hash(name, hash), input_id.into())
    }

    fn from_id(id: SignatureId, input_id: String) -> Self {
        Self {
            id,
            input_id,
            dead_zone: 0.0,
            cutoff: CutoffPolicy::default(),
            invert: false,
            current: 0.0,
        }
    }

    pub fn input_id(&self) -> &str {
        &self.input_id
    }

    pub fn set_input_id(&mut self, input_id: impl Into<String>) {
        self.input_id = input_id.into();
    }

    pub fn dead_zone(&self) -> f32 {
        self.dead_zone
    }

    pub fn set_dead_zone(&mut self, dead_zone: f32) {
        self.dead_zone = tuned_dead_zone(&self.id, "dead_zone", dead_zone);
    }

    pub fn cutoff(&self) -> CutoffPolicy {
        self.cutoff
    }

    pub fn set_cutoff(&mut self, cutoff: CutoffPolicy) {
        self.cutoff = cutoff;
    }

    pub fn invert(&self) -> bool {
        self.invert
    }

    pub fn set_invert(&mut self, invert: bool) {
        self.invert = invert;
    }
}

impl InputSignature for AxisSignature {
    fn id(&self) -> &SignatureId {
        &self.id
    }

    fn kind(&self) -> SignatureKind {
        SignatureKind::ScalarAnalog
    }

    fn sample(&mut self, backend: &dyn InputBackend, phase: Phase) {
        if phase == Phase::Fixed {
            return;
        }

        let mut value = backend.axis(&self.input_id);
        if self.invert {
            value = -value;
        }
        self.current = cutoff_axis(value, self.dead_zone, self.cutoff);
    }

    fn current(&self, _phase: Phase) -> SignalValue {
        SignalValue::Axis(self.current)
    }
}

impl ScalarInput for AxisSignature {
    fn current_state(&self) -> f32 {
        self.current
    }
}
