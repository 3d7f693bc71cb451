//! Pointer position pass-through.

use crate::backend::InputBackend;
use crate::phase::Phase;
use crate::signature::{
    InputSignature, SignalValue, SignatureHash, SignatureId, SignatureKind, VectorInput,
};
use glam::Vec2;

/// Latest pointer position as of the last variable-rate sample.
///
/// No conditioning and no per-phase history; the position is not double-buffered.
#[derive(Debug, Clone)]
pub struct CursorSignature {
    id: SignatureId,
    current: Vec2,
}

impl CursorSignature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: SignatureId::new(name),
            current: Vec2::ZERO,
        }
    }

    pub fn with_hash(name: impl Into<String>, hash: SignatureHash) -> Self {
        Self {
            id: SignatureId::with_hash(name, hash),
            current: Vec2::ZERO,
        }
    }
}

impl InputSignature for CursorSignature {
    fn id(&self) -> &SignatureId {
        &self.id
    }

    fn kind(&self) -> SignatureKind {
        SignatureKind::VectorAnalog
    }

    fn sample(&mut self, backend: &dyn InputBackend, phase: Phase) {
        if phase == Phase::Variable {
            self.current = backend.pointer_position();
        }
    }

    fn current(&self, _phase: Phase) -> SignalValue {
        SignalValue::DualAxis(self.current)
    }
}

impl VectorInput for CursorSignature {
    fn current_state(&self) -> Vec2 {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ScriptedBackend;

    #[test]
    fn follows_pointer_on_variable_phase_only() {
        let mut backend = ScriptedBackend::new().set_pointer(Vec2::new(640.0, 360.0));
        let mut pointer = CursorSignature::new("Pointer");

        pointer.sample(&backend, Phase::Variable);
        assert_eq!(pointer.current_state(), Vec2::new(640.0, 360.0));

        backend.set_pointer_position(Vec2::new(10.0, 20.0));
        pointer.sample(&backend, Phase::Fixed);
        assert_eq!(pointer.current_state(), Vec2::new(640.0, 360.0));

        pointer.sample(&backend, Phase::Variable);
        assert_eq!(pointer.current_state(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn passes_values_through_unconditioned() {
        let backend = ScriptedBackend::new().set_pointer(Vec2::new(-0.01, 0.001));
        let mut pointer = CursorSignature::with_hash("Pointer", 5);
        pointer.sample(&backend, Phase::Variable);

        assert_eq!(pointer.current_state(), Vec2::new(-0.01, 0.001));
        assert_eq!(pointer.hash(), 5);
    }
}
