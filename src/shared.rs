//! Digital signatures that can be sampled from more than one thread.
//!
//! When the variable-rate and fixed-rate passes run on different threads, each phase
//! slot gets its own lock so the two passes never wait on each other's history. A read
//! from the other phase is a snapshot of that phase's last completed sample; consumers
//! only need the last known state, not a synchronized handoff.

use crate::backend::InputBackend;
use crate::engine::ButtonState;
use crate::phase::Phase;
use crate::signature::{DigitalSignature, DigitalSource, SignatureHash, SignatureId};
use parking_lot::{Mutex, RwLock, RwLockReadGuard};

/// Thread-safe counterpart of [`DigitalSignature`].
#[derive(Debug)]
pub struct SharedDigitalSignature<S> {
    id: SignatureId,
    source: RwLock<S>,
    variable: Mutex<ButtonState>,
    fixed: Mutex<ButtonState>,
}

impl<S: DigitalSource> SharedDigitalSignature<S> {
    pub fn new(id: SignatureId, source: S) -> Self {
        Self {
            id,
            source: RwLock::new(source),
            variable: Mutex::new(ButtonState::None),
            fixed: Mutex::new(ButtonState::None),
        }
    }

    pub fn id(&self) -> &SignatureId {
        &self.id
    }

    pub fn name(&self) -> &str {
        self.id.name()
    }

    pub fn hash(&self) -> SignatureHash {
        self.id.hash()
    }

    fn slot(&self, phase: Phase) -> &Mutex<ButtonState> {
        match phase {
            Phase::Variable => &self.variable,
            Phase::Fixed => &self.fixed,
        }
    }

    /// Advance the slot for `phase`. Only that slot's lock is taken for the transition.
    pub fn sample(&self, backend: &dyn InputBackend, phase: Phase) {
        let raw_down = self.source.read().is_down(backend);
        let mut slot = self.slot(phase).lock();
        let next = slot.next(raw_down);
        if next != *slot {
            log::trace!(
                "{} [{}]: {:?} -> {:?}",
                self.id.name(),
                phase.label(),
                *slot,
                next
            );
        }
        *slot = next;
    }

    pub fn current_state(&self, phase: Phase) -> ButtonState {
        *self.slot(phase).lock()
    }

    /// Read access to the binding.
    pub fn source(&self) -> RwLockReadGuard<'_, S> {
        self.source.read()
    }

    /// Change the binding or its tuning; takes effect on the next sample of either phase.
    pub fn update_source(&self, f: impl FnOnce(&mut S)) {
        f(&mut self.source.write());
    }
}

impl<S: DigitalSource> From<DigitalSignature<S>> for SharedDigitalSignature<S> {
    fn from(signature: DigitalSignature<S>) -> Self {
        let (id, source, states) = signature.into_parts();
        Self {
            id,
            source: RwLock::new(source),
            variable: Mutex::new(states.get(Phase::Variable)),
            fixed: Mutex::new(states.get(Phase::Fixed)),
        }
    }
}
