//! Digital signatures: buttons, keyboard keys and pointer buttons.
//!
//! All of them share one shape. A [`DigitalSource`] answers "is it down right now" from
//! the backend, and [`DigitalSignature`] feeds that answer through the edge detector,
//! once per phase, into that phase's slot.

use crate::backend::{InputBackend, KeyCode, PointerButton};
use crate::engine::ButtonState;
use crate::phase::{Phase, PhaseCache};
use crate::signature::{
    DigitalInput, InputSignature, SignalValue, SignatureHash, SignatureId, SignatureKind,
};

/// Raw boolean query behind a digital signature.
pub trait DigitalSource {
    fn is_down(&self, backend: &dyn InputBackend) -> bool;
}

/// Edge-detected digital signature with one history per [`Phase`].
#[derive(Debug, Clone)]
pub struct DigitalSignature<S> {
    id: SignatureId,
    source: S,
    states: PhaseCache<ButtonState>,
}

impl<S: DigitalSource> DigitalSignature<S> {
    pub fn from_source(id: SignatureId, source: S) -> Self {
        Self {
            id,
            source,
            states: PhaseCache::default(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Forget both histories, as if the signature had just been created.
    pub fn reset(&mut self) {
        self.states.reset(ButtonState::None);
    }

    pub(crate) fn into_parts(self) -> (SignatureId, S, PhaseCache<ButtonState>) {
        (self.id, self.source, self.states)
    }
}

impl<S: DigitalSource> InputSignature for DigitalSignature<S> {
    fn id(&self) -> &SignatureId {
        &self.id
    }

    fn kind(&self) -> SignatureKind {
        SignatureKind::Digital
    }

    fn sample(&mut self, backend: &dyn InputBackend, phase: Phase) {
        let raw_down = self.source.is_down(backend);
        let previous = self.states.get(phase);
        let next = self.states.update(phase, |state| state.next(raw_down));

        if next != previous {
            log::trace!(
                "{} [{}]: {:?} -> {:?}",
                self.id.name(),
                phase.label(),
                previous,
                next
            );
        }
    }

    fn current(&self, phase: Phase) -> SignalValue {
        SignalValue::Button(self.current_state(phase))
    }
}

impl<S: DigitalSource> DigitalInput for DigitalSignature<S> {
    fn current_state(&self, phase: Phase) -> ButtonState {
        self.states.get(phase)
    }
}

/// Virtual button looked up by string id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSource {
    pub input_id: String,
}

impl DigitalSource for ButtonSource {
    fn is_down(&self, backend: &dyn InputBackend) -> bool {
        backend.button(&self.input_id)
    }
}

/// Keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySource {
    pub key: KeyCode,
}

impl DigitalSource for KeySource {
    fn is_down(&self, backend: &dyn InputBackend) -> bool {
        backend.key(self.key)
    }
}

/// Pointer (mouse) button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickSource {
    pub button: PointerButton,
}

impl DigitalSource for ClickSource {
    fn is_down(&self, backend: &dyn InputBackend) -> bool {
        backend.pointer_button(self.button)
    }
}

pub type ButtonSignature = DigitalSignature<ButtonSource>;
pub type KeyboardSignature = DigitalSignature<KeySource>;
pub type ClickSignature = DigitalSignature<ClickSource>;

impl DigitalSignature<ButtonSource> {
    pub fn new(name: impl Into<String>, input_id: impl Into<String>) -> Self {
        Self::from_source(SignatureId::new(name), ButtonSource::new(input_id))
    }

    pub fn with_hash(
        name: impl Into<String>,
        hash: SignatureHash,
        input_id: impl Into<String>,
    ) -> Self {
        Self::from_source(
            SignatureId::with_hash(name, hash),
            ButtonSource::new(input_id),
        )
    }

    pub fn input_id(&self) -> &str {
        &self.source.input_id
    }

    pub fn set_input_id(&mut self, input_id: impl Into<String>) {
        self.source.input_id = input_id.into();
    }
}

impl ButtonSource {
    pub fn new(input_id: impl Into<String>) -> Self {
        Self {
            input_id: input_id.into(),
        }
    }
}

impl DigitalSignature<KeySource> {
    pub fn new(name: impl Into<String>, key: KeyCode) -> Self {
        Self::from_source(SignatureId::new(name), KeySource { key })
    }

    pub fn with_hash(name: impl Into<String>, hash: SignatureHash, key: KeyCode) -> Self {
        Self::from_source(SignatureId::with_hash(name, hash), KeySource { key })
    }

    pub fn key(&self) -> KeyCode {
        self.source.key
    }

    pub fn set_key(&mut self, key: KeyCode) {
        self.source.key = key;
    }
}

impl DigitalSignature<ClickSource> {
    pub fn new(name: impl Into<String>, button: PointerButton) -> Self {
        Self::from_source(SignatureId::new(name), ClickSource { button })
    }

    pub fn with_hash(name: impl Into<String>, hash: SignatureHash, button: PointerButton) -> Self {
        Self::from_source(SignatureId::with_hash(name, hash), ClickSource { button })
    }

    pub fn pointer_button(&self) -> PointerButton {
        self.source.button
    }

    pub fn set_pointer_button(&mut self, button: PointerButton) {
        self.source.button = button;
    }
}
