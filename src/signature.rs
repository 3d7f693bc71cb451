//! Input signatures: named units bound to one raw input source.
//!
//! Every signature is sampled by the host once per phase and caches the conditioned
//! result until the next sample. Reads are pure and never poll the backend.
//!
//! Each concrete signature implements [`InputSignature`] plus exactly one capability:
//!
//! - [`DigitalInput`] - button lifecycle, one history per [`Phase`]
//! - [`ScalarInput`] - dead-zone conditioned single axis
//! - [`VectorInput`] - two-axis value or pointer position
//!
//! Digital signatures are edge sensitive: sampling the same phase twice in one frame
//! consumes an extra transition, so the host must sample each phase exactly once.

pub mod axis;
pub mod axis_button;
pub mod cursor;
pub mod digital;
pub mod dual_axis;

use crate::backend::InputBackend;
use crate::engine::{sanitize_dead_zone, ButtonState};
use crate::phase::Phase;
use glam::Vec2;

pub use axis::AxisSignature;
pub use axis_button::{AxisButtonSignature, AxisButtonSource, AxisConsideration};
pub use cursor::CursorSignature;
pub use digital::{
    ButtonSignature, ButtonSource, ClickSignature, ClickSource, DigitalSignature, DigitalSource,
    KeySource, KeyboardSignature,
};
pub use dual_axis::DualAxisSignature;

/// Numeric identity used as a registry key.
pub type SignatureHash = u64;

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

/// Stable hash of a signature name (FNV-1a, 64 bit).
///
/// Identical across runs and platforms, unlike `std`'s randomly seeded hasher.
pub fn hash_name(name: &str) -> SignatureHash {
    let mut state = FNV_OFFSET;
    for b in name.as_bytes() {
        state ^= *b as u64;
        state = state.wrapping_mul(FNV_PRIME);
    }
    state
}

/// Immutable name and hash of a signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureId {
    name: String,
    hash: SignatureHash,
}

impl SignatureId {
    /// Identity with the hash derived from `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let hash = hash_name(&name);
        Self { name, hash }
    }

    /// Identity with a precomputed hash.
    pub fn with_hash(name: impl Into<String>, hash: SignatureHash) -> Self {
        Self {
            name: name.into(),
            hash,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hash(&self) -> SignatureHash {
        self.hash
    }
}

/// Which capability a signature exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureKind {
    Digital,
    ScalarAnalog,
    VectorAnalog,
}

/// Type-erased cached value of any signature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SignalValue {
    Button(ButtonState),
    Axis(f32),
    DualAxis(Vec2),
}

impl SignalValue {
    pub fn as_button(self) -> Option<ButtonState> {
        match self {
            SignalValue::Button(state) => Some(state),
            _ => None,
        }
    }

    pub fn as_axis(self) -> Option<f32> {
        match self {
            SignalValue::Axis(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_dual_axis(self) -> Option<Vec2> {
        match self {
            SignalValue::DualAxis(value) => Some(value),
            _ => None,
        }
    }
}

impl std::fmt::Display for SignalValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignalValue::Button(state) => write!(f, "{state:?}"),
            SignalValue::Axis(value) => write!(f, "{value:.3}"),
            SignalValue::DualAxis(value) => write!(f, "({:.3}, {:.3})", value.x, value.y),
        }
    }
}

/// Shared contract of every signature.
pub trait InputSignature {
    fn id(&self) -> &SignatureId;

    fn name(&self) -> &str {
        self.id().name()
    }

    fn hash(&self) -> SignatureHash {
        self.id().hash()
    }

    fn kind(&self) -> SignatureKind;

    /// Pull raw values from `backend` and advance the cached state for `phase` only.
    fn sample(&mut self, backend: &dyn InputBackend, phase: Phase);

    /// Cached value as of the last sample. Analog signatures ignore `phase`.
    fn current(&self, phase: Phase) -> SignalValue;
}

/// Signatures that produce a [`ButtonState`].
pub trait DigitalInput: InputSignature {
    /// State as of the last sample taken in `phase`.
    fn current_state(&self, phase: Phase) -> ButtonState;
}

/// Signatures that produce a single conditioned axis.
pub trait ScalarInput: InputSignature {
    fn current_state(&self) -> f32;
}

/// Signatures that produce a two-component value.
pub trait VectorInput: InputSignature {
    fn current_state(&self) -> Vec2;
}

/// Clamp a tuning value into the usable dead-zone range, warning when it had to move.
pub(crate) fn tuned_dead_zone(signature: &SignatureId, field: &str, value: f32) -> f32 {
    let sanitized = sanitize_dead_zone(value);
    if sanitized != value {
        log::warn!(
            "signature '{}': {} {} outside [0, 1), using {}",
            signature.name(),
            field,
            value,
            sanitized
        );
    }
    sanitized
}
