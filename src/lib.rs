//! # input-signals - Stable Input Signals from Per-Tick Polling
//!
//! Turns raw, noisy input polling (digital buttons, analog axes, pointer position) into
//! signals a game or simulation can consume directly.
//!
//! ## Features
//!
//! - **Edge Detection**: Buttons classified into `Down` / `Held` / `Released` / `None`
//! - **Dual-Phase History**: Independent state for the variable-rate and fixed-rate passes
//! - **Dead Zones**: Hard-clip or rescaled cutoff for single axes, per-axis plus radial
//!   cutoff for sticks
//! - **Button Sticks**: Keyboard/button driven sticks normalized to unit length
//!
//! ## Architecture
//!
//! - [`engine`] - Pure edge-detection and dead-zone functions
//! - [`phase`] - Update phases and per-phase slots
//! - [`backend`] - Raw polling contract and a scripted backend
//! - [`signature`] - Named signatures binding one raw source each
//! - [`shared`] - Digital signatures sampled from several threads
//! - `config` - Tuning profiles and recorded traces (feature `config`)
//! - [`error`] - Centralized error types and handling
//!
//! ## Example
//!
//! ```
//! use input_signals::{ButtonSignature, ButtonState, DigitalInput, InputSignature, Phase};
//! use input_signals::backend::ScriptedBackend;
//!
//! let mut fire = ButtonSignature::new("Fire", "Fire");
//! let backend = ScriptedBackend::new().press("Fire");
//!
//! fire.sample(&backend, Phase::Variable);
//! assert_eq!(fire.current_state(Phase::Variable), ButtonState::Down);
//! assert_eq!(fire.current_state(Phase::Fixed), ButtonState::None);
//! ```

// Core modules
pub mod engine;
pub mod error;
pub mod phase;

// Raw input and signatures
pub mod backend;
pub mod shared;
pub mod signature;

#[cfg(feature = "config")]
pub mod config;

// Re-export commonly used types for convenience
pub use error::{Result, SignalError};

// Public API surface for external usage
pub use backend::{InputBackend, KeyCode, PointerButton};
pub use engine::{ButtonState, CutoffPolicy};
pub use phase::Phase;
pub use shared::SharedDigitalSignature;
pub use signature::{
    AxisButtonSignature, AxisConsideration, AxisSignature, ButtonSignature, ClickSignature,
    CursorSignature, DigitalInput, DualAxisSignature, InputSignature, KeyboardSignature,
    ScalarInput, SignalValue, SignatureKind, VectorInput,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
