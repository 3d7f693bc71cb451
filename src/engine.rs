//! Pure signal engines shared by every signature.
//!
//! - [`edge`] turns a per-sample boolean into a press/hold/release lifecycle
//! - [`cutoff`] applies dead zones to scalar and two-axis values
//!
//! Neither engine holds state or talks to a backend; signatures feed them raw samples.

pub mod cutoff;
pub mod edge;

pub use cutoff::{
    cutoff_axis, cutoff_dual_axis, normalize_button_vector, sanitize_dead_zone, CutoffPolicy,
    MAX_DEAD_ZONE,
};
pub use edge::{next_state, ButtonState};
