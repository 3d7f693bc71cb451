//! Dead-zone conditioning for analog values.
//!
//! Scalar values go through [`cutoff_axis`]. Two-axis values go through
//! [`cutoff_dual_axis`], which clips each component first and then the combined
//! magnitude, so a stick resting exactly on one axis is not killed by the radial pass.

use glam::Vec2;

/// Largest dead zone a signature accepts. The usable range is `[0, 1)`.
pub const MAX_DEAD_ZONE: f32 = 1.0 - f32::EPSILON;

/// How values outside the dead zone are mapped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum CutoffPolicy {
    /// Inside the dead zone snaps to 0, outside passes through unchanged.
    #[default]
    HardClip,
    /// Inside the dead zone snaps to 0, outside is rescaled so the dead-zone edge maps to 0
    /// and full deflection maps to 1.
    Scaled,
}

/// Apply a dead zone to a single axis value.
///
/// A negative or NaN dead zone counts as 0. Under [`CutoffPolicy::Scaled`] a dead zone of
/// 1 or more leaves nothing to rescale and the axis is treated as fully dead.
#[must_use]
pub fn cutoff_axis(value: f32, dead_zone: f32, policy: CutoffPolicy) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    let dead_zone = if dead_zone.is_nan() {
        0.0
    } else {
        dead_zone.max(0.0)
    };

    let magnitude = value.abs();
    if magnitude < dead_zone {
        return 0.0;
    }

    match policy {
        CutoffPolicy::HardClip => value,
        CutoffPolicy::Scaled => {
            if dead_zone >= 1.0 {
                return 0.0;
            }
            let scaled = ((magnitude - dead_zone) / (1.0 - dead_zone)).min(1.0);
            scaled.copysign(value)
        }
    }
}

/// Apply a per-axis dead zone, then a radial dead zone on the resulting magnitude.
///
/// Direction is preserved by the radial pass. A vector that is zero after the per-axis
/// pass has no direction and stays zero.
#[must_use]
pub fn cutoff_dual_axis(
    value: Vec2,
    axle_dead_zone: f32,
    axle_policy: CutoffPolicy,
    radial_dead_zone: f32,
    radial_policy: CutoffPolicy,
) -> Vec2 {
    let axled = Vec2::new(
        cutoff_axis(value.x, axle_dead_zone, axle_policy),
        cutoff_axis(value.y, axle_dead_zone, axle_policy),
    );

    let magnitude = axled.length();
    if magnitude == 0.0 || !magnitude.is_finite() {
        return Vec2::ZERO;
    }

    let radial = cutoff_axis(magnitude, radial_dead_zone, radial_policy);
    if radial == magnitude {
        return axled;
    }
    axled * (radial / magnitude)
}

/// Clamp the magnitude of button-sourced stick input to 1.
///
/// Two digital axes report -1/0/1 per component, so diagonals come out at length √2.
#[must_use]
pub fn normalize_button_vector(value: Vec2) -> Vec2 {
    if value.length_squared() > 1.0 {
        value.normalize_or_zero()
    } else {
        value
    }
}

/// Clamp a configured dead zone into `[0, MAX_DEAD_ZONE]`. NaN becomes 0.
#[must_use]
pub fn sanitize_dead_zone(dead_zone: f32) -> f32 {
    if dead_zone.is_nan() {
        0.0
    } else {
        dead_zone.clamp(0.0, MAX_DEAD_ZONE)
    }
}
