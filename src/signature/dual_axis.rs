//! Two analog axes conditioned together, joystick style.

use crate::backend::InputBackend;
use crate::engine::{cutoff_dual_axis, normalize_button_vector, CutoffPolicy};
use crate::phase::Phase;
use crate::signature::{
    tuned_dead_zone, InputSignature, SignalValue, SignatureHash, SignatureId, SignatureKind,
    VectorInput,
};
use glam::Vec2;

/// Stick built from an x axis id and a y axis id.
///
/// Each sample reads both axes, optionally clamps button-sourced diagonals to unit
/// length, then runs the per-axis and radial dead zones. Sampled on the variable-rate
/// phase only.
#[derive(Debug, Clone)]
pub struct DualAxisSignature {
    id: SignatureId,
    x_axis_id: String,
    y_axis_id: String,
    axle_dead_zone: f32,
    axle_cutoff: CutoffPolicy,
    radial_dead_zone: f32,
    radial_cutoff: CutoffPolicy,
    radial_normalize_button_input: bool,
    current: Vec2,
}

impl DualAxisSignature {
    pub fn new(
        name: impl Into<String>,
        x_axis_id: impl Into<String>,
        y_axis_id: impl Into<String>,
    ) -> Self {
        Self::from_id(SignatureId::new(name), x_axis_id.into(), y_axis_id.into())
    }

    pub fn with_hash(
        name: impl Into<String>,
        hash: SignatureHash,
        x_axis_id: impl Into<String>,
        y_axis_id: impl Into<String>,
    ) -> Self {
        Self::from_id(
            SignatureId::with_hash(name, hash),
            x_axis_id.into(),
            y_axis_id.into(),
        )
    }

    fn from_id(id: SignatureId, x_axis_id: String, y_axis_id: String) -> Self {
        Self {
            id,
            x_axis_id,
            y_axis_id,
            axle_dead_zone: 0.0,
            axle_cutoff: CutoffPolicy::default(),
            radial_dead_zone: 0.0,
            radial_cutoff: CutoffPolicy::default(),
            radial_normalize_button_input: false,
            current: Vec2::ZERO,
        }
    }

    pub fn x_axis_id(&self) -> &str {
        &self.x_axis_id
    }

    pub fn set_x_axis_id(&mut self, id: impl Into<String>) {
        self.x_axis_id = id.into();
    }

    pub fn y_axis_id(&self) -> &str {
        &self.y_axis_id
    }

    pub fn set_y_axis_id(&mut self, id: impl Into<String>) {
        self.y_axis_id = id.into();
    }

    pub fn axle_dead_zone(&self) -> f32 {
        self.axle_dead_zone
    }

    pub fn set_axle_dead_zone(&mut self, dead_zone: f32) {
        self.axle_dead_zone = tuned_dead_zone(&self.id, "axle_dead_zone", dead_zone);
    }

    pub fn axle_cutoff(&self) -> CutoffPolicy {
        self.axle_cutoff
    }

    pub fn set_axle_cutoff(&mut self, cutoff: CutoffPolicy) {
        self.axle_cutoff = cutoff;
    }

    pub fn radial_dead_zone(&self) -> f32 {
        self.radial_dead_zone
    }

    pub fn set_radial_dead_zone(&mut self, dead_zone: f32) {
        self.radial_dead_zone = tuned_dead_zone(&self.id, "radial_dead_zone", dead_zone);
    }

    pub fn radial_cutoff(&self) -> CutoffPolicy {
        self.radial_cutoff
    }

    pub fn set_radial_cutoff(&mut self, cutoff: CutoffPolicy) {
        self.radial_cutoff = cutoff;
    }

    pub fn radial_normalize_button_input(&self) -> bool {
        self.radial_normalize_button_input
    }

    /// Keep diagonals from keyboard/button driven axes at the same speed as cardinals.
    pub fn set_radial_normalize_button_input(&mut self, normalize: bool) {
        self.radial_normalize_button_input = normalize;
    }
}

impl InputSignature for DualAxisSignature {
    fn id(&self) -> &SignatureId {
        &self.id
    }

    fn kind(&self) -> SignatureKind {
        SignatureKind::VectorAnalog
    }

    fn sample(&mut self, backend: &dyn InputBackend, phase: Phase) {
        if phase == Phase::Fixed {
            return;
        }

        let mut value = Vec2::new(backend.axis(&self.x_axis_id), backend.axis(&self.y_axis_id));
        if self.radial_normalize_button_input
            && (backend.button(&self.x_axis_id) || backend.button(&self.y_axis_id))
        {
            value = normalize_button_vector(value);
        }

        self.current = cutoff_dual_axis(
            value,
            self.axle_dead_zone,
            self.axle_cutoff,
            self.radial_dead_zone,
            self.radial_cutoff,
        );
    }

    fn current(&self, _phase: Phase) -> SignalValue {
        SignalValue::DualAxis(self.current)
    }
}

impl VectorInput for DualAxisSignature {
    fn current_state(&self) -> Vec2 {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ScriptedBackend;

    fn stick() -> DualAxisSignature {
        DualAxisSignature::new("Move", "Horizontal", "Vertical")
    }

    #[test]
    fn axle_pass_zeroes_small_component() {
        let backend = ScriptedBackend::new()
            .set_axis("Horizontal", 0.1)
            .set_axis("Vertical", 0.9);
        let mut movement = stick();
        movement.set_axle_dead_zone(0.2);
        movement.set_radial_dead_zone(0.0);

        movement.sample(&backend, Phase::Variable);
        assert_eq!(movement.current_state(), Vec2::new(0.0, 0.9));
    }

    #[test]
    fn radial_dead_zone_applies_to_magnitude() {
        let backend = ScriptedBackend::new()
            .set_axis("Horizontal", 0.15)
            .set_axis("Vertical", 0.15);
        let mut movement = stick();
        movement.set_radial_dead_zone(0.25);

        movement.sample(&backend, Phase::Variable);
        assert_eq!(movement.current_state(), Vec2::ZERO);
    }

    #[test]
    fn button_diagonals_are_normalized_when_enabled() {
        let backend = ScriptedBackend::new()
            .press("Horizontal")
            .press("Vertical")
            .set_axis("Horizontal", 1.0)
            .set_axis("Vertical", 1.0);

        let mut raw = stick();
        raw.sample(&backend, Phase::Variable);
        assert_eq!(raw.current_state(), Vec2::new(1.0, 1.0));

        let mut normalized = stick();
        normalized.set_radial_normalize_button_input(true);
        normalized.sample(&backend, Phase::Variable);
        assert!((normalized.current_state().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn analog_diagonals_are_not_normalized() {
        // No button reported for either id, so the stick is treated as truly analog.
        let backend = ScriptedBackend::new()
            .set_axis("Horizontal", 1.0)
            .set_axis("Vertical", 1.0);
        let mut movement = stick();
        movement.set_radial_normalize_button_input(true);

        movement.sample(&backend, Phase::Variable);
        assert_eq!(movement.current_state(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn fixed_phase_keeps_last_value() {
        let mut backend = ScriptedBackend::new().set_axis("Horizontal", -0.5);
        let mut movement = stick();
        movement.sample(&backend, Phase::Variable);

        backend.set_axis_value("Horizontal", 0.9);
        movement.sample(&backend, Phase::Fixed);
        assert_eq!(
            movement.current(Phase::Fixed),
            SignalValue::DualAxis(Vec2::new(-0.5, 0.0))
        );
    }

    #[test]
    fn axis_ids_can_be_rebound() {
        let backend = ScriptedBackend::new().set_axis("RightX", 0.5);
        let mut look = DualAxisSignature::with_hash("Look", 11, "LeftX", "LeftY");
        look.set_x_axis_id("RightX");
        look.set_y_axis_id("RightY");

        look.sample(&backend, Phase::Variable);
        assert_eq!(look.x_axis_id(), "RightX");
        assert_eq!(look.current_state(), Vec2::new(0.5, 0.0));
        assert_eq!(look.kind(), SignatureKind::VectorAnalog);
    }
}
