//! Tuning profiles and recorded traces.
//!
//! Only tuning is configurable here (dead zones, cutoff policies, thresholds, flags).
//! Which signatures exist and what they are bound to stays with the host.
//!
//! ```toml
//! [axis]
//! dead_zone = 0.15
//! cutoff = "scaled"
//!
//! [dual_axis]
//! axle_dead_zone = 0.1
//! radial_dead_zone = 0.2
//! radial_cutoff = "scaled"
//! radial_normalize_button_input = true
//!
//! [axis_button]
//! threshold = 0.5
//! consideration = "absolute"
//! ```
//!
//! Out-of-range dead zones are not rejected; the signature setters clamp them.

use crate::backend::{Frame, ScriptedBackend};
use crate::engine::CutoffPolicy;
use crate::error::{Result, SignalError};
use crate::phase::Phase;
use crate::signature::axis_button::DEFAULT_AXIS_BUTTON_THRESHOLD;
use crate::signature::{
    AxisButtonSignature, AxisConsideration, AxisSignature, DualAxisSignature, InputSignature,
    SignalValue,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = "input-signals";
const PROFILE_FILE_NAME: &str = "tuning.toml";

/// Tuning for single-axis signatures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisTuning {
    pub dead_zone: f32,
    pub cutoff: CutoffPolicy,
    pub invert: bool,
}

impl AxisTuning {
    pub fn apply(&self, signature: &mut AxisSignature) {
        signature.set_dead_zone(self.dead_zone);
        signature.set_cutoff(self.cutoff);
        signature.set_invert(self.invert);
    }
}

/// Tuning for dual-axis signatures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DualAxisTuning {
    pub axle_dead_zone: f32,
    pub axle_cutoff: CutoffPolicy,
    pub radial_dead_zone: f32,
    pub radial_cutoff: CutoffPolicy,
    pub radial_normalize_button_input: bool,
}

impl DualAxisTuning {
    pub fn apply(&self, signature: &mut DualAxisSignature) {
        signature.set_axle_dead_zone(self.axle_dead_zone);
        signature.set_axle_cutoff(self.axle_cutoff);
        signature.set_radial_dead_zone(self.radial_dead_zone);
        signature.set_radial_cutoff(self.radial_cutoff);
        signature.set_radial_normalize_button_input(self.radial_normalize_button_input);
    }
}

/// Tuning for axis-as-button signatures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisButtonTuning {
    pub threshold: f32,
    pub consideration: AxisConsideration,
    pub accept_button: bool,
}

impl Default for AxisButtonTuning {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_AXIS_BUTTON_THRESHOLD,
            consideration: AxisConsideration::default(),
            accept_button: false,
        }
    }
}

impl AxisButtonTuning {
    /// Copy the tuning onto `signature`. An explicit `consideration` wins over the profile's.
    pub fn apply(
        &self,
        signature: &mut AxisButtonSignature,
        consideration: Option<AxisConsideration>,
    ) {
        signature.set_threshold(self.threshold);
        signature.set_accept_button(self.accept_button);
        signature.set_consideration(consideration.unwrap_or(self.consideration));
    }
}

/// Tuning defaults applied to newly created signatures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningProfile {
    pub axis: AxisTuning,
    pub dual_axis: DualAxisTuning,
    pub axis_button: AxisButtonTuning,
}

impl TuningProfile {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SignalError::config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SignalError::file_error(format!("Cannot read profile {}", path.display()), e)
        })?;
        let profile = Self::from_toml_str(&contents)?;
        log::debug!("loaded tuning profile from {}", path.display());
        Ok(profile)
    }

    /// `<config_dir>/input-signals/tuning.toml`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(PROFILE_FILE_NAME))
    }

    /// Load the profile at [`default_path`](Self::default_path), or defaults if absent.
    pub fn load_or_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                log::debug!("no tuning profile found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// One recorded host frame: the raw backend state plus how many fixed passes followed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceFrame {
    #[serde(flatten)]
    pub input: Frame,
    #[serde(default = "default_fixed_steps")]
    pub fixed_steps: u32,
}

fn default_fixed_steps() -> u32 {
    1
}

/// Sequence of recorded frames, `[[frame]]` tables in TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(default, rename = "frame")]
    pub frames: Vec<TraceFrame>,
}

impl Trace {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| SignalError::trace(e.message().to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SignalError::file_error(format!("Cannot read trace {}", path.display()), e)
        })?;
        let trace = Self::from_toml_str(&contents)?;
        log::debug!(
            "loaded {} frames from {}",
            trace.frames.len(),
            path.display()
        );
        Ok(trace)
    }

    /// Drive `signatures` through every frame: one variable pass, then `fixed_steps`
    /// fixed passes. Returns one row per signature per frame, in declaration order.
    pub fn replay(self, signatures: &mut [Box<dyn InputSignature>]) -> Vec<ReplayRow> {
        let mut backend = ScriptedBackend::new();
        let mut rows = Vec::with_capacity(self.frames.len() * signatures.len());

        for (index, frame) in self.frames.into_iter().enumerate() {
            backend.load_frame(frame.input);

            for signature in signatures.iter_mut() {
                signature.sample(&backend, Phase::Variable);
            }
            for _ in 0..frame.fixed_steps {
                for signature in signatures.iter_mut() {
                    signature.sample(&backend, Phase::Fixed);
                }
            }

            rows.extend(signatures.iter().map(|signature| ReplayRow {
                frame: index,
                name: signature.name().to_string(),
                variable: signature.current(Phase::Variable),
                fixed: signature.current(Phase::Fixed),
            }));
        }

        rows
    }
}

/// What one signature reported after one replayed frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayRow {
    pub frame: usize,
    pub name: String,
    pub variable: SignalValue,
    pub fixed: SignalValue,
}

impl fmt::Display for ReplayRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>4}  {:<16} variable={:<18} fixed={}",
            self.frame,
            self.name,
            self.variable.to_string(),
            self.fixed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{KeyCode, PointerButton};
    use crate::engine::ButtonState;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_profile_uses_defaults() {
        let profile = TuningProfile::from_toml_str("").unwrap();
        assert_eq!(profile, TuningProfile::default());
        assert_eq!(profile.axis_button.threshold, DEFAULT_AXIS_BUTTON_THRESHOLD);
    }

    #[test]
    fn parses_sections() {
        let profile = TuningProfile::from_toml_str(
            r#"
            [axis]
            dead_zone = 0.15
            cutoff = "scaled"
            invert = true

            [dual_axis]
            axle_dead_zone = 0.1
            radial_dead_zone = 0.2
            radial_cutoff = "scaled"
            radial_normalize_button_input = true

            [axis_button]
            threshold = 0.5
            consideration = "absolute"
            "#,
        )
        .unwrap();

        assert_eq!(profile.axis.dead_zone, 0.15);
        assert_eq!(profile.axis.cutoff, CutoffPolicy::Scaled);
        assert!(profile.axis.invert);
        assert_eq!(profile.dual_axis.axle_cutoff, CutoffPolicy::HardClip);
        assert!(profile.dual_axis.radial_normalize_button_input);
        assert_eq!(
            profile.axis_button.consideration,
            AxisConsideration::Absolute
        );
    }

    #[test]
    fn rejects_unknown_policy() {
        let err = TuningProfile::from_toml_str("[axis]\ncutoff = \"cubic\"\n").unwrap_err();
        assert!(matches!(err, SignalError::ConfigError { .. }));
    }

    #[test]
    fn apply_clamps_out_of_range_dead_zones() {
        let profile = TuningProfile::from_toml_str("[axis]\ndead_zone = 1.5\n").unwrap();
        let mut axis = AxisSignature::new("Horizontal", "Horizontal");
        profile.axis.apply(&mut axis);
        assert!(axis.dead_zone() < 1.0);

        let mut stick = DualAxisSignature::new("Move", "X", "Y");
        let tuning = DualAxisTuning {
            radial_dead_zone: -0.3,
            ..DualAxisTuning::default()
        };
        tuning.apply(&mut stick);
        assert_eq!(stick.radial_dead_zone(), 0.0);
    }

    #[test]
    fn axis_button_explicit_consideration_wins_over_profile() {
        let tuning = AxisButtonTuning {
            threshold: 0.4,
            consideration: AxisConsideration::Negative,
            accept_button: true,
        };
        let mut up = AxisButtonSignature::new("Up", "Vertical", AxisConsideration::Positive);

        tuning.apply(&mut up, Some(AxisConsideration::Absolute));
        assert_eq!(up.threshold(), 0.4);
        assert!(up.accept_button());
        assert_eq!(up.consideration(), AxisConsideration::Absolute);

        tuning.apply(&mut up, None);
        assert_eq!(up.consideration(), AxisConsideration::Negative);
    }

    #[test]
    fn profile_survives_toml_round_trip() {
        let mut profile = TuningProfile::default();
        profile.dual_axis.radial_cutoff = CutoffPolicy::Scaled;
        let text = profile.to_toml_string().unwrap();
        assert_eq!(TuningProfile::from_toml_str(&text).unwrap(), profile);
    }

    #[test]
    fn loads_profile_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[axis_button]\nthreshold = 0.6").unwrap();

        let profile = TuningProfile::load(file.path()).unwrap();
        assert_eq!(profile.axis_button.threshold, 0.6);
    }

    #[test]
    fn missing_profile_is_file_error() {
        let err = TuningProfile::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, SignalError::FileError { .. }));
    }

    #[test]
    fn parses_trace_frames() {
        let trace = Trace::from_toml_str(
            r#"
            [[frame]]

            [[frame]]
            buttons = ["Fire"]
            keys = ["Space", { Char = "w" }]
            pointer_buttons = ["Left"]
            axes = { Horizontal = 0.5 }
            pointer = [10.0, 20.0]
            fixed_steps = 3
            "#,
        )
        .unwrap();

        assert_eq!(trace.frames.len(), 2);
        assert_eq!(trace.frames[0].fixed_steps, 1);
        assert!(trace.frames[0].input.buttons.is_empty());

        let second = &trace.frames[1];
        assert_eq!(second.fixed_steps, 3);
        assert!(second.input.buttons.contains("Fire"));
        assert!(second.input.keys.contains(&KeyCode::Space));
        assert!(second.input.keys.contains(&KeyCode::Char('w')));
        assert!(second.input.pointer_buttons.contains(&PointerButton::Left));
        assert_eq!(second.input.axes.get("Horizontal"), Some(&0.5));
        assert_eq!(second.input.pointer, glam::Vec2::new(10.0, 20.0));
    }

    fn fire_and_steer() -> Vec<Box<dyn InputSignature>> {
        vec![
            Box::new(crate::signature::ButtonSignature::new("Fire", "Fire")),
            Box::new(AxisSignature::new("Steer", "Horizontal")),
        ]
    }

    #[test]
    fn replay_samples_fixed_phase_per_recorded_step() {
        let trace = Trace::from_toml_str(
            r#"
            [[frame]]
            buttons = ["Fire"]
            fixed_steps = 0

            [[frame]]
            buttons = ["Fire"]
            axes = { Horizontal = 0.5 }
            fixed_steps = 3

            [[frame]]
            fixed_steps = 0
            "#,
        )
        .unwrap();
        let mut signatures = fire_and_steer();

        let rows = trace.replay(&mut signatures);
        assert_eq!(rows.len(), 6);

        let fire: Vec<(SignalValue, SignalValue)> = rows
            .iter()
            .filter(|row| row.name == "Fire")
            .map(|row| (row.variable, row.fixed))
            .collect();
        assert_eq!(
            fire,
            vec![
                (
                    SignalValue::Button(ButtonState::Down),
                    SignalValue::Button(ButtonState::None)
                ),
                (
                    SignalValue::Button(ButtonState::Held),
                    SignalValue::Button(ButtonState::Held)
                ),
                (
                    SignalValue::Button(ButtonState::Released),
                    SignalValue::Button(ButtonState::Held)
                ),
            ]
        );

        assert_eq!(rows[3].frame, 1);
        assert_eq!(rows[3].name, "Steer");
        assert_eq!(rows[3].variable, SignalValue::Axis(0.5));
        assert_eq!(rows[3].fixed, SignalValue::Axis(0.5));
    }

    #[test]
    fn replay_with_single_fixed_step_catches_press_edge() {
        let trace = Trace::from_toml_str("[[frame]]\nbuttons = [\"Fire\"]\n").unwrap();
        let mut signatures = fire_and_steer();

        let rows = trace.replay(&mut signatures);
        assert_eq!(rows[0].fixed, SignalValue::Button(ButtonState::Down));
        assert!(rows[0].to_string().starts_with("   0  Fire"));
    }

    #[test]
    fn malformed_trace_is_trace_error() {
        let err = Trace::from_toml_str("[[frame]]\nfixed_steps = \"many\"\n").unwrap_err();
        assert!(matches!(err, SignalError::TraceError { .. }));
    }
}
