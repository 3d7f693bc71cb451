//! Update phases and per-phase state slots.
//!
//! A host loop runs two independently clocked passes: the variable-rate pass once per
//! rendered frame, and the fixed-rate pass zero or more times in between. Anything that
//! carries sample history keeps one slot per phase so the two histories never mix.

/// Which update pass is sampling or reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum Phase {
    /// Once per rendered frame, at a non-fixed interval.
    Variable,
    /// At a fixed simulated-time interval, zero or more times per variable pass.
    Fixed,
}

impl Phase {
    /// Both phases in the order a host typically runs them.
    pub const ALL: [Phase; 2] = [Phase::Variable, Phase::Fixed];

    /// Short label used in logs and replay output.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Variable => "variable",
            Phase::Fixed => "fixed",
        }
    }
}

/// Two independent copies of a value, one per [`Phase`].
///
/// Reading or updating one slot never touches the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseCache<T> {
    variable: T,
    fixed: T,
}

impl<T: Copy> PhaseCache<T> {
    pub fn new(initial: T) -> Self {
        Self {
            variable: initial,
            fixed: initial,
        }
    }

    /// Last value stored for `phase`.
    pub fn get(&self, phase: Phase) -> T {
        match phase {
            Phase::Variable => self.variable,
            Phase::Fixed => self.fixed,
        }
    }

    /// Replace the slot for `phase` with `f(previous)` and return the new value.
    pub fn update(&mut self, phase: Phase, f: impl FnOnce(T) -> T) -> T {
        let slot = match phase {
            Phase::Variable => &mut self.variable,
            Phase::Fixed => &mut self.fixed,
        };
        *slot = f(*slot);
        *slot
    }

    /// Overwrite both slots.
    pub fn reset(&mut self, value: T) {
        self.variable = value;
        self.fixed = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_touches_only_the_requested_slot() {
        let mut cache = PhaseCache::new(0u32);

        cache.update(Phase::Variable, |v| v + 1);
        cache.update(Phase::Variable, |v| v + 1);
        assert_eq!(cache.get(Phase::Variable), 2);
        assert_eq!(cache.get(Phase::Fixed), 0);

        let fixed = cache.update(Phase::Fixed, |v| v + 10);
        assert_eq!(fixed, 10);
        assert_eq!(cache.get(Phase::Variable), 2);
    }

    #[test]
    fn reset_overwrites_both_slots() {
        let mut cache = PhaseCache::new(5i32);
        cache.update(Phase::Fixed, |_| 9);
        cache.reset(0);
        assert_eq!(cache, PhaseCache::default());
    }

    #[test]
    fn phase_order_runs_variable_first() {
        assert_eq!(Phase::ALL, [Phase::Variable, Phase::Fixed]);
        assert_eq!(Phase::Fixed.label(), "fixed");
    }
}
