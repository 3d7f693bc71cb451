//! Edge detection for digital signals.
//!
//! A button is sampled as a plain boolean once per phase. [`next_state`] folds that
//! sample into the previous [`ButtonState`] so a press shows up as exactly one `Down`,
//! then `Held` for as long as it lasts, then exactly one `Released`.

/// Discrete lifecycle of a digital signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
pub enum ButtonState {
    /// Not pressed, and was not pressed on the previous sample.
    #[default]
    None,
    /// Pressed this sample, was not pressed before (press edge).
    Down,
    /// Pressed this sample and the one before.
    Held,
    /// Not pressed this sample, was pressed before (release edge).
    Released,
}

impl ButtonState {
    /// Advance by one raw sample. Method form of [`next_state`].
    #[must_use]
    #[inline]
    pub fn next(self, raw_down: bool) -> Self {
        next_state(self, raw_down)
    }

    /// State implied by the raw value on the previous and the current sample.
    pub fn from_history(was_down: bool, is_down: bool) -> Self {
        match (was_down, is_down) {
            (false, false) => ButtonState::None,
            (false, true) => ButtonState::Down,
            (true, true) => ButtonState::Held,
            (true, false) => ButtonState::Released,
        }
    }

    /// True for `Down` and `Held`.
    pub fn is_active(self) -> bool {
        matches!(self, ButtonState::Down | ButtonState::Held)
    }

    pub fn just_pressed(self) -> bool {
        self == ButtonState::Down
    }

    pub fn just_released(self) -> bool {
        self == ButtonState::Released
    }

    pub fn is_idle(self) -> bool {
        self == ButtonState::None
    }
}

/// Transition table of the edge detector.
///
/// | previous \ raw | true | false    |
/// |----------------|------|----------|
/// | None           | Down | None     |
/// | Down           | Held | Released |
/// | Held           | Held | Released |
/// | Released       | Down | None     |
#[must_use]
#[inline]
pub fn next_state(previous: ButtonState, raw_down: bool) -> ButtonState {
    ButtonState::from_history(previous.is_active(), raw_down)
}
