//! Controller-owned calculator state.
//!
//! The state object is mutated only by the calculator controller in response
//! to validated input events; nothing else holds a reference to it.

use shared::CalculatorConfig;

/// Which tip percentage is in effect: a preset button or a custom value.
///
/// Exactly one preset is highlighted at a time, or none while a custom value
/// is active; that invariant falls out of this being a single enum value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TipSelection {
    Preset(f64),
    Custom(f64),
}

impl TipSelection {
    pub fn percentage(&self) -> f64 {
        match self {
            TipSelection::Preset(p) | TipSelection::Custom(p) => *p,
        }
    }

    /// Whether the preset button carrying `value` should render highlighted.
    pub fn is_preset(&self, value: f64) -> bool {
        matches!(self, TipSelection::Preset(p) if *p == value)
    }
}

/// UI state owned by the calculator controller.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    pub bill_amount: f64,
    pub tip: TipSelection,
    pub split_count: u32,
}

impl Default for CalculatorState {
    fn default() -> Self {
        let config = CalculatorConfig::default();
        Self {
            bill_amount: 0.0,
            tip: TipSelection::Preset(config.default_tip_percentage),
            split_count: config.default_split_count,
        }
    }
}

impl CalculatorState {
    pub fn tip_percentage(&self) -> f64 {
        self.tip.percentage()
    }

    /// Selecting a preset supersedes any custom value.
    pub fn select_preset(&mut self, percentage: f64) {
        self.tip = TipSelection::Preset(percentage);
    }

    /// A custom value deselects every preset.
    pub fn set_custom_tip(&mut self, percentage: f64) {
        self.tip = TipSelection::Custom(percentage);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = CalculatorState::default();

        assert_eq!(state.bill_amount, 0.0);
        assert_eq!(state.split_count, 1);
        assert_eq!(state.tip_percentage(), 18.0);
        assert!(state.tip.is_preset(18.0));
    }

    #[test]
    fn test_select_preset_is_exclusive() {
        let mut state = CalculatorState::default();

        state.select_preset(20.0);
        assert!(state.tip.is_preset(20.0));
        assert!(!state.tip.is_preset(18.0));
        assert_eq!(state.tip_percentage(), 20.0);
    }

    #[test]
    fn test_custom_tip_deselects_presets() {
        let mut state = CalculatorState::default();

        state.set_custom_tip(22.5);
        assert_eq!(state.tip_percentage(), 22.5);
        for preset in [10.0, 15.0, 18.0, 20.0, 25.0] {
            assert!(!state.tip.is_preset(preset));
        }
    }

    #[test]
    fn test_preset_supersedes_custom() {
        let mut state = CalculatorState::default();

        state.set_custom_tip(33.0);
        state.select_preset(15.0);
        assert!(state.tip.is_preset(15.0));
        assert_eq!(state.tip_percentage(), 15.0);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = CalculatorState::default();
        state.bill_amount = 84.5;
        state.set_custom_tip(33.0);
        state.split_count = 6;

        state.reset();

        assert_eq!(state.bill_amount, 0.0);
        assert_eq!(state.split_count, 1);
        assert!(state.tip.is_preset(18.0));
    }
}
