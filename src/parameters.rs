use std::ops::RangeInclusive;

pub const DEFAULT_OTE: u8 = 20;
pub const DEFAULT_CONSUMPTION_RATE: f64 = 0.1;
pub const DEFAULT_INITIAL_DO: f64 = 2.0;

pub const OTE_RANGE: RangeInclusive<u8> = 0..=100;
pub const CONSUMPTION_RATE_RANGE: RangeInclusive<f64> = 0.0..=1.0;
pub const INITIAL_DO_RANGE: RangeInclusive<f64> = 0.0..=9.0;

fn clamp_to_range(value: f64, range: &RangeInclusive<f64>, default: f64) -> f64 {
    if value.is_nan() {
        return default;
    }
    value.clamp(*range.start(), *range.end())
}

/// Operating parameters for one aeration tank run. Values are clamped
/// into their admissible ranges on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AerationParameters {
    ote: u8,
    consumption_rate: f64,
    initial_do: f64,
}

impl AerationParameters {
    pub fn new(ote: u8, consumption_rate: f64, initial_do: f64) -> Self {
        Self {
            ote: ote.min(*OTE_RANGE.end()),
            consumption_rate: clamp_to_range(
                consumption_rate,
                &CONSUMPTION_RATE_RANGE,
                DEFAULT_CONSUMPTION_RATE,
            ),
            initial_do: clamp_to_range(
                initial_do,
                &INITIAL_DO_RANGE,
                DEFAULT_INITIAL_DO,
            ),
        }
    }

    /// Oxygen transfer efficiency, in percent.
    pub fn ote(&self) -> u8 {
        self.ote
    }

    /// Oxygen transfer efficiency as the fraction used by the simulator.
    pub fn otr(&self) -> f64 {
        self.ote as f64 / 100.0
    }

    pub fn consumption_rate(&self) -> f64 {
        self.consumption_rate
    }

    pub fn initial_do(&self) -> f64 {
        self.initial_do
    }
}

impl Default for AerationParameters {
    fn default() -> Self {
        Self::new(DEFAULT_OTE, DEFAULT_CONSUMPTION_RATE, DEFAULT_INITIAL_DO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let params = AerationParameters::default();
        assert_eq!(params.ote(), 20);
        assert_eq!(params.otr(), 0.2);
        assert_eq!(params.consumption_rate(), 0.1);
        assert_eq!(params.initial_do(), 2.0);
    }

    #[test]
    fn test_parameters_within_range_are_kept() {
        let params = AerationParameters::new(55, 0.75, 8.5);
        assert_eq!(params.ote(), 55);
        assert_eq!(params.otr(), 0.55);
        assert_eq!(params.consumption_rate(), 0.75);
        assert_eq!(params.initial_do(), 8.5);
    }

    #[test]
    fn test_parameters_are_clamped() {
        let params = AerationParameters::new(250, 3.0, -1.0);
        assert_eq!(params.ote(), 100);
        assert_eq!(params.otr(), 1.0);
        assert_eq!(params.consumption_rate(), 1.0);
        assert_eq!(params.initial_do(), 0.0);

        let params = AerationParameters::new(0, -0.5, 12.0);
        assert_eq!(params.otr(), 0.0);
        assert_eq!(params.consumption_rate(), 0.0);
        assert_eq!(params.initial_do(), 9.0);
    }

    #[test]
    fn test_nan_parameters_fall_back_to_defaults() {
        let params = AerationParameters::new(20, f64::NAN, f64::NAN);
        assert_eq!(params.consumption_rate(), DEFAULT_CONSUMPTION_RATE);
        assert_eq!(params.initial_do(), DEFAULT_INITIAL_DO);
    }
}
