use crate::error::RankError;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Exponential decay constant `λ`: a commit `age` seconds older than the
/// newest commit is weighted `exp(-λ·age)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayRate(f64);

impl DecayRate {
    /// Rate at which a commit `half_life_days` old weighs `target_weight`.
    pub fn new(target_weight: f64, half_life_days: u32) -> Result<Self, RankError> {
        if !(target_weight > 0.0 && target_weight < 1.0) {
            return Err(RankError::InvalidConfiguration(format!(
                "decay.target_weight must be strictly between 0.0 and 1.0 (found {target_weight})"
            )));
        }
        if half_life_days == 0 {
            return Err(RankError::InvalidConfiguration(
                "decay.half_life_days must be greater than 0".to_string(),
            ));
        }
        let period_secs = f64::from(half_life_days) * SECONDS_PER_DAY;
        Ok(Self(-target_weight.ln() / period_secs))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Weight in `(0, 1]` for a commit `age_secs` older than the newest one.
    ///
    /// Ages old enough to underflow `exp` are floored at `f64::MIN_POSITIVE`.
    pub fn weight(self, age_secs: u64) -> f64 {
        (-self.0 * age_secs as f64).exp().max(f64::MIN_POSITIVE)
    }

    pub fn weight_at_days(self, age_days: f64) -> f64 {
        (-self.0 * age_days * SECONDS_PER_DAY)
            .exp()
            .max(f64::MIN_POSITIVE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_rate_matches_reference_value() {
        let rate = DecayRate::new(0.3, 30).expect("defaults are valid");
        let expected = -(0.3f64).ln() / 2_592_000.0;
        assert_eq!(rate.value(), expected);
        assert!((rate.value() - 4.6425e-7).abs() < 1e-10);
    }

    #[test]
    fn weight_at_period_equals_target_weight() {
        let rate = DecayRate::new(0.3, 30).expect("defaults are valid");
        let weight = rate.weight(30 * 86_400);
        assert!((weight - 0.3).abs() < 1e-12);

        let rate = DecayRate::new(0.5, 7).expect("half-life config is valid");
        assert!((rate.weight_at_days(7.0) - 0.5).abs() < 1e-12);
        assert!((rate.weight_at_days(14.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn weight_is_one_only_at_age_zero() {
        let rate = DecayRate::new(0.3, 30).expect("defaults are valid");
        assert_eq!(rate.weight(0), 1.0);
        assert!(rate.weight(1) < 1.0);
        assert!(rate.weight(1) > 0.0);
    }

    #[test]
    fn weight_stays_positive_and_decreasing() {
        let rate = DecayRate::new(0.3, 30).expect("defaults are valid");
        let mut previous = rate.weight(0);
        for days in [1u64, 10, 100, 365] {
            let weight = rate.weight(days * 86_400);
            assert!(weight > 0.0);
            assert!(weight < previous);
            previous = weight;
        }
    }

    #[test]
    fn very_old_commits_keep_a_positive_weight() {
        let rate = DecayRate::new(0.3, 1).expect("one day period is valid");
        let weight = rate.weight(2 * 365 * 86_400);
        assert!(weight > 0.0);
        assert_eq!(weight, f64::MIN_POSITIVE);
        assert!(rate.weight(u64::MAX) > 0.0);
        assert!(rate.weight_at_days(10_000.0) > 0.0);
    }

    #[test]
    fn rejects_invalid_inputs() {
        for weight in [0.0, 1.0, -0.5, 2.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                DecayRate::new(weight, 30),
                Err(RankError::InvalidConfiguration(_))
            ));
        }
        assert!(matches!(
            DecayRate::new(0.3, 0),
            Err(RankError::InvalidConfiguration(_))
        ));
    }
}
