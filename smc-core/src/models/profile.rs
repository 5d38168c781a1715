/// A per-period parameter value.
///
/// Catalog data may specify a quantity either as a single number that holds
/// for every period, or as an explicit sequence with exactly one entry per
/// period of the horizon. The serde representation is untagged, so a JSON
/// field accepts `number | sequence<number>` directly.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Profile {
    /// One value applying to every period
    Fixed(f64),
    /// One value per period, in period order
    PerPeriod(Vec<f64>),
}

impl Profile {
    /// The value in effect at the given period.
    ///
    /// Panics if the period is out of range for a per-period sequence; the
    /// scenario validation guarantees this cannot happen for a validated
    /// scenario and `period < horizon`.
    pub fn at(&self, period: usize) -> f64 {
        match self {
            Self::Fixed(value) => *value,
            Self::PerPeriod(values) => values[period],
        }
    }

    /// Check that this profile is usable for a horizon of the given length,
    /// returning the offending sequence length otherwise.
    pub fn check_horizon(&self, horizon: usize) -> Result<(), usize> {
        match self {
            Self::Fixed(_) => Ok(()),
            Self::PerPeriod(values) if values.len() == horizon => Ok(()),
            Self::PerPeriod(values) => Err(values.len()),
        }
    }

    /// The smallest value appearing anywhere in the profile.
    pub fn min_value(&self) -> f64 {
        match self {
            Self::Fixed(value) => *value,
            Self::PerPeriod(values) => values.iter().copied().fold(f64::INFINITY, f64::min),
        }
    }
}

impl From<f64> for Profile {
    fn from(value: f64) -> Self {
        Self::Fixed(value)
    }
}

impl From<Vec<f64>> for Profile {
    fn from(values: Vec<f64>) -> Self {
        Self::PerPeriod(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_applies_everywhere() {
        let profile = Profile::from(42.0);
        assert_eq!(profile.at(0), 42.0);
        assert_eq!(profile.at(23), 42.0);
        assert!(profile.check_horizon(1).is_ok());
        assert!(profile.check_horizon(24).is_ok());
    }

    #[test]
    fn sequence_length_is_enforced() {
        let profile = Profile::from(vec![1.0, 2.0, 3.0]);
        assert_eq!(profile.at(1), 2.0);
        assert!(profile.check_horizon(3).is_ok());
        assert_eq!(profile.check_horizon(24), Err(3));
    }

    #[test]
    fn min_value_scans_the_sequence() {
        assert_eq!(Profile::from(5.0).min_value(), 5.0);
        assert_eq!(Profile::from(vec![3.0, -1.0, 2.0]).min_value(), -1.0);
    }

    #[test]
    fn untagged_json() {
        let fixed: Profile = serde_json::from_str("100.0").unwrap();
        assert_eq!(fixed, Profile::Fixed(100.0));

        let series: Profile = serde_json::from_str("[1.0, 2.0]").unwrap();
        assert_eq!(series, Profile::PerPeriod(vec![1.0, 2.0]));
    }
}
