use serde::{Deserialize, Serialize};

use crate::error::LimitsError;

pub const DEFAULT_MAX_RATIO: f64 = 0.49;
pub const DEFAULT_PRUDENTIAL_FACTOR: f64 = 0.95;
pub const DEFAULT_ALERT_FACTOR: f64 = 0.90;

/// Ratios that turn a revenue figure into the three expenditure ceilings.
///
/// `max_ratio` is applied to revenue; the prudential and alert factors are
/// applied to the resulting maximum limit. Construction through [`LimitConfig::new`]
/// keeps every ratio inside `[0, 1]`, which is what guarantees
/// `alert <= prudential <= max` for the derived limits whenever
/// `alert_factor <= prudential_factor`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLimitConfig")]
pub struct LimitConfig {
    max_ratio: f64,
    prudential_factor: f64,
    alert_factor: f64,
}

impl LimitConfig {
    pub fn new(
        max_ratio: f64,
        prudential_factor: f64,
        alert_factor: f64,
    ) -> Result<Self, LimitsError> {
        if !is_unit_fraction(max_ratio) {
            return Err(LimitsError::InvalidMaxRatio(max_ratio));
        }
        if !is_unit_fraction(prudential_factor) {
            return Err(LimitsError::InvalidPrudentialFactor(prudential_factor));
        }
        if !is_unit_fraction(alert_factor) {
            return Err(LimitsError::InvalidAlertFactor(alert_factor));
        }

        Ok(Self {
            max_ratio,
            prudential_factor,
            alert_factor,
        })
    }

    pub fn max_ratio(&self) -> f64 {
        self.max_ratio
    }

    pub fn prudential_factor(&self) -> f64 {
        self.prudential_factor
    }

    pub fn alert_factor(&self) -> f64 {
        self.alert_factor
    }
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_ratio: DEFAULT_MAX_RATIO,
            prudential_factor: DEFAULT_PRUDENTIAL_FACTOR,
            alert_factor: DEFAULT_ALERT_FACTOR,
        }
    }
}

#[derive(Deserialize)]
struct RawLimitConfig {
    max_ratio: f64,
    prudential_factor: f64,
    alert_factor: f64,
}

impl TryFrom<RawLimitConfig> for LimitConfig {
    type Error = LimitsError;

    fn try_from(raw: RawLimitConfig) -> Result<Self, Self::Error> {
        Self::new(raw.max_ratio, raw.prudential_factor, raw.alert_factor)
    }
}

fn is_unit_fraction(value: f64) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}

#[cfg(test)]
mod tests {
    use super::LimitConfig;
    use crate::LimitsError;

    #[test]
    fn defaults_follow_statutory_ratios() {
        let config = LimitConfig::default();

        assert_eq!(config.max_ratio(), 0.49);
        assert_eq!(config.prudential_factor(), 0.95);
        assert_eq!(config.alert_factor(), 0.90);
    }

    #[test]
    fn accepts_ratio_bounds() {
        assert!(LimitConfig::new(0.0, 0.0, 0.0).is_ok());
        assert!(LimitConfig::new(1.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn rejects_max_ratio_above_one() {
        let err = LimitConfig::new(1.2, 0.95, 0.9).unwrap_err();
        assert_eq!(err, LimitsError::InvalidMaxRatio(1.2));
    }

    #[test]
    fn rejects_negative_prudential_factor() {
        let err = LimitConfig::new(0.49, -0.1, 0.9).unwrap_err();
        assert_eq!(err, LimitsError::InvalidPrudentialFactor(-0.1));
    }

    #[test]
    fn rejects_non_finite_alert_factor() {
        let err = LimitConfig::new(0.49, 0.95, f64::NAN).unwrap_err();
        assert!(matches!(err, LimitsError::InvalidAlertFactor(value) if value.is_nan()));
    }

    #[test]
    fn deserialization_runs_validation() {
        let ok: LimitConfig = serde_json::from_str(
            r#"{"max_ratio":0.54,"prudential_factor":0.95,"alert_factor":0.9}"#,
        )
        .unwrap();
        assert_eq!(ok.max_ratio(), 0.54);

        let err = serde_json::from_str::<LimitConfig>(
            r#"{"max_ratio":1.5,"prudential_factor":0.95,"alert_factor":0.9}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("max_ratio"));
    }
}
