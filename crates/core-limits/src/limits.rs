use serde::{Deserialize, Serialize};

use crate::config::LimitConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitTier {
    Max,
    Prudential,
    Alert,
}

impl LimitTier {
    /// Reporting order used by every per-tier result.
    pub const ALL: [LimitTier; 3] = [LimitTier::Max, LimitTier::Prudential, LimitTier::Alert];

    /// Multiplier applied on top of the maximum limit.
    pub fn factor(self, config: &LimitConfig) -> f64 {
        match self {
            Self::Max => 1.0,
            Self::Prudential => config.prudential_factor(),
            Self::Alert => config.alert_factor(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Limits {
    pub max: f64,
    pub prudential: f64,
    pub alert: f64,
}

impl Limits {
    pub fn get(&self, tier: LimitTier) -> f64 {
        match tier {
            LimitTier::Max => self.max,
            LimitTier::Prudential => self.prudential,
            LimitTier::Alert => self.alert,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (LimitTier, f64)> + '_ {
        LimitTier::ALL
            .into_iter()
            .map(move |tier| (tier, self.get(tier)))
    }
}

pub fn compute_limits(revenue: f64, config: &LimitConfig) -> Limits {
    let max = revenue * config.max_ratio();

    Limits {
        max,
        prudential: max * config.prudential_factor(),
        alert: max * config.alert_factor(),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{compute_limits, LimitTier};
    use crate::LimitConfig;

    #[test]
    fn derives_reference_limits_for_one_million_revenue() {
        let limits = compute_limits(1_000_000.0, &LimitConfig::default());

        assert!((limits.max - 490_000.0).abs() < 1e-6);
        assert!((limits.prudential - 465_500.0).abs() < 1e-6);
        assert!((limits.alert - 441_000.0).abs() < 1e-6);
    }

    #[test]
    fn zero_revenue_yields_zero_limits() {
        let limits = compute_limits(0.0, &LimitConfig::default());

        assert_eq!(limits.max, 0.0);
        assert_eq!(limits.prudential, 0.0);
        assert_eq!(limits.alert, 0.0);
    }

    #[test]
    fn iterates_tiers_in_reporting_order() {
        let limits = compute_limits(100.0, &LimitConfig::default());
        let tiers: Vec<LimitTier> = limits.iter().map(|(tier, _)| tier).collect();

        assert_eq!(tiers, LimitTier::ALL.to_vec());
    }

    #[test]
    fn tier_factor_uses_configured_ratios() {
        let config = LimitConfig::new(0.6, 0.8, 0.7).unwrap();

        assert_eq!(LimitTier::Max.factor(&config), 1.0);
        assert_eq!(LimitTier::Prudential.factor(&config), 0.8);
        assert_eq!(LimitTier::Alert.factor(&config), 0.7);
    }

    proptest! {
        #[test]
        fn prop_limits_are_nested(
            revenue in 0.0f64..1e12,
            max_ratio in 0.0f64..=1.0,
            prudential in 0.0f64..=1.0,
            alert_share in 0.0f64..=1.0,
        ) {
            let config = LimitConfig::new(max_ratio, prudential, prudential * alert_share).unwrap();
            let limits = compute_limits(revenue, &config);

            prop_assert!(limits.alert <= limits.prudential);
            prop_assert!(limits.prudential <= limits.max);
        }

        #[test]
        fn prop_limit_derivation_is_pure(revenue in 0.0f64..1e12) {
            let config = LimitConfig::default();
            let first = compute_limits(revenue, &config);
            let second = compute_limits(revenue, &config);

            prop_assert_eq!(first.max.to_bits(), second.max.to_bits());
            prop_assert_eq!(first.prudential.to_bits(), second.prudential.to_bits());
            prop_assert_eq!(first.alert.to_bits(), second.alert.to_bits());
        }
    }
}
