use core_limits::{compute_limits, LimitConfig, LimitTier};
use serde::Serialize;

/// Signed headroom between one limit and the expenditure.
///
/// `margin_abs` is negative when the limit is exceeded. `margin_pct` is
/// relative to the limit and `NaN` when the limit is not positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceResult {
    pub tier: LimitTier,
    pub limit: f64,
    pub expenditure: f64,
    pub margin_abs: f64,
    pub margin_pct: f64,
}

impl DistanceResult {
    pub fn is_breached(&self) -> bool {
        self.margin_abs < 0.0
    }
}

pub fn compute_distance(
    revenue: f64,
    expenditure: f64,
    config: &LimitConfig,
) -> [DistanceResult; 3] {
    let limits = compute_limits(revenue, config);

    LimitTier::ALL.map(|tier| {
        let limit = limits.get(tier);
        let margin_abs = limit - expenditure;
        let margin_pct = if limit > 0.0 {
            margin_abs / limit * 100.0
        } else {
            f64::NAN
        };

        DistanceResult {
            tier,
            limit,
            expenditure,
            margin_abs,
            margin_pct,
        }
    })
}
