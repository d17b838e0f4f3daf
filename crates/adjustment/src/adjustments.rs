use core_limits::{LimitConfig, LimitTier};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    WithinLimit,
    Exceeded,
}

/// The two independent levers that bring expenditure back under one tier.
///
/// Percentages and `required_revenue` are `NaN` when their denominator is
/// zero; callers decide how to render an undefined value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdjustmentResult {
    pub tier: LimitTier,
    pub limit: f64,
    pub status: ComplianceStatus,
    pub expenditure_cut_abs: f64,
    pub expenditure_cut_pct: f64,
    pub required_revenue: f64,
    pub revenue_increase_abs: f64,
    pub revenue_increase_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Adjustments {
    pub max: AdjustmentResult,
    pub prudential: AdjustmentResult,
    pub alert: AdjustmentResult,
}

impl Adjustments {
    pub fn get(&self, tier: LimitTier) -> &AdjustmentResult {
        match tier {
            LimitTier::Max => &self.max,
            LimitTier::Prudential => &self.prudential,
            LimitTier::Alert => &self.alert,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &AdjustmentResult> + '_ {
        LimitTier::ALL.into_iter().map(move |tier| self.get(tier))
    }

    pub fn any_exceeded(&self) -> bool {
        self.iter()
            .any(|result| result.status == ComplianceStatus::Exceeded)
    }
}

pub fn compute_adjustments(revenue: f64, expenditure: f64, config: &LimitConfig) -> Adjustments {
    Adjustments {
        max: adjustment_for_tier(LimitTier::Max, revenue, expenditure, config),
        prudential: adjustment_for_tier(LimitTier::Prudential, revenue, expenditure, config),
        alert: adjustment_for_tier(LimitTier::Alert, revenue, expenditure, config),
    }
}

pub fn adjustment_for_tier(
    tier: LimitTier,
    revenue: f64,
    expenditure: f64,
    config: &LimitConfig,
) -> AdjustmentResult {
    let factor = tier.factor(config);
    let limit = revenue * config.max_ratio() * factor;

    let (status, expenditure_cut_abs, expenditure_cut_pct) = if expenditure > limit {
        let cut = expenditure - limit;
        (ComplianceStatus::Exceeded, cut, percent_of(cut, expenditure))
    } else {
        (ComplianceStatus::WithinLimit, 0.0, 0.0)
    };

    // A zero-width tier cannot be satisfied by any finite revenue.
    let denom = config.max_ratio() * factor;
    let (required_revenue, revenue_increase_abs, revenue_increase_pct) = if denom > 0.0 {
        let needed = expenditure / denom;
        let increase = (needed - revenue).max(0.0);
        (needed, increase, percent_of(increase, revenue))
    } else {
        (f64::NAN, f64::NAN, f64::NAN)
    };

    AdjustmentResult {
        tier,
        limit,
        status,
        expenditure_cut_abs,
        expenditure_cut_pct,
        required_revenue,
        revenue_increase_abs,
        revenue_increase_pct,
    }
}

fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return f64::NAN;
    }
    part / whole * 100.0
}
