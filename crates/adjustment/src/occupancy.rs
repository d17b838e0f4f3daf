use core_limits::{compute_limits, LimitConfig, Limits};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Occupancy {
    pub expenditure_to_revenue_pct: f64,
    pub ceiling_share_pct: f64,
    pub max_pct: f64,
    pub prudential_pct: f64,
    pub alert_pct: f64,
}

/// Highest threshold the expenditure has crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceBand {
    Compliant,
    AlertReached,
    PrudentialReached,
    Exceeded,
}

impl ComplianceBand {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compliant => "compliant",
            Self::AlertReached => "alert_reached",
            Self::PrudentialReached => "prudential_reached",
            Self::Exceeded => "exceeded",
        }
    }
}

pub fn compute_occupancy(revenue: f64, expenditure: f64, config: &LimitConfig) -> Occupancy {
    let limits = compute_limits(revenue, config);
    let expenditure_to_revenue_pct = share_pct(expenditure, revenue);
    let ceiling_share_pct = if config.max_ratio() > 0.0 {
        expenditure_to_revenue_pct / config.max_ratio()
    } else {
        f64::NAN
    };

    Occupancy {
        expenditure_to_revenue_pct,
        ceiling_share_pct,
        max_pct: share_pct(expenditure, limits.max),
        prudential_pct: share_pct(expenditure, limits.prudential),
        alert_pct: share_pct(expenditure, limits.alert),
    }
}

pub fn classify(expenditure: f64, limits: &Limits) -> ComplianceBand {
    if expenditure > limits.max {
        ComplianceBand::Exceeded
    } else if expenditure > limits.prudential {
        ComplianceBand::PrudentialReached
    } else if expenditure > limits.alert {
        ComplianceBand::AlertReached
    } else {
        ComplianceBand::Compliant
    }
}

fn share_pct(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        f64::NAN
    }
}
