use serde::{Deserialize, Serialize};

use crate::error::LimitsError;

/// One (revenue, expenditure) pair, either observed or simulated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFinancialState")]
pub struct FinancialState {
    pub revenue: f64,
    pub expenditure: f64,
}

impl FinancialState {
    /// Validating constructor for caller-supplied figures.
    ///
    /// States derived by a simulation are built directly and may carry any
    /// sign the perturbation produced.
    pub fn new(revenue: f64, expenditure: f64) -> Result<Self, LimitsError> {
        if !revenue.is_finite() || revenue < 0.0 {
            return Err(LimitsError::InvalidRevenue(revenue));
        }
        if !expenditure.is_finite() || expenditure < 0.0 {
            return Err(LimitsError::InvalidExpenditure(expenditure));
        }

        Ok(Self {
            revenue,
            expenditure,
        })
    }
}

#[derive(Deserialize)]
struct RawFinancialState {
    revenue: f64,
    expenditure: f64,
}

impl TryFrom<RawFinancialState> for FinancialState {
    type Error = LimitsError;

    fn try_from(raw: RawFinancialState) -> Result<Self, Self::Error> {
        Self::new(raw.revenue, raw.expenditure)
    }
}

impl Default for FinancialState {
    fn default() -> Self {
        Self {
            revenue: 1_000_000.0,
            expenditure: 400_000.0,
        }
    }
}
