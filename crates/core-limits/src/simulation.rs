use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::LimitsError, state::FinancialState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimulationMode {
    #[default]
    None,
    IncreaseExpenditurePct,
    IncreaseExpenditureAbs,
    DecreaseExpenditurePct,
    DecreaseExpenditureAbs,
    IncreaseRevenuePct,
    IncreaseRevenueAbs,
    DecreaseRevenuePct,
    DecreaseRevenueAbs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Revenue,
    Expenditure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Change {
    IncreasePct,
    IncreaseAbs,
    DecreasePct,
    DecreaseAbs,
}

impl SimulationMode {
    pub const ALL: [SimulationMode; 9] = [
        Self::None,
        Self::IncreaseExpenditurePct,
        Self::IncreaseExpenditureAbs,
        Self::DecreaseExpenditurePct,
        Self::DecreaseExpenditureAbs,
        Self::IncreaseRevenuePct,
        Self::IncreaseRevenueAbs,
        Self::DecreaseRevenuePct,
        Self::DecreaseRevenueAbs,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::IncreaseExpenditurePct => "increase-expenditure-pct",
            Self::IncreaseExpenditureAbs => "increase-expenditure-abs",
            Self::DecreaseExpenditurePct => "decrease-expenditure-pct",
            Self::DecreaseExpenditureAbs => "decrease-expenditure-abs",
            Self::IncreaseRevenuePct => "increase-revenue-pct",
            Self::IncreaseRevenueAbs => "increase-revenue-abs",
            Self::DecreaseRevenuePct => "decrease-revenue-pct",
            Self::DecreaseRevenueAbs => "decrease-revenue-abs",
        }
    }

    fn split(self) -> Option<(Target, Change)> {
        let split = match self {
            Self::None => return None,
            Self::IncreaseExpenditurePct => (Target::Expenditure, Change::IncreasePct),
            Self::IncreaseExpenditureAbs => (Target::Expenditure, Change::IncreaseAbs),
            Self::DecreaseExpenditurePct => (Target::Expenditure, Change::DecreasePct),
            Self::DecreaseExpenditureAbs => (Target::Expenditure, Change::DecreaseAbs),
            Self::IncreaseRevenuePct => (Target::Revenue, Change::IncreasePct),
            Self::IncreaseRevenueAbs => (Target::Revenue, Change::IncreaseAbs),
            Self::DecreaseRevenuePct => (Target::Revenue, Change::DecreasePct),
            Self::DecreaseRevenueAbs => (Target::Revenue, Change::DecreaseAbs),
        };
        Some(split)
    }
}

impl fmt::Display for SimulationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimulationMode {
    type Err = LimitsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == value)
            .ok_or_else(|| LimitsError::UnknownSimulationMode(value.to_owned()))
    }
}

/// A perturbation and its magnitude (percent points or currency units,
/// depending on the mode).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Simulation {
    pub mode: SimulationMode,
    #[serde(default)]
    pub value: f64,
}

impl Simulation {
    pub fn new(mode: SimulationMode, value: f64) -> Self {
        Self { mode, value }
    }

    pub fn apply(&self, current: FinancialState) -> FinancialState {
        apply_simulation(current, self.mode, self.value)
    }
}

/// Derives the simulated state from the current one.
///
/// Exactly one field is perturbed. Absolute decreases floor at zero; every
/// other change is applied as-is, so a negative `value` flips the direction
/// of the change.
pub fn apply_simulation(
    current: FinancialState,
    mode: SimulationMode,
    value: f64,
) -> FinancialState {
    let Some((target, change)) = mode.split() else {
        return current;
    };

    match target {
        Target::Revenue => FinancialState {
            revenue: perturb(current.revenue, change, value),
            ..current
        },
        Target::Expenditure => FinancialState {
            expenditure: perturb(current.expenditure, change, value),
            ..current
        },
    }
}

fn perturb(amount: f64, change: Change, value: f64) -> f64 {
    match change {
        Change::IncreasePct => amount * (1.0 + value / 100.0),
        Change::DecreasePct => amount * (1.0 - value / 100.0),
        Change::IncreaseAbs => amount + value,
        Change::DecreaseAbs => (amount - value).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{apply_simulation, Simulation, SimulationMode};
    use crate::{FinancialState, LimitsError};

    fn baseline() -> FinancialState {
        FinancialState::new(1_000_000.0, 400_000.0).unwrap()
    }

    #[test]
    fn increasing_expenditure_by_thirty_percent_reaches_520k() {
        let simulated = apply_simulation(baseline(), SimulationMode::IncreaseExpenditurePct, 30.0);

        assert!((simulated.expenditure - 520_000.0).abs() < 1e-6);
        assert_eq!(simulated.revenue, 1_000_000.0);
    }

    #[test]
    fn decreasing_expenditure_by_percentage_scales_down() {
        let simulated = apply_simulation(baseline(), SimulationMode::DecreaseExpenditurePct, 25.0);

        assert_eq!(simulated.expenditure, 300_000.0);
        assert_eq!(simulated.revenue, 1_000_000.0);
    }

    #[test]
    fn absolute_expenditure_increase_is_unclamped() {
        let simulated =
            apply_simulation(baseline(), SimulationMode::IncreaseExpenditureAbs, 2_000_000.0);

        assert_eq!(simulated.expenditure, 2_400_000.0);
    }

    #[test]
    fn absolute_expenditure_decrease_floors_at_zero() {
        let simulated =
            apply_simulation(baseline(), SimulationMode::DecreaseExpenditureAbs, 500_000.0);

        assert_eq!(simulated.expenditure, 0.0);
        assert_eq!(simulated.revenue, 1_000_000.0);
    }

    #[test]
    fn revenue_modes_leave_expenditure_untouched() {
        let up = apply_simulation(baseline(), SimulationMode::IncreaseRevenuePct, 10.0);
        let down = apply_simulation(baseline(), SimulationMode::DecreaseRevenueAbs, 1_500_000.0);
        let plus = apply_simulation(baseline(), SimulationMode::IncreaseRevenueAbs, 50_000.0);
        let minus = apply_simulation(baseline(), SimulationMode::DecreaseRevenuePct, 20.0);

        assert!((up.revenue - 1_100_000.0).abs() < 1e-6);
        assert_eq!(down.revenue, 0.0);
        assert_eq!(plus.revenue, 1_050_000.0);
        assert!((minus.revenue - 800_000.0).abs() < 1e-6);
        for state in [up, down, plus, minus] {
            assert_eq!(state.expenditure, 400_000.0);
        }
    }

    #[test]
    fn negative_magnitude_is_passed_through() {
        let simulated =
            apply_simulation(baseline(), SimulationMode::IncreaseExpenditurePct, -150.0);

        assert_eq!(simulated.expenditure, -200_000.0);
    }

    #[test]
    fn percentage_decrease_past_one_hundred_is_not_clamped() {
        let simulated = apply_simulation(baseline(), SimulationMode::DecreaseRevenuePct, 120.0);

        assert!(simulated.revenue < 0.0);
    }

    #[test]
    fn parses_kebab_case_mode_names() {
        for mode in SimulationMode::ALL {
            assert_eq!(mode.as_str().parse::<SimulationMode>().unwrap(), mode);
        }
    }

    #[test]
    fn rejects_unknown_mode_names() {
        let err = "increase-despesa".parse::<SimulationMode>().unwrap_err();

        assert_eq!(
            err,
            LimitsError::UnknownSimulationMode("increase-despesa".to_owned())
        );
    }

    #[test]
    fn simulation_deserializes_with_default_value() {
        let simulation: Simulation =
            serde_json::from_str(r#"{"mode":"decrease-revenue-abs"}"#).unwrap();

        assert_eq!(simulation.mode, SimulationMode::DecreaseRevenueAbs);
        assert_eq!(simulation.value, 0.0);
    }

    proptest! {
        #[test]
        fn prop_none_mode_is_identity(
            revenue in 0.0f64..1e12,
            expenditure in 0.0f64..1e12,
            value in -1e6f64..1e6,
        ) {
            let current = FinancialState::new(revenue, expenditure).unwrap();
            let simulated = Simulation::new(SimulationMode::None, value).apply(current);

            prop_assert_eq!(simulated.revenue.to_bits(), current.revenue.to_bits());
            prop_assert_eq!(simulated.expenditure.to_bits(), current.expenditure.to_bits());
        }

        #[test]
        fn prop_absolute_decrease_never_goes_negative(
            expenditure in 0.0f64..1e12,
            value in 0.0f64..2e12,
        ) {
            let current = FinancialState::new(1_000_000.0, expenditure).unwrap();
            let simulated =
                apply_simulation(current, SimulationMode::DecreaseExpenditureAbs, value);

            prop_assert!(simulated.expenditure >= 0.0);
            prop_assert_eq!(simulated.expenditure, (expenditure - value).max(0.0));
        }
    }
}
