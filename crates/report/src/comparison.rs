use adjustment::{
    classify, compute_adjustments, compute_distance, compute_occupancy, Adjustments,
    ComplianceBand, DistanceResult, Occupancy,
};
use core_limits::{compute_limits, FinancialState, LimitConfig, Limits, Simulation};
use serde::{Deserialize, Serialize};

use crate::logging::{ComputationLogEvent, ComputationLogEventKind, ComputationLogWriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioLabel {
    Current,
    Simulated,
}

impl ScenarioLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Simulated => "simulated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScenarioRequest {
    pub current: FinancialState,
    #[serde(default)]
    pub config: LimitConfig,
    #[serde(default)]
    pub simulation: Simulation,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub label: ScenarioLabel,
    pub state: FinancialState,
    pub limits: Limits,
    pub occupancy: Occupancy,
    pub band: ComplianceBand,
    pub distances: [DistanceResult; 3],
    pub adjustments: Adjustments,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub evaluation_id: u64,
    pub config: LimitConfig,
    pub simulation: Simulation,
    pub current: ScenarioReport,
    pub simulated: ScenarioReport,
}

impl ComparisonReport {
    pub fn scenarios(&self) -> [&ScenarioReport; 2] {
        [&self.current, &self.simulated]
    }
}

/// Runs the transformer once, then reports both scenarios against the
/// same configuration.
pub fn evaluate(
    evaluation_id: u64,
    request: &ScenarioRequest,
    log: &mut dyn ComputationLogWriter,
) -> ComparisonReport {
    let simulated = request.simulation.apply(request.current);
    log.write(ComputationLogEvent::new(
        evaluation_id,
        ComputationLogEventKind::SimulationApplied,
        None,
    ));

    ComparisonReport {
        evaluation_id,
        config: request.config,
        simulation: request.simulation,
        current: report_scenario(
            evaluation_id,
            ScenarioLabel::Current,
            request.current,
            &request.config,
            log,
        ),
        simulated: report_scenario(
            evaluation_id,
            ScenarioLabel::Simulated,
            simulated,
            &request.config,
            log,
        ),
    }
}

pub fn report_scenario(
    evaluation_id: u64,
    label: ScenarioLabel,
    state: FinancialState,
    config: &LimitConfig,
    log: &mut dyn ComputationLogWriter,
) -> ScenarioReport {
    let mut step = |kind| log.write(ComputationLogEvent::new(evaluation_id, kind, Some(label)));

    let limits = compute_limits(state.revenue, config);
    let occupancy = compute_occupancy(state.revenue, state.expenditure, config);
    let band = classify(state.expenditure, &limits);
    step(ComputationLogEventKind::LimitsDerived);

    let distances = compute_distance(state.revenue, state.expenditure, config);
    step(ComputationLogEventKind::DistancesComputed);

    let adjustments = compute_adjustments(state.revenue, state.expenditure, config);
    step(ComputationLogEventKind::AdjustmentsComputed);

    ScenarioReport {
        label,
        state,
        limits,
        occupancy,
        band,
        distances,
        adjustments,
    }
}
