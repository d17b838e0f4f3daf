use core_limits::{Simulation, SimulationMode};
use rayon::prelude::*;

use crate::{
    comparison::{evaluate, ComparisonReport, ScenarioRequest},
    logging::TracingComputationLogWriter,
};

/// Evaluates one comparison per magnitude, keeping the input order.
///
/// The request's own simulation is replaced by `mode` at each value. Every
/// point is logged under the caller's `evaluation_id`. Each evaluation is
/// independent, so the batch is spread across the rayon pool.
pub fn sweep(
    evaluation_id: u64,
    request: &ScenarioRequest,
    mode: SimulationMode,
    values: &[f64],
) -> Vec<ComparisonReport> {
    let reports: Vec<ComparisonReport> = values
        .par_iter()
        .map(|&value| {
            let point = ScenarioRequest {
                simulation: Simulation::new(mode, value),
                ..*request
            };
            evaluate(evaluation_id, &point, &mut TracingComputationLogWriter)
        })
        .collect();

    tracing::debug!(
        evaluation_id,
        mode = %mode,
        points = reports.len(),
        "sweep evaluated"
    );
    reports
}
