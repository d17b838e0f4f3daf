pub mod comparison;
pub mod export;
pub mod logging;
pub mod sweep;

pub use comparison::{evaluate, ComparisonReport, ScenarioLabel, ScenarioReport, ScenarioRequest};
pub use export::{comparison_csv, ComparisonCsvWriter, COMPARISON_CSV_HEADER};
pub use logging::{ComputationLogWriter, InMemoryComputationLogWriter, TracingComputationLogWriter};
pub use sweep::sweep;

#[cfg(test)]
mod tests {
    use core_limits::{FinancialState, Simulation, SimulationMode};

    use crate::comparison::{evaluate, ScenarioLabel, ScenarioRequest};
    use crate::logging::{ComputationLogEventKind, InMemoryComputationLogWriter};

    #[test]
    fn evaluation_emits_events_in_expected_order() {
        let request = ScenarioRequest {
            current: FinancialState::new(1_000_000.0, 400_000.0).unwrap(),
            simulation: Simulation::new(SimulationMode::IncreaseRevenuePct, 5.0),
            ..ScenarioRequest::default()
        };
        let mut log = InMemoryComputationLogWriter::new();

        evaluate(7, &request, &mut log);
        let events = log.events();

        assert_eq!(events.len(), 7);
        assert!(events.iter().all(|event| event.evaluation_id == 7));
        assert_eq!(events[0].kind, ComputationLogEventKind::SimulationApplied);
        assert_eq!(events[0].scenario, None);

        let expected_steps = [
            ComputationLogEventKind::LimitsDerived,
            ComputationLogEventKind::DistancesComputed,
            ComputationLogEventKind::AdjustmentsComputed,
        ];
        for (events, label) in [
            (&events[1..4], ScenarioLabel::Current),
            (&events[4..7], ScenarioLabel::Simulated),
        ] {
            let kinds: Vec<_> = events.iter().map(|event| event.kind).collect();
            assert_eq!(kinds, expected_steps.to_vec());
            assert!(events.iter().all(|event| event.scenario == Some(label)));
        }
    }
}
