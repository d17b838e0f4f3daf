use crate::comparison::ScenarioLabel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputationLogEventKind {
    SimulationApplied,
    LimitsDerived,
    DistancesComputed,
    AdjustmentsComputed,
    ReportExported,
}

impl ComputationLogEventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SimulationApplied => "simulation_applied",
            Self::LimitsDerived => "limits_derived",
            Self::DistancesComputed => "distances_computed",
            Self::AdjustmentsComputed => "adjustments_computed",
            Self::ReportExported => "report_exported",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputationLogEvent {
    pub evaluation_id: u64,
    pub kind: ComputationLogEventKind,
    pub scenario: Option<ScenarioLabel>,
}

impl ComputationLogEvent {
    pub fn new(
        evaluation_id: u64,
        kind: ComputationLogEventKind,
        scenario: Option<ScenarioLabel>,
    ) -> Self {
        Self {
            evaluation_id,
            kind,
            scenario,
        }
    }
}

pub trait ComputationLogWriter {
    fn write(&mut self, event: ComputationLogEvent);
}

#[derive(Debug, Default)]
pub struct InMemoryComputationLogWriter {
    events: Vec<ComputationLogEvent>,
}

impl InMemoryComputationLogWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ComputationLogEvent] {
        &self.events
    }
}

impl ComputationLogWriter for InMemoryComputationLogWriter {
    fn write(&mut self, event: ComputationLogEvent) {
        self.events.push(event);
    }
}

/// Forwards every event to the `tracing` subscriber at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingComputationLogWriter;

impl ComputationLogWriter for TracingComputationLogWriter {
    fn write(&mut self, event: ComputationLogEvent) {
        tracing::debug!(
            evaluation_id = event.evaluation_id,
            kind = event.kind.as_str(),
            scenario = event.scenario.map(ScenarioLabel::as_str),
            "computation step"
        );
    }
}
