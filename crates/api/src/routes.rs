use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use core_limits::{FinancialState, LimitConfig, Simulation, SimulationMode};
use report::{
    evaluate, sweep, ComparisonCsvWriter, ComparisonReport, ScenarioRequest,
    TracingComputationLogWriter,
};
use serde::Deserialize;

use crate::{error::ApiError, state::AppState};

pub const MAX_SWEEP_POINTS: usize = 10_000;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/config", get(default_config))
        .route("/scenarios", post(evaluate_scenario))
        .route("/scenarios/export", post(export_scenario))
        .route("/sweeps", post(sweep_scenario))
        .with_state(state)
}

/// Ratio overrides; any omitted ratio falls back to the server default.
#[derive(Debug, Default, Deserialize)]
struct ConfigPayload {
    max_ratio: Option<f64>,
    prudential_factor: Option<f64>,
    alert_factor: Option<f64>,
}

impl ConfigPayload {
    fn resolve(&self, defaults: LimitConfig) -> Result<LimitConfig, ApiError> {
        let config = LimitConfig::new(
            self.max_ratio.unwrap_or(defaults.max_ratio()),
            self.prudential_factor.unwrap_or(defaults.prudential_factor()),
            self.alert_factor.unwrap_or(defaults.alert_factor()),
        )?;
        Ok(config)
    }
}

#[derive(Debug, Deserialize)]
struct SimulationPayload {
    mode: String,
    #[serde(default)]
    value: f64,
}

#[derive(Debug, Deserialize)]
struct ScenarioPayload {
    revenue: f64,
    expenditure: f64,
    #[serde(default)]
    config: ConfigPayload,
    simulation: Option<SimulationPayload>,
}

impl ScenarioPayload {
    fn into_request(self, defaults: LimitConfig) -> Result<ScenarioRequest, ApiError> {
        let simulation = match self.simulation {
            Some(payload) => {
                Simulation::new(payload.mode.parse::<SimulationMode>()?, payload.value)
            }
            None => Simulation::default(),
        };

        Ok(ScenarioRequest {
            current: FinancialState::new(self.revenue, self.expenditure)?,
            config: self.config.resolve(defaults)?,
            simulation,
        })
    }
}

#[derive(Debug, Deserialize)]
struct SweepPayload {
    revenue: f64,
    expenditure: f64,
    #[serde(default)]
    config: ConfigPayload,
    mode: String,
    values: Vec<f64>,
}

async fn default_config(State(state): State<AppState>) -> Json<LimitConfig> {
    Json(state.default_config())
}

async fn evaluate_scenario(
    State(state): State<AppState>,
    Json(payload): Json<ScenarioPayload>,
) -> Result<Json<ComparisonReport>, ApiError> {
    let request = payload.into_request(state.default_config())?;
    let evaluation_id = state.next_evaluation_id()?;

    let report = evaluate(evaluation_id, &request, &mut TracingComputationLogWriter);
    tracing::info!(
        evaluation_id,
        mode = %request.simulation.mode,
        current_band = report.current.band.as_str(),
        simulated_band = report.simulated.band.as_str(),
        "scenario evaluated"
    );

    Ok(Json(report))
}

async fn export_scenario(
    State(state): State<AppState>,
    Json(payload): Json<ScenarioPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let request = payload.into_request(state.default_config())?;
    let evaluation_id = state.next_evaluation_id()?;
    let mut log = TracingComputationLogWriter;

    let report = evaluate(evaluation_id, &request, &mut log);
    let mut writer = ComparisonCsvWriter::new(Vec::new());
    writer.write_report_and_log(evaluation_id, &report, &mut log)?;

    Ok((
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
        writer.into_inner(),
    ))
}

async fn sweep_scenario(
    State(state): State<AppState>,
    Json(payload): Json<SweepPayload>,
) -> Result<Json<Vec<ComparisonReport>>, ApiError> {
    if payload.values.len() > MAX_SWEEP_POINTS {
        return Err(ApiError::TooManySweepPoints {
            max: MAX_SWEEP_POINTS,
            got: payload.values.len(),
        });
    }

    let mode: SimulationMode = payload.mode.parse()?;
    let request = ScenarioRequest {
        current: FinancialState::new(payload.revenue, payload.expenditure)?,
        config: payload.config.resolve(state.default_config())?,
        simulation: Simulation::default(),
    };

    let evaluation_id = state.next_evaluation_id()?;
    let values = payload.values;

    let reports =
        tokio::task::spawn_blocking(move || sweep(evaluation_id, &request, mode, &values))
            .await?;
    tracing::info!(evaluation_id, mode = %mode, points = reports.len(), "sweep served");

    Ok(Json(reports))
}
