mod config;
mod error;
mod limits;
mod simulation;
mod state;

pub use config::{LimitConfig, DEFAULT_ALERT_FACTOR, DEFAULT_MAX_RATIO, DEFAULT_PRUDENTIAL_FACTOR};
pub use error::LimitsError;
pub use limits::{compute_limits, LimitTier, Limits};
pub use simulation::{apply_simulation, Simulation, SimulationMode};
pub use state::FinancialState;
