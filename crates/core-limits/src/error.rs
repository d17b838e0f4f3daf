use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LimitsError {
    #[error("max_ratio must be a finite fraction between 0 and 1, got {0}")]
    InvalidMaxRatio(f64),
    #[error("prudential_factor must be a finite fraction between 0 and 1, got {0}")]
    InvalidPrudentialFactor(f64),
    #[error("alert_factor must be a finite fraction between 0 and 1, got {0}")]
    InvalidAlertFactor(f64),
    #[error("revenue must be finite and non-negative, got {0}")]
    InvalidRevenue(f64),
    #[error("expenditure must be finite and non-negative, got {0}")]
    InvalidExpenditure(f64),
    #[error("unknown simulation mode `{0}`")]
    UnknownSimulationMode(String),
}
