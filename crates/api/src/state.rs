use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use core_limits::LimitConfig;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EvaluationIdOverflow;

/// Request context shared by the handlers: the configuration applied when a
/// request omits ratios, and the counter tagging each evaluation in the logs.
#[derive(Clone, Debug)]
pub struct AppState {
    next_evaluation_id: Arc<AtomicU64>,
    default_config: LimitConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(LimitConfig::default())
    }
}

impl AppState {
    pub fn new(default_config: LimitConfig) -> Self {
        Self {
            next_evaluation_id: Arc::new(AtomicU64::new(0)),
            default_config,
        }
    }

    pub fn default_config(&self) -> LimitConfig {
        self.default_config
    }

    pub fn next_evaluation_id(&self) -> Result<u64, EvaluationIdOverflow> {
        let previous = self
            .next_evaluation_id
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                current.checked_add(1)
            })
            .map_err(|_| EvaluationIdOverflow)?;

        Ok(previous + 1)
    }
}
