pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use core_limits::LimitConfig;

pub fn app(default_config: LimitConfig) -> Router {
    routes::router(state::AppState::new(default_config))
}
