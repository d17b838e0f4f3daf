use axum::{routing::get, Router};
use core_limits::LimitConfig;

pub fn build_app(default_config: LimitConfig) -> Router {
    api::app(default_config).route("/health", get(healthcheck))
}

async fn healthcheck() -> &'static str {
    "ok"
}
