mod config;
mod wiring;

use std::error::Error;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config = config::Config::from_env()?;
    let limits = config.limits;
    if limits.alert_factor() > limits.prudential_factor() {
        tracing::warn!(
            alert_factor = limits.alert_factor(),
            prudential_factor = limits.prudential_factor(),
            "alert limit sits above the prudential limit"
        );
    }

    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!(
        addr = %config.listen_addr,
        max_ratio = limits.max_ratio(),
        prudential_factor = limits.prudential_factor(),
        alert_factor = limits.alert_factor(),
        "ceiling simulator listening"
    );

    axum::serve(listener, wiring::build_app(limits)).await?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
