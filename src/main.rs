//! Payroll Engine HTTP server.
//!
//! Serves the `/breakdown` endpoint. `PAYROLL_RULES_DIR` selects a rule-set
//! directory (the built-in rule set is used when unset) and
//! `PAYROLL_BIND_ADDR` the listen address. Log filtering follows `RUST_LOG`.

use std::env;
use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match env::var("PAYROLL_RULES_DIR") {
        Ok(dir) => ConfigLoader::load(&dir)?,
        Err(_) => {
            info!("PAYROLL_RULES_DIR not set, using built-in rule set");
            ConfigLoader::builtin()
        }
    };

    let bind_addr = env::var("PAYROLL_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(
        address = %listener.local_addr()?,
        rule_set = %config.metadata().code,
        "Payroll engine listening"
    );

    axum::serve(listener, create_router(AppState::new(config))).await?;
    Ok(())
}
