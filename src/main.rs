//! Order Desk server entry point
//!
//! ```text
//! order_desk [--env dev] [--port 8080]
//! ```
//!
//! Reads `config/{env}.yaml`. When `postgres_url` is set, orders and users
//! are stored in PostgreSQL; otherwise they live in memory.

use std::sync::Arc;

use anyhow::Context;

use order_desk::config::AppConfig;
use order_desk::db::Database;
use order_desk::gateway::{self, state::AppState};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let app_config = AppConfig::load(&env)?;
    let _log_guard = order_desk::logging::init_logging(&app_config);

    tracing::info!("Starting Order Desk in {} mode", env);

    let state = match app_config.postgres_url {
        Some(ref url) => {
            let db = Database::connect(url, &app_config.postgres)
                .await
                .context("Failed to connect to PostgreSQL")?;
            db.init_schema()
                .await
                .context("Failed to initialize database schema")?;
            tracing::info!("Using PostgreSQL storage");
            AppState::with_postgres(Arc::new(db))
        }
        None => {
            tracing::warn!("postgres_url not configured, using in-memory storage");
            AppState::in_memory()
        }
    };

    let port = get_port_override().unwrap_or(app_config.gateway.port);
    gateway::run_server(&app_config.gateway.host, port, Arc::new(state)).await
}
