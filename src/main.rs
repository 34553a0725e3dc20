// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(clippy::panic, clippy::unwrap_used, clippy::expect_used)
)]

mod app;
mod commands;

use app::Args;
use clap::Parser;
use color_eyre::eyre::Result;
use minipm::logging::{init_logging, parse_rotation, LogConfig, LOG_FILENAME};
use minipm::tenant::TenantStore;
use minipm::transport::HttpTransport;
use minipm::user_config::{load_user_config, UserConfig};
use minipm::views::Workspace;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    let mut log_config = LogConfig {
        log_level: args.log_level,
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..Default::default()
    };
    if let Some(dir) = args.log_dir {
        log_config.log_dir = PathBuf::from(dir);
    }
    let log_file = log_config.log_dir.join(LOG_FILENAME);

    if let Err(e) = init_logging(log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    // User-level config (~/.minipm/config.toml) is optional.
    let user_cfg = load_user_config().unwrap_or_else(|e| {
        warn!("Failed to load user config, using defaults: {e}");
        UserConfig::default()
    });

    let endpoint = args.endpoint.unwrap_or(user_cfg.api.endpoint);
    debug!(%endpoint, "Using GraphQL endpoint");
    let transport = HttpTransport::new(endpoint, Duration::from_secs(user_cfg.api.timeout_secs))?;
    let store = TenantStore::default_location()?;

    let mut workspace =
        Workspace::open(Arc::new(transport), store, &user_cfg.tenant.default_slug).await;
    commands::run(&mut workspace, args.command).await
}
