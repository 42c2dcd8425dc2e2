//! datasync-rc (Reconciliation Console) - Validation record service
//!
//! Serves the reconciliation row store, derived summary statistics, and
//! the email/rETL/adoption read models over a small HTTP API. All data is
//! seeded in memory at startup; there is no database.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use datasync_common::config::ServiceConfig;
use datasync_rc::{build_router, AppState};

/// DataSync reconciliation console
#[derive(Debug, Parser)]
#[command(name = "datasync-rc", version)]
struct Cli {
    /// Socket address to bind (overrides DATASYNC_BIND_ADDR and config file)
    #[arg(long)]
    bind: Option<String>,

    /// Relative reconciliation tolerance, e.g. 0.0025 for 0.25%
    /// (overrides DATASYNC_TOLERANCE and config file)
    #[arg(long)]
    tolerance: Option<f64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting DataSync Reconciliation Console (datasync-rc) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let cli = Cli::parse();
    let config = ServiceConfig::resolve(cli.bind.as_deref(), cli.tolerance)?;
    info!(
        "Reconciliation tolerance: {:.4}%",
        config.relative_tolerance * 100.0
    );

    // Seed the in-memory collections
    let state = AppState::seeded(config.relative_tolerance);
    {
        let store = state.store.read().await;
        let summary = store.summary();
        info!(
            "✓ Seeded {} validation rows ({} pass / {} fail)",
            summary.total, summary.pass_count, summary.fail_count
        );
    }

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("datasync-rc listening on http://{}", config.bind_addr);
    info!("Health check: http://{}/health", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
