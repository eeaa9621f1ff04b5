//! RPE dashboard service.
//!
//! Serves the on-demand dashboard and freshness endpoints, and refreshes
//! the batch chart artifacts on a fixed interval:
//! - on-demand: GET / re-runs the pipeline and renders inline
//! - freshness: GET /api/refresh reports distinct session/athlete counts
//! - batch: a strictly sequential scheduler writes SVGs to a shared folder

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};

use api::{router, AppState};
use rpe_core::{DuplicatePolicy, PipelineSettings, WindowPolicy};
use sheet_client::{RowSource, SheetClient, SheetConfig};
use telemetry::{health, init_tracing_from_env};
use worker::{RefreshScheduler, RefreshWorker};

/// Application configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct Config {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,

    /// Sessions to analyze, counted from the start of the ordering.
    /// 0 means all sessions.
    #[serde(default = "default_window_sessions")]
    window_sessions: usize,

    /// How to resolve repeated submissions for the same (athlete, session).
    #[serde(default)]
    duplicate_policy: DuplicatePolicy,

    /// Seconds between scheduled chart refreshes.
    #[serde(default = "default_refresh_interval_secs")]
    refresh_interval_secs: u64,

    /// Directory the batch artifacts are written to.
    #[serde(default = "default_output_dir")]
    output_dir: String,

    #[serde(default)]
    sheet: SheetConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_window_sessions() -> usize {
    3
}

fn default_refresh_interval_secs() -> u64 {
    600
}

fn default_output_dir() -> String {
    "charts".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            window_sessions: default_window_sessions(),
            duplicate_policy: DuplicatePolicy::default(),
            refresh_interval_secs: default_refresh_interval_secs(),
            output_dir: default_output_dir(),
            sheet: SheetConfig::default(),
        }
    }
}

impl Config {
    fn pipeline_settings(&self) -> PipelineSettings {
        let window = if self.window_sessions == 0 {
            WindowPolicy::All
        } else {
            WindowPolicy::FirstN(self.window_sessions)
        };
        PipelineSettings {
            window,
            duplicates: self.duplicate_policy,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing_from_env();

    info!("Starting RPE dashboard v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = load_config()?;
    let settings = config.pipeline_settings();

    info!(
        sheet_url = %config.sheet.url,
        window_sessions = config.window_sessions,
        refresh_interval_secs = config.refresh_interval_secs,
        "Loaded configuration"
    );

    // Initialize the sheet source client
    let sheet = Arc::new(
        SheetClient::new(config.sheet.clone()).context("Failed to create sheet client")?,
    );

    // Check source health and update status
    check_health(&sheet).await;

    // Start the batch refresh scheduler (first run fires immediately)
    let refresh_worker = RefreshWorker::new(
        sheet.clone() as Arc<dyn RowSource>,
        settings,
        &config.output_dir,
    );
    let _scheduler_handle = RefreshScheduler::new(
        refresh_worker,
        Duration::from_secs(config.refresh_interval_secs),
    )
    .start();
    info!(
        interval_secs = config.refresh_interval_secs,
        output_dir = %config.output_dir,
        "Started chart refresh scheduler"
    );

    // Create application state and router
    let state = AppState::new(sheet as Arc<dyn RowSource>, settings);
    let app = router(state);

    // Start HTTP server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid server address")?;

    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutdown complete");
    Ok(())
}

/// Load configuration from files and environment.
fn load_config() -> Result<Config> {
    let config = config::Config::builder()
        // Start with defaults
        .add_source(config::Config::try_from(&Config::default())?)
        // Load from config file if exists
        .add_source(
            config::File::with_name("config/default")
                .required(false)
                .format(config::FileFormat::Toml),
        )
        // Override with environment variables
        .add_source(
            config::Environment::default()
                .separator("__")
                .prefix("RPE")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?;

    let mut config: Config = config
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    // Manual overrides for the nested sheet config from environment.
    // The config crate's nested parsing doesn't work reliably with
    // underscored field names.
    if let Ok(url) = std::env::var("RPE_SHEET_URL") {
        config.sheet.url = url;
    }
    if let Ok(timeout) = std::env::var("RPE_SHEET_TIMEOUT_SECS") {
        config.sheet.timeout_secs = timeout
            .parse()
            .context("RPE_SHEET_TIMEOUT_SECS must be an integer")?;
    }

    Ok(config)
}

/// Check source health on startup.
async fn check_health(sheet: &SheetClient) {
    if sheet_client::health::check_connection(sheet).await {
        health().sheet.set_healthy();
        info!("Sheet connection: healthy");
    } else {
        health().sheet.set_unhealthy("Connection failed");
        error!("Sheet connection: unhealthy");
    }
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
