//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. All concrete implementations are instantiated here.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use lounge_tv_core::{CommandRunner, LoungeTv, TvConfig};
use lounge_tv_runtime::SubprocessRunner;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Default interface to listen on.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8000;

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host or address to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Control tool and serial device.
    pub tv: TvConfig,
    /// Kill control tool invocations that run longer than this.
    pub command_timeout: Option<Duration>,
}

impl ServerConfig {
    /// Create config with default values.
    pub fn with_defaults() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            tv: TvConfig::default(),
            command_timeout: None,
        }
    }

    /// Set the control tool and serial device.
    #[must_use]
    pub fn with_tv(mut self, tv: TvConfig) -> Self {
        self.tv = tv;
        self
    }

    /// Set a per-invocation timeout for the control tool.
    #[must_use]
    pub const fn with_command_timeout(mut self, timeout: Duration) -> Self {
        self.command_timeout = Some(timeout);
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The TV service every handler delegates to.
    pub tv: LoungeTv,
}

impl AxumContext {
    /// Build a context around an arbitrary runner.
    pub fn new(tv: TvConfig, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            tv: LoungeTv::new(tv, runner),
        }
    }
}

/// Wire the subprocess runner and the TV service.
pub fn bootstrap(config: &ServerConfig) -> AxumContext {
    info!(
        command = %config.tv.command.display(),
        serial_device = %config.tv.serial_device,
        command_timeout = ?config.command_timeout,
        "Axum bootstrap resolved TV control tool"
    );

    let mut runner = SubprocessRunner::new();
    if let Some(timeout) = config.command_timeout {
        runner = runner.with_timeout(timeout);
    }

    AxumContext::new(config.tv.clone(), Arc::new(runner))
}

/// Start the web server and run until `shutdown` is cancelled.
pub async fn start_server(config: ServerConfig, shutdown: CancellationToken) -> Result<()> {
    let ctx = bootstrap(&config);
    let app = crate::routes::create_router(ctx);

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;

    info!(
        "lounge-tv-http listening on http://{}",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
        .context("HTTP server failed")?;

    info!("lounge-tv-http shut down");
    Ok(())
}
