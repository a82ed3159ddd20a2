//! Main CLI parser and top-level argument handling.

use std::num::NonZeroU64;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use lounge_tv_axum::ServerConfig;
use lounge_tv_axum::bootstrap::{DEFAULT_HOST, DEFAULT_PORT};
use lounge_tv_core::{DEFAULT_COMMAND, DEFAULT_SERIAL_DEVICE, TvConfig};

/// Serve an HTTP API that drives a TV through its serial control tool.
#[derive(Debug, Parser)]
#[command(name = "lounge-tv-http")]
#[command(about = "HTTP API for a serial-controlled TV")]
#[command(version)]
pub struct Cli {
    /// Interface to listen on
    #[arg(long, env = "LOUNGE_TV_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "LOUNGE_TV_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Control tool to run for every TV command
    #[arg(long = "lounge-tv-cmd", env = "LOUNGE_TV_CMD", default_value = DEFAULT_COMMAND)]
    pub lounge_tv_cmd: PathBuf,

    /// Serial device passed to the control tool with --dev
    #[arg(long, env = "LOUNGE_TV_SERIAL_DEVICE", default_value = DEFAULT_SERIAL_DEVICE)]
    pub serial_device: String,

    /// Kill a control tool invocation after this many seconds (default: never)
    #[arg(long, env = "LOUNGE_TV_COMMAND_TIMEOUT", value_name = "SECONDS")]
    pub command_timeout: Option<NonZeroU64>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Server configuration described by these arguments.
    pub fn server_config(&self) -> ServerConfig {
        let mut config = ServerConfig {
            host: self.host.clone(),
            port: self.port,
            ..ServerConfig::with_defaults()
        }
        .with_tv(TvConfig::new(&self.lounge_tv_cmd, &self.serial_device));

        if let Some(secs) = self.command_timeout {
            config = config.with_command_timeout(Duration::from_secs(secs.get()));
        }
        config
    }
}
