//! Startup configuration for the television.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default external control program, looked up on `PATH`.
pub const DEFAULT_COMMAND: &str = "sony-bravia-cli";
/// Default serial device the control program talks to.
pub const DEFAULT_SERIAL_DEVICE: &str = "/dev/ttyUSB0";

/// Which program drives the TV and over which serial device.
///
/// Fixed at startup and shared read-only by every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TvConfig {
    /// Path (or bare name resolved via `PATH`) of the external control tool.
    pub command: PathBuf,
    /// Serial device node passed to the tool with `--dev`.
    pub serial_device: String,
}

impl TvConfig {
    pub fn new(command: impl Into<PathBuf>, serial_device: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            serial_device: serial_device.into(),
        }
    }
}

impl Default for TvConfig {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND, DEFAULT_SERIAL_DEVICE)
    }
}
