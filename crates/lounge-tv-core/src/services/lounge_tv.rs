//! Lounge TV service - maps TV actions onto external tool invocations.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{HdmiPort, InputSelection, Invocation, TvAction, TvConfig};
use crate::ports::{CommandRunner, CoreError};

/// Service that drives the television through the external control tool.
///
/// Holds the immutable [`TvConfig`] and a runner. Cloning is cheap and every
/// clone shares the same configuration and runner.
#[derive(Clone)]
pub struct LoungeTv {
    config: Arc<TvConfig>,
    runner: Arc<dyn CommandRunner>,
}

impl LoungeTv {
    /// Create a new service.
    pub fn new(config: TvConfig, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            config: Arc::new(config),
            runner,
        }
    }

    /// The exact invocation `action` would run.
    pub fn invocation(&self, action: TvAction) -> Invocation {
        Invocation::for_action(&self.config, action)
    }

    /// Run any action and return the tool's standard output.
    pub async fn perform(&self, action: TvAction) -> Result<Vec<u8>, CoreError> {
        let invocation = self.invocation(action);
        debug!(%action, command = %invocation, "Performing TV action");

        self.runner.run(&invocation).await.map_err(|e| {
            warn!(%action, error = %e, "TV action failed");
            CoreError::from(e)
        })
    }

    /// Run an action whose output is of no interest.
    pub async fn execute(&self, action: TvAction) -> Result<(), CoreError> {
        self.perform(action).await.map(drop)
    }

    /// Ask the tool for the TV's status report, returned unmodified.
    pub async fn status(&self) -> Result<Vec<u8>, CoreError> {
        self.perform(TvAction::Status).await
    }

    /// Switch to an HDMI input, rejecting out-of-range ports before spawning.
    pub async fn select_hdmi(&self, port: i64) -> Result<(), CoreError> {
        let port = HdmiPort::new(port)?;
        self.execute(TvAction::Input(InputSelection::Hdmi(port))).await
    }
}
