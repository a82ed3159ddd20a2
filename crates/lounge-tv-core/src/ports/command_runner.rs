//! Command runner trait definition.
//!
//! This port defines the interface for running the external TV control tool.
//! Implementations handle spawning, output capture and reaping internally.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Invocation;

/// Failures of a single external tool invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunnerError {
    /// The program could not be started at all, so there is no exit code.
    #[error("Failed to spawn {program}: {message}")]
    Spawn { program: String, message: String },

    /// The program ran and did not exit successfully.
    ///
    /// `code` is `None` when the process was terminated by a signal.
    #[error(
        "{} (args: {}) (stderr: {})",
        exit_label(.code.as_ref()),
        .args.join(" "),
        .stderr.trim_end()
    )]
    Execution {
        code: Option<i32>,
        args: Vec<String>,
        stderr: String,
    },

    /// The caller gave up on the invocation; the process was killed and reaped.
    #[error("Cancelled before completion (args: {})", .args.join(" "))]
    Cancelled { args: Vec<String> },

    /// Reading the process output failed.
    #[error("I/O error: {0}")]
    Io(String),
}

fn exit_label(code: Option<&i32>) -> String {
    code.map_or_else(
        || "terminated by signal".to_string(),
        |code| format!("exit code {code}"),
    )
}

/// Runner for the external TV control tool.
///
/// This trait abstracts process management for testability and
/// alternative backends (local subprocess, remote host, recording fake).
///
/// # Contract
///
/// - Exactly one process per call, stdin not written
/// - `Ok` only on a zero exit status, carrying stdout byte-for-byte
/// - No retries
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `invocation` to completion and return its standard output.
    async fn run(&self, invocation: &Invocation) -> Result<Vec<u8>, RunnerError>;
}
