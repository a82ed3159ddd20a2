//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `tokio::process` types in any signature
//! - Runners receive a complete [`Invocation`](crate::domain::Invocation) and
//!   never decide arguments themselves

pub mod command_runner;

use thiserror::Error;

pub use command_runner::{CommandRunner, RunnerError};

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters should map this to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (invalid input). Raised before anything is spawned.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The external tool could not be run to a successful exit.
    #[error(transparent)]
    Runner(#[from] RunnerError),
}
