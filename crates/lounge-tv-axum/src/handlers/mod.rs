//! HTTP request handlers for the Axum web server.
//!
//! Handlers are thin wrappers that delegate to `LoungeTv`.

pub mod actions;
pub mod input;
pub mod status;
