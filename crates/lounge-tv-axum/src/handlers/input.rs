//! Input source selection.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::error::HttpError;
use crate::state::AppState;

/// Switch to HDMI input `{port}`.
///
/// A port that is not an integer, or lies outside 1-5, is rejected with
/// `400` before the control tool is started.
pub async fn hdmi(
    State(state): State<AppState>,
    port: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, HttpError> {
    let Path(port) = port.map_err(|e| HttpError::BadRequest(e.body_text()))?;
    state.tv.select_hdmi(port).await?;
    Ok(StatusCode::NO_CONTENT)
}
