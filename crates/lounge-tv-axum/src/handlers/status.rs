//! Status query.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::error::HttpError;
use crate::state::AppState;

/// Return the control tool's status report exactly as it printed it.
pub async fn get(State(state): State<AppState>) -> Result<impl IntoResponse, HttpError> {
    let report = state.tv.status().await?;
    Ok(([(header::CONTENT_TYPE, "text/plain")], report))
}
