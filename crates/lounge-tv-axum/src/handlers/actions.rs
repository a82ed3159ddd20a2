//! Fixed TV actions - one route per action, no parameters.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{MethodRouter, get};
use lounge_tv_core::TvAction;

use crate::error::HttpError;
use crate::state::AppState;

/// Run `action` and answer with an empty success.
pub async fn perform(state: &AppState, action: TvAction) -> Result<StatusCode, HttpError> {
    state.tv.execute(action).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET route bound to a single action.
pub fn route(action: TvAction) -> MethodRouter<AppState> {
    get(move |State(state): State<AppState>| async move { perform(&state, action).await })
}
