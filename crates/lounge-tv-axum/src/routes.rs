//! Route definitions and router construction.
//!
//! Every fixed action route comes from [`ACTION_ROUTES`]; the HDMI input,
//! status and health routes are added by hand.

use axum::Router;
use axum::routing::get;
use lounge_tv_core::{BrightnessStep, Direction, Switch, TvAction};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::bootstrap::AxumContext;
use crate::handlers;
use crate::state::AppState;

/// Path of every parameterless action route and the action it performs.
pub const ACTION_ROUTES: [(&str, TvAction); 14] = [
    ("/power/on", TvAction::Power(Switch::On)),
    ("/power/off", TvAction::Power(Switch::Off)),
    ("/power/toggle", TvAction::Power(Switch::Toggle)),
    ("/display/toggle", TvAction::DisplayToggle),
    ("/picture/on", TvAction::Picture(Switch::On)),
    ("/picture/off", TvAction::Picture(Switch::Off)),
    ("/picture/toggle", TvAction::Picture(Switch::Toggle)),
    ("/volume/up", TvAction::Volume(Direction::Up)),
    ("/volume/down", TvAction::Volume(Direction::Down)),
    ("/volume/mute/toggle", TvAction::MuteToggle),
    ("/brightness/up", TvAction::Brightness(BrightnessStep::Up)),
    ("/brightness/down", TvAction::Brightness(BrightnessStep::Down)),
    ("/brightness/min", TvAction::Brightness(BrightnessStep::Min)),
    ("/brightness/max", TvAction::Brightness(BrightnessStep::Max)),
];

/// Build all TV routes, without state applied.
pub(crate) fn tv_routes() -> Router<AppState> {
    ACTION_ROUTES
        .iter()
        .fold(Router::new(), |router, &(path, action)| {
            router.route(path, handlers::actions::route(action))
        })
        .route("/input/hdmi/{port}", get(handlers::input::hdmi))
        .route("/status", get(handlers::status::get))
}

/// Create the main Axum router with all routes.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{port}`
pub fn create_router(ctx: AxumContext) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/health", get(health_check))
        .merge(tv_routes().with_state(state))
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
