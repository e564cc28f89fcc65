//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guestbook page lives at `/`: `GET` renders the current feed, `POST`
//! accepts the form and renders the refreshed feed. `/healthz` is a plain
//! liveness probe that does not touch the backend.

pub mod guestbook;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(guestbook::index).post(guestbook::submit))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
