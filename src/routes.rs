use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn create_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::show_poll))
        .route("/vote", post(handlers::submit_vote))
        .route("/admin", get(handlers::admin_form).post(handlers::create_poll))
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
