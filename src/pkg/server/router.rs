use axum::{
    Router,
    routing::{get, post},
};

use super::handlers;
use super::handlers::probes::{healthz, livez};
use super::handlers::ui::home;
use super::state::AppState;
use crate::prelude::Result;

pub async fn build_routes() -> Result<Router> {
    let state = AppState::new();
    Ok(routes(state))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/jobs", get(handlers::jobs::list).post(handlers::jobs::create))
        .route("/jobs/form", post(handlers::jobs::create_from_form))
        .route(
            "/jobs/:id",
            get(handlers::jobs::retrieve)
                .put(handlers::jobs::update)
                .delete(handlers::jobs::delete),
        )
        .route("/jobs/:id/form", post(handlers::jobs::update_from_form))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .with_state(state)
}
