use axum::extract::State;

use crate::{pkg::server::state::AppState, prelude::Result};

pub async fn livez() -> Result<()> {
    tracing::debug!("service is live");
    Ok(())
}

pub async fn healthz(State(state): State<AppState>) -> Result<()> {
    let jobs = state.store.read().await.len();
    tracing::debug!("service is healthy, holding {} jobs", jobs);
    Ok(())
}
