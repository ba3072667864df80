use crate::{
    application::classify_text::pipeline::ModelStatus, presentation::http::state::AppState,
};
use axum::{Json, extract::State, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    started_at: DateTime<Utc>,
    soft_errors: bool,
    models: Vec<ModelStatus>,
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    // Models are loaded before the listener binds, so a running server is healthy.
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        started_at: state.started_at,
        soft_errors: state.config.soft_errors,
        models: state.classifier.model_status(),
    })
}
