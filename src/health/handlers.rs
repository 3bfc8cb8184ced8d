use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde_json::json;
use tracing::error;

use crate::common::{app_state::AppState, server_error::ServerError};

pub fn health_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/detailed", get(health_detailed))
        .with_state(state.clone())
}

async fn health() -> impl IntoResponse {
    "OK".into_response()
}

async fn health_detailed(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    let platform = true;

    let bank_storage = state.get_bank_store().is_reachable().await;
    if !bank_storage {
        error!(
            "Question bank directory {} is not reachable",
            state.get_bank_store().directory().display()
        );
    }

    let json = json!({
        "platform": platform,
        "bank_storage": bank_storage,
        "sessions": state.get_sessions().len(),
    });

    Ok((StatusCode::OK, Json(json)))
}
