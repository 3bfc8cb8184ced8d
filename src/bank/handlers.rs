use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use tracing::info;

use crate::{
    bank::models::{EditQuestionRequest, QuestionBank, SetupRequest},
    common::{app_state::AppState, models::ListResponse, server_error::ServerError},
};

pub fn bank_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list_banks))
        .route("/{name}", get(get_bank).post(create_bank))
        .route("/{name}/questions", put(edit_question))
        .with_state(state)
}

async fn list_banks(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ServerError> {
    let names = state.get_bank_store().list().await?;
    Ok((StatusCode::OK, Json(ListResponse::new(names))))
}

async fn get_bank(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
    let rows = state.get_limits().board_rows;
    let bank = state.get_bank_store().load(&name, rows).await?;
    Ok((StatusCode::OK, Json(bank)))
}

async fn create_bank(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(request): Json<SetupRequest>,
) -> Result<impl IntoResponse, ServerError> {
    let bank = QuestionBank::from_setup(request, state.get_limits())?;
    state.get_bank_store().save(&name, &bank).await?;
    info!(
        "Question bank '{}' set up with {} categories",
        name,
        bank.categories().len()
    );

    Ok((StatusCode::CREATED, Json(bank)))
}

async fn edit_question(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(request): Json<EditQuestionRequest>,
) -> Result<impl IntoResponse, ServerError> {
    let store = state.get_bank_store();
    let mut bank = store.load(&name, state.get_limits().board_rows).await?;

    bank.edit_question(&request.category, request.index, request.draft)?;
    store.save(&name, &bank).await?;

    Ok((StatusCode::OK, Json(bank)))
}
