use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    bank::models::QuestionBank,
    common::{app_state::AppState, server_error::ServerError},
    session::models::{
        AwardRequest, PlayerScore, QuestionRef, ScoreEditRequest, StartSessionRequest,
    },
};

pub fn session_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(start_session))
        .route("/{id}", get(get_session).delete(end_session))
        .route("/{id}/reveal", post(reveal_question))
        .route("/{id}/award", post(award_points))
        .route("/{id}/decline", post(decline_award))
        .route("/{id}/scores", get(get_scores).put(edit_score))
        .with_state(state)
}

async fn start_session(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StartSessionRequest>,
) -> Result<impl IntoResponse, ServerError> {
    let limits = state.get_limits();

    let (bank, bank_name) = match (request.bank, request.setup) {
        (Some(name), None) => {
            let bank = state
                .get_bank_store()
                .load(&name, limits.board_rows)
                .await?;
            (bank, Some(name))
        }
        (None, Some(setup)) => (QuestionBank::from_setup(setup, limits)?, None),
        _ => {
            return Err(ServerError::Api(
                StatusCode::BAD_REQUEST,
                "Provide either a saved bank name or an inline setup".into(),
            ));
        }
    };

    let view = state
        .get_sessions()
        .start(&bank, bank_name, request.players)?;

    Ok((StatusCode::CREATED, Json(view)))
}

async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServerError> {
    let view = state.get_sessions().view(&id)?;
    Ok((StatusCode::OK, Json(view)))
}

async fn end_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServerError> {
    state.get_sessions().end(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn reveal_question(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<QuestionRef>,
) -> Result<impl IntoResponse, ServerError> {
    let outcome = state
        .get_sessions()
        .with_session(&id, |game| {
            game.reveal_question(&request.category, request.index)
        })?;

    Ok((StatusCode::OK, Json(outcome)))
}

async fn award_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<AwardRequest>,
) -> Result<impl IntoResponse, ServerError> {
    let score = state.get_sessions().with_session(&id, |game| {
        game.award_points(&request.category, request.index, &request.player)
    })?;

    let response = PlayerScore {
        name: request.player,
        score,
    };

    Ok((StatusCode::OK, Json(response)))
}

async fn decline_award(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<QuestionRef>,
) -> Result<impl IntoResponse, ServerError> {
    state
        .get_sessions()
        .with_session(&id, |game| {
            game.decline_award(&request.category, request.index)
        })?;

    Ok((StatusCode::OK, Json(json!({ "locked": true }))))
}

async fn get_scores(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServerError> {
    let scores = state
        .get_sessions()
        .with_session(&id, |game| Ok(PlayerScore::collect(game)))?;

    Ok((StatusCode::OK, Json(scores)))
}

async fn edit_score(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<ScoreEditRequest>,
) -> Result<impl IntoResponse, ServerError> {
    let score = state.get_sessions().with_session(&id, |game| {
        game.set_score_directly(&request.player, &request.score)
    })?;

    let response = PlayerScore {
        name: request.player,
        score,
    };

    Ok((StatusCode::OK, Json(response)))
}
