use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use crate::{bank::store::BankStoreError, game::error::GameError};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("{1}")]
    Api(StatusCode, String),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    BankStore(#[from] BankStoreError),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Api(status, _) => *status,
            ServerError::Game(e) => match e {
                GameError::InvalidConfiguration(_) | GameError::InvalidInput(_) => {
                    StatusCode::BAD_REQUEST
                }
                GameError::NotFound(_) => StatusCode::NOT_FOUND,
                GameError::AlreadyLocked { .. } | GameError::InvalidState { .. } => {
                    StatusCode::CONFLICT
                }
            },
            ServerError::BankStore(e) => match e {
                BankStoreError::InvalidName(_) => StatusCode::BAD_REQUEST,
                BankStoreError::NotFound(_) => StatusCode::NOT_FOUND,
                BankStoreError::Serialize(_) => StatusCode::UNPROCESSABLE_ENTITY,
                BankStoreError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            error!("{}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
