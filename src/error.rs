use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("game view is not active")]
    GameInactive,
    #[error("select a color to play")]
    NoColorSelected,
    #[error("unknown color: {0}")]
    UnknownColor(String),
    #[error("unknown stake: {0}")]
    UnknownStake(String),
}

impl GameError {
    pub fn status(&self) -> StatusCode {
        match self {
            GameError::GameInactive | GameError::NoColorSelected => StatusCode::CONFLICT,
            GameError::UnknownColor(_) | GameError::UnknownStake(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
