use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::models::responses::ErrorResponse;
use shared::services::errors::game_service_errors::GameServiceError;

#[derive(Debug)]
pub enum ApiError {
    GameService(GameServiceError),
}

impl From<GameServiceError> for ApiError {
    fn from(error: GameServiceError) -> Self {
        ApiError::GameService(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::GameService(error) = self;

        let (status, message) = match &error {
            GameServiceError::ValidationError(_)
            | GameServiceError::GameNotActive
            | GameServiceError::IllegalMove(_) => (StatusCode::BAD_REQUEST, error.to_string()),

            GameServiceError::GameNotFound => (StatusCode::NOT_FOUND, error.to_string()),

            GameServiceError::Conflict => (StatusCode::CONFLICT, error.to_string()),

            // Internal failures come back well-formed but opaque.
            GameServiceError::IllegalMoveInHistory(_) | GameServiceError::RepositoryError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
