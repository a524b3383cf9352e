use crate::repositories::errors::game_repository_errors::GameRepositoryError;
use crate::services::errors::chess_service_errors::ChessServiceError;

#[derive(Debug)]
pub enum GameServiceError {
    ValidationError(String),
    GameNotFound,
    GameNotActive,
    IllegalMove(String),
    IllegalMoveInHistory(String),
    Conflict,
    RepositoryError(String),
}

impl std::fmt::Display for GameServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            GameServiceError::GameNotFound => write!(f, "Game not found"),
            GameServiceError::GameNotActive => write!(f, "Game is no longer active"),
            GameServiceError::IllegalMove(token) => write!(f, "Illegal move: {}", token),
            GameServiceError::IllegalMoveInHistory(token) => {
                write!(f, "Illegal move in stored history: {}", token)
            }
            GameServiceError::Conflict => {
                write!(f, "Game was modified by a concurrent request")
            }
            GameServiceError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for GameServiceError {}

impl From<GameRepositoryError> for GameServiceError {
    fn from(err: GameRepositoryError) -> Self {
        match err {
            GameRepositoryError::VersionConflict => GameServiceError::Conflict,
            other => GameServiceError::RepositoryError(other.to_string()),
        }
    }
}

impl From<ChessServiceError> for GameServiceError {
    fn from(err: ChessServiceError) -> Self {
        match err {
            ChessServiceError::IllegalMove(token) => GameServiceError::IllegalMove(token),
            ChessServiceError::IllegalMoveInHistory(token) => {
                GameServiceError::IllegalMoveInHistory(token)
            }
        }
    }
}
