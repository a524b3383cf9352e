use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{debug, error};

use crate::{error::ApiError, state::AppState};
use shared::models::game::{Game, PlayerColor};
use shared::models::requests::{CreateGameRequest, ImportGameRequest, MoveRequest};
use shared::services::errors::game_service_errors::GameServiceError;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/games", post(create_game))
        .route("/games/import", post(import_game))
        .route("/games/cleanup", delete(cleanup))
        .route("/games/{id}", get(get_game))
        .route("/games/{id}/moves", get(get_moves))
        .route("/games/{id}/move", post(make_move))
}

async fn create_game(
    State(state): State<AppState>,
    Json(payload): Json<CreateGameRequest>,
) -> Result<Json<Game>, ApiError> {
    state
        .game_service
        .create_game(
            &payload.player_color,
            payload.white_clock_seconds,
            payload.black_clock_seconds,
        )
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to create game: {}", e);
            ApiError::from(e)
        })
}

async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Game>, ApiError> {
    state
        .game_service
        .get_game(&id)
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to retrieve game {}: {}", id, e);
            ApiError::from(e)
        })
}

async fn get_moves(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    state
        .game_service
        .get_moves(&id)
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to list moves for game {}: {}", id, e);
            ApiError::from(e)
        })
}

async fn make_move(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<MoveRequest>,
) -> Result<Json<Game>, ApiError> {
    let acting_color = match &payload.player_color {
        Some(raw) => Some(PlayerColor::parse(raw).ok_or_else(|| {
            ApiError::from(GameServiceError::ValidationError(
                "Color must be 'WHITE' or 'BLACK'".to_string(),
            ))
        })?),
        None => None,
    };

    state
        .game_service
        .apply_move(&id, &payload.notation, acting_color)
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to apply move to game {}: {}", id, e);
            ApiError::from(e)
        })
}

async fn import_game(
    State(state): State<AppState>,
    Json(payload): Json<ImportGameRequest>,
) -> Result<Json<Game>, ApiError> {
    state
        .game_service
        .import_from_pgn(
            &payload.pgn,
            payload.white_clock_seconds,
            payload.black_clock_seconds,
        )
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to import game: {}", e);
            ApiError::from(e)
        })
}

async fn cleanup(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.game_service.cleanup().await.map_err(|e| {
        error!("Failed to delete games: {}", e);
        ApiError::from(e)
    })?;
    debug!("All games deleted");
    Ok(StatusCode::NO_CONTENT)
}
