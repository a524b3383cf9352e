use std::sync::Arc;

use chrono::Utc;

use crate::{
    models::game::{Game, GameStatus, PlayerColor, Winner},
    repositories::game_repository::GameRepository,
    services::{
        chess_service::ChessService,
        clock_service::{ClockOutcome, ClockService},
        errors::game_service_errors::GameServiceError,
        pgn_service::PgnService,
    },
};

/// Orchestrates a game session: loads the record, settles the clocks,
/// rebuilds the position from history, applies the submitted move and
/// persists the resulting state. Holds no game state of its own; every
/// request is fully parameterized by a game id.
#[derive(Clone)]
pub struct GameService {
    repository: Arc<dyn GameRepository + Send + Sync>,
    chess_service: ChessService,
    clock_service: ClockService,
}

impl GameService {
    pub fn new(repository: Arc<dyn GameRepository + Send + Sync>) -> Self {
        GameService {
            repository,
            chess_service: ChessService::new(),
            clock_service: ClockService::new(),
        }
    }

    pub async fn create_game(
        &self,
        player_color: &str,
        white_clock_seconds: i64,
        black_clock_seconds: i64,
    ) -> Result<Game, GameServiceError> {
        let color = PlayerColor::parse(player_color).ok_or_else(|| {
            GameServiceError::ValidationError("Color must be 'WHITE' or 'BLACK'".to_string())
        })?;
        if white_clock_seconds <= 0 || black_clock_seconds <= 0 {
            return Err(GameServiceError::ValidationError(
                "Clock time must be positive".to_string(),
            ));
        }

        let game = Game::new(color, white_clock_seconds as u64, black_clock_seconds as u64);
        self.repository.create_game(&game).await?;
        Ok(game)
    }

    pub async fn get_game(&self, game_id: &str) -> Result<Game, GameServiceError> {
        self.repository
            .get_game(game_id)
            .await?
            .ok_or(GameServiceError::GameNotFound)
    }

    pub async fn get_moves(&self, game_id: &str) -> Result<Vec<String>, GameServiceError> {
        Ok(self.get_game(game_id).await?.moves)
    }

    /// Applies one move to an active game.
    ///
    /// Clock time is settled before the move is even looked at: elapsed wall
    /// time reflects reality no matter what the request contains, and a move
    /// arriving after the flag fell ends the game instead of being played.
    pub async fn apply_move(
        &self,
        game_id: &str,
        move_notation: &str,
        acting_color: Option<PlayerColor>,
    ) -> Result<Game, GameServiceError> {
        let mut game = self.get_game(game_id).await?;

        if move_notation.trim().is_empty() {
            return Err(GameServiceError::ValidationError(
                "Move cannot be empty".to_string(),
            ));
        }
        if !game.is_active() {
            return Err(GameServiceError::GameNotActive);
        }

        let expected_version = game.version;
        match self.clock_service.advance(&mut game, Utc::now()) {
            ClockOutcome::TimedOut => {
                // The pending move is discarded, not applied.
                self.save(&mut game, expected_version).await?;
                return Ok(game);
            }
            ClockOutcome::Running => {}
        }

        if let Some(color) = acting_color {
            if color != game.turn {
                return Err(GameServiceError::ValidationError(
                    "Not your turn".to_string(),
                ));
            }
        }

        let mut board = self.chess_service.replay(&game.moves)?;
        let chess_move = self.chess_service.resolve_move(&board, move_notation)?;
        let token = ChessService::move_token(&chess_move);
        self.chess_service.apply_move(&mut board, chess_move)?;

        game.moves.push(token);
        game.pgn = PgnService::synthesize(&game.moves);

        self.evaluate_game_state(&board, &mut game);
        if game.is_active() {
            game.switch_turn();
        }

        self.save(&mut game, expected_version).await?;
        Ok(game)
    }

    /// Creates a game directly in a non-initial position by replaying an
    /// externally supplied transcript. The import is atomic: nothing is
    /// persisted unless every token resolves.
    pub async fn import_from_pgn(
        &self,
        pgn: &str,
        white_clock_seconds: i64,
        black_clock_seconds: i64,
    ) -> Result<Game, GameServiceError> {
        if pgn.trim().is_empty() {
            return Err(GameServiceError::ValidationError(
                "PGN cannot be empty".to_string(),
            ));
        }
        if white_clock_seconds < 0 || black_clock_seconds < 0 {
            return Err(GameServiceError::ValidationError(
                "Clock time cannot be negative".to_string(),
            ));
        }

        let tokens = PgnService::parse(pgn);
        let mut board = self.chess_service.new_game();
        let mut canonical_moves = Vec::with_capacity(tokens.len());
        for token in &tokens {
            let chess_move = self
                .chess_service
                .resolve_move(&board, token)
                .map_err(|_| GameServiceError::IllegalMove(token.clone()))?;
            canonical_moves.push(ChessService::move_token(&chess_move));
            self.chess_service.apply_move(&mut board, chess_move)?;
        }

        let mut game = Game::new(
            PlayerColor::White,
            white_clock_seconds as u64,
            black_clock_seconds as u64,
        );
        game.moves = canonical_moves;
        game.pgn = PgnService::synthesize(&game.moves);
        game.turn = self.chess_service.side_to_move(&board);
        self.evaluate_game_state(&board, &mut game);

        self.repository.create_game(&game).await?;
        Ok(game)
    }

    pub async fn cleanup(&self) -> Result<(), GameServiceError> {
        self.repository.delete_all_games().await?;
        Ok(())
    }

    /// Terminal conditions are checked in fixed priority order; the first
    /// match wins. Mate is credited to the side that just moved.
    fn evaluate_game_state(&self, board: &chess::Game, game: &mut Game) {
        if self.chess_service.is_mated(board) {
            game.winner = match self.chess_service.side_to_move(board) {
                PlayerColor::White => Winner::Black,
                PlayerColor::Black => Winner::White,
            };
            game.status = GameStatus::Mate;
        } else if self.chess_service.is_stalemate(board) {
            game.winner = Winner::Draw;
            game.status = GameStatus::Stalemate;
        } else if self.chess_service.is_draw(board) {
            game.winner = Winner::Draw;
            game.status = GameStatus::Draw;
        }
    }

    async fn save(&self, game: &mut Game, expected_version: u64) -> Result<(), GameServiceError> {
        game.version = expected_version + 1;
        self.repository.save_game(game, expected_version).await?;
        Ok(())
    }
}
