use chess::{BoardStatus, ChessMove, Color, Game, MoveGen, Piece};

use crate::models::game::PlayerColor;
use crate::services::errors::chess_service_errors::ChessServiceError;

/// Adapter over the `chess` crate. All rule decisions (legality, mate,
/// stalemate, claimable draws) are delegated here; callers never look at
/// board internals directly.
#[derive(Clone)]
pub struct ChessService;

impl ChessService {
    pub fn new() -> Self {
        ChessService
    }

    /// Fresh game in the canonical starting position.
    pub fn new_game(&self) -> Game {
        Game::new()
    }

    /// Rebuilds the position by replaying the stored move history from the
    /// starting position. A token that no longer resolves against the board
    /// it was recorded on means the history is corrupt.
    pub fn replay(&self, moves: &[String]) -> Result<Game, ChessServiceError> {
        let mut game = Game::new();
        for notation in moves {
            let chess_move = self.resolve_move(&game, notation).map_err(|_| {
                ChessServiceError::IllegalMoveInHistory(notation.clone())
            })?;
            self.apply_move(&mut game, chess_move)?;
        }
        Ok(game)
    }

    /// Resolves a wire-form token (`e2e4`, `e7e8q`) against the legal moves
    /// of the current position. Matching is an exact, case-insensitive token
    /// comparison; there is no fuzzy or partial matching.
    pub fn resolve_move(
        &self,
        game: &Game,
        notation: &str,
    ) -> Result<ChessMove, ChessServiceError> {
        let wanted = notation.trim().to_ascii_lowercase();
        let board = game.current_position();
        MoveGen::new_legal(&board)
            .find(|m| Self::move_token(m) == wanted)
            .ok_or_else(|| ChessServiceError::IllegalMove(notation.trim().to_string()))
    }

    pub fn apply_move(
        &self,
        game: &mut Game,
        chess_move: ChessMove,
    ) -> Result<(), ChessServiceError> {
        if !game.make_move(chess_move) {
            return Err(ChessServiceError::IllegalMove(Self::move_token(&chess_move)));
        }
        Ok(())
    }

    /// Canonical wire form of a move: origin square, destination square, and
    /// the lowercase promotion piece letter when present.
    pub fn move_token(chess_move: &ChessMove) -> String {
        let mut token = format!("{}{}", chess_move.get_source(), chess_move.get_dest());
        if let Some(piece) = chess_move.get_promotion() {
            match piece {
                Piece::Queen => token.push('q'),
                Piece::Rook => token.push('r'),
                Piece::Bishop => token.push('b'),
                Piece::Knight => token.push('n'),
                // Move generation never promotes to a pawn or king.
                Piece::Pawn | Piece::King => {}
            }
        }
        token
    }

    pub fn legal_moves(&self, game: &Game) -> Vec<String> {
        let board = game.current_position();
        MoveGen::new_legal(&board)
            .map(|m| Self::move_token(&m))
            .collect()
    }

    pub fn is_mated(&self, game: &Game) -> bool {
        game.current_position().status() == BoardStatus::Checkmate
    }

    pub fn is_stalemate(&self, game: &Game) -> bool {
        game.current_position().status() == BoardStatus::Stalemate
    }

    /// Claimable draw on the current position: threefold repetition or the
    /// fifty-move rule. Detection is reactive; nothing is offered to players.
    pub fn is_draw(&self, game: &Game) -> bool {
        game.can_declare_draw()
    }

    pub fn is_in_check(&self, game: &Game) -> bool {
        game.current_position().checkers().popcnt() > 0
    }

    pub fn side_to_move(&self, game: &Game) -> PlayerColor {
        match game.side_to_move() {
            Color::White => PlayerColor::White,
            Color::Black => PlayerColor::Black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess::Board;
    use std::str::FromStr;

    fn moves(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_starting_position_has_twenty_legal_moves() {
        let chess_service = ChessService::new();
        let game = chess_service.new_game();

        let legal_moves = chess_service.legal_moves(&game);

        assert_eq!(legal_moves.len(), 20);
        assert!(legal_moves.contains(&"e2e3".to_string()));
        assert!(legal_moves.contains(&"d2d4".to_string()));
        assert!(legal_moves.contains(&"b1c3".to_string()));
    }

    #[test]
    fn test_resolve_move_is_case_insensitive() {
        let chess_service = ChessService::new();
        let game = chess_service.new_game();

        let chess_move = chess_service.resolve_move(&game, " E2E4 ").unwrap();

        assert_eq!(ChessService::move_token(&chess_move), "e2e4");
    }

    #[test]
    fn test_resolve_move_rejects_illegal_token() {
        let chess_service = ChessService::new();
        let game = chess_service.new_game();

        let result = chess_service.resolve_move(&game, "e2e5");

        match result.unwrap_err() {
            ChessServiceError::IllegalMove(token) => assert_eq!(token, "e2e5"),
            other => panic!("Expected IllegalMove, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_move_with_promotion() {
        let chess_service = ChessService::new();
        let board = Board::from_str("8/P7/8/8/8/8/8/K6k w - - 0 1").unwrap();
        let game = Game::new_with_board(board);

        let chess_move = chess_service.resolve_move(&game, "a7a8q").unwrap();

        assert_eq!(ChessService::move_token(&chess_move), "a7a8q");
    }

    #[test]
    fn test_replay_fools_mate_is_checkmate() {
        let chess_service = ChessService::new();
        let history = moves(&["f2f3", "e7e5", "g2g4", "d8h4"]);

        let game = chess_service.replay(&history).unwrap();

        assert!(chess_service.is_mated(&game));
        assert!(chess_service.is_in_check(&game));
        assert_eq!(chess_service.side_to_move(&game), PlayerColor::White);
    }

    #[test]
    fn test_replay_rejects_corrupt_history() {
        let chess_service = ChessService::new();
        let history = moves(&["e2e4", "e2e4"]);

        let result = chess_service.replay(&history);

        match result.unwrap_err() {
            ChessServiceError::IllegalMoveInHistory(token) => assert_eq!(token, "e2e4"),
            other => panic!("Expected IllegalMoveInHistory, got {:?}", other),
        }
    }

    #[test]
    fn test_replay_is_idempotent() {
        let chess_service = ChessService::new();
        let history = moves(&["e2e4", "e7e5", "g1f3", "b8c6"]);

        let first = chess_service.replay(&history).unwrap();
        let second = chess_service.replay(&history).unwrap();

        assert_eq!(
            chess_service.legal_moves(&first),
            chess_service.legal_moves(&second)
        );
        assert_eq!(
            chess_service.side_to_move(&first),
            chess_service.side_to_move(&second)
        );
    }

    #[test]
    fn test_stalemate_detection() {
        let chess_service = ChessService::new();
        // Black to move with no legal move and no check.
        let board = Board::from_str("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        let game = Game::new_with_board(board);

        assert!(chess_service.is_stalemate(&game));
        assert!(!chess_service.is_mated(&game));
        assert!(!chess_service.is_in_check(&game));
    }

    #[test]
    fn test_side_to_move_alternates() {
        let chess_service = ChessService::new();
        let mut game = chess_service.new_game();

        assert_eq!(chess_service.side_to_move(&game), PlayerColor::White);

        let chess_move = chess_service.resolve_move(&game, "e2e4").unwrap();
        chess_service.apply_move(&mut game, chess_move).unwrap();

        assert_eq!(chess_service.side_to_move(&game), PlayerColor::Black);
    }
}
