use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_CLOCK_SECONDS: i64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlayerColor {
    White,
    Black,
}

impl PlayerColor {
    pub fn opposite(&self) -> PlayerColor {
        match self {
            PlayerColor::White => PlayerColor::Black,
            PlayerColor::Black => PlayerColor::White,
        }
    }

    /// Parses the wire form, accepting any casing and surrounding whitespace.
    pub fn parse(value: &str) -> Option<PlayerColor> {
        match value.trim().to_ascii_uppercase().as_str() {
            "WHITE" => Some(PlayerColor::White),
            "BLACK" => Some(PlayerColor::Black),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Active,
    Mate,
    Stalemate,
    Draw,
    Timeout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Winner {
    White,
    Black,
    Draw,
    None,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub player_color: PlayerColor,
    pub turn: PlayerColor,
    pub status: GameStatus,
    pub winner: Winner,
    pub white_clock: u64,
    pub black_clock: u64,
    pub last_move_timestamp: Option<DateTime<Utc>>,
    pub moves: Vec<String>,
    pub pgn: String,
    pub created_at: DateTime<Utc>,
    pub version: u64,
}

impl Game {
    pub fn new(player_color: PlayerColor, white_clock: u64, black_clock: u64) -> Self {
        Game {
            id: Uuid::new_v4().to_string(),
            player_color,
            turn: PlayerColor::White,
            status: GameStatus::Active,
            winner: Winner::None,
            white_clock,
            black_clock,
            last_move_timestamp: None,
            moves: vec![],
            pgn: String::new(),
            created_at: Utc::now(),
            version: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == GameStatus::Active
    }

    pub fn switch_turn(&mut self) {
        self.turn = self.turn.opposite();
    }

    /// Deducts elapsed seconds from the clock of the side on move, clamped at zero.
    pub fn update_clock(&mut self, elapsed_seconds: u64) {
        match self.turn {
            PlayerColor::White => {
                self.white_clock = self.white_clock.saturating_sub(elapsed_seconds)
            }
            PlayerColor::Black => {
                self.black_clock = self.black_clock.saturating_sub(elapsed_seconds)
            }
        }
    }

    pub fn remaining_clock(&self, color: PlayerColor) -> u64 {
        match color {
            PlayerColor::White => self.white_clock,
            PlayerColor::Black => self.black_clock,
        }
    }

    pub fn out_of_time(&self) -> bool {
        self.white_clock == 0 || self.black_clock == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_new_game_fields() {
        let game = Game::new(PlayerColor::White, 300, 300);

        assert!(!game.id.is_empty());
        assert_eq!(game.player_color, PlayerColor::White);
        assert_eq!(game.turn, PlayerColor::White);
        assert_eq!(game.status, GameStatus::Active);
        assert_eq!(game.winner, Winner::None);
        assert_eq!(game.white_clock, 300);
        assert_eq!(game.black_clock, 300);
        assert!(game.last_move_timestamp.is_none());
        assert!(game.moves.is_empty());
        assert!(game.pgn.is_empty());
        assert_eq!(game.version, 0);

        // created_at should be recent
        let now = Utc::now();
        assert!((now - game.created_at).num_seconds() < 10);
    }

    #[test]
    fn test_game_id_uniqueness() {
        let game1 = Game::new(PlayerColor::White, 300, 300);
        let game2 = Game::new(PlayerColor::White, 300, 300);

        assert_ne!(game1.id, game2.id);
    }

    #[test_case("WHITE", Some(PlayerColor::White); "white uppercase")]
    #[test_case("BLACK", Some(PlayerColor::Black); "black uppercase")]
    #[test_case("white", Some(PlayerColor::White); "white lowercase")]
    #[test_case("  Black  ", Some(PlayerColor::Black); "black padded")]
    #[test_case("GREEN", None; "invalid green")]
    #[test_case("", None; "empty string")]
    fn test_parse_player_color(input: &str, expected: Option<PlayerColor>) {
        assert_eq!(PlayerColor::parse(input), expected);
    }

    #[test]
    fn test_opposite_color() {
        assert_eq!(PlayerColor::White.opposite(), PlayerColor::Black);
        assert_eq!(PlayerColor::Black.opposite(), PlayerColor::White);
    }

    #[test]
    fn test_switch_turn() {
        let mut game = Game::new(PlayerColor::White, 300, 300);

        game.switch_turn();
        assert_eq!(game.turn, PlayerColor::Black);
        game.switch_turn();
        assert_eq!(game.turn, PlayerColor::White);
    }

    #[test]
    fn test_update_clock_deducts_side_on_move_only() {
        let mut game = Game::new(PlayerColor::White, 300, 300);

        game.update_clock(12);
        assert_eq!(game.white_clock, 288);
        assert_eq!(game.black_clock, 300);

        game.switch_turn();
        game.update_clock(7);
        assert_eq!(game.white_clock, 288);
        assert_eq!(game.black_clock, 293);
    }

    #[test]
    fn test_update_clock_clamps_at_zero() {
        let mut game = Game::new(PlayerColor::White, 5, 300);

        game.update_clock(60);

        assert_eq!(game.white_clock, 0);
        assert!(game.out_of_time());
    }

    #[test]
    fn test_enum_serialization_wire_values() {
        assert_eq!(
            serde_json::to_string(&GameStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&GameStatus::Timeout).unwrap(),
            "\"timeout\""
        );
        assert_eq!(
            serde_json::to_string(&PlayerColor::White).unwrap(),
            "\"WHITE\""
        );
        assert_eq!(serde_json::to_string(&Winner::None).unwrap(), "\"NONE\"");
        assert_eq!(serde_json::to_string(&Winner::Draw).unwrap(), "\"DRAW\"");
    }

    #[test]
    fn test_game_serialization_round_trip() {
        let mut game = Game::new(PlayerColor::Black, 60, 90);
        game.moves.push("e2e4".to_string());
        game.pgn = "1. e2e4".to_string();

        let serialized = serde_json::to_string(&game).unwrap();
        assert!(serialized.contains("\"player_color\":\"BLACK\""));
        assert!(serialized.contains("\"status\":\"active\""));

        let deserialized: Game = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized.id, game.id);
        assert_eq!(deserialized.moves, game.moves);
        assert_eq!(deserialized.white_clock, 60);
        assert_eq!(deserialized.black_clock, 90);
    }

    #[test]
    fn test_status_deserialization_rejects_unknown_value() {
        let result = serde_json::from_str::<GameStatus>("\"resigned\"");
        assert!(result.is_err());
    }
}
