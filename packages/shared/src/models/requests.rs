use serde::{Deserialize, Serialize};

use crate::models::game::DEFAULT_CLOCK_SECONDS;

fn default_clock_seconds() -> i64 {
    DEFAULT_CLOCK_SECONDS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGameRequest {
    pub player_color: String, // "WHITE" or "BLACK"
    #[serde(default = "default_clock_seconds")]
    pub white_clock_seconds: i64,
    #[serde(default = "default_clock_seconds")]
    pub black_clock_seconds: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    #[serde(rename = "move")]
    pub notation: String, // e.g. "e2e4", "e7e8q"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportGameRequest {
    pub pgn: String,
    #[serde(default = "default_clock_seconds")]
    pub white_clock_seconds: i64,
    #[serde(default = "default_clock_seconds")]
    pub black_clock_seconds: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults_clocks() {
        let request: CreateGameRequest =
            serde_json::from_str(r#"{"player_color": "WHITE"}"#).unwrap();

        assert_eq!(request.player_color, "WHITE");
        assert_eq!(request.white_clock_seconds, 300);
        assert_eq!(request.black_clock_seconds, 300);
    }

    #[test]
    fn test_create_request_explicit_clocks() {
        let request: CreateGameRequest = serde_json::from_str(
            r#"{"player_color": "BLACK", "white_clock_seconds": 60, "black_clock_seconds": 90}"#,
        )
        .unwrap();

        assert_eq!(request.white_clock_seconds, 60);
        assert_eq!(request.black_clock_seconds, 90);
    }

    #[test]
    fn test_move_request_uses_move_key() {
        let request: MoveRequest = serde_json::from_str(r#"{"move": "e2e4"}"#).unwrap();

        assert_eq!(request.notation, "e2e4");
        assert!(request.player_color.is_none());
    }

    #[test]
    fn test_move_request_with_acting_color() {
        let request: MoveRequest =
            serde_json::from_str(r#"{"move": "e7e5", "player_color": "BLACK"}"#).unwrap();

        assert_eq!(request.player_color.as_deref(), Some("BLACK"));
    }

    #[test]
    fn test_import_request_defaults_clocks() {
        let request: ImportGameRequest =
            serde_json::from_str(r#"{"pgn": "1. e2e4 e7e5"}"#).unwrap();

        assert_eq!(request.pgn, "1. e2e4 e7e5");
        assert_eq!(request.white_clock_seconds, 300);
        assert_eq!(request.black_clock_seconds, 300);
    }
}
