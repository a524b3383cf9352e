pub mod chess_service_errors;
pub mod game_service_errors;
