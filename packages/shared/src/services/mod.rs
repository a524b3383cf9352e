pub mod chess_service;
pub mod clock_service;
pub mod errors;
pub mod game_service;
pub mod pgn_service;
