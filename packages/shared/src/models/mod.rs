pub mod game;
pub mod requests;
pub mod responses;
