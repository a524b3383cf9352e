use std::fmt;

#[derive(Debug)]
pub enum ChessServiceError {
    IllegalMove(String),
    IllegalMoveInHistory(String),
}

impl fmt::Display for ChessServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChessServiceError::IllegalMove(token) => write!(f, "Illegal move: {}", token),
            ChessServiceError::IllegalMoveInHistory(token) => {
                write!(f, "Illegal move in stored history: {}", token)
            }
        }
    }
}

impl std::error::Error for ChessServiceError {}
