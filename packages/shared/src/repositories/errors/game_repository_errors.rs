#[derive(Debug)]
pub enum GameRepositoryError {
    Serialization(String),
    DynamoDb(String),
    VersionConflict,
}

impl std::fmt::Display for GameRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameRepositoryError::Serialization(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            GameRepositoryError::DynamoDb(msg) => write!(f, "DynamoDB error: {}", msg),
            GameRepositoryError::VersionConflict => {
                write!(f, "Game was modified by a concurrent request")
            }
        }
    }
}

impl std::error::Error for GameRepositoryError {}
