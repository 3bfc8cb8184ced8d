#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Question {index} in '{category}' is already locked")]
    AlreadyLocked { category: String, index: usize },

    #[error("Question {index} in '{category}' is {status}, expected revealed")]
    InvalidState {
        category: String,
        index: usize,
        status: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
