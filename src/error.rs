use thiserror::Error;

#[derive(Error, Debug)]
pub enum MastermindError {
    #[error("Code length mismatch: expected {expected} symbols, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Requested {requested} symbols but the pool only holds {available}")]
    OutOfRange { requested: usize, available: usize },

    #[error("Symbol '{0}' appears more than once in the pool")]
    DuplicateSymbol(char),

    #[error("Invalid feedback '{input}': {reason}")]
    InvalidFeedback { input: String, reason: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, MastermindError>;
