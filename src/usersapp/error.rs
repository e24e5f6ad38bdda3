use thiserror::Error;

#[derive(Error, Debug)]
pub enum UsersError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("Input closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, UsersError>;
