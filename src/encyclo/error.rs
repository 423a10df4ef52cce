use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncycloError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    #[error("An article with this title already exists: {0}")]
    DuplicateTitle(String),

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("Wrong password")]
    WrongPassword,

    #[error("Article not found: {0}")]
    NotFound(String),

    #[error("Storage unavailable: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, EncycloError>;
