use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlashcardError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for FlashcardError {
    fn from(error: std::io::Error) -> Self {
        FlashcardError::Io(Box::new(error))
    }
}
