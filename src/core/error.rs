use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed classifier response: {0}")]
    MalformedResponse(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RouteError>;
