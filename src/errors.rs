use thiserror::Error;

// Failures of the remote greet capability
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActorError {
    #[error("Call error: {0}")]
    Call(String),

    #[error("Actor rejected call: {0}")]
    Rejected(String),

    #[error("Codec error: {0}")]
    Codec(String),
}

impl From<rmp_serde::encode::Error> for ActorError {
    fn from(err: rmp_serde::encode::Error) -> Self {
        ActorError::Codec(err.to_string())
    }
}

impl From<rmp_serde::decode::Error> for ActorError {
    fn from(err: rmp_serde::decode::Error) -> Self {
        ActorError::Codec(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("Missing element: {0}")]
    MissingElement(String),

    #[error("Element is not an input: {0}")]
    NotAnInput(String),

    #[error("No async runtime to dispatch click on {0}")]
    NoRuntime(String),
}

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Actor(#[from] ActorError),

    #[error(transparent)]
    Page(#[from] PageError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid element ids: {0}")]
    Parse(#[from] serde_json::Error),
}
