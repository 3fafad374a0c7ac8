use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CarouselError {
    #[error("carousel needs at least one slide")]
    Empty,
    #[error("invalid carousel config: {0}")]
    InvalidConfig(String),
    #[error("carousel driver is not running")]
    Stopped,
    #[error("carousel driver task failed: {0}")]
    Driver(String),
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },
}
