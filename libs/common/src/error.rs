use thiserror::Error;

/// Basic library error type
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Logging setup error
    #[error("Logging error: {0}")]
    Logging(String),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Error result type
pub type Result<T> = std::result::Result<T, Error>;

impl From<::hex::FromHexError> for Error {
    fn from(err: ::hex::FromHexError) -> Self {
        Error::Parse(format!("invalid hex: {}", err))
    }
}
