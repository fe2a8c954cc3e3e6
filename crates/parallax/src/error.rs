use thiserror::Error;

use pcss::PcssError;

#[derive(Error, Debug)]
pub enum ParallaxError {
    #[error("Log file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    InvalidConfig(#[from] PcssError),

    #[error("A logger was already installed")]
    LoggerAlreadySet(#[from] log::SetLoggerError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, ParallaxError>;
