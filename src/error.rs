use std::io;

use thiserror::Error;

/// Failures outside the game itself: terminal, files and logging
#[derive(Debug, Error)]
pub enum PickPackError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("config serialization failed: {0}")]
    Config(#[from] serde_json::Error),

    #[error("could not install logger: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, PickPackError>;
