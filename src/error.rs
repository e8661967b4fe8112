//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("AI provider error: {0}")]
    AiProvider(String),

    #[error("Music catalog error: {0}")]
    Catalog(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(String),

    #[error("Invariant violation: {0}")]
    Invariant(String),
}

pub type Result<T> = std::result::Result<T, Error>;
