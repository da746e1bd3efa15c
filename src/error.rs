//! Error types for Afinar

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tokenizer has no vocabulary (fit it on a corpus first)")]
    TokenizerNotFitted,

    #[error("Empty reference tokens for tool-invocation example at index {0}")]
    EmptyReference(usize),

    #[error("Sample has no answers")]
    MissingAnswer,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
