use thiserror::Error;
use std::io;

#[derive(Debug, Error)]
pub enum SynapseError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Malformed response document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Response is missing expected field: {0}")]
    MissingField(&'static str),

    #[error("IO error occurred: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}
