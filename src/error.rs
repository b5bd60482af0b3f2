//! Error types for the football ETL job

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, EtlError>;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid API base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("API token not provided and {env_var} environment variable not set")]
    MissingApiToken { env_var: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidConfig { key: String, value: String },

    #[error("Could not determine a data directory for the warehouse")]
    NoDataDir,
}

impl EtlError {
    /// HTTP status carried by a non-200 API response, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            EtlError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
