//! Error types for config and data loading.

use thiserror::Error;

/// Errors that can occur when loading character config or weapon data.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },
}

/// Read and parse a RON file into `T`.
pub fn read_ron<T: serde::de::DeserializeOwned>(path: &std::path::Path) -> Result<T, ConfigError> {
    let display = path.display().to_string();

    if !path.exists() {
        return Err(ConfigError::FileNotFound(display));
    }

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: display.clone(),
        details: e.to_string(),
    })?;

    ron::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: display,
        details: e.to_string(),
    })
}
