//! Error types for helpgen-core

use thiserror::Error;

/// Result type alias using the library's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for helpgen-core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Help subject resolution errors
    #[error("{0}")]
    Subject(#[from] SubjectError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Return a one-line usage hint when available.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::Subject(err) => Some(err.hint()),
            Self::Config(ConfigError::FileNotFound(_)) => {
                Some("Check the --config path or remove the flag to use defaults.".to_string())
            }
            _ => None,
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Explicitly requested config file does not exist
    #[error("Config file not found: {0}")]
    FileNotFound(String),

    /// Config file exists but could not be read
    #[error("Failed to read {0}: {1}")]
    ReadFailed(String, String),

    /// Config file content is not valid TOML for the expected schema
    #[error("Failed to parse config: {0}")]
    ParseFailed(String),
}

/// Help subject resolution errors
#[derive(Error, Debug)]
pub enum SubjectError {
    /// No command in the catalog matches the requested help subject.
    ///
    /// This is the one error-bearing boundary around the layout core: it
    /// must propagate to the caller and produce a non-zero process outcome.
    #[error("No help topic found for \"{0}\"")]
    NotFound(String),
}

impl SubjectError {
    /// One-line hint for resolving the error.
    #[must_use]
    pub fn hint(&self) -> String {
        match self {
            Self::NotFound(_) => {
                "Run the command without a subject to list available topics.".to_string()
            }
        }
    }
}
