use thiserror::Error;

/// Unified error type for appcast-gen operations
#[derive(Error, Debug)]
pub enum AppcastError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Release source error: {0}")]
    Source(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Release JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config file parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in appcast-gen
pub type Result<T> = std::result::Result<T, AppcastError>;

impl AppcastError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        AppcastError::Config(msg.into())
    }

    /// Create a release source error with context
    pub fn source(msg: impl Into<String>) -> Self {
        AppcastError::Source(msg.into())
    }

    /// Create a template error with context
    pub fn template(msg: impl Into<String>) -> Self {
        AppcastError::Template(msg.into())
    }
}
