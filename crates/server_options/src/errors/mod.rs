/// Result type for the fallible edges of the crate
pub type ServerOptionsResult<T> = Result<T, ServerOptionsError>;

/// Errors raised while loading raw options or building access policies.
///
/// Option resolution itself never fails; these cover the surrounding I/O
/// and pattern compilation.
#[derive(thiserror::Error, Debug)]
pub enum ServerOptionsError {
    #[error("Config file does not exist: {path}")]
    ConfigNotFound { path: String },
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid deny pattern {pattern:?}: {source}")]
    InvalidDenyPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
    /// Logging initialization failed
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
    #[error("Failed to serialize resolved options: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
