use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when loading the configuration or resolving object paths.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Invalid object path '{0}' (expected server.database[.schema.object...])")]
    InvalidObjectPath(String),

    #[error("Unknown server '{0}'")]
    UnknownServer(String),

    #[error("Unknown database '{database}' on server '{server}'")]
    UnknownDatabase { server: String, database: String },
}
