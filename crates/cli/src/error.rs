use connectors::metadata::MetadataError;
use settings::error::SettingsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Settings(#[from] SettingsError),

    #[error("Failed to load table metadata: {0}")]
    Metadata(#[from] MetadataError),

    #[error("Failed to write the definition to {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write the definition to stdout: {0}")]
    Stdout(#[from] std::io::Error),
}
