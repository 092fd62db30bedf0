use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors raised while reading entries, attributes or content from a source.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// The entry could not be read at all.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The entry exists but does not carry the requested attribute.
    #[error("Missing attribute '{key}' on {path}")]
    MissingAttribute { path: PathBuf, key: String },
}

impl ConnectorError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| ConnectorError::Io { path, source }
    }
}
