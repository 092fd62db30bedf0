use crate::{
    error::ConnectorError,
    source::{AttributeSource, is_hidden},
};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Namespace the filesystem publishes its attributes under.
pub const DEFAULT_XATTR_PREFIX: &str = "user.sqlfuse.";

/// Reads a mounted table directory through extended file attributes.
#[derive(Debug, Clone)]
pub struct XattrSource {
    prefix: String,
}

impl XattrSource {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[inline]
    fn attr_name(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

impl Default for XattrSource {
    fn default() -> Self {
        Self::new(DEFAULT_XATTR_PREFIX)
    }
}

impl AttributeSource for XattrSource {
    fn attribute(&self, path: &Path, key: &str) -> Result<Vec<u8>, ConnectorError> {
        let name = self.attr_name(key);
        match xattr::get(path, &name).map_err(ConnectorError::io(path))? {
            Some(value) => Ok(value),
            None => Err(ConnectorError::MissingAttribute {
                path: path.to_path_buf(),
                key: name,
            }),
        }
    }

    fn entries(&self, dir: &Path) -> Result<Vec<PathBuf>, ConnectorError> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(ConnectorError::io(dir))? {
            let entry = entry.map_err(ConnectorError::io(dir))?;
            let path = entry.path();
            if !is_hidden(&path) {
                paths.push(path);
            }
        }

        paths.sort();
        Ok(paths)
    }

    fn read_text(&self, path: &Path) -> Result<String, ConnectorError> {
        fs::read_to_string(path).map_err(ConnectorError::io(path))
    }
}
