use crate::{
    error::ConnectorError,
    source::{AttributeSource, is_hidden},
};
use std::{
    collections::{BTreeMap, HashMap},
    io,
    path::{Path, PathBuf},
};

/// One entry of an in-memory snapshot.
#[derive(Debug, Clone, Default)]
pub struct MemoryEntry {
    attributes: HashMap<String, Vec<u8>>,
    content: String,
}

impl MemoryEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl AsRef<[u8]>) -> Self {
        self.attributes.insert(key.into(), value.as_ref().to_vec());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}

/// A snapshot of a table directory held in memory, keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: BTreeMap<PathBuf, MemoryEntry>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, entry: MemoryEntry) {
        self.entries.insert(path.into(), entry);
    }

    pub fn with_entry(mut self, path: impl Into<PathBuf>, entry: MemoryEntry) -> Self {
        self.insert(path, entry);
        self
    }

    fn get(&self, path: &Path) -> Result<&MemoryEntry, ConnectorError> {
        self.entries.get(path).ok_or_else(|| ConnectorError::Io {
            path: path.to_path_buf(),
            source: io::Error::from(io::ErrorKind::NotFound),
        })
    }
}

impl AttributeSource for MemorySource {
    fn attribute(&self, path: &Path, key: &str) -> Result<Vec<u8>, ConnectorError> {
        self.get(path)?
            .attributes
            .get(key)
            .cloned()
            .ok_or_else(|| ConnectorError::MissingAttribute {
                path: path.to_path_buf(),
                key: key.to_string(),
            })
    }

    fn entries(&self, dir: &Path) -> Result<Vec<PathBuf>, ConnectorError> {
        self.get(dir)?;

        Ok(self
            .entries
            .keys()
            .filter(|path| path.parent() == Some(dir) && !is_hidden(path))
            .cloned()
            .collect())
    }

    fn read_text(&self, path: &Path) -> Result<String, ConnectorError> {
        Ok(self.get(path)?.content.clone())
    }
}
