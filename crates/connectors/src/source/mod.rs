//! Sources of table-directory metadata: entries, extended attributes and
//! file content.

use crate::error::ConnectorError;
use model::core::object_type::ObjectType;
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

/// Attribute holding an entry's object type tag.
pub const TYPE_ATTR: &str = "type";

/// Attribute holding a column's ordinal position.
pub const COLUMN_ID_ATTR: &str = "column_id";

pub trait AttributeSource {
    /// Reads one attribute by its logical key (without namespace).
    /// An absent attribute is [`ConnectorError::MissingAttribute`].
    fn attribute(&self, path: &Path, key: &str) -> Result<Vec<u8>, ConnectorError>;

    /// Lists the direct children of `dir`, hidden entries excluded, sorted by
    /// name.
    fn entries(&self, dir: &Path) -> Result<Vec<PathBuf>, ConnectorError>;

    /// Reads the full text content of an entry.
    fn read_text(&self, path: &Path) -> Result<String, ConnectorError>;

    /// Reads and decodes the entry's [`TYPE_ATTR`].
    fn object_type(&self, path: &Path) -> Result<ObjectType, ConnectorError> {
        let raw = self.attribute(path, TYPE_ATTR)?;
        Ok(ObjectType::from_tag(&raw))
    }
}

pub(crate) fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}
