//! Table metadata reconstructed from a table directory.

use crate::core::utils::{bracket_ident, char_len};
use std::fmt;

/// Token a column file uses in place of the column's own name.
pub const COLUMN_PLACEHOLDER: &str = "COLUMN";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TableRef {
    pub schema: String,
    pub name: String,
}

impl TableRef {
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", bracket_ident(&self.schema), bracket_ident(&self.name))
    }
}

/// A `DEFAULT ... FOR [column]` constraint attached to one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultConstraint {
    /// Constraint name, i.e. the name of the file it was read from.
    pub name: String,
    /// Column the constraint targets.
    pub column: String,
    /// Default value expression, verbatim.
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub ordinal: i64,
    pub name: String,
    /// File content, with [`COLUMN_PLACEHOLDER`] standing in for the name.
    pub raw_text: String,
    pub default: Option<DefaultConstraint>,
}

impl Column {
    pub fn new(ordinal: i64, name: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            ordinal,
            name: name.into(),
            raw_text: raw_text.into(),
            default: None,
        }
    }

    /// The column definition with the placeholder replaced by the bracketed
    /// name and a single trailing newline removed.
    pub fn definition(&self) -> String {
        let text = self
            .raw_text
            .replace(COLUMN_PLACEHOLDER, &bracket_ident(&self.name));

        match text.strip_suffix('\n') {
            Some(stripped) => stripped.to_string(),
            None => text,
        }
    }
}

/// Columns of one table in ascending ordinal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDef {
    pub table: TableRef,
    columns: Vec<Column>,
    width: usize,
}

impl TableDef {
    /// Builds the table from columns in any order. Ordinals are expected to be
    /// unique; ties keep their relative input order.
    pub fn new(table: TableRef, mut columns: Vec<Column>) -> Self {
        columns.sort_by_key(|c| c.ordinal);
        let width = columns
            .iter()
            .map(|c| char_len(&c.definition()))
            .max()
            .unwrap_or(0);

        Self {
            table,
            columns,
            width,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Longest column definition, in characters.
    pub fn width(&self) -> usize {
        self.width
    }
}
