//! Classifies the entries of a table directory into columns and default
//! constraints.

use crate::source::{AttributeSource, COLUMN_ID_ATTR};
use model::core::{
    object_type::ObjectType,
    table::{Column, DefaultConstraint, TableDef, TableRef},
};
use std::{
    collections::{BTreeMap, HashMap, btree_map::Entry},
    path::Path,
};
use tracing::{debug, trace, warn};

pub mod default;
pub mod error;

pub use default::{DefaultClause, parse_default_clause};
pub use error::MetadataError;

pub struct TableLoader<'a> {
    source: &'a dyn AttributeSource,
}

/// Column names by ordinal and default constraints by target column, as
/// collected from one pass over the directory.
#[derive(Debug, Default)]
struct Registry {
    columns: BTreeMap<i64, String>,
    defaults: HashMap<String, DefaultConstraint>,
}

impl<'a> TableLoader<'a> {
    pub fn new(source: &'a dyn AttributeSource) -> Self {
        Self { source }
    }

    /// Loads the table represented by `dir`.
    ///
    /// `dir` must be tagged as a user table or table type. Any read failure
    /// aborts the whole load.
    pub fn load(&self, dir: &Path) -> Result<TableDef, MetadataError> {
        let table = self.table_ref(dir)?;
        let registry = self.classify(dir)?;
        let columns = self.columns(dir, registry)?;

        debug!("Loaded {} with {} column(s)", table, columns.len());
        Ok(TableDef::new(table, columns))
    }

    /// Checks the directory's own type and derives `[schema].[table]` from
    /// its parent and own names.
    pub fn table_ref(&self, dir: &Path) -> Result<TableRef, MetadataError> {
        let ty = self.source.object_type(dir)?;
        if !ty.is_table() {
            return Err(MetadataError::NotATable {
                path: dir.to_path_buf(),
                found: ty.tag().to_string(),
            });
        }

        let name = file_name(dir);
        let schema = dir.parent().and_then(file_name);
        match (schema, name) {
            (Some(schema), Some(name)) => Ok(TableRef::new(schema, name)),
            _ => Err(MetadataError::InvalidTablePath(dir.to_path_buf())),
        }
    }

    fn classify(&self, dir: &Path) -> Result<Registry, MetadataError> {
        let mut registry = Registry::default();

        for path in self.source.entries(dir)? {
            let Some(name) = file_name(&path) else {
                continue;
            };

            match self.source.object_type(&path)? {
                ObjectType::Column => {
                    let ordinal = self.column_id(&path)?;
                    match registry.columns.entry(ordinal) {
                        Entry::Vacant(slot) => {
                            slot.insert(name);
                        }
                        Entry::Occupied(slot) => {
                            return Err(MetadataError::DuplicateColumnId {
                                ordinal,
                                first: slot.get().clone(),
                                second: name,
                            });
                        }
                    }
                }
                ObjectType::DefaultConstraint => {
                    let text = self.source.read_text(&path)?;
                    let Some(clause) = parse_default_clause(&text) else {
                        debug!("Skipping default '{}': no DEFAULT ... FOR [column] clause", name);
                        continue;
                    };

                    let constraint = DefaultConstraint {
                        name,
                        column: clause.column,
                        expression: clause.expression,
                    };
                    if let Some(prev) = registry
                        .defaults
                        .insert(constraint.column.clone(), constraint)
                    {
                        warn!(
                            "Default '{}' on column '{}' replaced by a later constraint",
                            prev.name, prev.column
                        );
                    }
                }
                other => trace!("Ignoring '{}' of type {}", name, other),
            }
        }

        Ok(registry)
    }

    fn column_id(&self, path: &Path) -> Result<i64, MetadataError> {
        let raw = self.source.attribute(path, COLUMN_ID_ATTR)?;
        let value = String::from_utf8_lossy(&raw);
        let value = value.trim_matches(|c: char| c == '\0' || c.is_whitespace());

        value.parse().map_err(|_| MetadataError::InvalidColumnId {
            path: path.to_path_buf(),
            value: value.to_string(),
        })
    }

    fn columns(&self, dir: &Path, mut registry: Registry) -> Result<Vec<Column>, MetadataError> {
        let mut columns = Vec::with_capacity(registry.columns.len());

        for (ordinal, name) in registry.columns {
            let raw_text = self.source.read_text(&dir.join(&name))?;
            let mut column = Column::new(ordinal, name, raw_text);
            column.default = registry.defaults.remove(&column.name);
            columns.push(column);
        }

        for orphan in registry.defaults.values() {
            debug!(
                "Ignoring default '{}': table has no column '{}'",
                orphan.name, orphan.column
            );
        }

        Ok(columns)
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
