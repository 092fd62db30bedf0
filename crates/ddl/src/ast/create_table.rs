//! Defines the AST for a CREATE TABLE statement.

use model::core::table::{DefaultConstraint, TableDef, TableRef};

/// Represents a complete CREATE TABLE statement.
#[derive(Debug, Clone, Default)]
pub struct CreateTable {
    pub table: TableRef,
    pub columns: Vec<ColumnDef>,
    /// Column the default clauses are aligned against: the length of the
    /// longest column definition.
    pub width: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    /// Complete column definition, name included.
    pub definition: String,
    pub default: Option<DefaultDef>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DefaultDef {
    pub name: String,
    pub expression: String,
}

impl From<&DefaultConstraint> for DefaultDef {
    fn from(df: &DefaultConstraint) -> Self {
        Self {
            name: df.name.clone(),
            expression: df.expression.clone(),
        }
    }
}

impl From<&TableDef> for CreateTable {
    fn from(table: &TableDef) -> Self {
        let columns = table
            .columns()
            .iter()
            .map(|col| ColumnDef {
                definition: col.definition(),
                default: col.default.as_ref().map(DefaultDef::from),
            })
            .collect();

        Self {
            table: table.table.clone(),
            columns,
            width: table.width(),
        }
    }
}
