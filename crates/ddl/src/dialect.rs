//! Defines the `Dialect` trait for database-specific SQL syntax.

use model::core::utils::bracket_ident;

pub trait Dialect: Send + Sync {
    /// Wraps an identifier (like a table or column name) in the correct
    /// quotation marks for the dialect.
    ///
    /// - T-SQL uses square brackets: `[my_column]`
    fn quote_identifier(&self, ident: &str) -> String;

    /// Returns the name of the dialect (e.g., "T-SQL").
    fn name(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct MsSql;

impl Dialect for MsSql {
    fn quote_identifier(&self, ident: &str) -> String {
        bracket_ident(ident)
    }

    fn name(&self) -> String {
        "T-SQL".into()
    }
}
