//! Defines the core rendering trait and context for converting AST to SQL.

use crate::dialect::Dialect;

pub mod create_table;

/// A trait for any AST node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string, carries the indent applied to nested
/// lines, and provides access to the dialect for syntax-specific details.
pub struct Renderer<'a> {
    pub sql: String,
    pub dialect: &'a dyn Dialect,
    pub indent: usize,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect, indent: usize) -> Self {
        Self {
            sql: String::new(),
            dialect,
            indent,
        }
    }

    /// Consumes the renderer and returns the final SQL string.
    pub fn finish(self) -> String {
        self.sql
    }

    pub fn push_ident(&mut self, ident: &str) {
        let quoted = self.dialect.quote_identifier(ident);
        self.sql.push_str(&quoted);
    }

    pub fn push_spaces(&mut self, count: usize) {
        self.sql.extend(std::iter::repeat_n(' ', count));
    }
}
