use crate::{
    ast::create_table::CreateTable,
    dialect::MsSql,
    renderer::{Render, Renderer},
};
use model::core::table::TableDef;

pub mod ast;
pub mod dialect;
pub mod renderer;

/// Indent used for column lines when none is configured.
pub const DEFAULT_INDENT: usize = 2;

/// Renders the `CREATE TABLE` statement for a loaded table in T-SQL.
pub fn create_table_sql(table: &TableDef, indent: usize) -> String {
    let dialect = MsSql;
    let mut renderer = Renderer::new(&dialect, indent);
    CreateTable::from(table).render(&mut renderer);
    renderer.finish()
}
