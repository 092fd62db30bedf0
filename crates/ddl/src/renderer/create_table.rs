use crate::{
    ast::create_table::{CreateTable, DefaultDef},
    renderer::{Render, Renderer},
};
use model::core::utils::char_len;

impl Render for CreateTable {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("CREATE TABLE ");
        r.push_ident(&self.table.schema);
        r.sql.push('.');
        r.push_ident(&self.table.name);
        r.sql.push_str(" (\n");

        for col in &self.columns {
            r.push_spaces(r.indent);
            r.sql.push_str(&col.definition);

            if let Some(df) = &col.default {
                // Every default clause starts at `width + 2 * indent`.
                let pad = (self.width + r.indent).saturating_sub(char_len(&col.definition));
                r.push_spaces(pad);
                df.render(r);
            }

            r.sql.push_str(",\n");
        }

        match r.sql.strip_suffix(",\n").map(str::len) {
            Some(len) => {
                r.sql.truncate(len);
                r.sql.push_str("\n)");
            }
            None => r.sql.push(')'),
        }
    }
}

impl Render for DefaultDef {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("CONSTRAINT ");
        r.push_ident(&self.name);
        r.sql.push_str(" DEFAULT ");
        r.sql.push_str(&self.expression);
    }
}

#[cfg(test)]
mod tests {
    use crate::{DEFAULT_INDENT, create_table_sql};
    use model::core::table::{Column, DefaultConstraint, TableDef, TableRef};

    fn with_default(mut col: Column, name: &str, expression: &str) -> Column {
        col.default = Some(DefaultConstraint {
            name: name.to_string(),
            column: col.name.clone(),
            expression: expression.to_string(),
        });
        col
    }

    fn users() -> TableDef {
        TableDef::new(
            TableRef::new("dbo", "Users"),
            vec![
                Column::new(0, "Id", "COLUMN INT NOT NULL\n"),
                with_default(
                    Column::new(1, "Name", "COLUMN NVARCHAR(50) NULL\n"),
                    "DF_Name",
                    "N''",
                ),
            ],
        )
    }

    #[test]
    fn test_render_create_table() {
        let sql = create_table_sql(&users(), DEFAULT_INDENT);

        let expected_sql = "CREATE TABLE [dbo].[Users] (\n\
                            \x20 [Id] INT NOT NULL,\n\
                            \x20 [Name] NVARCHAR(50) NULL  CONSTRAINT [DF_Name] DEFAULT N''\n\
                            )";
        assert_eq!(sql, expected_sql);
    }

    #[test]
    fn test_render_orders_by_ordinal() {
        let table = TableDef::new(
            TableRef::new("sales", "Orders"),
            vec![
                Column::new(30, "Total", "COLUMN money NULL\n"),
                Column::new(-1, "Id", "COLUMN int NOT NULL\n"),
                Column::new(5, "Customer", "COLUMN int NOT NULL\n"),
            ],
        );

        let sql = create_table_sql(&table, 2);
        let lines: Vec<_> = sql.lines().collect();

        assert_eq!(
            lines,
            vec![
                "CREATE TABLE [sales].[Orders] (",
                "  [Id] int NOT NULL,",
                "  [Customer] int NOT NULL,",
                "  [Total] money NULL",
                ")",
            ]
        );
    }

    #[test]
    fn test_default_clauses_share_a_column() {
        let indent = 4;
        let table = TableDef::new(
            TableRef::new("dbo", "Person"),
            vec![
                with_default(Column::new(1, "Age", "COLUMN int NULL\n"), "DF_Age", "0"),
                Column::new(2, "Description", "COLUMN nvarchar(max) NOT NULL\n"),
                with_default(
                    Column::new(3, "CreatedAt", "COLUMN datetime2 NOT NULL\n"),
                    "DF_Person_CreatedAt",
                    "(sysdatetime())",
                ),
            ],
        );

        let sql = create_table_sql(&table, indent);
        let offsets: Vec<_> = sql
            .lines()
            .filter_map(|line| line.find("CONSTRAINT"))
            .collect();

        assert_eq!(offsets.len(), 2);
        assert!(offsets.iter().all(|&o| o == table.width() + 2 * indent));
        assert!(sql.contains("[Age] int NULL"));
        assert!(sql.contains("CONSTRAINT [DF_Age] DEFAULT 0,\n"));
    }

    #[test]
    fn test_longest_column_gets_indent_before_default() {
        let table = TableDef::new(
            TableRef::new("dbo", "T"),
            vec![with_default(
                Column::new(1, "Flag", "COLUMN bit NOT NULL\n"),
                "DF_Flag",
                "((1))",
            )],
        );

        let sql = create_table_sql(&table, 3);
        assert_eq!(
            sql,
            "CREATE TABLE [dbo].[T] (\n   [Flag] bit NOT NULL   CONSTRAINT [DF_Flag] DEFAULT ((1))\n)"
        );
    }

    #[test]
    fn test_column_without_default_has_no_constraint() {
        let sql = create_table_sql(&users(), DEFAULT_INDENT);
        let id_line = sql.lines().nth(1).unwrap();
        assert_eq!(id_line, "  [Id] INT NOT NULL,");
        assert!(!id_line.contains("DEFAULT"));
    }

    #[test]
    fn test_alignment_counts_characters() {
        let table = TableDef::new(
            TableRef::new("dbo", "Люди"),
            vec![
                with_default(Column::new(1, "Имя", "COLUMN nvarchar(10)\n"), "DF_Имя", "N''"),
                with_default(Column::new(2, "Id", "COLUMN int\n"), "DF_Id", "0"),
            ],
        );

        let sql = create_table_sql(&table, 2);
        let offsets: Vec<_> = sql
            .lines()
            .filter_map(|line| {
                let at = line.find("CONSTRAINT")?;
                Some(line[..at].chars().count())
            })
            .collect();

        assert_eq!(offsets, vec![table.width() + 4, table.width() + 4]);
    }

    #[test]
    fn test_empty_table() {
        let table = TableDef::new(TableRef::new("dbo", "Empty"), Vec::new());
        assert_eq!(create_table_sql(&table, 2), "CREATE TABLE [dbo].[Empty] (\n)");
    }

    #[test]
    fn test_output_is_one_balanced_statement() {
        let sql = create_table_sql(&users(), DEFAULT_INDENT);

        let mut depth = 0i32;
        for ch in sql.chars() {
            match ch {
                '(' => depth += 1,
                ')' => depth -= 1,
                _ => {}
            }
            assert!(depth >= 0);
        }
        assert_eq!(depth, 0);
        assert_eq!(sql.matches("CREATE TABLE").count(), 1);
        assert!(sql.ends_with(')'));
    }
}
