use crate::error::CliError;
use clap::Parser;
use connectors::{
    metadata::TableLoader,
    source::{
        AttributeSource,
        fs::{DEFAULT_XATTR_PREFIX, XattrSource},
    },
};
use ddl::DEFAULT_INDENT;
use settings::Settings;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod error;
mod output;

#[derive(Parser, Debug)]
#[command(
    name = "mksqldef",
    version = "0.1.0",
    about = "Generate the CREATE TABLE statement of a table exposed by SQLFuse"
)]
struct Cli {
    /// Object path: server.database.schema.table
    path: String,

    #[arg(short, long, help = "Full definition (accepted, currently has no effect)")]
    full: bool,

    #[arg(short, long, help = "Config file path (defaults to the user config dir)")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Indent for column lines and default constraints")]
    indent: Option<usize>,

    #[arg(
        short,
        long,
        help = "If specified, writes the definition to this file instead of stdout"
    )]
    output: Option<PathBuf>,
}

fn main() -> Result<(), CliError> {
    // Logs go to stderr; stdout carries the definition only
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => path.clone(),
        None => Settings::default_path()?,
    };
    let settings = Settings::load(&config)?;
    info!("Loaded {} server(s) from {}", settings.servers.len(), config.display());

    if cli.full {
        info!("Full definition requested; only columns and defaults are rendered");
    }

    let dir = settings.resolve(&cli.path)?;
    let prefix = settings
        .xattr_prefix
        .clone()
        .unwrap_or_else(|| DEFAULT_XATTR_PREFIX.to_string());
    let indent = cli.indent.or(settings.indent).unwrap_or(DEFAULT_INDENT);

    let ddl = render_table(&XattrSource::new(prefix), &dir, indent)?;

    match &cli.output {
        Some(path) => output::write_definition(&ddl, path)?,
        None => output::print_definition(&ddl)?,
    }

    Ok(())
}

fn render_table(
    source: &dyn AttributeSource,
    dir: &Path,
    indent: usize,
) -> Result<String, CliError> {
    let table = TableLoader::new(source).load(dir)?;
    Ok(ddl::create_table_sql(&table, indent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use connectors::{
        metadata::MetadataError,
        source::memory::{MemoryEntry, MemorySource},
    };

    const DIR: &str = "/mnt/prod/sales/dbo/Users";

    fn users(table_tag: &str) -> MemorySource {
        MemorySource::new()
            .with_entry(DIR, MemoryEntry::new().attr("type", table_tag))
            .with_entry(
                format!("{DIR}/Name"),
                MemoryEntry::new()
                    .attr("type", "$L")
                    .attr("column_id", "2")
                    .content("COLUMN NVARCHAR(50) NULL\n"),
            )
            .with_entry(
                format!("{DIR}/Id"),
                MemoryEntry::new()
                    .attr("type", "$L")
                    .attr("column_id", "1")
                    .content("COLUMN INT NOT NULL\n"),
            )
            .with_entry(
                format!("{DIR}/DF_Name"),
                MemoryEntry::new()
                    .attr("type", "D")
                    .content("DEFAULT N'' FOR [Name]\n"),
            )
    }

    #[test]
    fn test_render_table_from_snapshot() {
        let ddl = render_table(&users("U"), Path::new(DIR), DEFAULT_INDENT).unwrap();
        assert_eq!(
            ddl,
            "CREATE TABLE [dbo].[Users] (\n  [Id] INT NOT NULL,\n  [Name] NVARCHAR(50) NULL  CONSTRAINT [DF_Name] DEFAULT N''\n)"
        );
    }

    #[test]
    fn test_render_table_refuses_non_tables() {
        let err = render_table(&users("V"), Path::new(DIR), DEFAULT_INDENT).unwrap_err();
        assert!(matches!(
            err,
            CliError::Metadata(MetadataError::NotATable { .. })
        ));
    }

    #[test]
    fn test_cli_args() {
        let cli = Cli::try_parse_from(["mksqldef", "prod.sales.dbo.Users", "-f", "-i", "4"]).unwrap();
        assert_eq!(cli.path, "prod.sales.dbo.Users");
        assert!(cli.full);
        assert_eq!(cli.indent, Some(4));
        assert_eq!(cli.config, None);
        assert_eq!(cli.output, None);
    }

    #[test]
    fn test_cli_requires_path() {
        assert!(Cli::try_parse_from(["mksqldef"]).is_err());
    }

    #[test]
    fn test_full_flag_does_not_change_output() {
        let plain = Cli::try_parse_from(["mksqldef", "p.s.dbo.Users"]).unwrap();
        let full = Cli::try_parse_from(["mksqldef", "p.s.dbo.Users", "--full"]).unwrap();
        assert!(!plain.full && full.full);

        let a = render_table(&users("U"), Path::new(DIR), plain.indent.unwrap_or(DEFAULT_INDENT));
        let b = render_table(&users("U"), Path::new(DIR), full.indent.unwrap_or(DEFAULT_INDENT));
        assert_eq!(a.unwrap(), b.unwrap());
    }
}
