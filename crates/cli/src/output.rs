use crate::error::CliError;
use std::{
    fs,
    io::{self, Write},
    path::Path,
};

pub fn write_definition(ddl: &str, path: &Path) -> Result<(), CliError> {
    fs::write(path, format!("{ddl}\n")).map_err(|source| CliError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

pub fn print_definition(ddl: &str) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{ddl}")?;
    stdout.flush()?;
    Ok(())
}
