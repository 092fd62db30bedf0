//! Server lookup table and resolution of dotted object paths to directories
//! on the mounted filesystem.

use crate::error::SettingsError;
use serde::Deserialize;
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

pub mod error;

/// Loaded from a JSON file such as:
///
/// ```json
/// {
///   "servers": { "prod": { "sales": "/mnt/sqlfuse/prod-sales" } },
///   "xattr_prefix": "user.sqlfuse.",
///   "indent": 2
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Mount root of each database, by server then database name.
    pub servers: BTreeMap<String, BTreeMap<String, PathBuf>>,
    /// Extended attribute namespace, when it differs from the default.
    pub xattr_prefix: Option<String>,
    /// Indent for column lines, when it differs from the default.
    pub indent: Option<usize>,
}

impl Settings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `<user config dir>/mksqldef/servers.json`
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        let dir = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        Ok(dir.join("mksqldef").join("servers.json"))
    }

    /// Resolves `server.database[.part...]` to the database's mount root with
    /// each remaining part appended as a path component.
    pub fn resolve(&self, object_path: &str) -> Result<PathBuf, SettingsError> {
        let invalid = || SettingsError::InvalidObjectPath(object_path.to_string());

        let parts: Vec<&str> = object_path.split('.').collect();
        if parts.len() < 2 || parts.iter().any(|p| p.is_empty()) {
            return Err(invalid());
        }

        let (server, database) = (parts[0], parts[1]);
        let databases = self
            .servers
            .get(server)
            .ok_or_else(|| SettingsError::UnknownServer(server.to_string()))?;
        let root = databases
            .get(database)
            .ok_or_else(|| SettingsError::UnknownDatabase {
                server: server.to_string(),
                database: database.to_string(),
            })?;

        let path = parts[2..]
            .iter()
            .fold(root.clone(), |path, part| path.join(part));

        debug!("Resolved '{}' to {}", object_path, path.display());
        Ok(path)
    }
}
