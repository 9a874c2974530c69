//! Registry configuration: built-in tables plus JSON tables from a directory
//!
//! Environment:
//! - `METRON_TABLES_PATH`: directory of `*.json` unit tables, each registered
//!   under its file stem (`time.json` → quantity `time`)
//! - `METRON_SKIP_STANDARD`: `1`/`true`/`yes` to leave out the built-in tables

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use metron_core::{Converter, TableError, UnitTable};
use tracing::{debug, warn};

use crate::{ConverterRegistry, MetronError};

pub const TABLES_PATH_VAR: &str = "METRON_TABLES_PATH";
pub const SKIP_STANDARD_VAR: &str = "METRON_SKIP_STANDARD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory scanned for `*.json` tables
    pub tables_path: Option<PathBuf>,
    /// Register the six built-in quantities before loading files
    pub include_standard: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tables_path: None,
            include_standard: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let tables_path = lookup(TABLES_PATH_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let skip = lookup(SKIP_STANDARD_VAR)
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            tables_path,
            include_standard: !skip,
        }
    }

    pub fn with_tables_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tables_path = Some(path.into());
        self
    }

    pub fn with_standard(mut self, include: bool) -> Self {
        self.include_standard = include;
        self
    }

    /// JSON table files in the configured directory, sorted by path
    pub fn table_files(&self) -> Result<Vec<PathBuf>, MetronError> {
        let Some(dir) = &self.tables_path else {
            return Ok(Vec::new());
        };

        let entries = fs::read_dir(dir).map_err(|source| TableError::Io {
            path: dir.clone(),
            source,
        })?;

        let mut files: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && path.extension().is_some_and(|e| e == "json"))
            .collect();
        files.sort();
        Ok(files)
    }

    /// Build a registry from this configuration
    pub fn load(&self) -> Result<ConverterRegistry, MetronError> {
        let mut registry = if self.include_standard {
            ConverterRegistry::standard()
        } else {
            ConverterRegistry::new()
        };

        for path in self.table_files()? {
            let Some(name) = quantity_name(&path) else {
                continue;
            };
            let table = UnitTable::from_json_file(&path)?;
            debug!(quantity = %name, units = table.len(), path = %path.display(), "loaded unit table");

            if registry.insert(&name, Converter::new(table)).is_some() {
                warn!(quantity = %name, path = %path.display(), "unit table replaces an existing quantity");
            }
        }

        Ok(registry)
    }
}

fn quantity_name(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashMap;

    /// Scratch directory under the system temp dir, removed on drop
    struct ScratchDir(PathBuf);

    impl ScratchDir {
        fn new(name: &str) -> Self {
            let path = env::temp_dir().join(format!("metron-config-{}-{}", std::process::id(), name));
            let _ = fs::remove_dir_all(&path);
            fs::create_dir_all(&path).unwrap();
            ScratchDir(path)
        }

        fn write(&self, file: &str, contents: &str) {
            fs::write(self.0.join(file), contents).unwrap();
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert!(config.include_standard);
        assert!(config.tables_path.is_none());
    }

    #[test]
    fn test_from_lookup() {
        let config = Config::from_lookup(lookup(&[
            (TABLES_PATH_VAR, "/srv/metron"),
            (SKIP_STANDARD_VAR, "TRUE"),
        ]));
        assert_eq!(config.tables_path, Some(PathBuf::from("/srv/metron")));
        assert!(!config.include_standard);
    }

    #[test]
    fn test_blank_path_ignored() {
        let config = Config::from_lookup(lookup(&[(TABLES_PATH_VAR, "  "), (SKIP_STANDARD_VAR, "0")]));
        assert!(config.tables_path.is_none());
        assert!(config.include_standard);
    }

    #[test]
    fn test_load_standard_only() {
        let registry = Config::new().load().unwrap();
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn test_load_tables_from_directory() {
        let dir = ScratchDir::new("load");
        dir.write("time.json", r#"{"s": [1, 0], "min": [0.016666666666666666, 0], "h": [0.0002777777777777778, 0]}"#);
        dir.write("notes.txt", "not a table");

        let registry = Config::new().with_tables_path(&dir.0).load().unwrap();
        assert_eq!(registry.len(), 7);
        assert_eq!(registry.list_units("time").unwrap(), vec!["s", "min", "h"]);
        assert_relative_eq!(registry.convert("time", 1.0, "h", "min").unwrap(), 60.0, max_relative = 1e-9);
    }

    #[test]
    fn test_file_replaces_builtin() {
        let dir = ScratchDir::new("replace");
        dir.write("temperature.json", r#"{"K": [1, 0], "ºC": [1, -273.15]}"#);

        let registry = Config::new().with_tables_path(&dir.0).load().unwrap();
        assert_eq!(registry.len(), 6);
        assert_eq!(registry.list_units("temperature").unwrap(), vec!["K", "ºC"]);
    }

    #[test]
    fn test_skip_standard() {
        let dir = ScratchDir::new("skip");
        dir.write("angle.json", r#"{"rad": [1, 0], "deg": [57.29577951308232, 0]}"#);

        let registry = Config::new()
            .with_standard(false)
            .with_tables_path(&dir.0)
            .load()
            .unwrap();
        assert_eq!(registry.quantities(), vec!["angle"]);
    }

    #[test]
    fn test_invalid_table_is_an_error() {
        let dir = ScratchDir::new("invalid");
        dir.write("broken.json", r#"{"m": "one"}"#);

        let err = Config::new().with_tables_path(&dir.0).load().unwrap_err();
        assert!(matches!(err, MetronError::Table(TableError::Json(_))));
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let err = Config::new()
            .with_tables_path("/definitely/not/a/metron/dir")
            .load()
            .unwrap_err();
        assert!(matches!(err, MetronError::Table(TableError::Io { .. })));
    }
}
