//! Reference data configuration
//!
//! The built-in thread tables and insert catalog are always available. A JSON
//! thread file adds entries (same designation replaces the built-in one) and a
//! JSON catalog file replaces the built-in catalog.

use crate::black_book::validators::{validate_catalog, validate_database, Severity, ValidationIssue};
use crate::black_book::{ThreadDatabase, ThreadSpec};
use crate::error::ConfigError;
use crate::selection::SelectionFilter;
use crate::tool_library::ToolCatalog;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// JSON array of extra thread entries
    pub threads_file: Option<PathBuf>,
    /// JSON insert catalog
    pub catalog_file: Option<PathBuf>,
}

/// Loaded and validated reference data
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub threads: ThreadDatabase,
    pub catalog: ToolCatalog,
    pub issues: Vec<ValidationIssue>,
}

impl ReferenceData {
    /// Built-in tables only
    pub fn builtin() -> Self {
        Self::validated(ThreadDatabase::new(), ToolCatalog::builtin())
    }

    pub fn load(config: &Config) -> Result<Self, ConfigError> {
        let mut threads = ThreadDatabase::new();

        if let Some(path) = &config.threads_file {
            let entries = load_thread_entries(path)?;
            let count = entries.len();
            let mut replaced = 0;
            for spec in entries {
                if threads.insert(spec).is_some() {
                    replaced += 1;
                }
            }
            info!(path = %path.display(), count, replaced, "loaded thread entries");
        }

        let catalog = match &config.catalog_file {
            Some(path) => {
                let catalog = ToolCatalog::from_file(path)?;
                info!(path = %path.display(), inserts = catalog.len(), "loaded insert catalog");
                catalog
            }
            None => ToolCatalog::builtin(),
        };

        Ok(Self::validated(threads, catalog))
    }

    fn validated(threads: ThreadDatabase, catalog: ToolCatalog) -> Self {
        let mut issues = validate_database(&threads);
        issues.extend(validate_catalog(&threads, &catalog));

        for issue in issues.iter().filter(|i| i.severity != Severity::Info) {
            warn!(code = %issue.code, "{}", issue.message);
        }

        Self {
            threads,
            catalog,
            issues,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    pub fn filter(&self) -> SelectionFilter<'_> {
        SelectionFilter::new(&self.threads, &self.catalog)
    }
}

/// Read a JSON array of thread entries
pub fn load_thread_entries(path: &Path) -> Result<Vec<ThreadSpec>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn json_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config_is_builtin() {
        let data = ReferenceData::load(&Config::default()).unwrap();
        assert_eq!(data.threads.len(), ThreadDatabase::new().len());
        assert_eq!(data.catalog.len(), 11);
        assert!(!data.has_errors());
        assert!(data.issues.is_empty());
    }

    #[test]
    fn test_extra_thread_entries() {
        let file = json_file(
            r#"[
                {"designation": "M 20 x 1.5", "major_diameter": 20.0, "pitch": 1.5},
                {"designation": "M 6 x 1.0", "thread_type": "Coarse", "major_diameter": 6.0,
                 "pitch": 1.0, "tap_drill_diameter": 5.1}
            ]"#,
        );
        let config = Config {
            threads_file: Some(file.path().to_path_buf()),
            ..Config::default()
        };
        let data = ReferenceData::load(&config).unwrap();
        assert!(data.threads.contains("M 20 x 1.5"));
        assert_eq!(
            data.threads.lookup("M 6 x 1.0").unwrap().tap_drill_diameter,
            Some(5.1)
        );
    }

    #[test]
    fn test_catalog_file_replaces_builtin() {
        let file = json_file(
            r#"[{ "family": "parallel60", "inserts": [
                { "code": "X1", "cutting_diameter": 4.0,
                  "compatible_sizes": ["M 6 x 1.0", "M 99 x 1.0"] }
            ] }]"#,
        );
        let config = Config {
            catalog_file: Some(file.path().to_path_buf()),
            ..Config::default()
        };
        let data = ReferenceData::load(&config).unwrap();
        assert_eq!(data.catalog.len(), 1);
        assert!(data.has_errors());
        assert!(data.issues.iter().any(|i| i.code == "UNRESOLVED_SIZE"));
    }

    #[test]
    fn test_missing_file() {
        let config = Config {
            threads_file: Some(PathBuf::from("/nonexistent/threads.json")),
            ..Config::default()
        };
        let err = ReferenceData::load(&config).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/threads.json"));
    }

    #[test]
    fn test_bad_json() {
        let file = json_file("{ not json");
        let config = Config {
            catalog_file: Some(file.path().to_path_buf()),
            ..Config::default()
        };
        assert!(matches!(
            ReferenceData::load(&config),
            Err(ConfigError::Json { .. })
        ));
    }

    #[test]
    fn test_duplicate_insert_in_catalog_file() {
        let file = json_file(
            r#"[
                { "family": "parallel60", "inserts": [ { "code": "X", "compatible_sizes": [] } ] },
                { "family": "tapered60", "inserts": [ { "code": "X", "compatible_sizes": [] } ] }
            ]"#,
        );
        let config = Config {
            catalog_file: Some(file.path().to_path_buf()),
            ..Config::default()
        };
        let err = ReferenceData::load(&config).unwrap_err();
        assert!(err.to_string().contains("insert X is listed in both parallel60 and tapered60"));
    }
}
