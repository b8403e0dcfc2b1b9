//! File-based configuration loading.

use std::path::{Path, PathBuf};

use super::document::ConfigDocument;
use super::ConfigError;

/// File name of the per-user configuration, relative to the home directory.
pub const DEFAULT_CONFIG_FILE: &str = ".freecheck.toml";

/// Returns `~/.freecheck.toml`, or the bare file name when no home
/// directory can be determined.
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Loads and parses a TOML configuration file.
pub fn load_config_file(path: impl AsRef<Path>) -> Result<ConfigDocument, ConfigError> {
    let path = path.as_ref();
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let table: toml::Table = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), "loaded configuration file");
    ConfigDocument::from_table(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SectionFamily;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[Global]\nNumPages = \"1\"\n[Account.sample]\n[CheckBlank.MVG3001]\n[Style.Normal]"
        )
        .unwrap();

        let doc = load_config_file(file.path()).unwrap();
        assert_eq!(doc.global().text("NumPages").as_deref(), Some("1"));
        assert_eq!(doc.names(SectionFamily::Style).collect::<Vec<_>>(), ["Normal"]);
    }

    #[test]
    fn test_missing_file() {
        let result = load_config_file("/nonexistent/path/freecheck.toml");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_parse_error_names_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[Global").unwrap();

        let result = load_config_file(file.path());
        match result {
            Err(ConfigError::ParseError { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_default_path_file_name() {
        assert!(default_config_path().ends_with(DEFAULT_CONFIG_FILE));
    }
}
