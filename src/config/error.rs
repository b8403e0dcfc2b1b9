use std::path::PathBuf;
use thiserror::Error;

use super::SectionFamily;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("syntax error in configuration: {0}")]
    Syntax(#[from] toml::de::Error),

    #[error("no [{0}] section found in configuration")]
    MissingSection(String),

    #[error("{family} '{name}' not found in configuration")]
    UnknownSelector { family: SectionFamily, name: String },

    #[error("[{family}.{name}] must be a table of fields")]
    InvalidSection { family: SectionFamily, name: String },

    #[error("field '{field}' in [{section}] must be a string, number or boolean")]
    UnsupportedValue { section: String, field: String },
}
