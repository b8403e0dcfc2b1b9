//! Configuration loading, section lookup and layered merging.

mod document;
mod error;
mod file;
mod merge;
mod value;

pub use document::{ConfigDocument, SectionFamily, GLOBAL_SECTION};
pub use error::ConfigError;
pub use file::{default_config_path, load_config_file, DEFAULT_CONFIG_FILE};
pub use merge::{
    merge_layers, resolve, Selection, DEFAULT_ACCOUNT, DEFAULT_CHECK_BLANK, DEFAULT_STYLE,
};
pub use value::{FieldMap, FieldValue};
