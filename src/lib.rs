//! Compile a check-printing configuration into a PostScript document.
//!
//! The pipeline runs strictly forward:
//!
//! 1. [`config`] loads the TOML document and merges `[Global]` with the
//!    selected `Account`, `CheckBlank` and `Style` entries.
//! 2. [`validate`] folds in run [`Overrides`] and checks the MICR fields,
//!    fraction, layout and routing checksum.
//! 3. [`template`] substitutes the validated fields into the declaration
//!    block and wraps it with the header and program body.
//!
//! [`PrintContext`] ties the three together.

pub mod config;
pub mod context;
mod error;
pub mod template;
pub mod validate;

pub use config::{ConfigDocument, ConfigError, FieldMap, FieldValue, SectionFamily, Selection};
pub use context::{PrintContext, PrintContextBuilder};
pub use error::{Error, Result};
pub use template::{Resources, TemplateError};
pub use validate::{Overrides, ValidatedFields, ValidationError};
