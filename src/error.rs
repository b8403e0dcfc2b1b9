use crate::config::ConfigError;
use crate::template::TemplateError;
use crate::validate::ValidationError;
use thiserror::Error;

/// Top-level error type for the freecheck library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("error in configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid check definition: {0}")]
    Validation(#[from] ValidationError),

    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("print context requires a configuration document")]
    MissingDocument,
}

pub type Result<T> = std::result::Result<T, Error>;
