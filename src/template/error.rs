use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TemplateError {
    #[error(
        "{resource}:{line}: invalid syntax; lines must be blank, a comment starting with %, or a definition of exactly 2 words: the name and the type"
    )]
    Syntax { resource: String, line: usize },

    #[error("{resource}:{line}: definition type '{kind}' for '{name}' is not valid")]
    UnknownKind {
        resource: String,
        line: usize,
        name: String,
        kind: String,
    },

    #[error("failed to read template resource '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
}
