//! PostScript document generation from the declaration-block template.

mod compiler;
mod declaration;
mod error;
mod resources;

pub use compiler::{compile, compile_declarations, CompileStats, TRAILER};
pub use declaration::{
    classify, escape_string, Declaration, DeclarationKind, TemplateLine, COMMENT_MARKER,
    DEFINE_SUFFIX,
};
pub use error::TemplateError;
pub use resources::{Resource, Resources, DECLARATIONS_FILE, HEADER_FILE, PROGRAM_FILE};
