//! Assembles the final PostScript document from validated fields.

use super::declaration::{classify, TemplateLine};
use super::resources::{Resource, Resources};
use super::TemplateError;
use crate::config::FieldMap;
use crate::validate::ValidatedFields;

/// Last line of every generated document.
pub const TRAILER: &str = "%%EOF";

/// Counts of what happened to the declaration lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileStats {
    pub substituted: usize,
    pub commented_out: usize,
}

/// Compiles a document: header, declaration block, program, trailer.
///
/// Pure in its inputs; compiling the same fields and resources twice gives
/// identical lines.
pub fn compile(resources: &Resources, fields: &ValidatedFields) -> Result<Vec<String>, TemplateError> {
    let mut lines = Vec::new();

    push_verbatim(&mut lines, resources.header());
    let stats = compile_declarations(resources.declarations(), fields.fields(), &mut lines)?;
    push_verbatim(&mut lines, resources.program());
    lines.push(TRAILER.to_string());

    tracing::info!(
        lines = lines.len(),
        substituted = stats.substituted,
        commented_out = stats.commented_out,
        "generated document"
    );
    Ok(lines)
}

/// Rewrites the declaration block into `out`.
///
/// Declarations whose field is defined become PostScript definitions; the
/// rest are commented out. The kind token is only checked for defined
/// fields.
pub fn compile_declarations(
    resource: &Resource,
    fields: &FieldMap,
    out: &mut Vec<String>,
) -> Result<CompileStats, TemplateError> {
    let mut stats = CompileStats::default();

    for (index, raw) in resource.text().lines().enumerate() {
        let line = index + 1;
        let declaration = match classify(raw) {
            Some(TemplateLine::Verbatim(text)) => {
                out.push(text.to_string());
                continue;
            }
            Some(TemplateLine::Declaration(declaration)) => declaration,
            None => {
                return Err(TemplateError::Syntax {
                    resource: resource.name().to_string(),
                    line,
                })
            }
        };

        let Some(value) = fields.get(declaration.name()) else {
            tracing::trace!(name = declaration.name(), line, "field not defined, commenting out");
            out.push(declaration.comment_out());
            stats.commented_out += 1;
            continue;
        };

        let compiled = declaration
            .substitute(&value.to_text())
            .ok_or_else(|| TemplateError::UnknownKind {
                resource: resource.name().to_string(),
                line,
                name: declaration.name().to_string(),
                kind: declaration.kind_token().to_string(),
            })?;
        out.push(compiled);
        stats.substituted += 1;
    }

    Ok(stats)
}

fn push_verbatim(out: &mut Vec<String>, resource: &Resource) {
    out.extend(resource.text().lines().map(|l| l.trim_end().to_string()));
}
