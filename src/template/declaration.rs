//! Classification and rewriting of declaration-block lines.
//!
//! Each non-comment line declares one PostScript definition as a field
//! name and a kind token, where the word `value` marks the slot the
//! field's value goes into:
//!
//! ```text
//! % comments and blank lines pass through
//! Name1           (value)
//! StandardFontName /value
//! MICRFontSize    {value}
//! ```
//!
//! which compile to `/Name1 (Jane Doe) def`, `/StandardFontName /Helvetica def`
//! and so on.

/// PostScript comment marker.
pub const COMMENT_MARKER: char = '%';

/// Token appended to every substituted declaration.
pub const DEFINE_SUFFIX: &str = " def";

/// How a field value is written into PostScript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// `(value)`: a string literal, with `\`, `(` and `)` escaped.
    Text,
    /// `/value`: a literal name, usually a font.
    Name,
    /// `[value]`: an array, usually coordinates.
    Array,
    /// `{value}`: a procedure, used for numbers and booleans.
    Procedure,
}

impl DeclarationKind {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "(value)" => Some(Self::Text),
            "/value" => Some(Self::Name),
            "[value]" => Some(Self::Array),
            "{value}" => Some(Self::Procedure),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Self::Text => "(value)",
            Self::Name => "/value",
            Self::Array => "[value]",
            Self::Procedure => "{value}",
        }
    }

    /// Fills the kind's value slot.
    pub fn render(self, value: &str) -> String {
        match self {
            Self::Text => format!("({})", escape_string(value)),
            Self::Name => format!("/{value}"),
            Self::Array => format!("[{value}]"),
            Self::Procedure => format!("{{{value}}}"),
        }
    }
}

/// Escapes a value for use inside a PostScript string literal.
pub fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | '(' | ')') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// A classified line of the declaration block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateLine<'a> {
    /// Blank or comment; emitted unchanged.
    Verbatim(&'a str),
    Declaration(Declaration<'a>),
}

/// A `<name> <kind>` line, split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    line: &'a str,
    indent: &'a str,
    name: &'a str,
    separator: &'a str,
    kind: &'a str,
}

impl<'a> Declaration<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The kind token as written, which may not be a known kind.
    pub fn kind_token(&self) -> &'a str {
        self.kind
    }

    pub fn kind(&self) -> Option<DeclarationKind> {
        DeclarationKind::from_token(self.kind)
    }

    /// Turns the line into a comment while keeping its indentation readable.
    ///
    /// Unindented lines get a `% ` prefix. Two leading spaces become `% `,
    /// any other indentation just gains a `%` in front.
    pub fn comment_out(&self) -> String {
        let line = self.line;
        if !line.starts_with([' ', '\t']) {
            format!("{COMMENT_MARKER} {line}")
        } else if let Some(rest) = line.strip_prefix(' ').filter(|_| line.starts_with("  ")) {
            format!("{COMMENT_MARKER}{rest}")
        } else {
            format!("{COMMENT_MARKER}{line}")
        }
    }

    /// Rewrites the line as `/<name> <rendered value> def`.
    ///
    /// Returns `None` when the kind token is not a known kind.
    pub fn substitute(&self, value: &str) -> Option<String> {
        let rendered = self.kind()?.render(value);
        Some(format!(
            "{}/{}{}{}{}",
            self.indent, self.name, self.separator, rendered, DEFINE_SUFFIX
        ))
    }
}

/// Classifies one line, ignoring trailing whitespace.
///
/// Returns `None` when the line is neither blank, a comment, nor a
/// two-word declaration starting with a letter.
pub fn classify(line: &str) -> Option<TemplateLine<'_>> {
    let line = line.trim_end();
    let trimmed = line.trim_start();

    if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
        return Some(TemplateLine::Verbatim(line));
    }
    if !trimmed.chars().next().is_some_and(char::is_alphabetic) {
        return None;
    }

    let name_end = trimmed.find(char::is_whitespace)?;
    let (name, rest) = trimmed.split_at(name_end);
    let kind = rest.trim_start();
    if kind.contains(char::is_whitespace) {
        return None;
    }

    Some(TemplateLine::Declaration(Declaration {
        line,
        indent: &line[..line.len() - trimmed.len()],
        name,
        separator: &rest[..rest.len() - kind.len()],
        kind,
    }))
}
