//! The three PostScript text resources a document is assembled from.

use std::path::Path;

use super::TemplateError;

pub const HEADER_FILE: &str = "freecheck_header.ps";
pub const DECLARATIONS_FILE: &str = "freecheck_formats.ps";
pub const PROGRAM_FILE: &str = "freecheck_program.ps";

/// A named block of text, e.g. the contents of one `.ps` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    name: String,
    text: String,
}

impl Resource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Name used in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn read(dir: &Path, file: &str) -> Result<Self, TemplateError> {
        let path = dir.join(file);
        let text = std::fs::read_to_string(&path)
            .map_err(|source| TemplateError::ReadError { path, source })?;
        Ok(Self::new(file, text))
    }
}

/// Header, declaration block and program body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resources {
    header: Resource,
    declarations: Resource,
    program: Resource,
}

impl Resources {
    pub fn new(header: Resource, declarations: Resource, program: Resource) -> Self {
        Self {
            header,
            declarations,
            program,
        }
    }

    /// The resources compiled into the crate.
    pub fn builtin() -> Self {
        Self::new(
            Resource::new(HEADER_FILE, include_str!("../../resources/freecheck_header.ps")),
            Resource::new(
                DECLARATIONS_FILE,
                include_str!("../../resources/freecheck_formats.ps"),
            ),
            Resource::new(PROGRAM_FILE, include_str!("../../resources/freecheck_program.ps")),
        )
    }

    /// Reads the three resource files from a directory.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let dir = dir.as_ref();
        let resources = Self::new(
            Resource::read(dir, HEADER_FILE)?,
            Resource::read(dir, DECLARATIONS_FILE)?,
            Resource::read(dir, PROGRAM_FILE)?,
        );
        tracing::debug!(dir = %dir.display(), "loaded template resources");
        Ok(resources)
    }

    pub fn header(&self) -> &Resource {
        &self.header
    }

    pub fn declarations(&self) -> &Resource {
        &self.declarations
    }

    pub fn program(&self) -> &Resource {
        &self.program
    }
}

impl Default for Resources {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_resources_present() {
        let resources = Resources::builtin();
        assert!(resources.header().text().starts_with("%!PS-Adobe-3.0"));
        assert_eq!(resources.declarations().name(), DECLARATIONS_FILE);
        assert!(!resources.program().text().is_empty());
    }

    #[test]
    fn test_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(HEADER_FILE), "%!PS\n").unwrap();
        std::fs::write(dir.path().join(DECLARATIONS_FILE), "Name1 (value)\n").unwrap();
        std::fs::write(dir.path().join(PROGRAM_FILE), "showpage\n").unwrap();

        let resources = Resources::from_dir(dir.path()).unwrap();
        assert_eq!(resources.declarations().text(), "Name1 (value)\n");
        assert_eq!(resources.program().name(), PROGRAM_FILE);
    }

    #[test]
    fn test_from_dir_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Resources::from_dir(dir.path());
        assert!(matches!(result, Err(TemplateError::ReadError { .. })));
    }
}
