//! The print context: everything one generation run needs, built once.

use crate::config::{self, ConfigDocument, FieldMap, SectionFamily, Selection};
use crate::template::{self, Resources};
use crate::validate::{self, Overrides, ValidatedFields};
use crate::Error;

/// A configured check-printing run.
///
/// Owns the loaded configuration, the section selection, the run
/// overrides and the template resources. Each stage of the pipeline is a
/// read-only method, so one context can be generated from repeatedly.
///
/// ## Example
///
/// ```no_run
/// use freecheck::{config, PrintContext, Selection};
///
/// let ctx = PrintContext::builder()
///     .with_document(config::load_config_file("freecheck.toml")?)
///     .with_selection(Selection::default().with_account("business"))
///     .build()?;
///
/// for line in ctx.generate()? {
///     println!("{line}");
/// }
/// # Ok::<(), freecheck::Error>(())
/// ```
#[derive(Debug)]
pub struct PrintContext {
    document: ConfigDocument,
    selection: Selection,
    overrides: Overrides,
    resources: Resources,
}

impl PrintContext {
    /// Creates a new builder for constructing a `PrintContext`.
    pub fn builder() -> PrintContextBuilder {
        PrintContextBuilder::default()
    }

    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    /// Entry names of a section family, for listing.
    pub fn names(&self, family: SectionFamily) -> Vec<&str> {
        self.document.names(family).collect()
    }

    /// Merges the selected sections and applies the overrides.
    pub fn resolve(&self) -> Result<FieldMap, Error> {
        let mut fields = config::resolve(&self.document, &self.selection)?;
        self.overrides.apply(&mut fields);
        Ok(fields)
    }

    pub fn validate(&self) -> Result<ValidatedFields, Error> {
        Ok(validate::validate(self.resolve()?)?)
    }

    /// Runs the whole pipeline and returns the document lines.
    pub fn generate(&self) -> Result<Vec<String>, Error> {
        let fields = self.validate()?;
        Ok(template::compile(&self.resources, &fields)?)
    }
}

/// Builder for constructing a [`PrintContext`].
///
/// Selection, overrides and resources fall back to their defaults; the
/// document is required.
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct PrintContextBuilder {
    document: Option<ConfigDocument>,
    selection: Selection,
    overrides: Overrides,
    resources: Option<Resources>,
}

impl PrintContextBuilder {
    /// Attaches the loaded configuration document.
    pub fn with_document(mut self, document: ConfigDocument) -> Self {
        self.document = Some(document);
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Replaces the built-in template resources.
    pub fn with_resources(mut self, resources: Resources) -> Self {
        self.resources = Some(resources);
        self
    }

    /// Builds the `PrintContext`.
    ///
    /// Returns an error if no configuration document was provided.
    pub fn build(self) -> Result<PrintContext, Error> {
        Ok(PrintContext {
            document: self.document.ok_or(Error::MissingDocument)?,
            selection: self.selection,
            overrides: self.overrides,
            resources: self.resources.unwrap_or_else(Resources::builtin),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::Resource;

    const CONFIG: &str = r#"
        [Global]
        Routing = "R021000021R"
        AuxOnUs = ""
        OnUs = "123456789P"
        CheckNumber = "100"
        NumPages = "1"
        Fraction = "62-2/210"
        CheckLayout = "Original"

        [Account.sample]
        Name1 = "Jane Doe"

        [CheckBlank.MVG3001]
        ChecksPerPage = 3

        [Style.Normal]
        StandardFontName = "Helvetica"
    "#;

    fn small_resources() -> Resources {
        Resources::new(
            Resource::new("header.ps", "%!PS-Adobe-3.0  \n"),
            Resource::new(
                "formats.ps",
                "Name1 (value)\nStandardFontName /value\nPrintVOID {value}\nMemo (value)\n",
            ),
            Resource::new("program.ps", "showpage\n"),
        )
    }

    fn context(overrides: Overrides) -> PrintContext {
        PrintContext::builder()
            .with_document(ConfigDocument::parse(CONFIG).unwrap())
            .with_overrides(overrides)
            .with_resources(small_resources())
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_requires_document() {
        let result = PrintContext::builder().build();
        assert!(matches!(result, Err(Error::MissingDocument)));
    }

    #[test]
    fn test_generate_document() {
        let lines = context(Overrides::default()).generate().unwrap();

        assert_eq!(
            lines,
            [
                "%!PS-Adobe-3.0",
                "/Name1 (Jane Doe) def",
                "/StandardFontName /Helvetica def",
                "/PrintVOID {false} def",
                "% Memo (value)",
                "showpage",
                "%%EOF",
            ]
        );
    }

    #[test]
    fn test_overrides_reach_document() {
        let ctx = context(Overrides {
            check_number: Some(555),
            test: true,
            ..Overrides::default()
        });

        let validated = ctx.validate().unwrap();
        assert_eq!(validated.check_number(), 555);
        assert!(ctx.generate().unwrap().contains(&"/PrintVOID {true} def".to_string()));
    }

    #[test]
    fn test_generate_is_repeatable() {
        let ctx = context(Overrides::default());
        assert_eq!(ctx.generate().unwrap(), ctx.generate().unwrap());
    }

    #[test]
    fn test_unknown_selector_surfaces() {
        let ctx = PrintContext::builder()
            .with_document(ConfigDocument::parse(CONFIG).unwrap())
            .with_selection(Selection::default().with_account("nobody"))
            .build()
            .unwrap();

        assert!(matches!(
            ctx.generate(),
            Err(Error::Config(config::ConfigError::UnknownSelector { .. }))
        ));
    }

    #[test]
    fn test_accessors_expose_inputs() {
        let ctx = context(Overrides::default());

        assert_eq!(ctx.document().global().text("CheckLayout").as_deref(), Some("Original"));
        assert_eq!(ctx.resources().declarations().name(), "formats.ps");
        assert_eq!(ctx.resources().program().text(), "showpage\n");

        let fields = ctx.validate().unwrap().into_fields();
        assert_eq!(fields.text("Name1").as_deref(), Some("Jane Doe"));
        assert_eq!(fields.text("PrintVOID").as_deref(), Some("false"));
    }

    #[test]
    fn test_names_for_listing() {
        let ctx = context(Overrides::default());
        assert_eq!(ctx.names(SectionFamily::Account), ["sample"]);
    }
}
