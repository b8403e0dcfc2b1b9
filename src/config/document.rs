//! The loaded configuration document and its section families.

use std::fmt;

use serde::Deserialize;
use toml::Table;

use super::value::{FieldMap, FieldValue};
use super::ConfigError;

/// Name of the singleton defaults section.
pub const GLOBAL_SECTION: &str = "Global";

/// A family of named sections the caller picks one entry from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionFamily {
    Account,
    CheckBlank,
    Style,
}

impl SectionFamily {
    /// All families, in merge order.
    pub const ALL: [SectionFamily; 3] = [Self::Account, Self::CheckBlank, Self::Style];

    /// The TOML table name the family lives under.
    pub fn table_name(self) -> &'static str {
        match self {
            Self::Account => "Account",
            Self::CheckBlank => "CheckBlank",
            Self::Style => "Style",
        }
    }
}

impl fmt::Display for SectionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

/// Raw shape of the TOML document before field values are checked.
#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(rename = "Global")]
    global: Option<Table>,
    #[serde(rename = "Account")]
    account: Option<Table>,
    #[serde(rename = "CheckBlank")]
    check_blank: Option<Table>,
    #[serde(rename = "Style")]
    style: Option<Table>,
}

/// An immutable, validated-for-shape configuration document.
///
/// Holds the `[Global]` section and every entry of the three keyed families,
/// in the order they appear in the source file:
///
/// ```toml
/// [Global]
/// StandardFontName = "Helvetica"
///
/// [Account.sample]
/// Routing = "R021000021R"
///
/// [CheckBlank.MVG3001]
/// CheckHeight = "3.5 inch"
///
/// [Style.Normal]
/// CheckLayout = "Original"
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigDocument {
    global: FieldMap,
    accounts: Vec<(String, FieldMap)>,
    check_blanks: Vec<(String, FieldMap)>,
    styles: Vec<(String, FieldMap)>,
}

impl ConfigDocument {
    /// Parses a document from TOML text.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let raw: RawDocument = toml::from_str(contents)?;
        Self::from_raw(raw)
    }

    /// Builds a document from an already-parsed TOML table.
    pub fn from_table(table: Table) -> Result<Self, ConfigError> {
        let raw: RawDocument = toml::Value::Table(table).try_into()?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawDocument) -> Result<Self, ConfigError> {
        let global = raw
            .global
            .ok_or_else(|| ConfigError::MissingSection(GLOBAL_SECTION.to_string()))?;

        Ok(Self {
            global: section_fields(GLOBAL_SECTION, &global)?,
            accounts: family_entries(SectionFamily::Account, raw.account)?,
            check_blanks: family_entries(SectionFamily::CheckBlank, raw.check_blank)?,
            styles: family_entries(SectionFamily::Style, raw.style)?,
        })
    }

    /// The `[Global]` defaults.
    pub fn global(&self) -> &FieldMap {
        &self.global
    }

    /// Looks up one entry of a family by its selector name.
    pub fn section(&self, family: SectionFamily, name: &str) -> Result<&FieldMap, ConfigError> {
        self.entries(family)
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, fields)| fields)
            .ok_or_else(|| ConfigError::UnknownSelector {
                family,
                name: name.to_string(),
            })
    }

    /// Names available in a family, in file order.
    pub fn names(&self, family: SectionFamily) -> impl Iterator<Item = &str> {
        self.entries(family).iter().map(|(name, _)| name.as_str())
    }

    fn entries(&self, family: SectionFamily) -> &[(String, FieldMap)] {
        match family {
            SectionFamily::Account => &self.accounts,
            SectionFamily::CheckBlank => &self.check_blanks,
            SectionFamily::Style => &self.styles,
        }
    }
}

fn family_entries(
    family: SectionFamily,
    table: Option<Table>,
) -> Result<Vec<(String, FieldMap)>, ConfigError> {
    let table = table
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ConfigError::MissingSection(family.table_name().to_string()))?;

    table
        .into_iter()
        .map(|(name, value)| match value {
            toml::Value::Table(fields) => {
                let label = format!("{family}.{name}");
                let fields = section_fields(&label, &fields)?;
                Ok((name, fields))
            }
            _ => Err(ConfigError::InvalidSection { family, name }),
        })
        .collect()
}

fn section_fields(section: &str, table: &Table) -> Result<FieldMap, ConfigError> {
    let mut fields = FieldMap::new();
    for (key, value) in table {
        let value = FieldValue::from_toml(value).ok_or_else(|| ConfigError::UnsupportedValue {
            section: section.to_string(),
            field: key.clone(),
        })?;
        fields.insert(key.as_str(), value);
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [Global]
        StandardFontName = "Helvetica"

        [Account.sample]
        Routing = "R021000021R"

        [Account.business]
        Routing = "R011000015R"

        [CheckBlank.MVG3001]
        ChecksPerPage = 3

        [Style.Normal]
        CheckLayout = "Original"
    "#;

    #[test]
    fn test_parse_families() {
        let doc = ConfigDocument::parse(SAMPLE).unwrap();

        assert_eq!(
            doc.global().text("StandardFontName").as_deref(),
            Some("Helvetica")
        );
        let accounts: Vec<_> = doc.names(SectionFamily::Account).collect();
        assert_eq!(accounts, ["sample", "business"]);
        let blank = doc.section(SectionFamily::CheckBlank, "MVG3001").unwrap();
        assert_eq!(blank.get("ChecksPerPage"), Some(&FieldValue::Integer(3)));
    }

    #[test]
    fn test_missing_global() {
        let result = ConfigDocument::parse(
            r#"
            [Account.a]
            [CheckBlank.b]
            [Style.c]
            "#,
        );
        assert!(matches!(result, Err(ConfigError::MissingSection(s)) if s == "Global"));
    }

    #[test]
    fn test_missing_family() {
        let result = ConfigDocument::parse(
            r#"
            [Global]
            [Account.a]
            [Style.c]
            "#,
        );
        assert!(matches!(result, Err(ConfigError::MissingSection(s)) if s == "CheckBlank"));
    }

    #[test]
    fn test_unknown_selector() {
        let doc = ConfigDocument::parse(SAMPLE).unwrap();
        let result = doc.section(SectionFamily::Style, "Fancy");

        assert!(matches!(
            result,
            Err(ConfigError::UnknownSelector { family: SectionFamily::Style, ref name }) if name == "Fancy"
        ));
    }

    #[test]
    fn test_entry_must_be_table() {
        let result = ConfigDocument::parse(
            r#"
            [Global]
            [Account]
            sample = "not a table"
            [CheckBlank.b]
            [Style.c]
            "#,
        );
        assert!(matches!(result, Err(ConfigError::InvalidSection { .. })));
    }

    #[test]
    fn test_array_value_rejected() {
        let result = ConfigDocument::parse(
            r#"
            [Global]
            Margins = [1, 2]
            [Account.a]
            [CheckBlank.b]
            [Style.c]
            "#,
        );
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedValue { ref field, .. }) if field == "Margins"
        ));
    }

    #[test]
    fn test_syntax_error() {
        let result = ConfigDocument::parse("[Global\n");
        assert!(matches!(result, Err(ConfigError::Syntax(_))));
    }
}
