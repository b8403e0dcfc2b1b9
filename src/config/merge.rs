//! Layered merging of configuration sections into one flat field map.

use super::document::{ConfigDocument, SectionFamily};
use super::value::FieldMap;
use super::ConfigError;

pub const DEFAULT_ACCOUNT: &str = "sample";
pub const DEFAULT_CHECK_BLANK: &str = "MVG3001";
pub const DEFAULT_STYLE: &str = "Normal";

/// Which entry to take from each keyed section family.
///
/// ```
/// use freecheck::config::Selection;
///
/// let selection = Selection::default()
///     .with_account("business")
///     .with_style("Wallet");
/// assert_eq!(selection.check_blank(), "MVG3001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Selection {
    account: String,
    check_blank: String,
    style: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(DEFAULT_ACCOUNT, DEFAULT_CHECK_BLANK, DEFAULT_STYLE)
    }
}

impl Selection {
    pub fn new(
        account: impl Into<String>,
        check_blank: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            check_blank: check_blank.into(),
            style: style.into(),
        }
    }

    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = account.into();
        self
    }

    pub fn with_check_blank(mut self, check_blank: impl Into<String>) -> Self {
        self.check_blank = check_blank.into();
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn check_blank(&self) -> &str {
        &self.check_blank
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    /// The selector name for a family.
    pub fn name(&self, family: SectionFamily) -> &str {
        match family {
            SectionFamily::Account => &self.account,
            SectionFamily::CheckBlank => &self.check_blank,
            SectionFamily::Style => &self.style,
        }
    }
}

/// Folds an ordered list of layers into one map; later layers win.
pub fn merge_layers<'a>(layers: impl IntoIterator<Item = &'a FieldMap>) -> FieldMap {
    layers.into_iter().fold(FieldMap::new(), |mut merged, layer| {
        merged.overlay(layer);
        merged
    })
}

/// Resolves the selected sections and merges them as
/// Global, Account, CheckBlank, Style.
///
/// Every selector is checked before anything is merged, so an unknown
/// name never yields a partial result. The document is left untouched.
pub fn resolve(document: &ConfigDocument, selection: &Selection) -> Result<FieldMap, ConfigError> {
    let mut layers = vec![document.global()];
    for family in SectionFamily::ALL {
        let name = selection.name(family);
        let fields = document.section(family, name)?;
        tracing::debug!(section = %family, name, fields = fields.len(), "selected layer");
        layers.push(fields);
    }

    let merged = merge_layers(layers);
    tracing::debug!(fields = merged.len(), "merged configuration");
    Ok(merged)
}
