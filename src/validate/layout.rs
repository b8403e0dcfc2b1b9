use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// The fixed check body layouts the PostScript program knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckLayout {
    Original,
    QStandard,
    QWallet,
}

impl CheckLayout {
    pub const ALL: [CheckLayout; 3] = [Self::Original, Self::QStandard, Self::QWallet];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Original => "Original",
            Self::QStandard => "QStandard",
            Self::QWallet => "QWallet",
        }
    }
}

impl FromStr for CheckLayout {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|layout| layout.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidLayout(s.to_string()))
    }
}

impl fmt::Display for CheckLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_layouts() {
        assert_eq!("QWallet".parse::<CheckLayout>(), Ok(CheckLayout::QWallet));
        assert_eq!("Original".parse::<CheckLayout>(), Ok(CheckLayout::Original));
    }

    #[test]
    fn test_layout_is_case_sensitive() {
        assert_eq!(
            "qstandard".parse::<CheckLayout>(),
            Err(ValidationError::InvalidLayout("qstandard".into()))
        );
    }
}
