//! Command-line overrides and validation of the merged field map.
//!
//! Validation is fail-fast and runs in a fixed order: routing format,
//! on-us fields, check number, page count, fraction format, layout, and
//! finally the routing checksum cross-check. A successful run yields
//! [`ValidatedFields`], the only input the template compiler accepts.

mod error;
mod fraction;
mod layout;
mod routing;

pub use error::ValidationError;
pub use fraction::Fraction;
pub use layout::CheckLayout;
pub use routing::{check_routing_format, check_routing_number, RoutingNumber, TRANSIT_SENTINEL};

use crate::config::{FieldMap, FieldValue};

/// Field names the validator and overrides know about.
pub mod field {
    pub const ROUTING: &str = "Routing";
    pub const AUX_ON_US: &str = "AuxOnUs";
    pub const ON_US: &str = "OnUs";
    pub const CHECK_NUMBER: &str = "CheckNumber";
    pub const NUM_PAGES: &str = "NumPages";
    pub const FRACTION: &str = "Fraction";
    pub const CHECK_LAYOUT: &str = "CheckLayout";
    pub const PRINT_MICR_LINE: &str = "PrintMICRLine";
    pub const PRINT_CHECK_BODY: &str = "PrintCheckBody";
    pub const PRINT_VOID: &str = "PrintVOID";
}

/// Characters allowed in the on-us fields: digits, dash, and the MICR
/// placeholders `C` (check number digit), `P` (on-us symbol), `S` (space).
const MICR_FIELD_SYMBOLS: &[u8] = b"-CPS";

/// Run options that take priority over every configuration layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub check_number: Option<u64>,
    pub pages: Option<u64>,
    pub no_micr: bool,
    pub no_body: bool,
    pub test: bool,
}

impl Overrides {
    /// Folds the overrides into a merged map as its final layer.
    ///
    /// `PrintVOID` is always written, `"true"` only for test runs.
    pub fn apply(&self, fields: &mut FieldMap) {
        if let Some(n) = self.check_number {
            fields.insert(field::CHECK_NUMBER, n.to_string());
        }
        if let Some(n) = self.pages {
            fields.insert(field::NUM_PAGES, n.to_string());
        }
        if self.no_micr {
            fields.insert(field::PRINT_MICR_LINE, "false");
        }
        if self.no_body {
            fields.insert(field::PRINT_CHECK_BODY, "false");
        }
        fields.insert(field::PRINT_VOID, if self.test { "true" } else { "false" });
    }
}

/// A merged field map that passed validation, with the parsed values the
/// checks produced. Read-only from here on.
#[derive(Debug, Clone)]
pub struct ValidatedFields {
    fields: FieldMap,
    routing: RoutingNumber,
    fraction: Fraction,
    layout: CheckLayout,
    check_number: u64,
    num_pages: u64,
}

impl ValidatedFields {
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn routing(&self) -> &RoutingNumber {
        &self.routing
    }

    pub fn fraction(&self) -> &Fraction {
        &self.fraction
    }

    pub fn layout(&self) -> CheckLayout {
        self.layout
    }

    pub fn check_number(&self) -> u64 {
        self.check_number
    }

    pub fn num_pages(&self) -> u64 {
        self.num_pages
    }

    pub fn into_fields(self) -> FieldMap {
        self.fields
    }
}

/// Validates a merged map whose overrides have already been applied.
pub fn validate(fields: FieldMap) -> Result<ValidatedFields, ValidationError> {
    let micr = required(&fields, field::ROUTING)?;
    check_routing_format(&micr)?;

    check_micr_field(field::AUX_ON_US, &required(&fields, field::AUX_ON_US)?)?;
    check_micr_field(field::ON_US, &required(&fields, field::ON_US)?)?;

    let check_number = parse_number(field::CHECK_NUMBER, &required(&fields, field::CHECK_NUMBER)?)?;
    let num_pages = parse_number(field::NUM_PAGES, &required(&fields, field::NUM_PAGES)?)?;
    if num_pages == 0 {
        return Err(ValidationError::InvalidFieldFormat {
            field: field::NUM_PAGES,
            value: num_pages.to_string(),
            reason: "must be at least 1",
        });
    }

    let fraction = Fraction::parse(&required(&fields, field::FRACTION)?)?;
    let layout: CheckLayout = required(&fields, field::CHECK_LAYOUT)?.parse()?;
    let routing = check_routing_number(&micr, &fraction)?;

    tracing::debug!(
        routing = %routing,
        layout = %layout,
        check_number,
        num_pages,
        "validated fields"
    );

    Ok(ValidatedFields {
        fields,
        routing,
        fraction,
        layout,
        check_number,
        num_pages,
    })
}

fn required(fields: &FieldMap, name: &'static str) -> Result<String, ValidationError> {
    fields.text(name).ok_or(ValidationError::MissingField(name))
}

fn check_micr_field(name: &'static str, value: &str) -> Result<(), ValidationError> {
    let allowed = |b: u8| b.is_ascii_digit() || MICR_FIELD_SYMBOLS.contains(&b);
    if value.bytes().all(allowed) {
        Ok(())
    } else {
        Err(ValidationError::InvalidFieldFormat {
            field: name,
            value: value.to_string(),
            reason: "may only contain digits, '-', or the MICR symbols 'C', 'P' and 'S'",
        })
    }
}

fn parse_number(name: &'static str, value: &str) -> Result<u64, ValidationError> {
    let invalid = |reason| ValidationError::InvalidFieldFormat {
        field: name,
        value: value.to_string(),
        reason,
    };
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("must be numeric"));
    }
    value.parse().map_err(|_| invalid("is too large"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> FieldMap {
        [
            (field::ROUTING, "R021000021R"),
            (field::AUX_ON_US, "CCCC"),
            (field::ON_US, "123456789P"),
            (field::CHECK_NUMBER, "1001"),
            (field::NUM_PAGES, "1"),
            (field::FRACTION, "62-2/210"),
            (field::CHECK_LAYOUT, "QStandard"),
        ]
        .into_iter()
        .collect()
    }

    fn with(name: &str, value: impl Into<FieldValue>) -> FieldMap {
        let mut fields = valid_fields();
        fields.insert(name, value);
        fields
    }

    #[test]
    fn test_valid_fields() {
        let validated = validate(valid_fields()).unwrap();

        assert_eq!(validated.check_number(), 1001);
        assert_eq!(validated.num_pages(), 1);
        assert_eq!(validated.layout(), CheckLayout::QStandard);
        assert_eq!(validated.routing().to_string(), "021000021");
        assert_eq!(validated.fraction().suffix(), "-2/210");

        let fields = validated.into_fields();
        assert_eq!(fields.text(field::ROUTING).as_deref(), Some("R021000021R"));
        assert_eq!(fields.text(field::CHECK_LAYOUT).as_deref(), Some("QStandard"));
    }

    #[test]
    fn test_integer_fields_accepted() {
        let mut fields = with(field::CHECK_NUMBER, 42i64);
        fields.insert(field::NUM_PAGES, 3i64);
        let validated = validate(fields).unwrap();

        assert_eq!(validated.check_number(), 42);
        assert_eq!(validated.num_pages(), 3);
    }

    #[test]
    fn test_overrides_replace_fields() {
        let mut fields = valid_fields();
        fields.insert(field::PRINT_MICR_LINE, "true");
        let overrides = Overrides {
            check_number: Some(2500),
            pages: Some(4),
            no_micr: true,
            no_body: true,
            test: true,
        };
        overrides.apply(&mut fields);

        assert_eq!(fields.text(field::CHECK_NUMBER).as_deref(), Some("2500"));
        assert_eq!(fields.text(field::NUM_PAGES).as_deref(), Some("4"));
        assert_eq!(fields.text(field::PRINT_MICR_LINE).as_deref(), Some("false"));
        assert_eq!(fields.text(field::PRINT_CHECK_BODY).as_deref(), Some("false"));
        assert_eq!(fields.text(field::PRINT_VOID).as_deref(), Some("true"));
    }

    #[test]
    fn test_print_void_always_set() {
        let mut fields = valid_fields();
        Overrides::default().apply(&mut fields);

        assert_eq!(fields.text(field::PRINT_VOID).as_deref(), Some("false"));
        assert!(!fields.contains(field::PRINT_MICR_LINE));
        assert_eq!(fields.text(field::CHECK_NUMBER).as_deref(), Some("1001"));
    }

    #[test]
    fn test_bad_routing_format() {
        let result = validate(with(field::ROUTING, "021000021"));
        assert!(matches!(result, Err(ValidationError::InvalidRoutingFormat(_))));
    }

    #[test]
    fn test_bad_aux_on_us() {
        let result = validate(with(field::AUX_ON_US, "12X4"));
        assert!(matches!(
            result,
            Err(ValidationError::InvalidFieldFormat { field: "AuxOnUs", .. })
        ));
    }

    #[test]
    fn test_empty_aux_on_us_allowed() {
        assert!(validate(with(field::AUX_ON_US, "")).is_ok());
    }

    #[test]
    fn test_bad_check_number() {
        for value in ["", "12a", "-5"] {
            let result = validate(with(field::CHECK_NUMBER, value));
            assert!(
                matches!(
                    result,
                    Err(ValidationError::InvalidFieldFormat { field: "CheckNumber", .. })
                ),
                "accepted {value:?}"
            );
        }
    }

    #[test]
    fn test_check_number_over_limit() {
        let result = validate(with(field::CHECK_NUMBER, "123456789012345678901234"));
        assert_eq!(
            result.err(),
            Some(ValidationError::InvalidFieldFormat {
                field: "CheckNumber",
                value: "123456789012345678901234".into(),
                reason: "is too large",
            })
        );
    }

    #[test]
    fn test_bad_page_count() {
        for value in ["two", "0"] {
            let result = validate(with(field::NUM_PAGES, value));
            assert!(matches!(
                result,
                Err(ValidationError::InvalidFieldFormat { field: "NumPages", .. })
            ));
        }
    }

    #[test]
    fn test_bad_fraction() {
        let result = validate(with(field::FRACTION, "62/2-210"));
        assert!(matches!(result, Err(ValidationError::InvalidFractionFormat(_))));
    }

    #[test]
    fn test_bad_layout() {
        let result = validate(with(field::CHECK_LAYOUT, "Fancy"));
        assert_eq!(result.err(), Some(ValidationError::InvalidLayout("Fancy".into())));
    }

    #[test]
    fn test_checksum_runs_last() {
        // Both the layout and the checksum are wrong; the layout is reported.
        let mut fields = with(field::ROUTING, "R021000022R");
        fields.insert(field::CHECK_LAYOUT, "Fancy");
        assert!(matches!(validate(fields), Err(ValidationError::InvalidLayout(_))));

        let result = validate(with(field::ROUTING, "R021000022R"));
        assert!(matches!(result, Err(ValidationError::InvalidRoutingChecksum { .. })));
    }

    #[test]
    fn test_missing_required_field() {
        let fields: FieldMap = valid_fields()
            .iter()
            .filter(|(name, _)| name.as_str() != field::FRACTION)
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        assert_eq!(
            validate(fields).err(),
            Some(ValidationError::MissingField("Fraction"))
        );
    }
}
