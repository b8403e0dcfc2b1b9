use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("required field '{0}' is not defined")]
    MissingField(&'static str),

    #[error("routing number must be numeric, with an 'R' on each end (got '{0}')")]
    InvalidRoutingFormat(String),

    #[error("field '{field}' is invalid: {reason} (got '{value}')")]
    InvalidFieldFormat {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error(
        "routing fraction must look like '12-3456/7890' with a '-' in the numerator (got '{0}')"
    )]
    InvalidFractionFormat(String),

    #[error("check layout must be 'Original', 'QStandard', or 'QWallet' (got '{0}')")]
    InvalidLayout(String),

    #[error(
        "routing number MICR should be exactly 11 characters long; 9 digits with an 'R' at start and end (got '{0}')"
    )]
    InvalidRoutingLength(String),

    #[error("routing number MICR must start and end with 'R' (got '{0}')")]
    InvalidRoutingSentinels(String),

    #[error(
        "for the routing number '{routing}', the expected routing fraction was '##{expected}' (where ## is any two digits), but the configured one was '{actual}'"
    )]
    InvalidRoutingFraction {
        routing: String,
        expected: String,
        actual: String,
    },

    #[error(
        "routing number '{routing}' has an invalid checksum: expected check digit {expected}, found {actual}"
    )]
    InvalidRoutingChecksum {
        routing: String,
        expected: u8,
        actual: u8,
    },
}
