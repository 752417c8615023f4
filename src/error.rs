use thiserror::Error;

/// The ways a single conversion request can fail.
///
/// None of these are fatal: the interactive loop reports them and carries on.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConversionError {
    /// The input line does not have the shape `<value> <unit> to <unit>`.
    #[error("Invalid input format ({0}). Use: '<value> <from_unit> to <to_unit>'")]
    InvalidFormat(String),

    /// The units are well-formed but no rate or formula relates them.
    #[error("No conversion rate for {from} to {to}")]
    UnsupportedConversion {
        from: String,
        to: String,
    },

    /// More than one category defines the same rate key.
    #[error("Ambiguous conversion: {key} is defined by {}", categories.join(", "))]
    AmbiguousConversion {
        key: String,
        categories: Vec<String>,
    },
}

impl ConversionError {
    pub fn invalid_format(reason: impl Into<String>) -> ConversionError {
        ConversionError::InvalidFormat(reason.into())
    }

    pub fn unsupported(from: &str, to: &str) -> ConversionError {
        ConversionError::UnsupportedConversion {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
