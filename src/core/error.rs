use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while constructing or validating a SEPA payment.
///
/// Field value types fail with the variant matching their attribute; the
/// cross-field chain reuses the same variants so callers only have one
/// error surface to match on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SepaError {
    /// IBAN failed length, format or MOD 97-10 validation.
    #[error("invalid IBAN '{value}': {reason}")]
    InvalidIban { value: String, reason: String },

    /// BIC has a bad length, or is missing where the country requires one.
    #[error("invalid BIC '{value}': {reason}")]
    InvalidBic { value: String, reason: String },

    /// IBAN country is not part of the SEPA scheme.
    #[error("country code '{code}' is not part of the SEPA scheme")]
    InvalidCountry { code: String },

    /// Amount is negative or outside the allowed range.
    #[error("invalid amount {value}: {reason}")]
    InvalidAmount { value: String, reason: String },

    /// Unknown version, or a version the IBAN country does not allow.
    #[error("invalid version '{value}': {reason}")]
    InvalidVersion { value: String, reason: String },

    /// Character set label is not one of the eight EPC encodings.
    #[error("character set '{value}' is not supported")]
    InvalidCharacterSet { value: String },

    /// Structured reference checksum failed, or both reference kinds are set.
    #[error("invalid reference '{value}': {reason}")]
    InvalidReference { value: String, reason: String },

    /// A text field is shorter or longer than the EPC format allows.
    #[error("{field} must be between {min} and {max} characters, got {actual}")]
    FieldLengthExceeded {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },

    /// JSON payment request could not be decoded.
    #[error("JSON error: {0}")]
    Json(String),
}

/// Machine-readable error kind, one per [`SepaError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidIban,
    InvalidBic,
    InvalidCountry,
    InvalidAmount,
    InvalidVersion,
    InvalidCharacterSet,
    InvalidReference,
    FieldLengthExceeded,
    Json,
}

impl SepaError {
    /// The kind of this error, without its context.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidIban { .. } => ErrorKind::InvalidIban,
            Self::InvalidBic { .. } => ErrorKind::InvalidBic,
            Self::InvalidCountry { .. } => ErrorKind::InvalidCountry,
            Self::InvalidAmount { .. } => ErrorKind::InvalidAmount,
            Self::InvalidVersion { .. } => ErrorKind::InvalidVersion,
            Self::InvalidCharacterSet { .. } => ErrorKind::InvalidCharacterSet,
            Self::InvalidReference { .. } => ErrorKind::InvalidReference,
            Self::FieldLengthExceeded { .. } => ErrorKind::FieldLengthExceeded,
            Self::Json(_) => ErrorKind::Json,
        }
    }

    pub(crate) fn iban(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidIban {
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn bic(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBic {
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn amount(value: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn version(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidVersion {
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn reference(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidReference {
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn length(field: &'static str, min: usize, max: usize, actual: usize) -> Self {
        Self::FieldLengthExceeded {
            field,
            min,
            max,
            actual,
        }
    }
}
