use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::checksum;
use super::error::SepaError;

/// Beneficiary name length bounds (EPC069-12 field 6), in bytes.
pub const NAME_MIN_LENGTH: usize = 1;
pub const NAME_MAX_LENGTH: usize = 70;
/// BIC length bounds (BIC8 or BIC11).
pub const BIC_MIN_LENGTH: usize = 8;
pub const BIC_MAX_LENGTH: usize = 11;
/// Purpose code maximum length, in characters.
pub const PURPOSE_MAX_LENGTH: usize = 4;
/// Structured reference maximum length, in characters.
pub const STRUCTURED_REFERENCE_MAX_LENGTH: usize = 35;
/// Unstructured remittance text maximum length, in characters.
pub const UNSTRUCTURED_REFERENCE_MAX_LENGTH: usize = 140;

/// Smallest positive amount is exclusive: 0.01 itself is rejected.
pub const AMOUNT_MIN: Decimal = dec!(0.01);
/// Largest amount accepted, inclusive.
pub const AMOUNT_MAX: Decimal = dec!(999999999.99);

/// Field 6: beneficiary name, trimmed, 1-70 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BeneficiaryName(String);

impl BeneficiaryName {
    pub fn new(value: &str) -> Result<Self, SepaError> {
        let value = value.trim();
        let len = value.len();
        if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&len) {
            return Err(SepaError::length(
                "beneficiaryName",
                NAME_MIN_LENGTH,
                NAME_MAX_LENGTH,
                len,
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Field 7: beneficiary IBAN, whitespace-stripped and uppercased,
/// guaranteed to pass MOD 97-10.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iban(String);

impl Iban {
    pub fn new(value: &str) -> Result<Self, SepaError> {
        checksum::check_iban(value).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Two-letter country prefix.
    pub fn country_code(&self) -> &str {
        &self.0[..2]
    }

    /// The two check digits following the country code.
    pub fn check_digits(&self) -> &str {
        &self.0[2..4]
    }

    /// Basic Bank Account Number (everything after the check digits).
    pub fn bban(&self) -> &str {
        &self.0[4..]
    }

    /// Print form in groups of four, e.g. `BE71 0961 2345 6769`.
    pub fn formatted(&self) -> String {
        self.0
            .as_bytes()
            .chunks(4)
            .map(|c| String::from_utf8_lossy(c))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Field 5: beneficiary BIC, empty or 8-11 characters.
///
/// Whether an empty BIC is acceptable depends on the IBAN country and is
/// checked by the cross-field chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Bic(String);

impl Bic {
    pub fn new(value: &str) -> Result<Self, SepaError> {
        if value.is_empty() {
            return Ok(Self::default());
        }
        let len = value.chars().count();
        if !(BIC_MIN_LENGTH..=BIC_MAX_LENGTH).contains(&len) {
            return Err(SepaError::bic(
                value,
                format!("BIC must be between {BIC_MIN_LENGTH} and {BIC_MAX_LENGTH} characters"),
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Field 8: amount in EUR.
///
/// Zero means "no amount", which lets the payer fill it in. Any positive
/// amount must be strictly greater than 0.01 and at most 999999999.99;
/// exactly 0.01 is rejected, as existing payload validators do. At most
/// two decimal places are accepted, so the encoded value is never rounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, SepaError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(SepaError::amount(value, "amount must not be negative"));
        }
        check_amount_bounds(value)?;
        if value.normalize().scale() > 2 {
            return Err(SepaError::amount(
                value,
                "amount must have at most two decimal places",
            ));
        }
        Ok(Self(value))
    }

    /// "No amount specified".
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

/// Range rule shared by [`Amount::new`] and the amount validator.
pub(crate) fn check_amount_bounds(value: Decimal) -> Result<(), SepaError> {
    if value > Decimal::ZERO && (value <= AMOUNT_MIN || value > AMOUNT_MAX) {
        return Err(SepaError::amount(
            value,
            format!("amount must be between {AMOUNT_MIN} and {AMOUNT_MAX}"),
        ));
    }
    Ok(())
}

/// Field 9: purpose code, at most 4 characters (Unicode scalar values).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Purpose(String);

impl Purpose {
    pub fn new(value: &str) -> Result<Self, SepaError> {
        let len = value.chars().count();
        if len > PURPOSE_MAX_LENGTH {
            return Err(SepaError::length("purpose", 0, PURPOSE_MAX_LENGTH, len));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Field 10: structured creditor reference, empty or a valid Belgian
/// structured communication / ISO 11649 reference of at most 35 characters.
///
/// The value is kept exactly as given (e.g. `+++010/8068/17183+++`); the
/// normalization used for the checksum is not written back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StructuredReference(String);

impl StructuredReference {
    pub fn new(value: &str) -> Result<Self, SepaError> {
        if value.is_empty() {
            return Ok(Self::default());
        }
        let len = value.chars().count();
        if len > STRUCTURED_REFERENCE_MAX_LENGTH {
            return Err(SepaError::length(
                "structuredReference",
                0,
                STRUCTURED_REFERENCE_MAX_LENGTH,
                len,
            ));
        }
        if !checksum::is_valid_structured_reference(value) {
            return Err(SepaError::reference(
                value,
                "neither a Belgian structured communication nor an ISO 11649 creditor reference",
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Field 11: free remittance text, trimmed, at most 140 characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UnstructuredReference(String);

impl UnstructuredReference {
    pub fn new(value: &str) -> Result<Self, SepaError> {
        let value = value.trim();
        let len = value.chars().count();
        if len > UNSTRUCTURED_REFERENCE_MAX_LENGTH {
            return Err(SepaError::length(
                "unstructuredReference",
                0,
                UNSTRUCTURED_REFERENCE_MAX_LENGTH,
                len,
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Field 12: beneficiary to originator information. Not length-checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct BeneficiaryToOriginatorInfo(String);

impl BeneficiaryToOriginatorInfo {
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Field 3: character set of the payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CharacterSet {
    #[default]
    Utf8,
    Iso8859_1,
    Iso8859_2,
    Iso8859_4,
    Iso8859_5,
    Iso8859_7,
    Iso8859_10,
    Iso8859_15,
}

impl CharacterSet {
    pub const ALL: [Self; 8] = [
        Self::Utf8,
        Self::Iso8859_1,
        Self::Iso8859_2,
        Self::Iso8859_4,
        Self::Iso8859_5,
        Self::Iso8859_7,
        Self::Iso8859_10,
        Self::Iso8859_15,
    ];

    /// Encoding name, e.g. `"ISO-8859-1"`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Iso8859_1 => "ISO-8859-1",
            Self::Iso8859_2 => "ISO-8859-2",
            Self::Iso8859_4 => "ISO-8859-4",
            Self::Iso8859_5 => "ISO-8859-5",
            Self::Iso8859_7 => "ISO-8859-7",
            Self::Iso8859_10 => "ISO-8859-10",
            Self::Iso8859_15 => "ISO-8859-15",
        }
    }

    /// Single-digit code written into the payload.
    pub fn code(&self) -> u8 {
        match self {
            Self::Utf8 => 1,
            Self::Iso8859_1 => 2,
            Self::Iso8859_2 => 3,
            Self::Iso8859_4 => 4,
            Self::Iso8859_5 => 5,
            Self::Iso8859_7 => 6,
            Self::Iso8859_10 => 7,
            Self::Iso8859_15 => 8,
        }
    }

    /// Parse from the exact encoding name.
    pub fn from_label(label: &str) -> Result<Self, SepaError> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == label)
            .ok_or_else(|| SepaError::InvalidCharacterSet {
                value: label.to_string(),
            })
    }

    /// Parse from the numeric payload code (1-8).
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

/// Field 2: payload version. Version 2 allows omitting the BIC inside the EEA.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Version {
    V1,
    #[default]
    V2,
}

impl Version {
    pub const ALL: [Self; 2] = [Self::V1, Self::V2];

    pub fn number(&self) -> u8 {
        match self {
            Self::V1 => 1,
            Self::V2 => 2,
        }
    }

    /// Zero-padded payload form, `"001"` or `"002"`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::V1 => "001",
            Self::V2 => "002",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::V1 => "Version 1",
            Self::V2 => "Version 2",
        }
    }

    /// Accepts both the short (`"1"`) and zero-padded (`"001"`) forms.
    pub fn parse(value: &str) -> Result<Self, SepaError> {
        match value.trim() {
            "1" | "001" => Ok(Self::V1),
            "2" | "002" => Ok(Self::V2),
            _ => Err(SepaError::version(value, "supported versions are 001 and 002")),
        }
    }
}

macro_rules! impl_text_conversions {
    ($($ty:ident),* $(,)?) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = SepaError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(&value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }
    )*};
}

impl_text_conversions!(
    BeneficiaryName,
    Iban,
    Bic,
    Purpose,
    StructuredReference,
    UnstructuredReference,
);

impl fmt::Display for BeneficiaryToOriginatorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for BeneficiaryToOriginatorInfo {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<BeneficiaryToOriginatorInfo> for String {
    fn from(value: BeneficiaryToOriginatorInfo) -> Self {
        value.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = SepaError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<String> for CharacterSet {
    type Error = SepaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_label(&value)
    }
}

impl From<CharacterSet> for String {
    fn from(value: CharacterSet) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<String> for Version {
    type Error = SepaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Version> for String {
    fn from(value: Version) -> Self {
        value.code().to_string()
    }
}
