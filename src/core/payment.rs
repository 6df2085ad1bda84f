use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::encoder;
use super::error::SepaError;
use super::types::*;
use super::validation;

/// A fully assembled SEPA credit transfer, ready to be encoded.
///
/// Every field has passed its own validation. Instances created through
/// [`SepaPaymentBuilder::build`] or [`PaymentRequest::into_payment`] have
/// also passed the cross-field chain; [`SepaPayment::from_parts`] and
/// [`SepaPaymentBuilder::build_unchecked`] skip it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SepaPayment {
    beneficiary_name: BeneficiaryName,
    beneficiary_iban: Iban,
    amount: Amount,
    structured_reference: StructuredReference,
    unstructured_reference: UnstructuredReference,
    beneficiary_bic: Bic,
    purpose: Purpose,
    beneficiary_to_originator_info: BeneficiaryToOriginatorInfo,
    character_set: CharacterSet,
    version: Version,
}

impl SepaPayment {
    /// Assemble a payment from already validated fields without running
    /// the cross-field chain. Call [`validation::validate_payment`] to check it.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        beneficiary_name: BeneficiaryName,
        beneficiary_iban: Iban,
        amount: Amount,
        structured_reference: StructuredReference,
        unstructured_reference: UnstructuredReference,
        beneficiary_bic: Bic,
        purpose: Purpose,
        beneficiary_to_originator_info: BeneficiaryToOriginatorInfo,
        character_set: CharacterSet,
        version: Version,
    ) -> Self {
        Self {
            beneficiary_name,
            beneficiary_iban,
            amount,
            structured_reference,
            unstructured_reference,
            beneficiary_bic,
            purpose,
            beneficiary_to_originator_info,
            character_set,
            version,
        }
    }

    pub fn beneficiary_name(&self) -> &BeneficiaryName {
        &self.beneficiary_name
    }

    pub fn beneficiary_iban(&self) -> &Iban {
        &self.beneficiary_iban
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn structured_reference(&self) -> &StructuredReference {
        &self.structured_reference
    }

    pub fn unstructured_reference(&self) -> &UnstructuredReference {
        &self.unstructured_reference
    }

    pub fn beneficiary_bic(&self) -> &Bic {
        &self.beneficiary_bic
    }

    pub fn purpose(&self) -> &Purpose {
        &self.purpose
    }

    pub fn beneficiary_to_originator_info(&self) -> &BeneficiaryToOriginatorInfo {
        &self.beneficiary_to_originator_info
    }

    pub fn character_set(&self) -> CharacterSet {
        self.character_set
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Country code of the beneficiary IBAN.
    pub fn country_code(&self) -> &str {
        self.beneficiary_iban.country_code()
    }

    /// The EPC069-12 text payload. See [`encoder::encode`].
    pub fn to_text(&self) -> String {
        encoder::encode(self)
    }
}

/// Builder for [`SepaPayment`].
///
/// Setters only record raw input; every field is validated in
/// [`build`](Self::build), name and IBAN first, and the first failure is
/// returned.
///
/// ```
/// use sepaqr::core::*;
/// use rust_decimal_macros::dec;
///
/// let payment = SepaPaymentBuilder::new("Red Cross of Belgium", "BE72 0000 0000 1616")
///     .amount(dec!(25.00))
///     .unstructured_reference("Donation")
///     .build()
///     .unwrap();
///
/// assert!(payment.to_text().starts_with("BCD\n002\n1\nSCT\n"));
/// ```
#[derive(Debug, Clone)]
pub struct SepaPaymentBuilder {
    beneficiary_name: String,
    beneficiary_iban: String,
    amount: Decimal,
    structured_reference: String,
    unstructured_reference: String,
    beneficiary_bic: String,
    purpose: String,
    beneficiary_to_originator_info: String,
    character_set: String,
    version: String,
}

impl SepaPaymentBuilder {
    pub fn new(beneficiary_name: impl Into<String>, beneficiary_iban: impl Into<String>) -> Self {
        Self {
            beneficiary_name: beneficiary_name.into(),
            beneficiary_iban: beneficiary_iban.into(),
            amount: Decimal::ZERO,
            structured_reference: String::new(),
            unstructured_reference: String::new(),
            beneficiary_bic: String::new(),
            purpose: String::new(),
            beneficiary_to_originator_info: String::new(),
            character_set: CharacterSet::default().label().to_string(),
            version: Version::default().code().to_string(),
        }
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    pub fn structured_reference(mut self, reference: impl Into<String>) -> Self {
        self.structured_reference = reference.into();
        self
    }

    pub fn unstructured_reference(mut self, reference: impl Into<String>) -> Self {
        self.unstructured_reference = reference.into();
        self
    }

    pub fn bic(mut self, bic: impl Into<String>) -> Self {
        self.beneficiary_bic = bic.into();
        self
    }

    pub fn purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    pub fn beneficiary_to_originator_info(mut self, info: impl Into<String>) -> Self {
        self.beneficiary_to_originator_info = info.into();
        self
    }

    pub fn character_set(mut self, label: impl Into<String>) -> Self {
        self.character_set = label.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Validate every field, run the cross-field chain and return the payment.
    pub fn build(self) -> Result<SepaPayment, SepaError> {
        let payment = self.build_unchecked()?;
        validation::validate_payment(&payment)?;
        Ok(payment)
    }

    /// Validate every field but skip the cross-field chain.
    pub fn build_unchecked(self) -> Result<SepaPayment, SepaError> {
        Ok(SepaPayment {
            beneficiary_name: BeneficiaryName::new(&self.beneficiary_name)?,
            beneficiary_iban: Iban::new(&self.beneficiary_iban)?,
            amount: Amount::new(self.amount)?,
            structured_reference: StructuredReference::new(&self.structured_reference)?,
            unstructured_reference: UnstructuredReference::new(&self.unstructured_reference)?,
            beneficiary_bic: Bic::new(&self.beneficiary_bic)?,
            purpose: Purpose::new(&self.purpose)?,
            beneficiary_to_originator_info: BeneficiaryToOriginatorInfo::new(
                &self.beneficiary_to_originator_info,
            ),
            character_set: CharacterSet::from_label(&self.character_set)?,
            version: Version::parse(&self.version)?,
        })
    }
}

/// Raw, named payment input with the documented defaults.
///
/// Deserializes from camelCase keys (`beneficiaryName`, `beneficiaryIban`,
/// ...). Only the name and IBAN are required. With the `serde-with-str`
/// decimal representation the amount is given as a string, e.g. `"12.30"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub beneficiary_name: String,
    #[serde(alias = "beneficiaryIBAN")]
    pub beneficiary_iban: String,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub structured_reference: String,
    #[serde(default)]
    pub unstructured_reference: String,
    #[serde(default, alias = "beneficiaryBIC")]
    pub beneficiary_bic: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub beneficiary_to_originator_info: String,
    #[serde(default = "default_character_set")]
    pub character_set: String,
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_character_set() -> String {
    CharacterSet::default().label().to_string()
}

fn default_version() -> String {
    Version::default().number().to_string()
}

impl PaymentRequest {
    /// A request with only the required fields set.
    pub fn new(beneficiary_name: impl Into<String>, beneficiary_iban: impl Into<String>) -> Self {
        Self {
            beneficiary_name: beneficiary_name.into(),
            beneficiary_iban: beneficiary_iban.into(),
            amount: Decimal::ZERO,
            structured_reference: String::new(),
            unstructured_reference: String::new(),
            beneficiary_bic: String::new(),
            purpose: String::new(),
            beneficiary_to_originator_info: String::new(),
            character_set: default_character_set(),
            version: default_version(),
        }
    }

    /// Build and fully validate the payment.
    pub fn into_payment(self) -> Result<SepaPayment, SepaError> {
        SepaPaymentBuilder::from(self).build()
    }

    /// Decode a request from JSON.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, SepaError> {
        serde_json::from_str(json).map_err(|e| SepaError::Json(e.to_string()))
    }
}

impl From<PaymentRequest> for SepaPaymentBuilder {
    fn from(request: PaymentRequest) -> Self {
        SepaPaymentBuilder::new(request.beneficiary_name, request.beneficiary_iban)
            .amount(request.amount)
            .structured_reference(request.structured_reference)
            .unstructured_reference(request.unstructured_reference)
            .bic(request.beneficiary_bic)
            .purpose(request.purpose)
            .beneficiary_to_originator_info(request.beneficiary_to_originator_info)
            .character_set(request.character_set)
            .version(request.version)
    }
}

impl TryFrom<PaymentRequest> for SepaPayment {
    type Error = SepaError;

    fn try_from(request: PaymentRequest) -> Result<Self, Self::Error> {
        request.into_payment()
    }
}
