//! Cross-field validation of an assembled [`SepaPayment`].
//!
//! Each check looks at two or more fields and is stateless. They run in a
//! fixed order and the first failure stops the chain.

use super::countries::{SepaCountry, is_eea_country};
use super::error::SepaError;
use super::payment::SepaPayment;
use super::types::{CharacterSet, Version, check_amount_bounds};

/// A single cross-field rule.
pub type PaymentCheck = fn(&SepaPayment) -> Result<(), SepaError>;

/// The validator chain, in evaluation order.
pub const PAYMENT_CHECKS: &[(&str, PaymentCheck)] = &[
    ("country", check_country),
    ("amount", check_amount),
    ("bic", check_bic),
    ("version", check_version),
    ("character_set", check_character_set),
    ("reference", check_references),
];

/// Run every check in [`PAYMENT_CHECKS`] and return the first failure.
pub fn validate_payment(payment: &SepaPayment) -> Result<(), SepaError> {
    for (name, check) in PAYMENT_CHECKS {
        if let Err(err) = check(payment) {
            tracing::warn!(
                validator = *name,
                kind = ?err.kind(),
                country = payment.country_code(),
                "payment rejected"
            );
            return Err(err);
        }
        tracing::debug!(validator = *name, "payment check passed");
    }
    Ok(())
}

/// The IBAN must be issued by a SEPA scheme country.
pub fn check_country(payment: &SepaPayment) -> Result<(), SepaError> {
    let code = payment.country_code();
    if SepaCountry::from_code(code).is_none() {
        return Err(SepaError::InvalidCountry {
            code: code.to_string(),
        });
    }
    Ok(())
}

/// Zero, or strictly above 0.01 and at most 999999999.99.
pub fn check_amount(payment: &SepaPayment) -> Result<(), SepaError> {
    check_amount_bounds(payment.amount().value())
}

/// Outside the EEA a BIC is mandatory. Non-SEPA countries are left to
/// [`check_country`].
pub fn check_bic(payment: &SepaPayment) -> Result<(), SepaError> {
    let code = payment.country_code();
    let Some(country) = SepaCountry::from_code(code) else {
        return Ok(());
    };

    if !is_eea_country(code) && payment.beneficiary_bic().is_empty() {
        return Err(SepaError::bic(
            "",
            format!(
                "BIC is required for country {code} ({})",
                country.territories().join(", ")
            ),
        ));
    }
    Ok(())
}

/// Version 2 is only allowed for EEA countries.
pub fn check_version(payment: &SepaPayment) -> Result<(), SepaError> {
    let code = payment.country_code();
    let version = payment.version();

    match (is_eea_country(code), version) {
        (true, Version::V1 | Version::V2) | (false, Version::V1) => Ok(()),
        (false, Version::V2) => Err(SepaError::version(
            version.code(),
            format!(
                "version {} is not allowed for non-EEA country {code}, use version 001",
                version.code()
            ),
        )),
    }
}

/// The character set must map back to one of the eight payload codes.
pub fn check_character_set(payment: &SepaPayment) -> Result<(), SepaError> {
    let charset = payment.character_set();
    if CharacterSet::from_code(charset.code()) != Some(charset) {
        return Err(SepaError::InvalidCharacterSet {
            value: charset.label().to_string(),
        });
    }
    Ok(())
}

/// Structured and unstructured references are mutually exclusive.
pub fn check_references(payment: &SepaPayment) -> Result<(), SepaError> {
    let structured = payment.structured_reference();
    if !structured.is_empty() && !payment.unstructured_reference().is_empty() {
        return Err(SepaError::reference(
            structured.as_str(),
            "cannot use both structured and unstructured references",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;
    use crate::core::payment::SepaPaymentBuilder;
    use rust_decimal_macros::dec;

    fn payment(iban: &str, bic: &str, version: &str) -> SepaPayment {
        SepaPaymentBuilder::new("Test", iban)
            .amount(dec!(1.23))
            .bic(bic)
            .version(version)
            .build_unchecked()
            .unwrap()
    }

    #[test]
    fn chain_order() {
        let names: Vec<&str> = PAYMENT_CHECKS.iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            ["country", "amount", "bic", "version", "character_set", "reference"]
        );
    }

    #[test]
    fn country_outside_sepa() {
        let p = payment("TR330006100519786457841326", "", "1");
        let err = check_country(&p).unwrap_err();
        assert_eq!(err, SepaError::InvalidCountry { code: "TR".into() });
    }

    #[test]
    fn country_check_runs_first() {
        // TR also fails the BIC and version rules; only the country is reported.
        let p = payment("TR330006100519786457841326", "", "2");
        assert_eq!(
            validate_payment(&p).unwrap_err().kind(),
            ErrorKind::InvalidCountry
        );
    }

    #[test]
    fn bic_optional_in_eea() {
        assert!(check_bic(&payment("BE71096123456769", "", "2")).is_ok());
    }

    #[test]
    fn bic_required_outside_eea() {
        let err = check_bic(&payment("CH1789144545966849535", "", "1")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBic);
        assert!(err.to_string().contains("BIC is required for country CH"));
        assert!(check_bic(&payment("CH1789144545966849535", "POFICHBEXXX", "1")).is_ok());
    }

    #[test]
    fn bic_check_ignores_unknown_country() {
        assert!(check_bic(&payment("TR330006100519786457841326", "", "1")).is_ok());
    }

    #[test]
    fn version_rules() {
        assert!(check_version(&payment("CH5489144217732752267", "POFICHBEXXX", "001")).is_ok());
        let err = check_version(&payment("CH5489144217732752267", "POFICHBEXXX", "002"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidVersion);
        assert!(err.to_string().contains("not allowed for non-EEA"));
        assert!(check_version(&payment("FR8912739000307416375449M20", "", "002")).is_ok());
        assert!(check_version(&payment("FR8912739000307416375449M20", "", "001")).is_ok());
    }

    #[test]
    fn references_are_exclusive() {
        let both = SepaPaymentBuilder::new("Test", "BE71096123456769")
            .structured_reference("RF18539007547034")
            .unstructured_reference("Facture 2024-05")
            .build_unchecked()
            .unwrap();
        let err = check_references(&both).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidReference);

        let only_structured = SepaPaymentBuilder::new("Test", "BE71096123456769")
            .structured_reference("RF18539007547034")
            .build_unchecked()
            .unwrap();
        assert!(check_references(&only_structured).is_ok());
    }

    #[test]
    fn character_set_always_maps() {
        for label in ["UTF-8", "ISO-8859-1", "ISO-8859-15"] {
            let p = SepaPaymentBuilder::new("Test", "BE71096123456769")
                .character_set(label)
                .build_unchecked()
                .unwrap();
            assert!(check_character_set(&p).is_ok());
        }
    }
}
