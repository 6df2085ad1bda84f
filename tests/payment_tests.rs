//! Builder and request-level tests.

use rust_decimal_macros::dec;
use sepaqr::core::*;

#[test]
fn builder_field_error_reported_first() {
    let err = SepaPaymentBuilder::new("Test", "BE71096123456769")
        .amount(dec!(0.01))
        .bic("SHORT")
        .build()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidAmount);
}

#[test]
fn unknown_character_set() {
    let err = SepaPaymentBuilder::new("Test", "BE71096123456769")
        .character_set("ASCII")
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        SepaError::InvalidCharacterSet {
            value: "ASCII".into()
        }
    );
}

#[test]
fn request_into_payment() {
    let mut request = PaymentRequest::new("Franz Mustermänn", "DE71110220330123456789");
    request.amount = dec!(12.3);
    request.beneficiary_bic = "BHBLDEHHXXX".into();
    request.structured_reference = "RF18539007547034".into();
    request.purpose = "GDDS".into();
    request.version = "1".into();

    let p = request.into_payment().unwrap();
    assert_eq!(p.version(), Version::V1);
    assert_eq!(p.beneficiary_bic().as_str(), "BHBLDEHHXXX");
    assert!(p.to_text().starts_with("BCD\n001\n1\nSCT\nBHBLDEHHXXX\n"));
}

#[test]
fn request_errors_propagate() {
    let request = PaymentRequest::new("Test", "TR330006100519786457841326");
    let err = SepaPayment::try_from(request).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidCountry);
}

#[test]
fn payment_serializes_to_strings() {
    let p = SepaPaymentBuilder::new("WWF Belgium", "BE88191157467641")
        .amount(dec!(7.5))
        .build()
        .unwrap();
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["beneficiary_iban"], "BE88191157467641");
    assert_eq!(json["character_set"], "UTF-8");
    assert_eq!(json["version"], "002");
    assert_eq!(json["amount"], "7.5");
}

#[cfg(feature = "json")]
mod json {
    use super::*;

    #[test]
    fn request_from_json_with_defaults() {
        let request = PaymentRequest::from_json(
            r#"{"beneficiaryName": "WWF Belgium", "beneficiaryIban": "BE88191157467641"}"#,
        )
        .unwrap();
        assert_eq!(request.character_set, "UTF-8");
        assert_eq!(request.version, "2");
        assert!(request.amount.is_zero());
        assert!(request.into_payment().is_ok());
    }

    #[test]
    fn request_from_json_full() {
        let request = PaymentRequest::from_json(
            r#"{
                "beneficiaryName": "François D'Alsace S.A.",
                "beneficiaryIBAN": "FR1420041010050500013M02606",
                "amount": "12.30",
                "unstructuredReference": "Client:Marie Louise La Lune",
                "characterSet": "ISO-8859-1"
            }"#,
        )
        .unwrap();
        let p = request.into_payment().unwrap();
        assert_eq!(
            p.to_text(),
            "BCD\n002\n2\nSCT\n\nFrançois D'Alsace S.A.\nFR1420041010050500013M02606\nEUR12.30\n\n\nClient:Marie Louise La Lune"
        );
    }

    #[test]
    fn request_from_json_missing_iban() {
        let err = PaymentRequest::from_json(r#"{"beneficiaryName": "X"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Json);
    }

    #[test]
    fn request_from_json_malformed() {
        let err = PaymentRequest::from_json("{not json").unwrap_err();
        assert!(err.to_string().starts_with("JSON error"));
    }
}
