use rust_decimal_macros::dec;
use sepaqr::core::*;

// ── Beneficiary name ─────────────────────────────────────────────────────────

#[test]
fn name_bounds() {
    assert_eq!(BeneficiaryName::new("  ACME  ").unwrap().as_str(), "ACME");
    assert!(BeneficiaryName::new(&"a".repeat(70)).is_ok());

    let err = BeneficiaryName::new(&"a".repeat(71)).unwrap_err();
    assert_eq!(
        err,
        SepaError::FieldLengthExceeded {
            field: "beneficiaryName",
            min: 1,
            max: 70,
            actual: 71,
        }
    );
    assert_eq!(
        err.to_string(),
        "beneficiaryName must be between 1 and 70 characters, got 71"
    );

    assert_eq!(
        BeneficiaryName::new("   ").unwrap_err().kind(),
        ErrorKind::FieldLengthExceeded
    );
}

#[test]
fn name_length_counts_bytes() {
    // 35 two-byte characters are 70 bytes, one more is over the limit.
    assert!(BeneficiaryName::new(&"ä".repeat(35)).is_ok());
    assert!(BeneficiaryName::new(&"ä".repeat(36)).is_err());
}

// ── IBAN ─────────────────────────────────────────────────────────────────────

#[test]
fn iban_parts() {
    let iban = Iban::new("fr76 3000 6000 0112 3456 7890 189").unwrap();
    assert_eq!(iban.as_str(), "FR7630006000011234567890189");
    assert_eq!(iban.country_code(), "FR");
    assert_eq!(iban.check_digits(), "76");
    assert_eq!(iban.bban(), "30006000011234567890189");
    assert_eq!(iban.formatted(), "FR76 3000 6000 0112 3456 7890 189");
    assert_eq!(iban.to_string(), "FR7630006000011234567890189");
}

#[test]
fn iban_rejects_bad_checksum() {
    let err = Iban::new("BE71096123456760").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidIban);
    assert!(err.to_string().contains("checksum"));
}

// ── BIC ──────────────────────────────────────────────────────────────────────

#[test]
fn bic_lengths() {
    assert!(Bic::new("").unwrap().is_empty());
    assert!(Bic::new("GEBABEBB").is_ok());
    assert!(Bic::new("GEBABEBBXXX").is_ok());
    assert_eq!(Bic::new("GEBABEB").unwrap_err().kind(), ErrorKind::InvalidBic);
    assert_eq!(
        Bic::new("GEBABEBBXXXX").unwrap_err().kind(),
        ErrorKind::InvalidBic
    );
}

// ── Amount ───────────────────────────────────────────────────────────────────

#[test]
fn amount_zero_means_unspecified() {
    assert!(Amount::new(dec!(0)).unwrap().is_zero());
    assert_eq!(Amount::zero(), Amount::default());
}

#[test]
fn amount_bounds() {
    assert!(Amount::new(dec!(0.02)).is_ok());
    assert!(Amount::new(dec!(999999999.99)).is_ok());
    assert!(Amount::new(dec!(0.01)).is_err());
    assert!(Amount::new(dec!(0.001)).is_err());
    assert!(Amount::new(dec!(1000000000.00)).is_err());
    assert_eq!(
        Amount::new(dec!(-5)).unwrap_err().kind(),
        ErrorKind::InvalidAmount
    );
}

#[test]
fn amount_scale() {
    assert!(Amount::new(dec!(12.30)).is_ok());
    assert!(Amount::new(dec!(12.300)).is_ok());
    let err = Amount::new(dec!(12.345)).unwrap_err();
    assert!(err.to_string().contains("two decimal places"));
}

// ── Purpose and references ───────────────────────────────────────────────────

#[test]
fn purpose_length() {
    assert!(Purpose::new("").unwrap().is_empty());
    assert!(Purpose::new("GDDS").is_ok());
    assert_eq!(
        Purpose::new("GDDSX").unwrap_err(),
        SepaError::FieldLengthExceeded {
            field: "purpose",
            min: 0,
            max: 4,
            actual: 5,
        }
    );
}

#[test]
fn structured_reference_keeps_raw_form() {
    let r = StructuredReference::new("+++010/8068/17183+++").unwrap();
    assert_eq!(r.as_str(), "+++010/8068/17183+++");
    assert!(StructuredReference::new("").unwrap().is_empty());
}

#[test]
fn structured_reference_errors() {
    assert_eq!(
        StructuredReference::new("RF19539007547034").unwrap_err().kind(),
        ErrorKind::InvalidReference
    );
    assert_eq!(
        StructuredReference::new(&format!("RF18 {}", " ".repeat(31)))
            .unwrap_err()
            .kind(),
        ErrorKind::FieldLengthExceeded
    );
}

#[test]
fn unstructured_reference_length() {
    assert_eq!(
        UnstructuredReference::new("  Invoice 42 ").unwrap().as_str(),
        "Invoice 42"
    );
    assert!(UnstructuredReference::new(&"x".repeat(140)).is_ok());
    assert_eq!(
        UnstructuredReference::new(&"x".repeat(141))
            .unwrap_err()
            .kind(),
        ErrorKind::FieldLengthExceeded
    );
}

#[test]
fn originator_info_is_free_text() {
    let long = "y".repeat(300);
    assert_eq!(BeneficiaryToOriginatorInfo::new(&long).as_str(), long);
}

// ── Character set and version ────────────────────────────────────────────────

#[test]
fn character_set_codes() {
    let codes: Vec<u8> = CharacterSet::ALL.iter().map(|c| c.code()).collect();
    assert_eq!(codes, [1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(
        CharacterSet::from_label("ISO-8859-15").unwrap(),
        CharacterSet::Iso8859_15
    );
    assert_eq!(CharacterSet::from_code(2), Some(CharacterSet::Iso8859_1));
    assert_eq!(CharacterSet::from_code(9), None);
    assert_eq!(
        CharacterSet::from_label("latin1").unwrap_err().kind(),
        ErrorKind::InvalidCharacterSet
    );
    assert_eq!(CharacterSet::default(), CharacterSet::Utf8);
}

#[test]
fn version_forms() {
    assert_eq!(Version::parse("1").unwrap(), Version::V1);
    assert_eq!(Version::parse("001").unwrap(), Version::V1);
    assert_eq!(Version::parse("002").unwrap(), Version::V2);
    assert_eq!(Version::default(), Version::V2);
    assert_eq!(Version::V1.code(), "001");
    assert_eq!(Version::V2.number(), 2);
    assert_eq!(
        Version::parse("3").unwrap_err().kind(),
        ErrorKind::InvalidVersion
    );
}

// ── Countries ────────────────────────────────────────────────────────────────

#[test]
fn country_tables() {
    assert!(is_sepa_country("CH"));
    assert!(!is_eea_country("CH"));
    assert!(is_eea_country("FR"));
    assert!(!is_sepa_country("TR"));
    assert_eq!(SepaCountry::from_code("AT"), Some(SepaCountry::AT));
    assert!(EeaCountry::ALL.iter().all(|c| is_sepa_country(c.code())));
    assert!(sepa_territories("GB").is_some());
    assert_eq!(sepa_territories("US"), None);
}
