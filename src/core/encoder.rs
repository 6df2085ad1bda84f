//! EPC069-12 text payload serialization.

use super::payment::SepaPayment;

/// Service tag, always `BCD`.
pub const SERVICE_TAG: &str = "BCD";
/// Identification code, SEPA Credit Transfer.
pub const IDENTIFICATION: &str = "SCT";
/// The only currency the format allows.
pub const CURRENCY: &str = "EUR";
/// Line separator between payload fields.
pub const LINE_SEPARATOR: &str = "\n";

/// Serialize a payment into the QR payload text.
///
/// One line per field in fixed order. Empty optional fields keep their
/// (empty) line so decoders can locate fields by position; only trailing
/// line breaks at the very end are removed.
///
/// The caller is expected to pass a payment that went through
/// [`validate_payment`](super::validation::validate_payment).
pub fn encode(payment: &SepaPayment) -> String {
    let version = format!("{:03}", payment.version().number());
    let charset = payment.character_set().code().to_string();
    let amount = format_amount(payment);

    let lines: [&str; 12] = [
        SERVICE_TAG,
        &version,
        &charset,
        IDENTIFICATION,
        payment.beneficiary_bic().as_str(),
        payment.beneficiary_name().as_str(),
        payment.beneficiary_iban().as_str(),
        &amount,
        payment.purpose().as_str(),
        payment.structured_reference().as_str(),
        payment.unstructured_reference().as_str(),
        payment.beneficiary_to_originator_info().as_str(),
    ];

    let text = lines.join(LINE_SEPARATOR);
    let encoded = text.trim_end_matches(['\r', '\n']).to_string();

    tracing::trace!(
        bytes = encoded.len(),
        lines = encoded.lines().count(),
        "encoded SEPA payload"
    );

    encoded
}

/// `EUR` followed by the amount with exactly two decimals, `.` separator,
/// no grouping. Zero renders as `EUR0.00`.
fn format_amount(payment: &SepaPayment) -> String {
    let mut value = payment.amount().value().round_dp(2);
    value.rescale(2);
    format!("{CURRENCY}{value}")
}
