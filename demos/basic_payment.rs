use sepaqr::core::*;
use rust_decimal_macros::dec;

fn main() {
    // A donation to a Belgian charity with a structured communication
    let payment = SepaPaymentBuilder::new("Croix-Rouge de Belgique", "BE72 0000 0000 1616")
        .amount(dec!(25.00))
        .structured_reference("+++010/8068/17183+++")
        .purpose("CHAR")
        .build()
        .unwrap();

    println!("Beneficiary: {}", payment.beneficiary_name());
    println!("IBAN:        {}", payment.beneficiary_iban().formatted());
    println!("Amount:      EUR {}", payment.amount());
    println!("Version:     {}", payment.version().label());
    println!();

    // This is the text to feed into a QR code generator
    println!("{}", payment.to_text());

    // A Swiss beneficiary needs a BIC and version 001
    let swiss = SepaPaymentBuilder::new("Musterfirma AG", "CH5604835012345678009")
        .amount(dec!(150))
        .bic("CRESCHZZ80A")
        .version("001")
        .unstructured_reference("Rechnung 2024-117")
        .build()
        .unwrap();

    println!();
    println!("{}", swiss.to_text());
}
