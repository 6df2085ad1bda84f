use sepaqr::core::*;
use rust_decimal_macros::dec;

fn main() {
    // ── 1. Field errors: caught while building ────────────────────────
    println!("=== Field Errors ===");
    let attempts = [
        SepaPaymentBuilder::new("ACME", "BE71 0961 2345 6760"),
        SepaPaymentBuilder::new("", "BE71096123456769"),
        SepaPaymentBuilder::new("ACME", "BE71096123456769").amount(dec!(0.01)),
        SepaPaymentBuilder::new("ACME", "BE71096123456769").structured_reference("RF19539007547034"),
        SepaPaymentBuilder::new("ACME", "BE71096123456769").character_set("ASCII"),
    ];
    for builder in attempts {
        match builder.build() {
            Ok(p) => println!("  ok: {}", p.beneficiary_iban()),
            Err(e) => println!("  {:?}: {}", e.kind(), e),
        }
    }

    // ── 2. Cross-field errors: country rules ──────────────────────────
    println!("\n=== Country Rules ===");
    let cases = [
        ("Turkish IBAN", SepaPaymentBuilder::new("ACME", "TR330006100519786457841326")),
        ("Swiss IBAN without BIC", SepaPaymentBuilder::new("ACME", "CH5604835012345678009").version("1")),
        (
            "Swiss IBAN with version 002",
            SepaPaymentBuilder::new("ACME", "CH5604835012345678009").bic("CRESCHZZ80A"),
        ),
        (
            "Both references",
            SepaPaymentBuilder::new("ACME", "BE71096123456769")
                .structured_reference("RF18539007547034")
                .unstructured_reference("Invoice 42"),
        ),
    ];
    for (label, builder) in cases {
        match builder.build() {
            Ok(_) => println!("  {label}: accepted"),
            Err(e) => println!("  {label}: {e}"),
        }
    }

    // ── 3. Running the chain yourself ─────────────────────────────────
    println!("\n=== validate_payment() ===");
    let unchecked = SepaPaymentBuilder::new("ACME", "GB29NWBK60161331926819")
        .build_unchecked()
        .unwrap();
    for (name, check) in PAYMENT_CHECKS {
        match check(&unchecked) {
            Ok(()) => println!("  {name}: ok"),
            Err(e) => println!("  {name}: {e}"),
        }
    }
    if let Err(e) = validate_payment(&unchecked) {
        println!("  first failure: {e}");
    }
}
