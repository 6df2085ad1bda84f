use sepaqr::core::*;

fn main() {
    let json = r#"{
        "beneficiaryName": "François D'Alsace S.A.",
        "beneficiaryIban": "FR1420041010050500013M02606",
        "amount": "12.30",
        "unstructuredReference": "Client:Marie Louise La Lune",
        "characterSet": "ISO-8859-1"
    }"#;

    let request = match PaymentRequest::from_json(json) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Bad request: {e}");
            return;
        }
    };

    match request.into_payment() {
        Ok(payment) => println!("{}", payment.to_text()),
        Err(e) => eprintln!("Rejected ({:?}): {e}", e.kind()),
    }
}
