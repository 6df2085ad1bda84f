#![no_main]

use libfuzzer_sys::fuzz_target;
use sepaqr::core::*;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(request) = PaymentRequest::from_json(s) {
            if let Ok(payment) = request.into_payment() {
                let text = payment.to_text();
                assert!(text.starts_with("BCD\n"));
                assert!(!text.ends_with('\n'));
            }
        }
    }
});
