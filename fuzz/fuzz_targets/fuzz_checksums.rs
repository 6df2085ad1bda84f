#![no_main]

use libfuzzer_sys::fuzz_target;
use sepaqr::core::*;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic on arbitrary input.
        let _ = is_valid_iban(s);
        let _ = is_valid_belgian_communication(s);
        let _ = is_valid_creditor_reference(s);
        let _ = mod97(s);
        let _ = StructuredReference::new(s);
        let _ = BeneficiaryName::new(s);
    }
});
