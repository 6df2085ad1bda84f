//! Check-digit algorithms used by SEPA payment fields.
//!
//! - ISO 7064 MOD 97-10 for IBANs
//! - Belgian structured communication (`+++ddd/dddd/ddddd+++`)
//! - ISO 11649 creditor reference (`RFdd...`)
//!
//! All functions are pure and independent of any payment descriptor.

use super::error::SepaError;

/// Shortest IBAN accepted (Norway).
pub const IBAN_MIN_LENGTH: usize = 15;
/// Longest IBAN allowed by ISO 13616.
pub const IBAN_MAX_LENGTH: usize = 34;

/// Maximum number of digits folded into the running remainder per step.
const MOD97_CHUNK: usize = 7;

/// Compute `digits mod 97` over an arbitrarily long decimal digit string.
///
/// The string is consumed in chunks of at most seven digits; before each
/// step the previous remainder is prepended to the chunk, so intermediate
/// values never exceed nine digits. Returns `None` if `digits` is empty or
/// contains anything other than ASCII digits.
pub fn mod97(digits: &str) -> Option<u32> {
    if digits.is_empty() {
        return None;
    }

    let mut remainder: u64 = 0;
    for chunk in digits.as_bytes().chunks(MOD97_CHUNK) {
        let mut value = remainder;
        for &b in chunk {
            if !b.is_ascii_digit() {
                return None;
            }
            value = value * 10 + u64::from(b - b'0');
        }
        remainder = value % 97;
    }

    u32::try_from(remainder).ok()
}

/// Expand an alphanumeric string into decimal digits: `0-9` stay as they
/// are, `A-Z` become `10-35`. Lowercase letters and other characters are
/// dropped; callers normalize first.
pub fn alphanumeric_to_digits(value: &str) -> String {
    let mut out = String::with_capacity(value.len() * 2);
    for c in value.chars() {
        if c.is_ascii_digit() {
            out.push(c);
        } else if c.is_ascii_uppercase() {
            let n = c as u32 - 55;
            out.push_str(&n.to_string());
        }
    }
    out
}

/// Strip all whitespace and uppercase, the canonical IBAN form.
pub fn normalize_iban(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// `^[A-Z]{2}[0-9]{2}[A-Z0-9]{1,30}$`
fn has_iban_shape(iban: &str) -> bool {
    let b = iban.as_bytes();
    b.len() >= 5
        && b.len() <= 34
        && b[..2].iter().all(u8::is_ascii_uppercase)
        && b[2..4].iter().all(u8::is_ascii_digit)
        && b[4..]
            .iter()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

/// Validate an IBAN and return its normalized form.
///
/// Steps: strip whitespace and uppercase, check the length (15-34) and
/// shape, move the country code and check digits to the end, expand
/// letters and require the MOD 97-10 remainder to equal 1.
pub fn check_iban(raw: &str) -> Result<String, SepaError> {
    let iban = normalize_iban(raw);

    if iban.len() < IBAN_MIN_LENGTH {
        return Err(SepaError::iban(
            iban,
            format!("too short, minimum length is {IBAN_MIN_LENGTH}"),
        ));
    }
    if iban.len() > IBAN_MAX_LENGTH {
        return Err(SepaError::iban(
            iban,
            format!("too long, maximum length is {IBAN_MAX_LENGTH}"),
        ));
    }
    if !has_iban_shape(&iban) {
        return Err(SepaError::iban(
            iban,
            "does not match the required format (2 letters, 2 digits, 1-30 alphanumerics)",
        ));
    }

    let rotated = format!("{}{}", &iban[4..], &iban[..4]);
    if mod97(&alphanumeric_to_digits(&rotated)) != Some(1) {
        return Err(SepaError::iban(iban, "MOD 97-10 checksum mismatch"));
    }

    Ok(iban)
}

/// Whether `raw` is a valid IBAN (ISO 7064 MOD 97-10).
pub fn is_valid_iban(raw: &str) -> bool {
    check_iban(raw).is_ok()
}

/// Validate a Belgian structured communication such as `+++010/8068/17183+++`.
///
/// Whitespace and `+` are ignored. The first ten digits modulo 97 must
/// equal the last two; a remainder of 0 is written as 97.
pub fn is_valid_belgian_communication(raw: &str) -> bool {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '+')
        .collect();

    let groups: Vec<&str> = cleaned.split('/').collect();
    let [a, b, c] = groups.as_slice() else {
        return false;
    };
    if a.len() != 3 || b.len() != 4 || c.len() != 5 {
        return false;
    }
    let digits = format!("{a}{b}{c}");
    if !digits.bytes().all(|d| d.is_ascii_digit()) {
        return false;
    }

    let (Ok(main), Ok(control)) = (digits[..10].parse::<u64>(), digits[10..].parse::<u64>())
    else {
        return false;
    };

    let expected = match main % 97 {
        0 => 97,
        r => r,
    };
    control == expected
}

/// Strip whitespace, `+`, `.` and `-`, then uppercase.
fn normalize_creditor_reference(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '+' | '.' | '-'))
        .collect::<String>()
        .to_uppercase()
}

/// Validate an ISO 11649 creditor reference such as `RF18 5390 0754 7034`.
///
/// Format is `RF`, two check digits, then 1-21 alphanumerics. The payload
/// followed by `RF00`, expanded to digits, modulo 97 must equal
/// `98 - check digits`.
pub fn is_valid_creditor_reference(raw: &str) -> bool {
    let reference = normalize_creditor_reference(raw);
    let b = reference.as_bytes();

    if b.len() < 5 || b.len() > 25 || !reference.starts_with("RF") {
        return false;
    }
    if !b[2..4].iter().all(u8::is_ascii_digit) {
        return false;
    }
    let payload = &reference[4..];
    if !payload
        .bytes()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return false;
    }

    let Ok(check_digits) = reference[2..4].parse::<u32>() else {
        return false;
    };
    let digits = alphanumeric_to_digits(&format!("{payload}RF00"));
    mod97(&digits) == Some(98u32.saturating_sub(check_digits))
}

/// Accepts either structured reference dialect.
pub fn is_valid_structured_reference(raw: &str) -> bool {
    is_valid_belgian_communication(raw) || is_valid_creditor_reference(raw)
}
