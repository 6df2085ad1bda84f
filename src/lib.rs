//! # sepaqr
//!
//! Validation and encoding of the EPC069-12 "SEPA Credit Transfer" QR code
//! payload (the "GiroCode" / "BCD" format).
//!
//! Every payment field is a value type that validates itself on
//! construction: IBAN (MOD 97-10), BIC, amount, references (ISO 11649 or
//! Belgian structured communication) and the text fields. A fail-fast chain
//! of cross-field checks then enforces the SEPA/EEA country rules before the
//! payment is serialized into the newline-separated payload text.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Producing the QR image itself is left to a QR code library.
//!
//! ## Quick Start
//!
//! ```rust
//! use sepaqr::core::*;
//! use rust_decimal_macros::dec;
//!
//! let payment = SepaPaymentBuilder::new("Franz Mustermänn", "DE71110220330123456789")
//!     .amount(dec!(12.3))
//!     .bic("BHBLDEHHXXX")
//!     .structured_reference("RF18539007547034")
//!     .purpose("GDDS")
//!     .version("1")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     payment.to_text(),
//!     "BCD\n001\n1\nSCT\nBHBLDEHHXXX\nFranz Mustermänn\nDE71110220330123456789\nEUR12.30\nGDDS\nRF18539007547034"
//! );
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Field types, checksums, validator chain, encoder |
//! | `json` | `PaymentRequest::from_json` via `serde_json` |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;
