//! Core SEPA payment types, checksums, validation and payload encoding.
//!
//! This module implements the EPC069-12 "SEPA Credit Transfer" QR payload:
//! field value types, the cross-field validator chain and the text encoder.

mod checksum;
mod countries;
mod encoder;
mod error;
mod payment;
mod types;
mod validation;

pub use checksum::*;
pub use countries::*;
pub use encoder::*;
pub use error::*;
pub use payment::*;
pub use types::*;
pub use validation::*;
