//! SEPA scheme and EEA country classification.
//!
//! Both tables are closed, `'static` and sorted by code, so lookups are a
//! binary search with no initialization and no locking. They are never
//! mutated at runtime.
//!
//! - An IBAN whose country is absent from [`SepaCountry`] cannot be used at all.
//! - An IBAN whose country is in [`EeaCountry`] does not need a BIC and may
//!   use payload version 2.

use serde::{Deserialize, Serialize};

/// Countries and territories participating in the SEPA scheme
/// (EPC list of SEPA scheme countries), keyed by IBAN country code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SepaCountry {
    AT,
    BE,
    BG,
    CH,
    CY,
    CZ,
    DE,
    DK,
    EE,
    ES,
    FI,
    FR,
    GB,
    GG,
    GI,
    GR,
    HR,
    HU,
    IE,
    IM,
    IS,
    IT,
    JE,
    LI,
    LT,
    LU,
    LV,
    MC,
    MT,
    NL,
    NO,
    PL,
    PT,
    RO,
    SE,
    SI,
    SK,
    SM,
    VA,
}

impl SepaCountry {
    /// Every SEPA country, sorted by code.
    pub const ALL: [Self; 39] = [
        Self::AT,
        Self::BE,
        Self::BG,
        Self::CH,
        Self::CY,
        Self::CZ,
        Self::DE,
        Self::DK,
        Self::EE,
        Self::ES,
        Self::FI,
        Self::FR,
        Self::GB,
        Self::GG,
        Self::GI,
        Self::GR,
        Self::HR,
        Self::HU,
        Self::IE,
        Self::IM,
        Self::IS,
        Self::IT,
        Self::JE,
        Self::LI,
        Self::LT,
        Self::LU,
        Self::LV,
        Self::MC,
        Self::MT,
        Self::NL,
        Self::NO,
        Self::PL,
        Self::PT,
        Self::RO,
        Self::SE,
        Self::SI,
        Self::SK,
        Self::SM,
        Self::VA,
    ];

    /// ISO 3166-1 alpha-2 code as it appears at the start of an IBAN.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AT => "AT",
            Self::BE => "BE",
            Self::BG => "BG",
            Self::CH => "CH",
            Self::CY => "CY",
            Self::CZ => "CZ",
            Self::DE => "DE",
            Self::DK => "DK",
            Self::EE => "EE",
            Self::ES => "ES",
            Self::FI => "FI",
            Self::FR => "FR",
            Self::GB => "GB",
            Self::GG => "GG",
            Self::GI => "GI",
            Self::GR => "GR",
            Self::HR => "HR",
            Self::HU => "HU",
            Self::IE => "IE",
            Self::IM => "IM",
            Self::IS => "IS",
            Self::IT => "IT",
            Self::JE => "JE",
            Self::LI => "LI",
            Self::LT => "LT",
            Self::LU => "LU",
            Self::LV => "LV",
            Self::MC => "MC",
            Self::MT => "MT",
            Self::NL => "NL",
            Self::NO => "NO",
            Self::PL => "PL",
            Self::PT => "PT",
            Self::RO => "RO",
            Self::SE => "SE",
            Self::SI => "SI",
            Self::SK => "SK",
            Self::SM => "SM",
            Self::VA => "VA",
        }
    }

    /// English country name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AT => "Austria",
            Self::BE => "Belgium",
            Self::BG => "Bulgaria",
            Self::CH => "Switzerland",
            Self::CY => "Cyprus",
            Self::CZ => "Czech Republic",
            Self::DE => "Germany",
            Self::DK => "Denmark",
            Self::EE => "Estonia",
            Self::ES => "Spain",
            Self::FI => "Finland",
            Self::FR => "France",
            Self::GB => "United Kingdom",
            Self::GG => "Guernsey",
            Self::GI => "Gibraltar",
            Self::GR => "Greece",
            Self::HR => "Croatia",
            Self::HU => "Hungary",
            Self::IE => "Ireland",
            Self::IM => "Isle of Man",
            Self::IS => "Iceland",
            Self::IT => "Italy",
            Self::JE => "Jersey",
            Self::LI => "Liechtenstein",
            Self::LT => "Lithuania",
            Self::LU => "Luxembourg",
            Self::LV => "Latvia",
            Self::MC => "Monaco",
            Self::MT => "Malta",
            Self::NL => "Netherlands",
            Self::NO => "Norway",
            Self::PL => "Poland",
            Self::PT => "Portugal",
            Self::RO => "Romania",
            Self::SE => "Sweden",
            Self::SI => "Slovenia",
            Self::SK => "Slovakia",
            Self::SM => "San Marino",
            Self::VA => "Vatican City State",
        }
    }

    /// Territories covered by this IBAN country code. Most codes cover a
    /// single territory; ES, FR, GB and PT also cover overseas or island
    /// territories that share the code.
    pub fn territories(&self) -> &'static [&'static str] {
        match self {
            Self::ES => &["Canary Islands", "Spain"],
            Self::FR => &[
                "France",
                "French Guiana",
                "Guadeloupe",
                "Martinique",
                "Réunion",
                "Saint Barthélemy",
                "Saint Martin (French part)",
                "Saint Pierre and Miquelon",
            ],
            Self::GB => &["United Kingdom", "Guernsey", "Isle of Man", "Jersey"],
            Self::PT => &["Madeira", "Portugal"],
            Self::AT => &["Austria"],
            Self::BE => &["Belgium"],
            Self::BG => &["Bulgaria"],
            Self::CH => &["Switzerland"],
            Self::CY => &["Cyprus"],
            Self::CZ => &["Czech Republic"],
            Self::DE => &["Germany"],
            Self::DK => &["Denmark"],
            Self::EE => &["Estonia"],
            Self::FI => &["Finland"],
            Self::GG => &["Guernsey"],
            Self::GI => &["Gibraltar"],
            Self::GR => &["Greece"],
            Self::HR => &["Croatia"],
            Self::HU => &["Hungary"],
            Self::IE => &["Ireland"],
            Self::IM => &["Isle of Man"],
            Self::IS => &["Iceland"],
            Self::IT => &["Italy"],
            Self::JE => &["Jersey"],
            Self::LI => &["Liechtenstein"],
            Self::LT => &["Lithuania"],
            Self::LU => &["Luxembourg"],
            Self::LV => &["Latvia"],
            Self::MC => &["Monaco"],
            Self::MT => &["Malta"],
            Self::NL => &["Netherlands"],
            Self::NO => &["Norway"],
            Self::PL => &["Poland"],
            Self::RO => &["Romania"],
            Self::SE => &["Sweden"],
            Self::SI => &["Slovenia"],
            Self::SK => &["Slovakia"],
            Self::SM => &["San Marino"],
            Self::VA => &["Vatican City State"],
        }
    }

    /// Look up a SEPA country by its two-letter code (case-sensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .binary_search_by(|c| c.code().cmp(code))
            .ok()
            .map(|i| Self::ALL[i])
    }

    /// Whether this country is also part of the EEA.
    pub fn is_eea(&self) -> bool {
        EeaCountry::from_code(self.code()).is_some()
    }
}

/// European Economic Area member states. A BIC is optional for these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EeaCountry {
    AT,
    BE,
    BG,
    CY,
    CZ,
    DE,
    DK,
    EE,
    ES,
    FI,
    FR,
    GR,
    HR,
    HU,
    IE,
    IS,
    IT,
    LI,
    LT,
    LU,
    LV,
    MT,
    NL,
    NO,
    PL,
    PT,
    RO,
    SE,
    SI,
    SK,
}

impl EeaCountry {
    /// Every EEA country, sorted by code.
    pub const ALL: [Self; 30] = [
        Self::AT,
        Self::BE,
        Self::BG,
        Self::CY,
        Self::CZ,
        Self::DE,
        Self::DK,
        Self::EE,
        Self::ES,
        Self::FI,
        Self::FR,
        Self::GR,
        Self::HR,
        Self::HU,
        Self::IE,
        Self::IS,
        Self::IT,
        Self::LI,
        Self::LT,
        Self::LU,
        Self::LV,
        Self::MT,
        Self::NL,
        Self::NO,
        Self::PL,
        Self::PT,
        Self::RO,
        Self::SE,
        Self::SI,
        Self::SK,
    ];

    /// ISO 3166-1 alpha-2 code. Greece uses `GR` here (the IBAN prefix),
    /// not the EU statistical code `EL`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AT => "AT",
            Self::BE => "BE",
            Self::BG => "BG",
            Self::CY => "CY",
            Self::CZ => "CZ",
            Self::DE => "DE",
            Self::DK => "DK",
            Self::EE => "EE",
            Self::ES => "ES",
            Self::FI => "FI",
            Self::FR => "FR",
            Self::GR => "GR",
            Self::HR => "HR",
            Self::HU => "HU",
            Self::IE => "IE",
            Self::IS => "IS",
            Self::IT => "IT",
            Self::LI => "LI",
            Self::LT => "LT",
            Self::LU => "LU",
            Self::LV => "LV",
            Self::MT => "MT",
            Self::NL => "NL",
            Self::NO => "NO",
            Self::PL => "PL",
            Self::PT => "PT",
            Self::RO => "RO",
            Self::SE => "SE",
            Self::SI => "SI",
            Self::SK => "SK",
        }
    }

    /// English country name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AT => "Austria",
            Self::BE => "Belgium",
            Self::BG => "Bulgaria",
            Self::CY => "Cyprus",
            Self::CZ => "Czechia",
            Self::DE => "Germany",
            Self::DK => "Denmark",
            Self::EE => "Estonia",
            Self::ES => "Spain",
            Self::FI => "Finland",
            Self::FR => "France",
            Self::GR => "Greece",
            Self::HR => "Croatia",
            Self::HU => "Hungary",
            Self::IE => "Ireland",
            Self::IS => "Iceland",
            Self::IT => "Italy",
            Self::LI => "Liechtenstein",
            Self::LT => "Lithuania",
            Self::LU => "Luxembourg",
            Self::LV => "Latvia",
            Self::MT => "Malta",
            Self::NL => "Netherlands",
            Self::NO => "Norway",
            Self::PL => "Poland",
            Self::PT => "Portugal",
            Self::RO => "Romania",
            Self::SE => "Sweden",
            Self::SI => "Slovenia",
            Self::SK => "Slovakia",
        }
    }

    /// Look up an EEA country by its two-letter code (case-sensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .binary_search_by(|c| c.code().cmp(code))
            .ok()
            .map(|i| Self::ALL[i])
    }
}

/// Check whether `code` is a SEPA scheme country.
pub fn is_sepa_country(code: &str) -> bool {
    SepaCountry::from_code(code).is_some()
}

/// Check whether `code` is an EEA member (BIC not required).
pub fn is_eea_country(code: &str) -> bool {
    EeaCountry::from_code(code).is_some()
}

/// Territory names for a SEPA country code, or `None` if it is not SEPA.
pub fn sepa_territories(code: &str) -> Option<&'static [&'static str]> {
    SepaCountry::from_code(code).map(|c| c.territories())
}
