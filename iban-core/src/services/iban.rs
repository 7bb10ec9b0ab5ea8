//! IBAN service - parsing, display and comparison with configured settings

use serde_json::Value as JsonValue;

use crate::config::Config;
use crate::domain::result::Result;
use crate::domain::{Iban, IbanValue};

/// IBAN service for the CLI and other front ends
pub struct IbanService {
    group_separator: String,
}

impl IbanService {
    pub fn new(config: &Config) -> Self {
        Self {
            group_separator: config.group_separator.clone(),
        }
    }

    /// Build an IBAN from raw parts
    pub fn parse(&self, iban: &str, bic: Option<&str>, bank_name: Option<&str>) -> Result<Iban> {
        Iban::value_of(IbanValue {
            iban: Some(iban.to_string()),
            bic: bic.map(str::to_string),
            bank_name: bank_name.map(str::to_string),
        })
    }

    /// Build an IBAN from its JSON form (`{"iban": .., "bic": .., "bankName": ..}`)
    pub fn parse_json(&self, json: &str) -> Result<Iban> {
        Ok(serde_json::from_str(json)?)
    }

    /// Display form using the configured separator
    pub fn format(&self, iban: &Iban) -> String {
        iban.format_iban(&self.group_separator)
    }

    pub fn format_with(&self, iban: &Iban, separator: &str) -> String {
        iban.format_iban(separator)
    }

    /// Compare against an arbitrary JSON value, see [`Iban::equals`]
    pub fn compare(&self, iban: &Iban, other: &JsonValue) -> bool {
        iban.equals(other)
    }

    /// Interpret command line input as JSON, falling back to a bare string
    pub fn comparand(&self, raw: &str) -> JsonValue {
        serde_json::from_str(raw).unwrap_or_else(|_| JsonValue::String(raw.to_string()))
    }

    pub fn group_separator(&self) -> &str {
        &self.group_separator
    }
}
