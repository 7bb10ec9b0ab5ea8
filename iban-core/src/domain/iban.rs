//! IBAN domain model

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::result::{Error, Result};

/// Separator used by [`Iban::format_iban_default`]: a non-breaking space,
/// so a grouped IBAN never wraps across lines.
pub const DEFAULT_GROUP_SEPARATOR: &str = "\u{A0}";

/// Number of characters per display group
const GROUP_SIZE: usize = 4;

/// Plain structured form of an IBAN: the construction input and the
/// serialized output of [`Iban`].
///
/// `iban` is optional here so that a missing or `null` field can be
/// represented and rejected at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IbanValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
}

impl IbanValue {
    /// Create a value with just the account number
    pub fn new(iban: impl Into<String>) -> Self {
        Self {
            iban: Some(iban.into()),
            ..Self::default()
        }
    }

    /// Set the bank identifier code
    pub fn with_bic(mut self, bic: impl Into<String>) -> Self {
        self.bic = Some(bic.into());
        self
    }

    /// Set the bank name
    pub fn with_bank_name(mut self, bank_name: impl Into<String>) -> Self {
        self.bank_name = Some(bank_name.into());
        self
    }
}

impl From<&str> for IbanValue {
    fn from(iban: &str) -> Self {
        Self::new(iban)
    }
}

impl From<String> for IbanValue {
    fn from(iban: String) -> Self {
        Self::new(iban)
    }
}

impl From<Iban> for IbanValue {
    fn from(iban: Iban) -> Self {
        Self {
            iban: Some(iban.iban),
            bic: iban.bic,
            bank_name: iban.bank_name,
        }
    }
}

impl From<&Iban> for IbanValue {
    fn from(iban: &Iban) -> Self {
        iban.to_json()
    }
}

/// An International Bank Account Number with optional BIC and bank name.
///
/// The account number is stored without whitespace and is never empty.
/// Letter case is kept as given. Neither the checksum nor the BIC is
/// validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IbanValue", into = "IbanValue")]
pub struct Iban {
    iban: String,
    bic: Option<String>,
    bank_name: Option<String>,
}

impl Iban {
    /// Build an IBAN from a raw string, a structured value, or another `Iban`.
    ///
    /// Fails with [`Error::InvalidIban`] when the account number is missing
    /// or empty once whitespace is removed.
    pub fn value_of(value: impl Into<IbanValue>) -> Result<Self> {
        let value = value.into();
        let normalized = value
            .iban
            .as_deref()
            .map(normalize_iban)
            .filter(|iban| !iban.is_empty());

        let Some(iban) = normalized else {
            return Err(Error::invalid_iban(value.iban));
        };

        Ok(Self {
            iban,
            bic: value.bic,
            bank_name: value.bank_name,
        })
    }

    /// Normalized account number
    pub fn iban(&self) -> &str {
        &self.iban
    }

    pub fn bic(&self) -> Option<&str> {
        self.bic.as_deref()
    }

    pub fn bank_name(&self) -> Option<&str> {
        self.bank_name.as_deref()
    }

    /// Group the account number in blocks of four joined by `group_separator`.
    /// The last block holds the remainder when the length is not a multiple
    /// of four.
    pub fn format_iban(&self, group_separator: &str) -> String {
        let chars: Vec<char> = self.iban.chars().collect();
        chars
            .chunks(GROUP_SIZE)
            .map(|group| group.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join(group_separator)
    }

    /// [`format_iban`](Self::format_iban) with [`DEFAULT_GROUP_SEPARATOR`]
    pub fn format_iban_default(&self) -> String {
        self.format_iban(DEFAULT_GROUP_SEPARATOR)
    }

    /// Structured form, with absent fields left as `None`
    pub fn to_json(&self) -> IbanValue {
        IbanValue {
            iban: Some(self.iban.clone()),
            bic: self.bic.clone(),
            bank_name: self.bank_name.clone(),
        }
    }

    /// Loose equality against anything serializable.
    ///
    /// `other` must serialize to an object with a string `iban`; that value
    /// is compared after whitespace normalization. `bic` and `bankName` must
    /// match exactly, and an absent field only matches an absent field.
    /// `null` and bare strings are never equal, even when a string spells
    /// out the same account number.
    pub fn equals<T: Serialize + ?Sized>(&self, other: &T) -> bool {
        let Ok(JsonValue::Object(other)) = serde_json::to_value(other) else {
            return false;
        };
        let Some(JsonValue::String(other_iban)) = other.get("iban") else {
            return false;
        };

        self.iban == normalize_iban(other_iban)
            && strict_eq(self.bic.as_deref(), other.get("bic"))
            && strict_eq(self.bank_name.as_deref(), other.get("bankName"))
    }
}

impl PartialEq<IbanValue> for Iban {
    fn eq(&self, other: &IbanValue) -> bool {
        other
            .iban
            .as_deref()
            .is_some_and(|iban| self.iban == normalize_iban(iban))
            && self.bic == other.bic
            && self.bank_name == other.bank_name
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_iban(" "))
    }
}

impl FromStr for Iban {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::value_of(s)
    }
}

impl TryFrom<&str> for Iban {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::value_of(value)
    }
}

impl TryFrom<String> for Iban {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::value_of(value)
    }
}

impl TryFrom<IbanValue> for Iban {
    type Error = Error;

    fn try_from(value: IbanValue) -> Result<Self> {
        Self::value_of(value)
    }
}

/// Remove every whitespace character: Unicode White_Space plus U+FEFF,
/// minus U+0085, which ECMAScript `\s` does not match
pub fn normalize_iban(iban: &str) -> String {
    static WHITESPACE_RE: OnceLock<Regex> = OnceLock::new();
    let re = WHITESPACE_RE
        .get_or_init(|| Regex::new(r"[[\s\x{FEFF}]--\x{85}]+").expect("whitespace pattern is valid"));
    re.replace_all(iban, "").into_owned()
}

fn strict_eq(ours: Option<&str>, theirs: Option<&JsonValue>) -> bool {
    match (ours, theirs) {
        (None, None) => true,
        (Some(a), Some(JsonValue::String(b))) => a == b,
        _ => false,
    }
}
