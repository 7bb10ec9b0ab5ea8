//! Integration tests for the public iban-core API
//!
//! Run with: cargo test --test iban_tests

use serde_json::json;
use tempfile::TempDir;

use iban_core::config::Config;
use iban_core::services::IbanService;
use iban_core::{Error, Iban, IbanContext, IbanValue, OperationResult};

// ============================================================================
// Test Helpers
// ============================================================================

const RAW: &str = "FI6456876285819843";
const FORMATTED: &str = "FI64 5687 6285 8198 43";

/// Fully populated OP Bank account
fn op_value() -> IbanValue {
    IbanValue::new(FORMATTED)
        .with_bic("OKOYFIHH")
        .with_bank_name("OP")
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_string_without_whitespace_is_kept() {
    for s in [RAW, "DE89370400440532013000", "x", "GB82WEST12345698765432"] {
        assert_eq!(Iban::value_of(s).unwrap().iban(), s);
    }
}

#[test]
fn test_whitespace_is_removed_everywhere() {
    let cases = [
        (FORMATTED, RAW),
        ("  FI64 5687 6285 8198 43  ", RAW),
        ("FI64\u{2003}5687\u{3000}6285\r\n8198\u{202F}43", RAW),
    ];
    for (input, expected) in cases {
        assert_eq!(Iban::value_of(input).unwrap().iban(), expected);
    }
}

#[test]
fn test_empty_and_missing_are_invalid() {
    let missing = Iban::value_of(IbanValue::default());
    assert!(matches!(missing, Err(Error::InvalidIban(None))));

    let empty = Iban::value_of("");
    assert!(matches!(empty, Err(Error::InvalidIban(Some(ref s))) if s.is_empty()));
}

#[test]
fn test_std_conversions() {
    let parsed: Iban = FORMATTED.parse().unwrap();
    let tried = Iban::try_from(FORMATTED.to_string()).unwrap();
    let from_value = Iban::try_from(IbanValue::new(RAW)).unwrap();

    assert_eq!(parsed, tried);
    assert_eq!(tried, from_value);
    assert!("".parse::<Iban>().is_err());
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_display_forms() {
    let iban = Iban::value_of(op_value()).unwrap();
    assert_eq!(
        iban.format_iban_default(),
        "FI64\u{A0}5687\u{A0}6285\u{A0}8198\u{A0}43"
    );
    assert_eq!(iban.to_string(), FORMATTED);
    assert_eq!(iban.to_string(), iban.format_iban(" "));
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_serialized_shape() {
    let iban = Iban::value_of(op_value()).unwrap();
    assert_eq!(
        serde_json::to_value(&iban).unwrap(),
        json!({ "iban": RAW, "bic": "OKOYFIHH", "bankName": "OP" })
    );

    let plain = Iban::value_of(RAW).unwrap();
    assert_eq!(serde_json::to_value(&plain).unwrap(), json!({ "iban": RAW }));
}

#[test]
fn test_json_round_trip() {
    let iban = Iban::value_of(op_value()).unwrap();

    let again = Iban::value_of(iban.to_json()).unwrap();
    assert_eq!(again, iban);
    assert!(again.equals(&iban));

    let text = serde_json::to_string(&iban).unwrap();
    let decoded: Iban = serde_json::from_str(&text).unwrap();
    assert_eq!(decoded, iban);
}

#[test]
fn test_deserialize_normalizes_and_validates() {
    let decoded: Iban = serde_json::from_value(json!({ "iban": FORMATTED, "bic": null })).unwrap();
    assert_eq!(decoded.iban(), RAW);
    assert_eq!(decoded.bic(), None);

    assert!(serde_json::from_value::<Iban>(json!({ "iban": "" })).is_err());
    assert!(serde_json::from_value::<Iban>(json!({})).is_err());
}

// ============================================================================
// Equality
// ============================================================================

#[test]
fn test_equals_is_reflexive() {
    for value in [op_value(), IbanValue::new(RAW), IbanValue::new(FORMATTED).with_bic("X")] {
        let iban = Iban::value_of(value.clone()).unwrap();
        assert!(iban.equals(&Iban::value_of(value).unwrap()));
        assert!(iban.equals(&iban));
    }
}

#[test]
fn test_equals_rejects_bare_strings() {
    let iban = Iban::value_of(RAW).unwrap();
    assert!(!iban.equals(RAW));
    assert!(!iban.equals(&RAW.to_string()));
    assert!(!iban.equals(&json!(null)));
    assert!(!iban.equals(&None::<Iban>));
}

#[test]
fn test_equals_bic_defined_vs_missing() {
    let iban = Iban::value_of(IbanValue::new(RAW).with_bic("OKOYFIHH")).unwrap();
    assert!(!iban.equals(&json!({ "iban": RAW })));
}

#[test]
fn test_equals_ignores_formatting_only() {
    let iban = Iban::value_of(op_value()).unwrap();
    assert!(iban.equals(&json!({ "iban": "FI645687 62858198 43", "bic": "OKOYFIHH", "bankName": "OP" })));
    assert!(!iban.equals(&json!({ "iban": RAW, "bic": "OKOYFIHH", "bankName": "OP " })));
}

// ============================================================================
// Context and envelopes
// ============================================================================

#[test]
fn test_service_uses_saved_separator() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.set_group_separator("|");
    config.save(temp_dir.path()).unwrap();

    let loaded = Config::load_with(temp_dir.path(), None).unwrap();
    let service = IbanService::new(&loaded);
    let iban = service.parse(RAW, None, None).unwrap();
    assert_eq!(service.format(&iban), "FI64|5687|6285|8198|43");
}

#[test]
fn test_context_loads_from_data_dir() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = IbanContext::new(temp_dir.path()).unwrap();
    let iban = ctx.iban_service.parse(FORMATTED, Some("OKOYFIHH"), None).unwrap();
    assert_eq!(iban.iban(), RAW);
    assert_eq!(ctx.iban_service.group_separator(), ctx.config.group_separator);
}

#[test]
fn test_operation_result_wraps_iban() {
    let ok: OperationResult<Iban> = Iban::value_of(RAW).into();
    assert!(ok.success);
    assert_eq!(
        serde_json::to_value(&ok).unwrap(),
        json!({ "success": true, "data": { "iban": RAW }, "error": null })
    );

    let failed: OperationResult<Iban> = Iban::value_of("").into();
    assert!(!failed.success);
    assert_eq!(failed.error.as_deref(), Some("Invalid IBAN ''"));
}
