//! Compare command - check an IBAN against another value
//!
//! The other value is read as JSON (`{"iban": .., "bic": .., "bankName": ..}`).
//! Input that is not valid JSON is taken as a bare string, which never
//! compares equal.

use anyhow::Result;
use colored::Colorize;
use iban_core::LogEvent;

use super::{error_kind, get_context, get_logger, log_event};

pub fn run(
    iban: &str,
    other: &str,
    bic: Option<&str>,
    bank_name: Option<&str>,
    json: bool,
) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    let iban = ctx.iban_service.parse(iban, bic, bank_name).map_err(|e| {
        log_event(
            &logger,
            LogEvent::new("iban_compare_failed")
                .with_command("compare")
                .with_error(error_kind(&e)),
        );
        e
    })?;

    let comparand = ctx.iban_service.comparand(other);
    let equal = ctx.iban_service.compare(&iban, &comparand);
    log_event(&logger, LogEvent::new("iban_compared").with_command("compare"));

    if json {
        println!("{}", serde_json::json!({ "equal": equal }));
    } else if equal {
        println!("{}", "Equal".green());
    } else {
        println!("{}", "Not equal".yellow());
    }

    Ok(())
}
