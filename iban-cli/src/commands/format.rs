//! Format command - print an IBAN in groups of four

use anyhow::Result;
use iban_core::LogEvent;

use super::{error_kind, get_context, get_logger, log_event};

pub fn run(iban: &str, separator: Option<&str>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    let iban = ctx.iban_service.parse(iban, None, None).map_err(|e| {
        log_event(
            &logger,
            LogEvent::new("iban_format_failed")
                .with_command("format")
                .with_error(error_kind(&e)),
        );
        e
    })?;

    let formatted = match separator {
        Some(sep) => ctx.iban_service.format_with(&iban, sep),
        None => ctx.iban_service.format(&iban),
    };
    log_event(&logger, LogEvent::new("iban_formatted").with_command("format"));

    if json {
        println!(
            "{}",
            serde_json::json!({ "iban": iban.iban(), "formatted": formatted })
        );
    } else {
        println!("{}", formatted);
    }

    Ok(())
}
