//! Parse command - normalize an IBAN and show its parts

use anyhow::Result;
use colored::Colorize;
use iban_core::{IbanValue, LogEvent, OperationResult};

use super::{error_kind, get_context, get_logger, log_event};
use crate::output;

pub fn run(iban: &str, bic: Option<&str>, bank_name: Option<&str>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    let parsed = ctx.iban_service.parse(iban, bic, bank_name);
    match &parsed {
        Ok(_) => log_event(&logger, LogEvent::new("iban_parsed").with_command("parse")),
        Err(e) => log_event(
            &logger,
            LogEvent::new("iban_parse_failed")
                .with_command("parse")
                .with_error(error_kind(e)),
        ),
    }

    if json {
        let envelope: OperationResult<IbanValue> = parsed.map(IbanValue::from).into();
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        if let Some(error) = envelope.error {
            anyhow::bail!(error);
        }
        return Ok(());
    }

    let iban = parsed?;

    let mut table = output::create_table();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["IBAN", iban.iban()]);
    table.add_row(vec!["Formatted", &ctx.iban_service.format(&iban)]);
    table.add_row(vec!["BIC", output::or_dash(iban.bic())]);
    table.add_row(vec!["Bank", output::or_dash(iban.bank_name())]);

    println!("{}", "IBAN".bold());
    println!("{}", table);

    Ok(())
}
