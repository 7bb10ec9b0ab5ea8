//! Service layer
//!
//! Services wrap domain logic with configuration and side effects for
//! front ends such as the CLI.

mod iban;
pub mod logging;

pub use iban::IbanService;
pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
