//! IBAN Core - account number value type and supporting services
//!
//! - **domain**: the [`Iban`] value type and the crate [`Error`]
//! - **services**: display/comparison service and the event log
//! - **config**: `settings.json` handling
//!
//! ```
//! use iban_core::Iban;
//!
//! let iban = Iban::value_of("FI64 5687 6285 8198 43").unwrap();
//! assert_eq!(iban.iban(), "FI6456876285819843");
//! assert_eq!(iban.to_string(), "FI64 5687 6285 8198 43");
//! ```

pub mod config;
pub mod domain;
pub mod services;

use std::path::Path;

use anyhow::Result;

use config::Config;
use services::IbanService;

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult};
pub use domain::{Iban, IbanValue, DEFAULT_GROUP_SEPARATOR};
pub use services::{EntryPoint, LogEvent, LoggingService};

/// Main context for front ends
///
/// Holds the loaded configuration and the services built from it.
pub struct IbanContext {
    pub config: Config,
    pub iban_service: IbanService,
}

impl IbanContext {
    /// Create a new context from the data directory
    pub fn new(data_dir: &Path) -> Result<Self> {
        let config = Config::load(data_dir)?;
        let iban_service = IbanService::new(&config);

        Ok(Self {
            config,
            iban_service,
        })
    }
}
