//! Config command - view and change display settings

use anyhow::Result;
use clap::Subcommand;
use iban_core::config::Config;

use super::get_data_dir;
use crate::output;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change settings
    Set {
        /// Separator placed between groups of four characters
        #[arg(long, allow_hyphen_values = true)]
        separator: String,
    },
}

pub fn run(command: ConfigCommands) -> Result<()> {
    let data_dir = get_data_dir()?;
    std::fs::create_dir_all(&data_dir)?;

    match command {
        ConfigCommands::Show { json } => {
            let config = Config::load(&data_dir)?;
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "group_separator": config.group_separator,
                        "data_dir": data_dir.to_string_lossy(),
                    })
                );
            } else {
                println!("Group separator: {:?}", config.group_separator);
                println!("Data directory: {}", data_dir.display());
            }
        }
        ConfigCommands::Set { separator } => {
            let mut config = Config::load(&data_dir)?;
            config.set_group_separator(separator);
            config.save(&data_dir)?;
            output::success(&format!(
                "Group separator set to {:?}",
                config.group_separator
            ));
        }
    }

    Ok(())
}
