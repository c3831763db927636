//! Configuration commands.
//!
//! `get` prints the bare scalar for scripting; everything else prints the
//! resulting configuration as JSON like the rest of the CLI.

use clap::Subcommand;

use tempo_core::Config;

use super::print_json;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print a single value
    Get {
        /// Dot-separated key (e.g. "timer.focus_minutes")
        key: String,
    },
    /// Change a value and persist it
    Set {
        /// Dot-separated key
        key: String,
        /// New value
        value: String,
    },
    /// Print the whole configuration
    List,
    /// Restore the defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load_or_default();
            let value = config
                .get(&key)
                .ok_or_else(|| format!("unknown key: {key}"))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_or_default();
            config.set(&key, &value)?;
            print_json(&config)?;
        }
        ConfigAction::List => {
            print_json(&Config::load_or_default())?;
        }
        ConfigAction::Reset => {
            let config = Config::default();
            config.save()?;
            print_json(&config)?;
        }
    }
    Ok(())
}
