//! Configuration management CLI commands.
//!
//! `config get`, `config set`, `config list` and `config path` read and
//! write the INI file without opening a session.

use clap::Subcommand;
use karrom::config::{config_file_path, ConfigError, ConfigFile, ConfigKey};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one configuration value
    Get {
        /// Key as section.key (e.g. display.language)
        key: String,
    },

    /// Validate and store a configuration value
    Set {
        /// Key as section.key (e.g. prayer.method)
        key: String,

        /// New value
        value: String,
    },

    /// Print every setting grouped by section
    List,

    /// Print the configuration file location
    Path,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Get { key } => {
            let config = ConfigFile::load()?;
            println!("{}", parse_key(&key)?.get(&config));
            Ok(())
        }
        ConfigCommands::Set { key, value } => {
            let config_key = parse_key(&key)?;
            let mut config = ConfigFile::load()?;
            config_key.set(&mut config, &value)?;
            config.save()?;
            println!("{} = {}", config_key.name(), config_key.get(&config));
            Ok(())
        }
        ConfigCommands::List => {
            print!("{}", render_list(&ConfigFile::load()?));
            Ok(())
        }
        ConfigCommands::Path => {
            println!("{}", config_file_path().display());
            Ok(())
        }
    }
}

fn parse_key(key: &str) -> Result<ConfigKey, CliError> {
    key.parse().map_err(|e: ConfigError| {
        CliError::Config(format!(
            "{}. Use 'karrom config list' to see available keys.",
            e
        ))
    })
}

/// Formats every key under its `[section]` header.
fn render_list(config: &ConfigFile) -> String {
    let mut out = String::new();
    let mut current_section = "";

    for key in ConfigKey::all() {
        if key.section() != current_section {
            if !current_section.is_empty() {
                out.push('\n');
            }
            current_section = key.section();
            out.push_str(&format!("[{}]\n", current_section));
        }
        out.push_str(&format!("  {} = {}\n", key.key_name(), key.get(config)));
    }
    out
}
