pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "department-json")]
#[command(about = "Build and compare department JSON documents")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Optional TOML settings file")]
    pub config: Option<String>,

    #[arg(long, global = true, value_enum, help = "Log output format")]
    pub log_format: Option<CliLogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// Print the canonical JSON for a department
    Build {
        #[arg(long)]
        name: String,
        #[arg(long)]
        head: Option<String>,
    },
    /// Print whether two department documents decode to the same record
    Matches { json: String, json2: String },
    /// Print who heads a department
    Describe {
        name: String,
        /// Head name; the configured default head when omitted
        #[arg(long, conflicts_with = "vacant")]
        head: Option<String>,
        /// Describe the department without any head
        #[arg(long)]
        vacant: bool,
    },
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum CliLogFormat {
    Compact,
    Json,
}

#[cfg(feature = "cli")]
impl From<CliLogFormat> for crate::utils::logger::LogFormat {
    fn from(format: CliLogFormat) -> Self {
        match format {
            CliLogFormat::Compact => Self::Compact,
            CliLogFormat::Json => Self::Json,
        }
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the settings file named by `--config`, or defaults when absent.
    pub fn load_settings(&self) -> crate::utils::error::Result<TomlConfig> {
        use crate::utils::validation::Validate;

        let settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        settings.validate()?;
        Ok(settings)
    }
}
