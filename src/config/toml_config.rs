use crate::core::department_service::{DescribeSettings, DEFAULT_HEAD_NAME, UNKNOWN_HEAD_LABEL};
use crate::utils::error::{DtoError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_FORMATS: [&str; 2] = ["compact", "json"];

/// Optional settings file. Every section and key may be left out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub describe: DescribeConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    pub format: Option<String>,
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DescribeConfig {
    pub default_head_name: Option<String>,
    pub unknown_head_label: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DtoError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DtoError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DtoError::ConfigError {
            field: "env_substitution".to_string(),
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging
            .format
            .as_deref()
            .and_then(LogFormat::parse)
            .unwrap_or_default()
    }

    pub fn log_filter(&self) -> Option<&str> {
        self.logging.filter.as_deref()
    }

    pub fn describe_settings(&self) -> DescribeSettings {
        DescribeSettings {
            default_head_name: self
                .describe
                .default_head_name
                .clone()
                .unwrap_or_else(|| DEFAULT_HEAD_NAME.to_string()),
            unknown_head_label: self
                .describe
                .unknown_head_label
                .clone()
                .unwrap_or_else(|| UNKNOWN_HEAD_LABEL.to_string()),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(format) = &self.logging.format {
            validate_one_of("logging.format", format, &LOG_FORMATS)?;
        }
        if let Some(filter) = &self.logging.filter {
            validate_non_empty_string("logging.filter", filter)?;
        }
        if let Some(head) = &self.describe.default_head_name {
            validate_non_empty_string("describe.default_head_name", head)?;
        }
        if let Some(label) = &self.describe.unknown_head_label {
            validate_non_empty_string("describe.unknown_head_label", label)?;
        }
        Ok(())
    }
}
