use thiserror::Error;

#[derive(Error, Debug)]
pub enum DtoError {
    #[error("JSON parse error: {0}")]
    ParseError(#[source] serde_json::Error),

    #[error("JSON encode error: {0}")]
    EncodeError(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid config value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DtoError {
    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            DtoError::ParseError(_) => 2,
            DtoError::ConfigError { .. } | DtoError::InvalidConfigValueError { .. } => 3,
            DtoError::EncodeError(_) | DtoError::IoError(_) => 1,
        }
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, DtoError::ParseError(_))
    }
}

pub type Result<T> = std::result::Result<T, DtoError>;
