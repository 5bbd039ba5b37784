pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{MemorySink, SerdeJsonCodec, TracingSink};
pub use config::TomlConfig;
pub use crate::core::{DepartmentService, DescribeSettings};
pub use domain::model::{Department, Employee};
pub use domain::ports::{JsonCodec, LogSink};
pub use utils::error::{DtoError, Result};
