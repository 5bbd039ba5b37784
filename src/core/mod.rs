pub mod department_service;

pub use crate::domain::model::{Department, Employee};
pub use crate::domain::ports::{JsonCodec, LogSink};
pub use crate::utils::error::Result;
pub use department_service::{DepartmentService, DescribeSettings};
