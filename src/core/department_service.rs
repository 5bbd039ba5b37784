use crate::domain::model::{Department, Employee};
use crate::domain::ports::{JsonCodec, LogSink};
use crate::utils::error::Result;

pub const DEFAULT_HEAD_NAME: &str = "John Doe";
pub const UNKNOWN_HEAD_LABEL: &str = "Unknown";

/// Values used by [`DepartmentService::describe_head`] and
/// [`DepartmentService::describe_department`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeSettings {
    pub default_head_name: String,
    pub unknown_head_label: String,
}

impl Default for DescribeSettings {
    fn default() -> Self {
        Self {
            default_head_name: DEFAULT_HEAD_NAME.to_string(),
            unknown_head_label: UNKNOWN_HEAD_LABEL.to_string(),
        }
    }
}

/// Builds, logs and compares department JSON documents.
pub struct DepartmentService<C: JsonCodec, L: LogSink> {
    codec: C,
    sink: L,
    describe: DescribeSettings,
}

impl<C: JsonCodec, L: LogSink> DepartmentService<C, L> {
    pub fn new(codec: C, sink: L) -> Self {
        Self::with_settings(codec, sink, DescribeSettings::default())
    }

    pub fn with_settings(codec: C, sink: L, describe: DescribeSettings) -> Self {
        Self {
            codec,
            sink,
            describe,
        }
    }

    /// Encodes a department and emits one info line describing the inputs and
    /// the resulting JSON. The head is only present when a head name is given.
    pub fn build_department_json(
        &self,
        department_name: &str,
        department_head_name: Option<&str>,
    ) -> Result<String> {
        let department = Department::with_head_name(department_name, department_head_name);
        let json = self.codec.encode(&department)?;

        self.sink.info(&format!(
            "Created department JSON for (departmentName={}, employeeName={}): {}",
            department.name,
            department_head_name.unwrap_or("null"),
            json
        ));

        Ok(json)
    }

    /// Compares two documents after decoding, so formatting differences never
    /// matter. A document that fails to decode is an error, not a mismatch.
    pub fn deserialized_department_json_matches(&self, json: &str, json2: &str) -> Result<bool> {
        let first = self.department_for(json)?;
        let second = self.department_for(json2)?;
        tracing::debug!(?first, ?second, "Comparing decoded departments");
        Ok(first == second)
    }

    pub fn department_for(&self, json: &str) -> Result<Department> {
        self.codec.decode(json)
    }

    /// Logs and returns who heads the named department, staffed with the
    /// configured default head.
    pub fn describe_head(&self, department_name: &str) -> String {
        let department = Department::new(
            department_name,
            Some(Employee::named(self.describe.default_head_name.as_str())),
        );
        self.describe_department(&department)
    }

    /// Logs and returns who heads `department`. A missing head, or a head
    /// without a name, is reported with the configured unknown label.
    pub fn describe_department(&self, department: &Department) -> String {
        let summary = department.head_summary(&self.describe.unknown_head_label);
        self.sink.info(&summary);
        summary
    }
}
