use serde::{Deserialize, Serialize};

/// A department with a mandatory name and an optional head.
///
/// Field declaration order is the serialized order, so `name` always precedes
/// `head` in the encoded JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Department {
    pub name: String,
    pub head: Option<Employee>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Employee {
    pub name: Option<String>,
}

impl Department {
    pub fn new(name: impl Into<String>, head: Option<Employee>) -> Self {
        Self {
            name: name.into(),
            head,
        }
    }

    /// Department whose head is only present when a head name is given.
    pub fn with_head_name(name: impl Into<String>, head_name: Option<&str>) -> Self {
        Self::new(name, head_name.map(Employee::named))
    }

    pub fn head_name(&self) -> Option<&str> {
        self.head.as_ref().and_then(|head| head.name.as_deref())
    }

    /// `The head of <name> department is <head>`, using `unknown_label` when
    /// there is no head or the head has no name.
    pub fn head_summary(&self, unknown_label: &str) -> String {
        format!(
            "The head of {} department is {}",
            self.name,
            self.head_name().unwrap_or(unknown_label)
        )
    }
}

impl Employee {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_head_name_absent() {
        let department = Department::with_head_name("IT", None);
        assert_eq!(department.name, "IT");
        assert!(department.head.is_none());
    }

    #[test]
    fn test_structural_equality() {
        let it = Department::new("IT", Some(Employee::named("Miller")));
        assert_eq!(it, Department::with_head_name("IT", Some("Miller")));
        assert_ne!(it, Department::new("HR", Some(Employee::named("Miller"))));
        assert_ne!(it, Department::new("IT", Some(Employee { name: None })));
        assert_ne!(it, Department::new("IT", None));
    }

    #[test]
    fn test_head_summary() {
        let it = Department::with_head_name("IT", Some("John Doe"));
        assert_eq!(it.head_summary("Unknown"), "The head of IT department is John Doe");

        let headless = Department::new("HR", None);
        assert_eq!(headless.head_summary("Unknown"), "The head of HR department is Unknown");

        let nameless_head = Department::new("Ops", Some(Employee { name: None }));
        assert_eq!(nameless_head.head_summary("n/a"), "The head of Ops department is n/a");
    }
}
