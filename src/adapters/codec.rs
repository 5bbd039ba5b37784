use crate::domain::ports::JsonCodec;
use crate::utils::error::{DtoError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Compact `serde_json` codec. Output has no insignificant whitespace and
/// keeps struct fields in declaration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeJsonCodec;

impl SerdeJsonCodec {
    pub fn new() -> Self {
        Self
    }
}

impl JsonCodec for SerdeJsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<String> {
        serde_json::to_string(value).map_err(DtoError::EncodeError)
    }

    fn decode<T: DeserializeOwned>(&self, json: &str) -> Result<T> {
        serde_json::from_str(json).map_err(DtoError::ParseError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Department, Employee};

    #[test]
    fn test_encode_canonical_with_head() {
        let codec = SerdeJsonCodec::new();
        let department = Department::new("IT", Some(Employee::named("Miller")));
        assert_eq!(
            codec.encode(&department).unwrap(),
            r#"{"name":"IT","head":{"name":"Miller"}}"#
        );
    }

    #[test]
    fn test_encode_null_head_and_null_employee_name() {
        let codec = SerdeJsonCodec::new();
        assert_eq!(
            codec.encode(&Department::new("IT", None)).unwrap(),
            r#"{"name":"IT","head":null}"#
        );
        assert_eq!(
            codec
                .encode(&Department::new("IT", Some(Employee { name: None })))
                .unwrap(),
            r#"{"name":"IT","head":{"name":null}}"#
        );
    }

    #[test]
    fn test_encode_escapes_strings() {
        let codec = SerdeJsonCodec::new();
        let department = Department::with_head_name("R\"&D", Some("O'Neil \\ Co"));
        let json = codec.encode(&department).unwrap();
        assert_eq!(json, r#"{"name":"R\"&D","head":{"name":"O'Neil \\ Co"}}"#);
        let decoded: Department = codec.decode(&json).unwrap();
        assert_eq!(decoded, department);
    }

    #[test]
    fn test_decode_round_trip() {
        let codec = SerdeJsonCodec::new();
        for department in [
            Department::with_head_name("IT", Some("Miller")),
            Department::with_head_name("", None),
            Department::new("Ops", Some(Employee { name: None })),
        ] {
            let json = codec.encode(&department).unwrap();
            let decoded: Department = codec.decode(&json).unwrap();
            assert_eq!(decoded, department);
        }
    }

    #[test]
    fn test_decode_tolerates_surrounding_whitespace() {
        let codec = SerdeJsonCodec::new();
        let decoded: Department = codec
            .decode("  \n{ \"name\" : \"IT\", \"head\" : null }\t ")
            .unwrap();
        assert_eq!(decoded, Department::new("IT", None));
    }

    #[test]
    fn test_decode_missing_head_is_none() {
        let codec = SerdeJsonCodec::new();
        let decoded: Department = codec.decode(r#"{"name":"IT"}"#).unwrap();
        assert_eq!(decoded, Department::new("IT", None));

        let decoded: Department = codec.decode(r#"{"name":"IT","head":{}}"#).unwrap();
        assert_eq!(decoded, Department::new("IT", Some(Employee { name: None })));
    }

    #[test]
    fn test_decode_rejects_duplicate_keys() {
        let codec = SerdeJsonCodec::new();
        for input in [
            r#"{"name":"IT","name":"HR","head":null}"#,
            r#"{"name":"IT","head":null,"head":null}"#,
            r#"{"name":"IT","head":{"name":"Miller","name":"Roe"}}"#,
        ] {
            let err = codec.decode::<Department>(input).unwrap_err();
            assert!(err.is_parse_error(), "expected parse error for {input:?}");
            assert!(err.to_string().contains("duplicate field"));
        }
    }

    #[test]
    fn test_decode_rejects_invalid_input() {
        let codec = SerdeJsonCodec::new();
        for input in [
            "invalidJson",
            "",
            r#"{"name":"IT","#,
            r#"{"head":null}"#,
            r#"{"name":42,"head":null}"#,
            r#"{"name":"IT","head":"Miller"}"#,
            r#"{"name":"IT","head":null,"budget":10}"#,
            r#"{"name":"IT","head":{"name":"Miller","age":40}}"#,
            r#"{"name":"IT","head":null} trailing"#,
        ] {
            let err = codec.decode::<Department>(input).unwrap_err();
            assert!(err.is_parse_error(), "expected parse error for {input:?}");
        }
    }
}
