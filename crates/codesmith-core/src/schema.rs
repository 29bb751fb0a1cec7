//! The structured-output contract for a crew run.
//!
//! The crew engine is asked to answer with a JSON object carrying exactly
//! four string fields. [`CodeResult::validate`] is the single place where
//! that opaque payload becomes a typed record the rest of the program can
//! rely on without further checks.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A field of the payload failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was absent from the payload.
    #[error("missing field `{field}`")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },

    /// A required field was present but not a JSON string.
    #[error("wrong type for field `{field}`: expected string, found {found}")]
    WrongType {
        /// Name of the offending field.
        field: &'static str,
        /// JSON type name of the value that was found.
        found: &'static str,
    },
}

/// The validated record of one completed coding assignment.
///
/// Immutable once constructed; built exactly once per request from the
/// engine's raw response and discarded after rendering and persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeResult {
    /// The original question or assignment from the user.
    pub question: String,
    /// The programming language chosen for this task, as supplied.
    pub programming_language: String,
    /// The generated source code that solves the question.
    pub code: String,
    /// The output or result after executing the code.
    pub final_result: String,
}

impl CodeResult {
    /// Validates an untyped payload into a `CodeResult`.
    ///
    /// All four fields must be present and JSON strings; each extracted
    /// value is trimmed of leading and trailing whitespace. Fields are
    /// checked in declaration order and the first failure is reported.
    /// No defaults are fabricated and no partial record is produced.
    pub fn validate(raw: &Value) -> Result<Self, ValidationError> {
        Ok(Self {
            question: require_text(raw, "question")?,
            programming_language: require_text(raw, "programming_language")?,
            code: require_text(raw, "code")?,
            final_result: require_text(raw, "final_result")?,
        })
    }
}

fn require_text(raw: &Value, field: &'static str) -> Result<String, ValidationError> {
    match raw.get(field) {
        None => Err(ValidationError::MissingField { field }),
        Some(Value::String(s)) => Ok(s.trim().to_string()),
        Some(other) => Err(ValidationError::WrongType {
            field,
            found: json_type_name(other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serde_json::json;

    #[test]
    fn validate_trims_all_fields() {
        let raw = json!({
            "question": " sum two numbers ",
            "programming_language": "Python",
            "code": "print(1+2)",
            "final_result": "3"
        });

        let result = CodeResult::validate(&raw).unwrap();
        assert_eq!(result.question, "sum two numbers");
        assert_eq!(result.programming_language, "Python");
        assert_eq!(result.code, "print(1+2)");
        assert_eq!(result.final_result, "3");
    }

    #[test]
    fn missing_field_names_the_field() {
        let raw = json!({
            "question": "q",
            "programming_language": "Python",
            "code": "pass"
        });

        let err = CodeResult::validate(&raw).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                field: "final_result"
            }
        );
        assert_eq!(err.to_string(), "missing field `final_result`");
    }

    #[test]
    fn wrong_type_names_field_and_type() {
        let raw = json!({
            "question": "q",
            "programming_language": "Python",
            "code": 12345,
            "final_result": ""
        });

        let err = CodeResult::validate(&raw).unwrap_err();
        assert_eq!(
            err,
            ValidationError::WrongType {
                field: "code",
                found: "number"
            }
        );
    }

    #[test]
    fn first_failure_wins_in_declaration_order() {
        // Both question and code are broken; question is reported.
        let raw = json!({
            "programming_language": "Rust",
            "code": {"nested": true},
            "final_result": "ok"
        });

        let err = CodeResult::validate(&raw).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "question" });
    }
}
