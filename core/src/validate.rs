//! Candidate validation against the evaluation schema.
//!
//! This module is the single source of truth for "is this candidate usable
//! as a structured evaluation": both JSON paths of the coercer accept a
//! candidate only after it passes here. Validation never panics; malformed
//! input (including a schema that does not compile) is reported as error
//! values.
//!
//! # Examples
//!
//! ```
//! use interview_eval_core::{interview_evaluation_schema, validate_evaluation};
//! use serde_json::json;
//!
//! let schema = interview_evaluation_schema();
//! let candidate = json!({
//!     "overallScore": 82, "contentScore": 85,
//!     "deliveryScore": 78, "nonVerbalScore": 80,
//!     "strengths": [], "improvements": [], "recommendations": ""
//! });
//! assert!(validate_evaluation(&candidate, schema).is_empty());
//!
//! // Missing required properties -> errors
//! let errors = validate_evaluation(&json!({"overallScore": 82}), schema);
//! assert!(!errors.is_empty());
//! ```

use jsonschema::JSONSchema;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Reasons a candidate value was rejected.
///
/// Each variant describes one specific problem; the `Display` impl
/// provides a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Candidate is not a JSON object (null, primitive, or array).
    #[error("candidate is not a JSON object")]
    NotAnObject,
    /// The supplied schema itself failed to compile.
    #[error("schema failed to compile: {0}")]
    InvalidSchema(String),
    /// The candidate violates a schema constraint (missing required
    /// property, type mismatch, or out-of-bounds number).
    #[error("{0}")]
    SchemaViolation(String),
}

/// Validates a candidate value against an evaluation schema.
///
/// Returns an empty vec when the candidate is valid. Candidates that are
/// not non-null objects are rejected outright without consulting the
/// engine, matching the object-shaped schemas this crate deals in.
///
/// # Examples
///
/// ```
/// use interview_eval_core::{interview_evaluation_schema, validate_evaluation, ValidationError};
/// use serde_json::json;
///
/// let schema = interview_evaluation_schema();
/// let errors = validate_evaluation(&json!([1, 2, 3]), schema);
/// assert_eq!(errors, vec![ValidationError::NotAnObject]);
/// ```
pub fn validate_evaluation(candidate: &Value, schema: &Value) -> Vec<ValidationError> {
    if !candidate.is_object() {
        return vec![ValidationError::NotAnObject];
    }

    let compiled = match JSONSchema::compile(schema) {
        Ok(compiled) => compiled,
        Err(err) => {
            debug!(error = %err, "evaluation schema failed to compile");
            return vec![ValidationError::InvalidSchema(err.to_string())];
        }
    };

    let mut errors = Vec::new();
    if let Err(violations) = compiled.validate(candidate) {
        for violation in violations {
            let path = violation.instance_path.to_string();
            let detail = if path.is_empty() {
                violation.to_string()
            } else {
                format!("{path}: {violation}")
            };
            errors.push(ValidationError::SchemaViolation(detail));
        }
    }

    if !errors.is_empty() {
        debug!(count = errors.len(), "candidate failed schema validation");
    }
    errors
}

/// Boolean shorthand for [`validate_evaluation`].
pub fn is_valid_against_schema(candidate: &Value, schema: &Value) -> bool {
    validate_evaluation(candidate, schema).is_empty()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::interview_evaluation_schema;

    fn minimal_valid() -> Value {
        json!({
            "overallScore": 82, "contentScore": 85,
            "deliveryScore": 78, "nonVerbalScore": 80,
            "strengths": ["clear"], "improvements": ["pace"],
            "recommendations": "slow down"
        })
    }

    #[test]
    fn test_validate_accepts_minimal_valid_candidate() {
        let errors = validate_evaluation(&minimal_valid(), interview_evaluation_schema());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_validate_rejects_every_missing_required_property() {
        let schema = interview_evaluation_schema();
        let required = [
            "overallScore",
            "contentScore",
            "deliveryScore",
            "nonVerbalScore",
            "strengths",
            "improvements",
            "recommendations",
        ];
        for property in required {
            let mut candidate = minimal_valid();
            candidate.as_object_mut().unwrap().remove(property);
            assert!(
                !validate_evaluation(&candidate, schema).is_empty(),
                "missing '{property}' should be invalid"
            );
        }
    }

    #[test]
    fn test_validate_rejects_out_of_bounds_scores() {
        let schema = interview_evaluation_schema();

        let mut candidate = minimal_valid();
        candidate["overallScore"] = json!(0);
        assert!(!validate_evaluation(&candidate, schema).is_empty());

        let mut candidate = minimal_valid();
        candidate["contentScore"] = json!(101);
        assert!(!validate_evaluation(&candidate, schema).is_empty());

        let mut candidate = minimal_valid();
        candidate["videoAnalysis"] = json!({
            "eyeContact": 11, "facialExpressions": 5,
            "bodyLanguage": 5, "confidence": 5, "recommendations": ""
        });
        assert!(!validate_evaluation(&candidate, schema).is_empty());
    }

    #[test]
    fn test_validate_rejects_type_mismatches() {
        let schema = interview_evaluation_schema();

        let mut candidate = minimal_valid();
        candidate["strengths"] = json!("not an array");
        assert!(!validate_evaluation(&candidate, schema).is_empty());

        let mut candidate = minimal_valid();
        candidate["recommendations"] = json!(42);
        assert!(!validate_evaluation(&candidate, schema).is_empty());
    }

    #[test]
    fn test_validate_rejects_non_objects_outright() {
        let schema = interview_evaluation_schema();
        for candidate in [json!(null), json!(42), json!("text"), json!([1, 2])] {
            assert_eq!(
                validate_evaluation(&candidate, schema),
                vec![ValidationError::NotAnObject]
            );
        }
    }

    #[test]
    fn test_validate_accepts_optional_sections_when_present_and_valid() {
        let schema = interview_evaluation_schema();
        let mut candidate = minimal_valid();
        candidate["questionScores"] = json!([{
            "question": "Q1", "answer": "A1", "score": 90, "feedback": "good"
        }]);
        candidate["audioAnalysis"] = json!({
            "clarity": 8, "pace": 7, "tone": 8,
            "fillerWordsCount": 0, "recommendations": "fewer pauses"
        });
        assert!(validate_evaluation(&candidate, schema).is_empty());
    }

    #[test]
    fn test_validate_reports_uncompilable_schema_as_error_value() {
        let bad_schema = json!({"type": "not-a-real-type"});
        let errors = validate_evaluation(&minimal_valid(), &bad_schema);
        assert!(matches!(errors[0], ValidationError::InvalidSchema(_)));
    }
}
