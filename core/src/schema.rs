//! The whole-interview evaluation schema constant.

use std::sync::LazyLock;

use serde_json::{Value, json};

/// JSON Schema for a whole-interview evaluation record.
///
/// The four top-level scores plus `strengths`, `improvements`, and
/// `recommendations` are required; `questionScores`, `videoAnalysis`, and
/// `audioAnalysis` are optional. Score bounds are inclusive: 1-100 at the
/// interview level, 1-10 for the media analyses, and `fillerWordsCount`
/// only has to be non-negative.
static INTERVIEW_EVALUATION_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "object",
        "properties": {
            "overallScore": { "type": "integer", "minimum": 1, "maximum": 100 },
            "contentScore": { "type": "integer", "minimum": 1, "maximum": 100 },
            "deliveryScore": { "type": "integer", "minimum": 1, "maximum": 100 },
            "nonVerbalScore": { "type": "integer", "minimum": 1, "maximum": 100 },
            "strengths": {
                "type": "array",
                "items": { "type": "string" }
            },
            "improvements": {
                "type": "array",
                "items": { "type": "string" }
            },
            "recommendations": { "type": "string" },
            "questionScores": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "question": { "type": "string" },
                        "answer": { "type": "string" },
                        "score": { "type": "integer", "minimum": 1, "maximum": 100 },
                        "feedback": { "type": "string" }
                    }
                }
            },
            "videoAnalysis": {
                "type": "object",
                "properties": {
                    "eyeContact": { "type": "integer", "minimum": 1, "maximum": 10 },
                    "facialExpressions": { "type": "integer", "minimum": 1, "maximum": 10 },
                    "bodyLanguage": { "type": "integer", "minimum": 1, "maximum": 10 },
                    "confidence": { "type": "integer", "minimum": 1, "maximum": 10 },
                    "recommendations": { "type": "string" }
                }
            },
            "audioAnalysis": {
                "type": "object",
                "properties": {
                    "clarity": { "type": "integer", "minimum": 1, "maximum": 10 },
                    "pace": { "type": "integer", "minimum": 1, "maximum": 10 },
                    "tone": { "type": "integer", "minimum": 1, "maximum": 10 },
                    "fillerWordsCount": { "type": "integer", "minimum": 0 },
                    "recommendations": { "type": "string" }
                }
            }
        },
        "required": [
            "overallScore", "contentScore", "deliveryScore", "nonVerbalScore",
            "strengths", "improvements", "recommendations"
        ]
    })
});

/// Returns the fixed whole-interview evaluation schema.
///
/// The schema is an immutable constant; callers pass it to
/// [`validate_evaluation`](crate::validate_evaluation) and to the coercer.
///
/// # Examples
///
/// ```
/// use interview_eval_core::interview_evaluation_schema;
///
/// let schema = interview_evaluation_schema();
/// assert_eq!(schema["type"], "object");
/// assert!(schema["required"].as_array().unwrap().len() == 7);
/// ```
pub fn interview_evaluation_schema() -> &'static Value {
    &INTERVIEW_EVALUATION_SCHEMA
}
