//! Core types and schema validation for interview evaluation records.
//!
//! This crate defines the data model shared by the coercion layer and its
//! callers:
//!
//! - [`InterviewEvaluation`] — the structured whole-interview record
//!   (scores, strengths, improvements, recommendations, optional
//!   per-question and media analyses).
//! - [`QuestionEvaluation`] — the looser per-question shape consumed by
//!   the Markdown formatter.
//! - [`interview_evaluation_schema`] — the fixed JSON Schema contract for
//!   the whole-interview record.
//! - [`validate_evaluation`] / [`is_valid_against_schema`] — candidate
//!   validation, the single gate both JSON coercion paths go through.
//!
//! # Example
//!
//! ```
//! use interview_eval_core::*;
//! use serde_json::json;
//!
//! let candidate = json!({
//!     "overallScore": 78, "contentScore": 80,
//!     "deliveryScore": 75, "nonVerbalScore": 76,
//!     "strengths": ["clear logic"], "improvements": ["pace"],
//!     "recommendations": "slow down"
//! });
//! assert!(is_valid_against_schema(&candidate, interview_evaluation_schema()));
//!
//! let eval: InterviewEvaluation = serde_json::from_value(candidate).unwrap();
//! assert_eq!(eval.overall_score, 78);
//! ```

mod schema;
mod types;
mod validate;

pub use schema::interview_evaluation_schema;
pub use types::*;
pub use validate::{ValidationError, is_valid_against_schema, validate_evaluation};
