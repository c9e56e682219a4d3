//! Coercion of free-form model output into structured interview
//! evaluations.
//!
//! The evaluation backend returns natural-language text with no format
//! guarantee: sometimes clean JSON, sometimes JSON buried in prose or a
//! fenced code block, sometimes plain prose with labeled scores and
//! bulleted lists. This crate recovers an
//! [`InterviewEvaluation`] from whatever arrived, in strict precedence
//! order:
//!
//! 1. **Direct parse** — the whole text is valid, schema-conforming JSON.
//! 2. **Embedded extraction** — a fenced ```json block, or the outermost
//!    `{...}`/`[...]` span, parses and validates.
//! 3. **Heuristic extraction** — labeled-number and section-span matching
//!    against a configurable [`LabelTable`]; never fails, possibly
//!    yielding zero-valued fields.
//!
//! Failures at any stage fall through to the next; only empty input (or
//! nothing usable at all) yields `None`, and callers are expected to show
//! the raw text in that case. The sibling
//! [`format_evaluation_markdown`] renders a single per-question
//! evaluation string as display Markdown with the same never-fail policy.
//!
//! # Main entry points
//!
//! - [`coerce_model_output`] — coerce raw text against a schema.
//! - [`coerce_with_report`] — same, with the winning stage and warnings.
//! - [`format_evaluation_markdown`] — per-question Markdown rendering.
//!
//! # Example
//!
//! ```
//! use interview_eval_coerce::coerce_model_output;
//! use interview_eval_core::interview_evaluation_schema;
//!
//! let raw = "总体评分: 78\n内容评分: 80\n表达评分: 75\n非语言评分: 76\n\
//!            优点：\n1. 逻辑清晰\n不足：\n1. 语速偏快\n建议：放慢语速。";
//! let evaluation = coerce_model_output(raw, interview_evaluation_schema()).unwrap();
//! assert_eq!(evaluation.overall_score, 78);
//! assert_eq!(evaluation.strengths, vec!["逻辑清晰"]);
//! ```

mod extract;
mod heuristic;
mod markdown;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use interview_eval_core::{InterviewEvaluation, validate_evaluation};

pub use heuristic::{LabelTable, extract_evaluation};
pub use markdown::format_evaluation_markdown;

/// Which coercion stage produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoercionStage {
    /// The raw text parsed directly as schema-valid JSON.
    DirectJson,
    /// A JSON fragment embedded in prose parsed and validated.
    EmbeddedJson,
    /// Label-based heuristic extraction (best effort).
    Heuristic,
}

/// Outcome of a coercion run, with diagnostics.
///
/// `success` is true iff `evaluation` is present. Warnings record why the
/// higher-precedence stages were skipped, which is useful when inspecting
/// model output drift offline.
#[derive(Debug, Clone, Serialize)]
pub struct CoercionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<InterviewEvaluation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<CoercionStage>,
    pub warnings: Vec<String>,
    pub success: bool,
}

/// Coerces raw model output into a structured evaluation.
///
/// Returns `None` only when the input contains nothing usable (empty or
/// whitespace-only text). Callers must treat `None` as "no structured
/// evaluation available" and fall back to displaying the raw text.
///
/// # Examples
///
/// ```
/// use interview_eval_coerce::coerce_model_output;
/// use interview_eval_core::interview_evaluation_schema;
///
/// let schema = interview_evaluation_schema();
/// assert!(coerce_model_output("", schema).is_none());
///
/// let raw = r#"{"overallScore": 82, "contentScore": 85, "deliveryScore": 78,
///               "nonVerbalScore": 80, "strengths": [], "improvements": [],
///               "recommendations": ""}"#;
/// let evaluation = coerce_model_output(raw, schema).unwrap();
/// assert_eq!(evaluation.content_score, 85);
/// ```
pub fn coerce_model_output(raw_text: &str, schema: &Value) -> Option<InterviewEvaluation> {
    coerce_with_report(raw_text, schema).evaluation
}

/// Coerces raw model output, reporting the winning stage and any warnings.
///
/// Uses the default [`LabelTable`] for the heuristic stage; see
/// [`coerce_with_labels`] to supply extra label phrases.
pub fn coerce_with_report(raw_text: &str, schema: &Value) -> CoercionResult {
    coerce_with_labels(raw_text, schema, &LabelTable::default())
}

/// Coerces raw model output with a caller-supplied label table.
pub fn coerce_with_labels(
    raw_text: &str,
    schema: &Value,
    labels: &LabelTable,
) -> CoercionResult {
    let mut warnings = Vec::new();

    if raw_text.trim().is_empty() {
        warnings.push("Empty model output".to_string());
        return CoercionResult {
            evaluation: None,
            stage: None,
            warnings,
            success: false,
        };
    }

    // Stage 1: the whole text is JSON.
    match serde_json::from_str::<Value>(raw_text) {
        Ok(candidate) => {
            if let Some(evaluation) = accept_candidate(candidate, schema, &mut warnings) {
                debug!("coerced via direct JSON parse");
                return accepted(evaluation, CoercionStage::DirectJson, warnings);
            }
        }
        Err(err) => {
            debug!(error = %err, "raw text is not JSON, trying embedded extraction");
        }
    }

    // Stage 2: a JSON fragment embedded in prose. A parse error here is
    // not fatal; the heuristic stage still runs.
    if let Some(fragment) = extract::embedded_json(raw_text) {
        match serde_json::from_str::<Value>(fragment) {
            Ok(candidate) => {
                if let Some(evaluation) = accept_candidate(candidate, schema, &mut warnings) {
                    debug!("coerced via embedded JSON extraction");
                    return accepted(evaluation, CoercionStage::EmbeddedJson, warnings);
                }
            }
            Err(err) => {
                warnings.push(format!("Embedded JSON fragment failed to parse: {err}"));
            }
        }
    }

    // Stage 3: best-effort label matching. Never fails.
    debug!("falling back to heuristic extraction");
    let evaluation = heuristic::extract_evaluation(raw_text, labels);
    accepted(evaluation, CoercionStage::Heuristic, warnings)
}

/// Gates a parsed candidate through schema validation and typed
/// conversion. A schema-valid candidate that does not convert (e.g. a
/// fractional score) is treated as invalid and falls through.
fn accept_candidate(
    candidate: Value,
    schema: &Value,
    warnings: &mut Vec<String>,
) -> Option<InterviewEvaluation> {
    let errors = validate_evaluation(&candidate, schema);
    if !errors.is_empty() {
        warnings.extend(errors.iter().map(ToString::to_string));
        return None;
    }

    match serde_json::from_value::<InterviewEvaluation>(candidate) {
        Ok(evaluation) => Some(evaluation),
        Err(err) => {
            warnings.push(format!(
                "Schema-valid candidate failed typed conversion: {err}"
            ));
            None
        }
    }
}

fn accepted(
    evaluation: InterviewEvaluation,
    stage: CoercionStage,
    warnings: Vec<String>,
) -> CoercionResult {
    CoercionResult {
        evaluation: Some(evaluation),
        stage: Some(stage),
        warnings,
        success: true,
    }
}
