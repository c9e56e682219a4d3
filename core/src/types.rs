//! Data model for interview evaluation records.
//!
//! These types describe the structured result recovered from free-form
//! model output. They serialize with camelCase field names, matching the
//! wire shape the evaluation backend emits, and round-trip through JSON
//! with [`serde`].

use serde::{Deserialize, Serialize};

/// A complete, whole-interview evaluation record.
///
/// The four top-level scores and the `strengths`/`improvements`/
/// `recommendations` fields are required by the evaluation schema
/// (see [`interview_evaluation_schema`](crate::interview_evaluation_schema));
/// per-question scores and the media analyses are optional and only
/// present when the model produced parseable JSON for them.
///
/// # Examples
///
/// ```
/// use interview_eval_core::InterviewEvaluation;
///
/// let json = r#"{
///     "overallScore": 82, "contentScore": 85,
///     "deliveryScore": 78, "nonVerbalScore": 80,
///     "strengths": ["clear reasoning"], "improvements": [],
///     "recommendations": "slow down"
/// }"#;
/// let eval: InterviewEvaluation = serde_json::from_str(json).unwrap();
/// assert_eq!(eval.overall_score, 82);
/// assert!(eval.question_scores.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewEvaluation {
    /// Overall score, 1-100.
    pub overall_score: u32,
    /// Content score (domain knowledge, reasoning), 1-100.
    pub content_score: u32,
    /// Delivery score (fluency, organization), 1-100.
    pub delivery_score: u32,
    /// Non-verbal score (body language, facial expression), 1-100.
    pub non_verbal_score: u32,
    /// Observed strengths, in display order.
    pub strengths: Vec<String>,
    /// Areas needing improvement, in display order.
    pub improvements: Vec<String>,
    /// Free-text overall recommendations (may be empty).
    pub recommendations: String,
    /// Per-question scores, one entry per interview question.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub question_scores: Vec<QuestionScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_analysis: Option<VideoAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_analysis: Option<AudioAnalysis>,
}

/// Score and feedback for a single interview question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionScore {
    pub question: String,
    pub answer: String,
    /// Score for this answer, 1-100.
    pub score: u32,
    pub feedback: String,
}

/// Webcam-derived analysis of the candidate's non-verbal behavior.
///
/// All scores are on a 1-10 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoAnalysis {
    pub eye_contact: u32,
    pub facial_expressions: u32,
    pub body_language: u32,
    pub confidence: u32,
    pub recommendations: String,
}

/// Audio-derived analysis of the candidate's speech.
///
/// Scores are on a 1-10 scale; `filler_words_count` is a plain count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioAnalysis {
    pub clarity: u32,
    pub pace: u32,
    pub tone: u32,
    pub filler_words_count: u32,
    pub recommendations: String,
}

/// The ad hoc per-question evaluation shape consumed by the Markdown
/// formatter.
///
/// Unlike [`InterviewEvaluation`] this shape has no schema contract: any
/// subset of fields may be absent, and the formatter simply omits the
/// corresponding section. Kept separate from the whole-interview record on
/// purpose; the two operate on different granularities.
///
/// # Examples
///
/// ```
/// use interview_eval_core::QuestionEvaluation;
///
/// let eval: QuestionEvaluation =
///     serde_json::from_str(r#"{"score": 8, "feedback": "ok"}"#).unwrap();
/// assert_eq!(eval.score.and_then(|n| n.as_u64()), Some(8));
/// assert!(eval.strengths.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuestionEvaluation {
    /// Score on a 1-10 scale. Kept as a raw JSON number so integral and
    /// fractional scores both display faithfully.
    pub score: Option<serde_json::Number>,
    pub strengths: Option<Vec<String>>,
    pub weaknesses: Option<Vec<String>>,
    pub suggestions: Option<String>,
    pub feedback: Option<String>,
}
