//! Last-resort heuristic field extraction from free-form prose.
//!
//! When neither JSON path produces a schema-valid candidate, the coercer
//! falls back to pattern matching against natural-language labels. This
//! stage is a best-effort approximation, not a guarantee: unrecognized
//! labels yield zero scores and empty lists, never an error.

use regex::Regex;
use tracing::debug;

use interview_eval_core::InterviewEvaluation;

/// Recognized label phrases for each evaluation concept.
///
/// The default table carries the Chinese labels the evaluation backend
/// emits plus English equivalents. Additional phrasings or locales are
/// added by extending the lists; the extraction logic never hard-codes a
/// phrase.
///
/// # Examples
///
/// ```
/// use interview_eval_coerce::LabelTable;
///
/// let mut labels = LabelTable::default();
/// labels.overall_score.push("note globale".to_string());
/// ```
#[derive(Debug, Clone)]
pub struct LabelTable {
    /// Labels introducing the overall score.
    pub overall_score: Vec<String>,
    /// Labels introducing the content score.
    pub content_score: Vec<String>,
    /// Labels introducing the delivery score.
    pub delivery_score: Vec<String>,
    /// Labels introducing the non-verbal score.
    pub non_verbal_score: Vec<String>,
    /// Labels opening the strengths section.
    pub strengths: Vec<String>,
    /// Labels terminating the strengths section.
    pub strength_boundaries: Vec<String>,
    /// Labels opening the improvements section.
    pub improvements: Vec<String>,
    /// Labels opening the recommendations span.
    pub recommendations: Vec<String>,
    /// Labels that close out any trailing section (e.g. a final summary).
    pub closing: Vec<String>,
}

impl Default for LabelTable {
    fn default() -> Self {
        fn phrases(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Self {
            overall_score: phrases(&["总体评分", "整体得分", "总分", "overall score"]),
            content_score: phrases(&["内容评分", "专业知识评分", "专业评分", "content score"]),
            delivery_score: phrases(&["表达评分", "表达能力", "delivery score"]),
            non_verbal_score: phrases(&[
                "非语言表现评分",
                "非语言评分",
                "形体语言评分",
                "non-verbal score",
            ]),
            strengths: phrases(&["优点", "优势", "strengths"]),
            strength_boundaries: phrases(&["不足", "改进", "不够", "问题", "weakness", "improvement"]),
            improvements: phrases(&["不足", "改进", "问题", "weaknesses", "improvements"]),
            recommendations: phrases(&["建议", "提升建议", "改进措施", "suggestion", "recommendation"]),
            closing: phrases(&["总结", "summary"]),
        }
    }
}

/// Builds a best-effort evaluation record from free-form prose.
///
/// Never fails: every field the labels do not locate defaults to zero or
/// empty. Per-question scores and the media analyses are only recoverable
/// from the JSON paths and are left empty here.
pub fn extract_evaluation(text: &str, labels: &LabelTable) -> InterviewEvaluation {
    let improvement_boundaries: Vec<String> = labels
        .recommendations
        .iter()
        .chain(labels.closing.iter())
        .cloned()
        .collect();

    let evaluation = InterviewEvaluation {
        overall_score: labeled_number(text, &labels.overall_score),
        content_score: labeled_number(text, &labels.content_score),
        delivery_score: labeled_number(text, &labels.delivery_score),
        non_verbal_score: labeled_number(text, &labels.non_verbal_score),
        strengths: section_list(text, &labels.strengths, &labels.strength_boundaries),
        improvements: section_list(text, &labels.improvements, &improvement_boundaries),
        recommendations: trailing_span(text, &labels.recommendations, &labels.closing)
            .unwrap_or_default(),
        question_scores: Vec::new(),
        video_analysis: None,
        audio_analysis: None,
    };
    debug!(
        overall = evaluation.overall_score,
        strengths = evaluation.strengths.len(),
        improvements = evaluation.improvements.len(),
        "heuristic extraction finished"
    );
    evaluation
}

/// Joins phrases into an escaped alternation, longest first so a phrase
/// is never shadowed by one of its own prefixes.
fn phrase_alternation(phrases: &[String]) -> Option<String> {
    let mut sorted: Vec<&String> = phrases.iter().filter(|p| !p.is_empty()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by_key(|p| std::cmp::Reverse(p.len()));

    Some(
        sorted
            .iter()
            .map(|p| regex::escape(p))
            .collect::<Vec<_>>()
            .join("|"),
    )
}

/// Compiles a case-insensitive matcher over the given phrases.
fn phrase_regex(phrases: &[String]) -> Option<Regex> {
    let alternation = phrase_alternation(phrases)?;
    match Regex::new(&format!("(?i)(?:{alternation})")) {
        Ok(re) => Some(re),
        Err(err) => {
            debug!(error = %err, "label phrase alternation failed to compile");
            None
        }
    }
}

/// Finds the first labeled number for a concept, defaulting to 0.
///
/// A match is a label phrase immediately followed by punctuation and a
/// decimal integer, e.g. `总体评分：85` or `overall score: 85`.
fn labeled_number(text: &str, phrases: &[String]) -> u32 {
    let Some(alternation) = phrase_alternation(phrases) else {
        return 0;
    };
    let Ok(re) = Regex::new(&format!(r"(?i)(?:{alternation})[：:.]\s*(\d+)")) else {
        return 0;
    };
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Extracts list items from the span between a start label and the next
/// boundary label (or end of text).
fn section_list(text: &str, starts: &[String], boundaries: &[String]) -> Vec<String> {
    let Some(span) = section_span(text, starts, boundaries) else {
        return Vec::new();
    };
    list_items(span)
}

/// Returns the text between the end of the first start-label occurrence
/// and the earliest following boundary label.
fn section_span<'a>(text: &'a str, starts: &[String], boundaries: &[String]) -> Option<&'a str> {
    let start_re = phrase_regex(starts)?;
    let label = start_re.find(text)?;
    let rest = &text[label.end()..];

    let span = match phrase_regex(boundaries).and_then(|re| re.find(rest)) {
        Some(boundary) => &rest[..boundary.start()],
        None => rest,
    };
    Some(strip_label_separator(span))
}

/// Captures the trimmed span after a label, up to a closing label or end
/// of text.
fn trailing_span(text: &str, starts: &[String], closing: &[String]) -> Option<String> {
    let span = section_span(text, starts, closing)?;
    let trimmed = span.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn strip_label_separator(span: &str) -> &str {
    span.trim_start_matches([':', '：', '.']).trim_start()
}

/// Matches numbered (`1.`), bulleted (`*`, `•`), or dashed (`-`, `+`)
/// line prefixes, one item per line.
fn list_items(span: &str) -> Vec<String> {
    use std::sync::LazyLock;
    static LIST_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?m)^\s*(?:\d+\.\s*|\*\s*|•\s*|[-+]\s*)(.+)$")
            .expect("static regex must compile")
    });

    LIST_ITEM_RE
        .captures_iter(span)
        .filter_map(|caps| {
            let item = caps.get(1)?.as_str().trim();
            if item.is_empty() {
                None
            } else {
                Some(item.to_string())
            }
        })
        .collect()
}
