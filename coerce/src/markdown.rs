//! Per-question evaluation Markdown rendering.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use interview_eval_core::QuestionEvaluation;

static FENCED_JSON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```json\s*(.*?)\s*```").expect("static regex must compile")
});

/// Renders one per-question evaluation string as display Markdown.
///
/// A fenced ```json block is preferred; otherwise the whole input is
/// treated as the JSON candidate. On success the sections are rendered in
/// fixed order (score heading, strengths, needs-improvement, suggestions,
/// overall assessment), omitting any section whose source field is absent
/// or empty. On any parse failure the input is returned unchanged; this
/// function never fails.
///
/// # Examples
///
/// ```
/// use interview_eval_coerce::format_evaluation_markdown;
///
/// let markdown =
///     format_evaluation_markdown(r#"{"score": 8, "strengths": ["concise"], "feedback": "ok"}"#);
/// assert!(markdown.contains("8/10"));
/// assert!(markdown.contains("* concise"));
///
/// // Plain prose comes back verbatim.
/// assert_eq!(format_evaluation_markdown("solid answer"), "solid answer");
/// ```
pub fn format_evaluation_markdown(evaluation_text: &str) -> String {
    let candidate = FENCED_JSON_RE
        .captures(evaluation_text)
        .and_then(|caps| caps.get(1))
        .map_or(evaluation_text, |m| m.as_str());

    // Models sometimes pretty-print JSON with raw newlines inside what
    // should be escaped strings. Collapsing newlines keeps that common
    // case parseable at the cost of flattening legitimately multi-line
    // string values.
    let collapsed = candidate.replace('\n', " ");

    let evaluation: QuestionEvaluation = match serde_json::from_str(&collapsed) {
        Ok(evaluation) => evaluation,
        Err(err) => {
            debug!(error = %err, "per-question evaluation is not JSON, returning verbatim");
            return evaluation_text.to_string();
        }
    };

    let markdown = render(&evaluation);
    if markdown.is_empty() {
        // Parsed, but carried none of the known fields.
        return evaluation_text.to_string();
    }
    markdown
}

fn render(evaluation: &QuestionEvaluation) -> String {
    let mut markdown = String::new();

    if let Some(score) = &evaluation.score {
        markdown.push_str(&format!("## Score: {score}/10\n\n"));
    }

    if let Some(strengths) = evaluation.strengths.as_deref().filter(|s| !s.is_empty()) {
        markdown.push_str("### Strengths\n");
        for strength in strengths {
            markdown.push_str(&format!("* {strength}\n"));
        }
        markdown.push('\n');
    }

    if let Some(weaknesses) = evaluation.weaknesses.as_deref().filter(|w| !w.is_empty()) {
        markdown.push_str("### Needs improvement\n");
        for weakness in weaknesses {
            markdown.push_str(&format!("* {weakness}\n"));
        }
        markdown.push('\n');
    }

    if let Some(suggestions) = evaluation.suggestions.as_deref().filter(|s| !s.is_empty()) {
        markdown.push_str("### Suggestions\n");
        markdown.push_str(suggestions);
        markdown.push_str("\n\n");
    }

    if let Some(feedback) = evaluation.feedback.as_deref().filter(|f| !f.is_empty()) {
        markdown.push_str("### Overall assessment\n");
        markdown.push_str(feedback);
    }

    markdown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_score_bullets_and_feedback() {
        let markdown =
            format_evaluation_markdown(r#"{"score":8,"strengths":["A","B"],"feedback":"ok"}"#);
        assert!(markdown.contains("8/10"));
        assert!(markdown.contains("* A\n"));
        assert!(markdown.contains("* B\n"));
        assert!(markdown.contains("ok"));
        assert!(!markdown.contains("Needs improvement"));
        assert!(!markdown.contains("Suggestions"));
    }

    #[test]
    fn test_prefers_fenced_json_block() {
        let text = "Here is the evaluation:\n```json\n{\"score\": 7, \"feedback\": \"solid\"}\n```";
        let markdown = format_evaluation_markdown(text);
        assert!(markdown.contains("7/10"));
        assert!(markdown.contains("solid"));
    }

    #[test]
    fn test_collapses_raw_newlines_before_parsing() {
        // Pretty-printed JSON with raw newlines between tokens.
        let text = "{\n\"score\": 9,\n\"suggestions\": \"shorter answers\"\n}";
        let markdown = format_evaluation_markdown(text);
        assert!(markdown.contains("9/10"));
        assert!(markdown.contains("### Suggestions\nshorter answers"));
    }

    #[test]
    fn test_plain_text_returned_verbatim() {
        for text in ["no structure at all", "score 8 of 10", ""] {
            assert_eq!(format_evaluation_markdown(text), text);
        }
    }

    #[test]
    fn test_empty_object_returned_verbatim() {
        assert_eq!(format_evaluation_markdown("{}"), "{}");
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let markdown = format_evaluation_markdown(
            r#"{"score": 6, "strengths": [], "weaknesses": ["rushed"], "suggestions": ""}"#,
        );
        assert!(markdown.contains("6/10"));
        assert!(!markdown.contains("Strengths"));
        assert!(markdown.contains("### Needs improvement\n* rushed"));
        assert!(!markdown.contains("Suggestions"));
    }

    #[test]
    fn test_fractional_score_displays_faithfully() {
        let markdown = format_evaluation_markdown(r#"{"score": 7.5}"#);
        assert!(markdown.contains("7.5/10"));
    }
}
