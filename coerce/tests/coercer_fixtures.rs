use std::fs;
use std::path::PathBuf;

use interview_eval_coerce::{
    CoercionStage, coerce_with_report, format_evaluation_markdown,
};
use interview_eval_core::interview_evaluation_schema;

#[test]
fn test_fenced_interview_fixture_coerces_via_embedded_json() {
    let raw = fixture("fenced_interview_json.txt");
    let result = coerce_with_report(&raw, interview_evaluation_schema());

    assert!(result.success);
    assert_eq!(result.stage, Some(CoercionStage::EmbeddedJson));

    let evaluation = result.evaluation.expect("fixture should coerce");
    assert_eq!(evaluation.overall_score, 82);
    assert_eq!(evaluation.strengths.len(), 2);
    assert_eq!(evaluation.question_scores.len(), 1);
    assert_eq!(evaluation.question_scores[0].score, 88);

    let audio = evaluation.audio_analysis.expect("audio analysis present");
    assert_eq!(audio.filler_words_count, 12);

    let video = evaluation.video_analysis.expect("video analysis present");
    assert_eq!(video.eye_contact, 7);
}

#[test]
fn test_prose_interview_fixture_coerces_via_heuristic() {
    let raw = fixture("whole_interview_prose.txt");
    let result = coerce_with_report(&raw, interview_evaluation_schema());

    assert!(result.success);
    assert_eq!(result.stage, Some(CoercionStage::Heuristic));

    let evaluation = result.evaluation.expect("fixture should coerce");
    assert_eq!(evaluation.overall_score, 78);
    assert_eq!(evaluation.content_score, 80);
    assert_eq!(evaluation.delivery_score, 75);
    assert_eq!(evaluation.non_verbal_score, 76);
    assert_eq!(
        evaluation.strengths,
        vec!["逻辑清晰", "用词专业", "举例恰当"]
    );
    assert_eq!(evaluation.improvements, vec!["语速偏快", "眼神接触较少"]);
    assert_eq!(
        evaluation.recommendations,
        "注意放慢语速，增加停顿，回答时多与面试官进行眼神交流。"
    );
    // Heuristic extraction never recovers the optional sections.
    assert!(evaluation.question_scores.is_empty());
    assert!(evaluation.video_analysis.is_none());
    assert!(evaluation.audio_analysis.is_none());
}

#[test]
fn test_per_question_fixture_formats_to_markdown() {
    let raw = fixture("per_question_fenced.txt");
    let markdown = format_evaluation_markdown(&raw);

    assert!(markdown.contains("8/10"));
    assert!(markdown.contains("* Directly addresses the question\n"));
    assert!(markdown.contains("* Concrete example given\n"));
    assert!(markdown.contains("### Needs improvement\n* Conclusion trails off"));
    assert!(markdown.contains("### Suggestions\nEnd with a one-sentence summary"));
    assert!(markdown.contains("### Overall assessment\nA strong answer overall"));
}

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(path).expect("fixture file must be readable")
}
