use super::*;
use crate::validate::validator::ChapterValidator;
use serde_json::json;

fn paragraph_errors(inlines: Value) -> Vec<String> {
    let chapter = json!({
        "chapterId": "ch-03",
        "title": "Media",
        "anchor": "media",
        "order": 3,
        "blocks": [{"type": "paragraph", "inlines": inlines}],
    });
    ChapterValidator::default()
        .validate_chapter(&chapter)
        .messages()
}

#[test]
fn absent_null_and_empty_marks_are_fine() {
    assert!(
        paragraph_errors(json!([
            {"text": "a"},
            {"text": "b", "marks": null},
            {"text": "c", "marks": []},
        ]))
        .is_empty()
    );
}

#[test]
fn any_registered_mark_is_allowed_outside_engine_quotes() {
    assert!(
        paragraph_errors(json!([{"text": "a", "marks": [
            {"type": "underline"},
            {"type": "link", "href": "https://example.com"},
            {"type": "highlight"},
        ]}]))
        .is_empty()
    );
}

#[test]
fn run_shape_and_text() {
    assert_eq!(
        paragraph_errors(json!(["plain", {"marks": []}])),
        [
            "blocks[0].inlines[0] must be an object",
            "blocks[0].inlines[1].text is missing",
        ]
    );
}

#[test]
fn non_array_marks_stop_mark_checks() {
    assert_eq!(
        paragraph_errors(json!([{"text": "a", "marks": "bold"}])),
        ["blocks[0].inlines[0].marks must be an array"]
    );
}

#[test]
fn each_bad_mark_is_reported() {
    assert_eq!(
        paragraph_errors(json!([{"text": "a", "marks": [
            {"type": "bold"},
            "italic",
            {"type": "blink"},
            {},
        ]}])),
        [
            "blocks[0].inlines[0].marks[1] must be an object",
            "blocks[0].inlines[0].marks[2].type is not supported: blink",
            "blocks[0].inlines[0].marks[3].type is not supported: null",
        ]
    );
}

#[test]
fn sibling_runs_are_all_checked() {
    assert_eq!(
        paragraph_errors(json!([
            {"marks": [{"type": "bold"}]},
            {"text": "ok"},
            {"text": "b", "marks": [{"type": "Bold"}]},
        ])),
        [
            "blocks[0].inlines[0].text is missing",
            "blocks[0].inlines[2].marks[0].type is not supported: Bold",
        ]
    );
}
