use super::*;
use serde_json::json;

fn at(fields: &[&'static str]) -> IrPath {
    fields.iter().fold(IrPath::root(), |p, f| p.field(*f))
}

#[test]
fn constructors_prefix_the_path() {
    let p = IrPath::root().field("blocks").index(1).field("text");
    assert_eq!(Diagnostic::missing(p.clone()).message, "blocks[1].text is missing");
    assert_eq!(
        Diagnostic::shape(p.clone(), "must be a string").message,
        "blocks[1].text must be a string"
    );
    assert_eq!(Diagnostic::missing(p).kind, DiagnosticKind::MissingField);
}

#[test]
fn value_repr_renders_strings_bare_and_absent_as_null() {
    let tone = at(&["tone"]);
    assert_eq!(
        Diagnostic::invalid(tone.clone(), Some(&json!("loud"))).message,
        "tone is invalid: loud"
    );
    assert_eq!(
        Diagnostic::invalid(tone.clone(), None).message,
        "tone is invalid: null"
    );
    assert_eq!(
        Diagnostic::unsupported(at(&["type"]), Some(&json!(3))).message,
        "type is not supported: 3"
    );
}

#[test]
fn report_display_joins_with_newlines() {
    let report = ValidationReport {
        schema_version: "1.0".to_owned(),
        errors: vec![
            Diagnostic::missing(at(&["a"])),
            Diagnostic::missing(at(&["b"])),
        ],
    };
    assert!(!report.ok());
    assert_eq!(report.to_string(), "a is missing\nb is missing");
    let (ok, msgs) = report.into_parts();
    assert!(!ok);
    assert_eq!(msgs, ["a is missing", "b is missing"]);
}

#[test]
fn report_serializes_kind_and_path() {
    let report = ValidationReport {
        schema_version: "1.0".to_owned(),
        errors: vec![Diagnostic::missing(
            IrPath::root().field("blocks").index(0).field("latex"),
        )],
    };
    let v = serde_json::to_value(&report).unwrap();
    assert_eq!(v["errors"][0]["kind"], "missing_field");
    assert_eq!(v["errors"][0]["path"], "blocks[0].latex");
}
