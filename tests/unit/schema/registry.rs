use super::*;

#[test]
fn block_vocabulary_is_closed_and_case_sensitive() {
    let reg = SchemaRegistry::default();
    assert_eq!(reg.block_types().len(), 12);
    assert!(reg.is_block_kind("engineQuote"));
    assert!(reg.is_block_kind("kpiGrid"));
    assert!(!reg.is_block_kind("enginequote"));
    assert!(!reg.is_block_kind("hr"));
}

#[test]
fn mark_vocabulary_contains_formatting_marks() {
    let reg = SchemaRegistry::default();
    for m in ["bold", "italic", "underline", "link", "math"] {
        assert!(reg.is_mark_kind(m), "{m}");
    }
    assert!(!reg.is_mark_kind("blink"));
}

#[test]
fn engine_titles_lookup() {
    let reg = SchemaRegistry::default();
    assert_eq!(reg.engine_title("insight"), Some("Insight Agent"));
    assert_eq!(reg.engine_title("media"), Some("Media Agent"));
    assert_eq!(reg.engine_title("query"), Some("Query Agent"));
    assert_eq!(reg.engine_title("Insight"), None);
    assert_eq!(reg.engines().collect::<Vec<_>>(), ["insight", "media", "query"]);
}

#[test]
fn serializes_tables() {
    let v = serde_json::to_value(SchemaRegistry::default()).unwrap();
    assert_eq!(v["version"], IR_VERSION);
    assert_eq!(v["engine_titles"]["query"], "Query Agent");
    assert_eq!(v["block_types"].as_array().unwrap().len(), 12);
}
