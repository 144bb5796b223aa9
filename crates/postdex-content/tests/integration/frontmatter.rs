//! End-to-end extraction of front matter posts.

use std::io::Write;

use postdex_content::Extractor;
use postdex_content::markdown::TextFieldOverrides;
use postdex_core::{Error, MarkupError};

use crate::common::{
    BASE_URL, FRONT_MATTER_POST, MALFORMED_POST, NO_DATA_POST, sample_date, url,
};

fn extractor() -> Extractor {
    Extractor::front_matter(BASE_URL, TextFieldOverrides::new())
}

#[test]
fn test_complete_post() {
    let doc = extractor().parse(FRONT_MATTER_POST, "sample").unwrap();

    assert_eq!(doc.url(), url("sample"));
    assert_eq!(doc.title(), "Sample title");
    assert_eq!(doc.date(), Some(sample_date()));
    assert_eq!(doc.tags(), ["tag", "test"]);
    assert_eq!(doc.summary(), "Sample summary");
    assert_eq!(doc.sections(), ["Section 1", "Section 2"]);
    assert_eq!(
        doc.paragraphs(),
        [
            "Paragraph 1 with inline markup.",
            "Paragraph 2 spans\ntwo lines.",
            "Paragraph 3."
        ]
    );
    assert_eq!(doc.snippets(), ["fn main() {}"]);
}

#[test]
fn test_post_without_metadata() {
    let doc = extractor().parse(NO_DATA_POST, "no-data").unwrap();

    assert_eq!(doc.title(), "");
    assert!(doc.date().is_none());
    assert!(doc.tags().is_empty());
    assert!(doc.sections().is_empty());
    assert_eq!(doc.paragraphs(), [NO_DATA_POST]);
    assert!(doc.snippets().is_empty());
}

#[test]
fn test_malformed_markup_fails_document() {
    let err = extractor().parse(MALFORMED_POST, "broken").unwrap_err();
    assert!(err.is_malformed_markup());
    assert!(matches!(
        err,
        Error::Markup(MarkupError::MismatchedTag { .. })
    ));
}

#[test]
fn test_title_override_leaves_other_fields() {
    let custom = Extractor::front_matter(
        BASE_URL,
        TextFieldOverrides::new().title(|metadata, _| {
            Ok(metadata.get("title").unwrap_or_default().to_uppercase())
        }),
    );
    let default_doc = extractor().parse(FRONT_MATTER_POST, "sample").unwrap();
    let custom_doc = custom.parse(FRONT_MATTER_POST, "sample").unwrap();

    assert_eq!(custom_doc.title(), "SAMPLE TITLE");
    assert_eq!(custom_doc.summary(), default_doc.summary());
    assert_eq!(custom_doc.paragraphs(), default_doc.paragraphs());
    assert_eq!(custom_doc.snippets(), default_doc.snippets());
}

#[test]
fn test_parse_file_uses_file_stem() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Sample Post.md");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(FRONT_MATTER_POST.as_bytes()).unwrap();

    let doc = extractor().parse_file(&path).unwrap();
    assert_eq!(doc.url(), url("sample-post"));
    assert_eq!(doc.title(), "Sample title");
}

#[test]
fn test_parse_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = extractor()
        .parse_file(dir.path().join("missing.md"))
        .unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(!err.is_malformed_markup());
}

#[test]
fn test_serialized_payload() {
    let doc = extractor().parse(FRONT_MATTER_POST, "sample").unwrap();
    let json = serde_json::to_value(&doc).unwrap();

    assert_eq!(json["url"], "https://example.com/blog/sample");
    assert_eq!(json["date"], "2025-01-01T00:00:00Z");
    assert_eq!(json["tags"], serde_json::json!(["tag", "test"]));
    assert_eq!(json["paragraphs"].as_array().unwrap().len(), 3);
}
