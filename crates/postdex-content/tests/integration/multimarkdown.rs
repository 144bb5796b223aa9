//! End-to-end extraction of MultiMarkdown posts.

use postdex_content::Extractor;
use postdex_content::markdown::TextFieldOverrides;
use postdex_content::metadata::multimarkdown;

use crate::common::{BASE_URL, MULTIMARKDOWN_POST, NO_DATA_POST, sample_date, url};

fn extractor() -> Extractor {
    Extractor::multimarkdown(BASE_URL, TextFieldOverrides::new())
}

#[test]
fn test_complete_post() {
    let doc = extractor().parse(MULTIMARKDOWN_POST, "sample").unwrap();

    assert_eq!(doc.url(), url("sample"));
    assert_eq!(doc.title(), "Sample title");
    assert_eq!(doc.date(), Some(sample_date()));
    assert_eq!(doc.tags(), ["tag", "test"]);
    assert_eq!(doc.summary(), "Sample summarythat continues here");
    assert_eq!(doc.sections(), ["Section 1", "Section 2"]);
    assert_eq!(doc.paragraphs().len(), 3);
    assert_eq!(doc.snippets(), ["fn main() {}"]);
}

#[test]
fn test_metadata_only() {
    let metadata = multimarkdown::extract_metadata(MULTIMARKDOWN_POST);
    assert_eq!(metadata.len(), 4);
    assert_eq!(metadata.get("tags"), Some("tag | test"));
}

#[test]
fn test_post_without_metadata() {
    let doc = extractor().parse(NO_DATA_POST, "no-data").unwrap();

    assert_eq!(doc.title(), "");
    assert!(doc.date().is_none());
    assert!(doc.sections().is_empty());
    assert_eq!(doc.paragraphs(), [NO_DATA_POST]);
    assert!(doc.snippets().is_empty());
}

#[test]
fn test_front_matter_delimiters_are_markers() {
    let doc = extractor()
        .parse("---\ntitle: Fenced\n---\n\nBody.\n", "fm")
        .unwrap();
    // `---` lines are markers, so the key still parses
    assert_eq!(doc.title(), "Fenced");
    assert_eq!(doc.paragraphs(), ["Body."]);
}
