//! End-to-end extraction of HTML posts.

use postdex_content::html::{HtmlFieldOverrides, HtmlTree};
use postdex_content::{Extractor, HtmlExtractor};
use postdex_core::{CanonicalDocument, DocumentFormat, ExtractorConfig};

use crate::common::{BASE_URL, BROKEN_HTML, HTML_POST, sample_date, url};

fn extractor() -> Extractor {
    Extractor::html(BASE_URL, HtmlFieldOverrides::new())
}

#[test]
fn test_complete_post() {
    let doc = extractor().parse(HTML_POST, "sample").unwrap();

    assert_eq!(doc.url(), url("sample"));
    assert_eq!(doc.title(), "Sample title");
    assert_eq!(doc.date(), Some(sample_date()));
    assert_eq!(doc.tags(), ["tag", "test"]);
    assert_eq!(doc.summary(), "Sample summary");
    assert_eq!(doc.sections(), ["Section 1", "Section 2"]);
    assert_eq!(
        doc.paragraphs(),
        [
            "Paragraph 1",
            "Paragraph 2 with a link.",
            "Paragraph 3",
            "Paragraph 4"
        ]
    );
    assert_eq!(doc.snippets(), ["fn main() {}"]);
}

#[test]
fn test_blank_document_is_url_only() {
    let doc = extractor().parse("", "empty").unwrap();
    assert_eq!(doc, CanonicalDocument::empty(url("empty")));
}

#[test]
fn test_lenient_mode_extracts_broken_html() {
    let doc = extractor().parse(BROKEN_HTML, "broken").unwrap();
    assert!(doc.title().starts_with("Title"));
}

#[test]
fn test_strict_mode_from_config() {
    let mut config = ExtractorConfig::new(BASE_URL, DocumentFormat::Html);
    config.strict_html = true;
    let strict = Extractor::from_config(&config).unwrap();

    let doc = strict.parse(BROKEN_HTML, "broken").unwrap();
    assert_eq!(doc, CanonicalDocument::empty(url("broken")));
}

#[test]
fn test_summary_override_with_selector() {
    let custom = HtmlExtractor::new(
        BASE_URL,
        HtmlFieldOverrides::new().summary(|tree: &HtmlTree| {
            let first = tree.first("article p")?;
            first.map(|p| p.text()).transpose().map(Option::unwrap_or_default)
        }),
    );
    let doc = custom.parse(HTML_POST, "sample").unwrap();

    assert_eq!(doc.summary(), "Paragraph 1");
    assert_eq!(doc.title(), "Sample title");
    assert_eq!(doc.paragraphs().len(), 4);
}
