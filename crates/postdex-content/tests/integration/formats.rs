//! Field handling shared by the text and HTML conventions.

use postdex_content::Extractor;
use postdex_content::html::HtmlFieldOverrides;
use postdex_content::markdown::TextFieldOverrides;

use crate::common::BASE_URL;

#[test]
fn test_image_only_paragraph_is_empty_in_every_format() {
    let markdown = Extractor::front_matter(BASE_URL, TextFieldOverrides::new())
        .parse("First.\n\n<img src=\"x\"/>\n\nLast.\n", "md")
        .unwrap();
    let html = Extractor::html(BASE_URL, HtmlFieldOverrides::new())
        .parse(
            "<!DOCTYPE html><html><body><p>First.</p><p><img src=\"x\"></p><p>Last.</p></body></html>",
            "html",
        )
        .unwrap();

    assert_eq!(markdown.paragraphs(), ["First.", "", "Last."]);
    assert_eq!(markdown.paragraphs(), html.paragraphs());
}

#[test]
fn test_fenced_heading_lines_are_sections() {
    let doc = Extractor::multimarkdown(BASE_URL, TextFieldOverrides::new())
        .parse("title: Fences\n\n## Real\n\n```sh\n## comment\n```\n", "fences")
        .unwrap();
    assert_eq!(doc.sections(), ["Real", "comment"]);
    assert_eq!(doc.snippets(), ["## comment"]);
}

#[test]
fn test_month_name_date() {
    let doc = Extractor::front_matter(BASE_URL, TextFieldOverrides::new())
        .parse("---\ndate: January 1, 2025\ntags: a || b\n---\n\nBody.\n", "dated")
        .unwrap();
    assert_eq!(doc.date(), Some(crate::common::sample_date()));
    assert_eq!(doc.tags(), ["a", "", "b"]);
}
