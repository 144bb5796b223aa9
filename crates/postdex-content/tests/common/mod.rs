//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};

pub const BASE_URL: &str = "https://example.com/blog/";

/// A complete front matter post: 2 sections, 3 paragraphs, 1 snippet.
pub const FRONT_MATTER_POST: &str = r#"---
title: Sample title
date: 2025-01-01
tags: tag | test
summary: Sample summary
---

# Sample title

Paragraph 1 with <em>inline</em> markup.

## Section 1

Paragraph 2 spans
two lines.

```rust
fn main() {}
```

## Section 2

Paragraph 3.
"#;

/// The same post with a MultiMarkdown header.
pub const MULTIMARKDOWN_POST: &str = r#"title: Sample title
date: 2025-01-01
tags: tag | test
summary: Sample summary
    that continues here

# Sample title

Paragraph 1 with <em>inline</em> markup.

## Section 1

Paragraph 2 spans
two lines.

```rust
fn main() {}
```

## Section 2

Paragraph 3.
"#;

/// A post without any metadata.
pub const NO_DATA_POST: &str = "This is a sample document without any metadata.";

/// A front matter post whose title holds malformed markup.
pub const MALFORMED_POST: &str = "---\ntitle: Broken <em>title</strong>\n---\n\nBody.\n";

/// A complete HTML post: marked metadata, 2 sections, 4 paragraphs, 1 snippet.
pub const HTML_POST: &str = r#"<!DOCTYPE html>
<html>
<head><title>Sample title | Blog</title></head>
<body>
  <article>
    <h1 data-bdsm="title">Sample title</h1>
    <time data-bdsm="date">2025-01-01</time>
    <ul data-bdsm="tags">
      <li>tag</li>
      <li>test</li>
    </ul>
    <div data-bdsm="summary">Sample <em>summary</em></div>

    <h2>Section 1</h2>
    <p>Paragraph 1</p>
    <p>Paragraph 2 with <a href="/x">a link</a>.</p>

    <h2>Section 2</h2>
    <p>Paragraph 3</p>
    <pre><code>fn main() {}</code></pre>
    <p>Paragraph 4</p>
  </article>
</body>
</html>
"#;

/// HTML that the tree builder reports errors for.
pub const BROKEN_HTML: &str = "<h1 data-bdsm=\"title\">Title<p>Text<b>bold</i></div></span>";

/// Midnight UTC of 2025-01-01.
pub fn sample_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

pub fn url(id: &str) -> String {
    format!("https://example.com/blog/{id}")
}
