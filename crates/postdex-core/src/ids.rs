//! Document identifier helpers.
//!
//! A document identifier is the last path segment of the document URL, so it
//! is kept as a lowercase, hyphen-separated slug.

use std::path::Path;

/// Turn a free-form name into a URL slug.
///
/// ```
/// use postdex_core::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("  my_first__post "), "my-first-post");
/// ```
pub fn slugify(name: &str) -> String {
    name.split(|c: char| c.is_whitespace() || c == '_')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Document identifier for a post stored at `path`: its slugified file stem.
///
/// Returns `None` when the path has no usable file stem.
///
/// ```
/// use std::path::Path;
/// use postdex_core::id_from_path;
///
/// assert_eq!(id_from_path(Path::new("/posts/Release Notes.md")), Some("release-notes".to_string()));
/// assert_eq!(id_from_path(Path::new("/")), None);
/// ```
pub fn id_from_path(path: &Path) -> Option<String> {
    let id = slugify(path.file_stem()?.to_str()?);
    (!id.is_empty()).then_some(id)
}
