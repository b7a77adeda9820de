//! Favicon auto-detection

use super::ports::DocumentMetadata;

/// `(rel, type)` lookups tried in order; the first hit wins
pub const FAVICON_LOOKUPS: &[(&str, Option<&str>)] = &[
    ("icon", None),
    ("shortcut icon", None),
    ("apple-touch-icon", None),
    ("icon", Some("image/x-icon")),
    ("icon", Some("image/png")),
    ("icon", Some("image/svg+xml")),
];

/// Find the document's favicon, falling back to `<origin>/favicon.ico`.
pub fn detect_favicon(document: &dyn DocumentMetadata) -> Option<String> {
    FAVICON_LOOKUPS
        .iter()
        .find_map(|(rel, mime)| document.link_href(rel, *mime))
        .or_else(|| {
            document
                .origin()
                .map(|origin| format!("{}/favicon.ico", origin.trim_end_matches('/')))
        })
}
