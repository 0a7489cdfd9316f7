// src/bookmarks/extract.rs
// =============================================================================
// This module pulls links out of an exported bookmarks file.
//
// Chrome and Firefox both export bookmarks in the old Netscape HTML format:
//   <DT><A HREF="https://www.rust-lang.org/" ADD_DATE="...">Rust</A>
//
// We don't need a full HTML parser for that. A single regex finds every
// anchor; the href becomes the URL and the anchor text becomes the label.
// Anchors are returned in document order and duplicates are kept.
// =============================================================================

use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use crate::checker::LinkEntry;

// (?i) case-insensitive, (?s) '.' also matches newlines, .*? stops at the
// first closing tag so neighbouring anchors stay separate
static ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a\s[^>]*href="([^"]*)"[^>]*>(.*?)</a>"#)
        .expect("anchor pattern is a valid regex")
});

/// Reads a bookmarks export from disk
pub fn read_bookmarks(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("{} cannot be found or cannot be read", path.display()))
}

/// Extracts every `<a href="...">label</a>` from the HTML
pub fn extract_links(html: &str) -> Vec<LinkEntry> {
    ANCHOR
        .captures_iter(html)
        .map(|caps| LinkEntry::new(&caps[1], collapse_whitespace(&caps[2])))
        .collect()
}

// Anchor text can wrap across lines in the export; keep it on one
fn collapse_whitespace(label: &str) -> String {
    label.split_whitespace().collect::<Vec<_>>().join(" ")
}
