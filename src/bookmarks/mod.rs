// src/bookmarks/mod.rs
// =============================================================================
// This module turns a bookmarks export into the list of links to check.
//
// It sits outside the checking core: the core only ever sees an ordered
// Vec<LinkEntry>, it doesn't care where the links came from.
// =============================================================================

mod extract;

pub use extract::{extract_links, read_bookmarks};
