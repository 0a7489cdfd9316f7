// src/checker/batch.rs
// =============================================================================
// Splits the full link list into fixed-size, contiguous batches.
//
// Batch k holds entries [k*size, min((k+1)*size, len)). Order is preserved
// and every entry lands in exactly one batch. An empty list gives no batches.
// =============================================================================

use std::num::NonZeroUsize;

use super::types::LinkEntry;

/// Partitions `links` into batches of at most `size` entries
pub fn split(links: Vec<LinkEntry>, size: NonZeroUsize) -> Vec<Vec<LinkEntry>> {
    let size = size.get();
    let mut batches = Vec::with_capacity(links.len().div_ceil(size));
    let mut rest = links.into_iter().peekable();

    while rest.peek().is_some() {
        batches.push(rest.by_ref().take(size).collect());
    }

    batches
}
