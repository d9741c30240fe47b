//! # Sentence resolution
//!
//! The segmentation layer does not carry sentence text. Each sentence is a
//! list of correspondence references pointing into the raw text layer by
//! (segment id, begin offset, length); resolving a sentence means pruning
//! alternative readings and slicing the referenced segment between the first
//! and last surviving reference.
//!
//! Offsets are *character* offsets, matching the corpus convention. Slicing
//! therefore goes through [`char_indices`](str::char_indices) rather than
//! byte ranges; Polish text makes the distinction matter on nearly every
//! sentence.

use std::collections::HashMap;

use crate::error::{KosaError, Result};
use crate::types::SpanRef;

/// Per-document map from segment id to raw block text.
///
/// Also keeps the single-space-joined concatenation of all block texts in
/// document order, the whole-document text view.
#[derive(Debug, Clone, Default)]
pub struct SegmentMap {
    texts: HashMap<String, String>,
    joined: String,
}

impl SegmentMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one text block under its segment id.
    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) {
        let text = text.into();
        if !self.joined.is_empty() {
            self.joined.push(' ');
        }
        self.joined.push_str(&text);
        self.texts.insert(id.into(), text);
    }

    /// Raw text of one segment.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.texts.get(id).map(String::as_str)
    }

    /// All block texts joined with single spaces, in insertion order.
    pub fn joined(&self) -> &str {
        &self.joined
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Is the map empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

/// Remove overlapping alternative readings from a sentence's reference list.
///
/// The sanitizer flattens `choice` wrappers, so alternates for the same span
/// arrive as consecutive references. A reference survives when its begin
/// offset is at or after the end of the previously *kept* reference, or when
/// it points into a different segment than the previously *examined* one;
/// the first alternative in textual order wins.
pub fn prune_alternates(refs: &[SpanRef]) -> Vec<SpanRef> {
    let mut kept: Vec<SpanRef> = Vec::new();
    let mut kept_end: Option<usize> = None;
    let mut prev_segment: Option<&str> = None;

    for span in refs {
        let past_kept = kept_end.is_none_or(|end| span.begin >= end);
        let segment_changed = prev_segment.is_some_and(|seg| seg != span.segment);
        if past_kept || segment_changed {
            kept_end = Some(span.end());
            kept.push(span.clone());
        }
        prev_segment = Some(&span.segment);
    }

    kept
}

/// Resolve a pruned reference list to the literal sentence string.
///
/// The sentence spans from the first reference's begin offset to the last
/// reference's end offset within the first reference's segment.
///
/// # Errors
///
/// Returns [`KosaError::Reference`] when the list is empty, the segment id
/// is unknown, or the offsets fall outside the segment text.
pub fn resolve_sentence(refs: &[SpanRef], segments: &SegmentMap) -> Result<String> {
    let first = refs
        .first()
        .ok_or_else(|| KosaError::reference("<empty>", "sentence has no references"))?;
    let last = refs.last().unwrap_or(first);

    let text = segments.get(&first.segment).ok_or_else(|| {
        KosaError::reference(first.to_string(), "unknown segment id")
    })?;

    slice_chars(text, first.begin, last.end())
        .ok_or_else(|| KosaError::reference(first.to_string(), "offsets out of range"))
}

/// Character-offset slice of `text`, `None` when out of range.
fn slice_chars(text: &str, start: usize, end: usize) -> Option<String> {
    if end < start {
        return None;
    }
    let mut indices = text.char_indices().map(|(i, _)| i);
    let byte_start = indices.nth(start)?;
    let byte_end = if end == start {
        byte_start
    } else {
        // nth consumed `start + 1` positions; end is exclusive, so the end
        // boundary is either a later char start or the end of the string.
        match text[byte_start..].char_indices().map(|(i, _)| i).nth(end - start) {
            Some(offset) => byte_start + offset,
            None => {
                if text[byte_start..].chars().count() == end - start {
                    text.len()
                } else {
                    return None;
                }
            }
        }
    };
    Some(text[byte_start..byte_end].to_string())
}
