//! # Document Assembler
//!
//! Joins the token and named-entity layers of one document into labeled
//! records. Mentions are flattened to individual words and tokens are
//! labeled by literal word equality, first match in mention order, NOT by
//! character-span alignment. Matching by word equality reproduces the
//! labeling semantics of the corpus pipeline this engine replaces; a token
//! whose surface form never appears among mention words stays outside.

use std::collections::HashMap;

use crate::types::{EntityMention, LabeledRecord, OUTSIDE_LABEL, Token};

/// Flatten mentions into (word, category) pairs, preserving mention order.
///
/// A multi-word mention contributes one pair per constituent word, each
/// carrying the mention's category.
pub fn mention_words(mentions: &[EntityMention]) -> Vec<(String, String)> {
    let mut words = Vec::new();
    for mention in mentions {
        for word in mention.words() {
            words.push((word.to_string(), mention.category.clone()));
        }
    }
    words
}

/// Label each token with the category of the first mention word equal to
/// its surface form, defaulting to [`OUTSIDE_LABEL`].
///
/// Lookup goes through a first-insertion index, so when several mentions
/// share a word the earliest mention in scan order wins, independent of
/// token order.
pub fn label_tokens(tokens: &[Token], mentions: &[EntityMention]) -> Vec<LabeledRecord> {
    let flattened = mention_words(mentions);
    let mut first_match: HashMap<&str, &str> = HashMap::new();
    for (word, category) in &flattened {
        first_match.entry(word.as_str()).or_insert(category.as_str());
    }

    tokens
        .iter()
        .map(|token| {
            let label = first_match
                .get(token.orth.as_str())
                .copied()
                .unwrap_or(OUTSIDE_LABEL);
            LabeledRecord::new(&token.orth, &token.ctag, label)
        })
        .collect()
}
