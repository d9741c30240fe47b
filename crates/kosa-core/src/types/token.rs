use serde::{Deserialize, Serialize};

/// One morphosyntactic token: surface form plus grammatical tag.
///
/// `interp` marks pure punctuation (the corpus `Interp` class); flagged
/// tokens are excluded from extraction results before labeling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface form, as written in the text.
    pub orth: String,
    /// Grammatical tag (e.g. `subst`, `fin`).
    pub ctag: String,
    /// Interpunction flag.
    pub interp: bool,
}

impl Token {
    /// Create a non-interpunction token.
    pub fn new(orth: impl Into<String>, ctag: impl Into<String>) -> Self {
        Self {
            orth: orth.into(),
            ctag: ctag.into(),
            interp: false,
        }
    }
}

/// One named-entity mention: surface text plus entity category.
///
/// The surface text may span several words ("Nowy Jork"); alignment against
/// tokens happens word by word, each constituent word inheriting the
/// mention's category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMention {
    /// Mention surface text, possibly multi-word.
    pub text: String,
    /// Entity category (e.g. `persName`, `placeName`).
    pub category: String,
}

impl EntityMention {
    /// Create a mention.
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }

    /// Constituent words of the mention text, in order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }
}
