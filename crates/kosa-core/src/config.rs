//! Corpus layout configuration.
//!
//! An NKJP-style corpus is a directory tree in which every document is a
//! subdirectory holding a handful of cross-referenced annotation files. The
//! file names and the namespace prefix are fixed by the corpus distribution,
//! but both vary between corpus versions, so they live in an explicit
//! configuration value instead of module-level constants.

use std::path::PathBuf;

/// Configuration for reading one corpus tree.
///
/// Passed explicitly to [`crate::walker::CorpusWalker`] and
/// [`crate::document::DocumentReader`]; there is no process-wide corpus state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusConfig {
    /// Corpus root directory.
    pub root: PathBuf,
    /// File marking a directory as a document (used only for discovery).
    pub header_file: String,
    /// Morphosyntactic token annotation file (optional per document).
    pub words_file: String,
    /// Named-entity annotation file (optional per document).
    pub named_file: String,
    /// Raw text file, holding the per-segment character data.
    pub text_file: String,
    /// Sentence segmentation file, referencing the raw text by offsets.
    pub segmentation_file: String,
    /// XML namespace prefix stripped by the sanitizer.
    pub namespace_prefix: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            header_file: "header.xml".into(),
            words_file: "ann_words.xml".into(),
            named_file: "ann_named.xml".into(),
            text_file: "text.xml".into(),
            segmentation_file: "ann_segmentation.xml".into(),
            namespace_prefix: "nkjp".into(),
        }
    }
}

impl CorpusConfig {
    /// Create a configuration for the given corpus root, with the standard
    /// NKJP file names.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Set the header file name used for document discovery.
    pub fn with_header_file(mut self, name: impl Into<String>) -> Self {
        self.header_file = name.into();
        self
    }

    /// Set the token annotation file name.
    pub fn with_words_file(mut self, name: impl Into<String>) -> Self {
        self.words_file = name.into();
        self
    }

    /// Set the named-entity annotation file name.
    pub fn with_named_file(mut self, name: impl Into<String>) -> Self {
        self.named_file = name.into();
        self
    }

    /// Set the raw text file name.
    pub fn with_text_file(mut self, name: impl Into<String>) -> Self {
        self.text_file = name.into();
        self
    }

    /// Set the segmentation file name.
    pub fn with_segmentation_file(mut self, name: impl Into<String>) -> Self {
        self.segmentation_file = name.into();
        self
    }

    /// Set the namespace prefix the sanitizer strips.
    pub fn with_namespace_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.namespace_prefix = prefix.into();
        self
    }
}
