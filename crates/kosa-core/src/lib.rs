//! # Kosa Core
//!
//! Streaming extraction engine for NKJP-style annotated corpora. Reconciles
//! three per-document annotation layers (morphosyntactic tokens,
//! named-entity mentions, and offset-based sentence segmentation) into flat
//! (token, tag, label) sequences for sequence-labeling consumers.
//!
//! Annotation files are sanitized into fragment-parsable temp copies, then
//! stream-read with a tag-path reader that never materializes whole
//! documents. See [`walker::CorpusWalker`] for the top-level entry point.
//!
//! ## Quick Start
//!
//! ```no_run
//! use kosa_core::{CorpusConfig, CorpusWalker};
//!
//! let walker = CorpusWalker::new(CorpusConfig::new("corpus/")).unwrap();
//! let outcome = walker.walk().unwrap();
//!
//! println!(
//!     "{} documents, {} records",
//!     outcome.summary.documents,
//!     outcome.dataset.total_records()
//! );
//! ```
pub mod assemble;
pub mod config;
pub mod document;
pub mod error;
pub mod sentences;
pub mod types;
pub mod walker;
pub mod xml;

// Re-export primary API
pub use assemble::{label_tokens, mention_words};
pub use config::CorpusConfig;
pub use document::{DocumentReader, ExtractionMode};
pub use error::{KosaError, Result};
pub use sentences::{SegmentMap, prune_alternates, resolve_sentence};
pub use types::{
    CorpusDataset, DocumentRecords, EntityMention, LabeledRecord, OUTSIDE_LABEL, SpanRef, Token,
};
pub use walker::{CorpusWalker, SkippedDocument, WalkOutcome, WalkSummary};
pub use xml::{Element, SanitizedXml, Sanitizer, TagPath, TagPathReader};
