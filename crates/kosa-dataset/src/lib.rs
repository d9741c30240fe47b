//! # Kosa Dataset
//!
//! Serialization of extracted corpora and the matching loaders. Two formats
//! derive from the same labeled-record stream:
//!
//! - **JSON Lines** (canonical): one document object per line, preserving
//!   the full (orth, ctag, label) triples and the resolved sentences.
//! - **CoNLL**: flat `token<TAB>label` lines with a blank line between
//!   sentences, boundaries derived from the resolved sentences' word counts.
pub mod error;
pub mod format;
pub mod loader;
pub mod writer;

// Re-export primary API
pub use error::{DatasetError, Result};
pub use format::DatasetFormat;
pub use loader::{LabeledSequence, load_conll, load_jsonl};
pub use writer::{DatasetWriter, write_conll, write_dataset, write_jsonl};
