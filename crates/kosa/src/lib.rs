//! # Kosa
//!
//! Facade crate bundling the extraction engine ([`kosa_core`]) and the
//! dataset serialization layer ([`kosa_dataset`]).
//!
//! ```no_run
//! use kosa::{CorpusConfig, CorpusWalker, DatasetFormat, write_dataset};
//! use std::path::Path;
//!
//! let walker = CorpusWalker::new(CorpusConfig::new("corpus/")).unwrap();
//! let outcome = walker.walk().unwrap();
//! write_dataset(&outcome.dataset, Path::new("dataset.jsonl"), DatasetFormat::Jsonl).unwrap();
//! ```

pub use kosa_core::{
    CorpusConfig, CorpusDataset, CorpusWalker, DocumentReader, DocumentRecords, Element,
    EntityMention, ExtractionMode, KosaError, LabeledRecord, OUTSIDE_LABEL, SanitizedXml,
    Sanitizer, SegmentMap, SkippedDocument, SpanRef, TagPath, TagPathReader, Token, WalkOutcome,
    WalkSummary, label_tokens, mention_words, prune_alternates, resolve_sentence,
};
pub use kosa_dataset::{
    DatasetError, DatasetFormat, DatasetWriter, LabeledSequence, load_conll, load_jsonl,
    write_conll, write_dataset, write_jsonl,
};
