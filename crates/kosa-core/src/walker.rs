//! # Corpus Walker
//!
//! Enumerates documents under a corpus root, runs the per-layer extractors
//! and the assembler on each, and accumulates the aggregate dataset. A
//! document that fails to extract is logged and skipped; the walk itself
//! never aborts on per-document errors.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::assemble::label_tokens;
use crate::config::CorpusConfig;
use crate::document::DocumentReader;
use crate::error::{KosaError, Result};
use crate::types::{CorpusDataset, DocumentRecords};

/// A document the walk gave up on, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDocument {
    /// Root-relative document id.
    pub id: String,
    /// Rendered extraction error.
    pub reason: String,
}

/// Completion report of one corpus walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Documents successfully processed (including empty ones).
    pub documents: usize,
    /// Labeled records extracted in total.
    pub records: usize,
    /// Documents skipped because extraction failed.
    pub skipped: Vec<SkippedDocument>,
}

/// Dataset plus completion report.
#[derive(Debug, Clone)]
pub struct WalkOutcome {
    /// The aggregate dataset (empty documents omitted).
    pub dataset: CorpusDataset,
    /// Counts and skip reasons.
    pub summary: WalkSummary,
}

/// Walks a corpus root and extracts every document.
pub struct CorpusWalker {
    config: CorpusConfig,
    reader: DocumentReader,
}

impl CorpusWalker {
    /// Construct a walker for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::KosaError::Regex`] if the sanitizer cannot be built
    /// for the configured namespace prefix.
    pub fn new(config: CorpusConfig) -> Result<Self> {
        let reader = DocumentReader::new(config.clone())?;
        Ok(Self { config, reader })
    }

    /// The per-document reader backing this walker.
    pub fn reader(&self) -> &DocumentReader {
        &self.reader
    }

    /// Discover document ids: root-relative paths of every directory that
    /// contains the header file, sorted for a deterministic walk order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::KosaError::Io`] if the root cannot be read.
    pub fn document_ids(&self) -> Result<Vec<String>> {
        let mut ids = Vec::new();
        collect_document_dirs(
            &self.config.root,
            &self.config.root,
            &self.config.header_file,
            &mut ids,
        )?;
        ids.sort();
        Ok(ids)
    }

    /// Extract one document's labeled records and sentences.
    ///
    /// # Errors
    ///
    /// Any layer's extraction error is surfaced unchanged; the caller (the
    /// walk loop, usually) decides whether to skip or abort.
    pub fn extract_document(&self, id: &str) -> Result<DocumentRecords> {
        let dir = self.config.root.join(id);
        let tokens = self.reader.words(&dir)?;
        let mentions = self.reader.named_entities(&dir)?;
        let sentences = self.reader.sentences(&dir)?;
        let records = label_tokens(&tokens, &mentions);
        Ok(DocumentRecords {
            id: id.to_string(),
            records,
            sentences,
        })
    }

    /// Visit every discovered document without accumulating the aggregate,
    /// so callers can serialize document by document and keep memory bounded
    /// by one document instead of the whole corpus.
    ///
    /// Per-document extraction failures are logged and recorded in the
    /// summary, not propagated; the walk never aborts on them. Documents
    /// with zero records are counted as processed but never passed to the
    /// visitor, so consumers always see non-empty sequences. A visitor
    /// error aborts the walk and is propagated as-is.
    ///
    /// # Errors
    ///
    /// Returns an error when document discovery fails or the visitor does.
    pub fn for_each_document<E: From<KosaError>>(
        &self,
        mut visit: impl FnMut(DocumentRecords) -> std::result::Result<(), E>,
    ) -> std::result::Result<WalkSummary, E> {
        let mut summary = WalkSummary::default();

        for id in self.document_ids()? {
            match self.extract_document(&id) {
                Ok(document) => {
                    info!("{}: {} records", document.id, document.records.len());
                    summary.documents += 1;
                    if document.records.is_empty() {
                        debug!("{id}: no records, omitted from dataset");
                    } else {
                        summary.records += document.records.len();
                        visit(document)?;
                    }
                }
                Err(err) => {
                    warn!("skipping {id}: {err}");
                    summary.skipped.push(SkippedDocument {
                        id,
                        reason: err.to_string(),
                    });
                }
            }
        }

        info!(
            "walk complete: {} documents, {} records, {} skipped",
            summary.documents,
            summary.records,
            summary.skipped.len()
        );
        Ok(summary)
    }

    /// Walk every discovered document and accumulate the dataset in memory.
    ///
    /// Same skip and omission semantics as [`for_each_document`]; memory is
    /// bounded by the full corpus, which is fine for corpora that fit and
    /// avoided by streaming callers.
    ///
    /// # Errors
    ///
    /// Returns an error only when document discovery itself fails.
    ///
    /// [`for_each_document`]: CorpusWalker::for_each_document
    pub fn walk(&self) -> Result<WalkOutcome> {
        let mut dataset = CorpusDataset::default();
        let summary = self.for_each_document::<KosaError>(|document| {
            dataset.documents.push(document);
            Ok(())
        })?;
        Ok(WalkOutcome { dataset, summary })
    }
}

fn collect_document_dirs(
    root: &Path,
    dir: &Path,
    header_file: &str,
    ids: &mut Vec<String>,
) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if path.join(header_file).is_file() {
            let id = path
                .strip_prefix(root)
                .unwrap_or(&path)
                .to_string_lossy()
                .into_owned();
            ids.push(id);
        } else {
            collect_document_dirs(root, &path, header_file, ids)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const WORDS_XML: &str = r#"<?xml version="1.0"?>
<body><p><s>
 <seg><fs type="morph">
  <f name="orth"><string>Jan</string></f>
  <f name="ctag"><symbol value="subst"/></f>
 </fs></seg>
</s></p></body>
"#;

    fn corpus_with(docs: &[(&str, &[(&str, &str)])]) -> tempfile::TempDir {
        let tmp = tempfile::tempdir().unwrap();
        for (id, files) in docs {
            let dir = tmp.path().join(id);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("header.xml"), "<teiHeader/>\n").unwrap();
            for (name, content) in *files {
                fs::write(dir.join(name), content).unwrap();
            }
        }
        tmp
    }

    fn walker(root: &Path) -> CorpusWalker {
        CorpusWalker::new(CorpusConfig::new(root)).unwrap()
    }

    #[test]
    fn discovers_header_marked_directories() {
        let tmp = corpus_with(&[("DocB", &[]), ("DocA", &[]), ("nested/DocC", &[])]);
        fs::create_dir(tmp.path().join("no-header")).unwrap();

        let ids = walker(tmp.path()).document_ids().unwrap();
        assert_eq!(ids, vec!["DocA", "DocB", "nested/DocC"]);
    }

    #[test]
    fn walk_omits_documents_without_records() {
        let tmp = corpus_with(&[
            ("WithTokens", &[("ann_words.xml", WORDS_XML)]),
            ("NoTokens", &[]),
        ]);

        let outcome = walker(tmp.path()).walk().unwrap();
        assert_eq!(outcome.summary.documents, 2);
        assert_eq!(outcome.dataset.len(), 1);
        assert_eq!(outcome.dataset.documents[0].id, "WithTokens");
        assert_eq!(outcome.summary.records, 1);
        assert!(outcome.summary.skipped.is_empty());
    }

    #[test]
    fn walk_skips_and_reports_malformed_documents() {
        let tmp = corpus_with(&[
            ("Broken", &[("ann_words.xml", "<body><seg><fs>")]),
            ("Good", &[("ann_words.xml", WORDS_XML)]),
        ]);

        let outcome = walker(tmp.path()).walk().unwrap();
        assert_eq!(outcome.dataset.len(), 1);
        assert_eq!(outcome.summary.skipped.len(), 1);
        assert_eq!(outcome.summary.skipped[0].id, "Broken");
        assert!(!outcome.summary.skipped[0].reason.is_empty());
    }

    #[test]
    fn for_each_document_streams_without_accumulating() {
        let tmp = corpus_with(&[
            ("One", &[("ann_words.xml", WORDS_XML)]),
            ("Two", &[("ann_words.xml", WORDS_XML)]),
        ]);

        let mut seen = Vec::new();
        let summary = walker(tmp.path())
            .for_each_document::<crate::KosaError>(|doc| {
                seen.push(doc.id);
                Ok(())
            })
            .unwrap();

        assert_eq!(seen, vec!["One", "Two"]);
        assert_eq!(summary.records, 2);
    }

    #[test]
    fn visitor_error_aborts_walk() {
        let tmp = corpus_with(&[
            ("One", &[("ann_words.xml", WORDS_XML)]),
            ("Two", &[("ann_words.xml", WORDS_XML)]),
        ]);

        let mut visits = 0;
        let result = walker(tmp.path()).for_each_document::<crate::KosaError>(|_| {
            visits += 1;
            Err(crate::KosaError::Malformed("sink failed".into()))
        });

        assert!(result.is_err());
        assert_eq!(visits, 1);
    }

    #[test]
    fn missing_root_is_io_error() {
        let walker = CorpusWalker::new(CorpusConfig::new("/nonexistent/corpus")).unwrap();
        assert!(walker.document_ids().is_err());
    }
}
