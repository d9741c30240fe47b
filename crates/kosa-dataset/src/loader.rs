//! Dataset loaders for downstream consumers.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use kosa_core::{CorpusDataset, DocumentRecords};

use crate::error::Result;

/// One blank-line-separated sequence of a CoNLL file: parallel token and
/// label vectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledSequence {
    /// Tokens in order.
    pub tokens: Vec<String>,
    /// One label per token.
    pub labels: Vec<String>,
}

impl LabeledSequence {
    /// Create a sequence from parallel vectors.
    pub fn new(tokens: Vec<String>, labels: Vec<String>) -> Self {
        Self { tokens, labels }
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Is the sequence empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Load a JSON Lines dataset written by [`crate::writer::write_jsonl`].
///
/// # Errors
///
/// Returns [`crate::DatasetError::Io`] on read failure and
/// [`crate::DatasetError::Json`] on a malformed line.
pub fn load_jsonl<P: AsRef<Path>>(path: P) -> Result<CorpusDataset> {
    let reader = BufReader::new(File::open(path)?);

    let mut documents = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let document: DocumentRecords = serde_json::from_str(&line)?;
        documents.push(document);
    }
    Ok(CorpusDataset { documents })
}

/// Load a CoNLL `token<TAB>label` file into blank-line-separated sequences.
///
/// Lines starting with `#` are ignored; lines without exactly one tab are
/// skipped.
///
/// # Errors
///
/// Returns [`crate::DatasetError::Io`] on read failure.
pub fn load_conll<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledSequence>> {
    let reader = BufReader::new(File::open(path)?);

    let mut sequences = Vec::new();
    let mut tokens = Vec::new();
    let mut labels = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            if !tokens.is_empty() {
                sequences.push(LabeledSequence::new(
                    std::mem::take(&mut tokens),
                    std::mem::take(&mut labels),
                ));
            }
            continue;
        }

        if line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() == 2 {
            tokens.push(parts[0].to_string());
            labels.push(parts[1].to_string());
        }
    }

    // Don't forget the last sequence
    if !tokens.is_empty() {
        sequences.push(LabeledSequence::new(tokens, labels));
    }

    Ok(sequences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::{write_dataset, write_jsonl};
    use crate::DatasetFormat;
    use kosa_core::{LabeledRecord, OUTSIDE_LABEL};
    use std::io::Write as _;

    #[test]
    fn conll_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("data.tsv");

        let dataset = CorpusDataset {
            documents: vec![DocumentRecords {
                id: "doc".into(),
                records: vec![
                    LabeledRecord::new("Jan", "subst", "persName"),
                    LabeledRecord::new("idzie", "fin", OUTSIDE_LABEL),
                ],
                sentences: vec!["Jan idzie".into()],
            }],
        };
        write_dataset(&dataset, &path, DatasetFormat::Conll).unwrap();

        let sequences = load_conll(&path).unwrap();
        assert_eq!(sequences.len(), 1);
        assert_eq!(sequences[0].tokens, vec!["Jan", "idzie"]);
        assert_eq!(sequences[0].labels, vec!["persName", "O"]);
    }

    #[test]
    fn conll_skips_comments_and_bad_lines() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("data.tsv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "# exported corpus").unwrap();
        writeln!(file, "Jan\tpersName").unwrap();
        writeln!(file, "not a record line").unwrap();
        writeln!(file, "idzie\tO").unwrap();
        writeln!(file).unwrap();
        drop(file);

        let sequences = load_conll(&path).unwrap();
        assert_eq!(sequences.len(), 1);
        assert_eq!(sequences[0].len(), 2);
    }

    #[test]
    fn jsonl_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("data.jsonl");

        let dataset = CorpusDataset {
            documents: vec![DocumentRecords {
                id: "doc".into(),
                records: vec![LabeledRecord::new("Jan", "subst", "persName")],
                sentences: vec!["Jan idzie.".into()],
            }],
        };

        let mut out = Vec::new();
        write_jsonl(&dataset, &mut out).unwrap();
        std::fs::write(&path, out).unwrap();

        let back = load_jsonl(&path).unwrap();
        assert_eq!(back, dataset);
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            load_conll("/nonexistent/data.tsv"),
            Err(crate::DatasetError::Io(_))
        ));
    }
}
