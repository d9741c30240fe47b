use serde::{Deserialize, Serialize};

/// Sentinel label for tokens not covered by any named-entity mention.
pub const OUTSIDE_LABEL: &str = "O";

/// The unit of the persisted dataset: one token with its grammatical tag
/// and its entity label (an entity category or [`OUTSIDE_LABEL`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledRecord {
    /// Token surface form.
    pub orth: String,
    /// Grammatical tag.
    pub ctag: String,
    /// Entity label.
    pub label: String,
}

impl LabeledRecord {
    /// Create a record.
    pub fn new(
        orth: impl Into<String>,
        ctag: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            orth: orth.into(),
            ctag: ctag.into(),
            label: label.into(),
        }
    }

    /// Is this token outside every entity mention?
    #[must_use]
    pub fn is_outside(&self) -> bool {
        self.label == OUTSIDE_LABEL
    }
}

/// One document's labeled records, in original document order, together with
/// the literal sentences resolved from the segmentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecords {
    /// Root-relative document id.
    pub id: String,
    /// Labeled records, one per retained token.
    pub records: Vec<LabeledRecord>,
    /// Resolved sentence strings (empty when segmentation is absent).
    pub sentences: Vec<String>,
}

/// The aggregate extraction result: an ordered sequence of per-document
/// record sequences. Documents with zero records are never included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusDataset {
    /// Per-document record sequences, in discovery order.
    pub documents: Vec<DocumentRecords>,
}

impl CorpusDataset {
    /// Number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Is the dataset empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Total number of labeled records across all documents.
    #[must_use]
    pub fn total_records(&self) -> usize {
        self.documents.iter().map(|d| d.records.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outside_check() {
        assert!(LabeledRecord::new("idzie", "fin", OUTSIDE_LABEL).is_outside());
        assert!(!LabeledRecord::new("Jan", "subst", "persName").is_outside());
    }

    #[test]
    fn dataset_counts() {
        let mut dataset = CorpusDataset::default();
        assert!(dataset.is_empty());

        dataset.documents.push(DocumentRecords {
            id: "doc-a".into(),
            records: vec![
                LabeledRecord::new("Jan", "subst", "persName"),
                LabeledRecord::new("idzie", "fin", OUTSIDE_LABEL),
            ],
            sentences: vec!["Jan idzie".into()],
        });

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.total_records(), 2);
    }

    #[test]
    fn record_serialization_roundtrip() {
        let record = LabeledRecord::new("Kowalski", "subst", "persName");
        let json = serde_json::to_string(&record).unwrap();
        let back: LabeledRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
