use std::fmt;
use std::str::FromStr;

use crate::error::{DatasetError, Result};

/// Persisted dataset formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    /// One JSON object per document, full triples plus sentences (canonical).
    Jsonl,
    /// Flat `token<TAB>label` lines, blank line between sentences.
    Conll,
}

impl FromStr for DatasetFormat {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "jsonl" => Ok(Self::Jsonl),
            "conll" | "tsv" => Ok(Self::Conll),
            other => Err(DatasetError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for DatasetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jsonl => write!(f, "jsonl"),
            Self::Conll => write!(f, "conll"),
        }
    }
}
