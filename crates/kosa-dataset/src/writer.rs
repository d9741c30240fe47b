//! Dataset writers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use kosa_core::{CorpusDataset, DocumentRecords};

use crate::error::Result;
use crate::format::DatasetFormat;

/// Streaming dataset writer: documents go out as they arrive, so corpus
/// walks can serialize without holding the aggregate in memory.
#[derive(Debug)]
pub struct DatasetWriter<W: Write> {
    inner: W,
    format: DatasetFormat,
    documents: usize,
}

impl DatasetWriter<BufWriter<File>> {
    /// Create the output file and a writer over it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DatasetError::Io`] if the file cannot be created.
    pub fn create(path: &Path, format: DatasetFormat) -> Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?), format))
    }
}

impl<W: Write> DatasetWriter<W> {
    /// Wrap an arbitrary sink.
    pub fn new(inner: W, format: DatasetFormat) -> Self {
        Self {
            inner,
            format,
            documents: 0,
        }
    }

    /// Append one document.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DatasetError::Io`] on write failure and
    /// [`crate::DatasetError::Json`] if a JSONL record cannot be encoded.
    pub fn write_document(&mut self, document: &DocumentRecords) -> Result<()> {
        match self.format {
            DatasetFormat::Jsonl => {
                let line = serde_json::to_string(document)?;
                writeln!(self.inner, "{line}")?;
            }
            DatasetFormat::Conll => write_conll_document(document, &mut self.inner)?,
        }
        self.documents += 1;
        Ok(())
    }

    /// Flush and hand the sink back.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DatasetError::Io`] on flush failure.
    pub fn finish(mut self) -> Result<W> {
        self.inner.flush()?;
        debug!("wrote {} documents", self.documents);
        Ok(self.inner)
    }
}

/// Write the dataset to `path` in the given format.
///
/// # Errors
///
/// Returns [`crate::DatasetError::Io`] on write failure and
/// [`crate::DatasetError::Json`] if a JSONL record cannot be encoded.
pub fn write_dataset(dataset: &CorpusDataset, path: &Path, format: DatasetFormat) -> Result<()> {
    let mut writer = DatasetWriter::create(path, format)?;
    for document in &dataset.documents {
        writer.write_document(document)?;
    }
    writer.finish()?;
    Ok(())
}

/// Write one JSON object per document: id, records, sentences.
pub fn write_jsonl<W: Write>(dataset: &CorpusDataset, writer: &mut W) -> Result<()> {
    let mut sink = DatasetWriter::new(writer, DatasetFormat::Jsonl);
    for document in &dataset.documents {
        sink.write_document(document)?;
    }
    sink.finish()?;
    Ok(())
}

/// Write flat `token<TAB>label` lines with a blank line between sentences.
///
/// Sentence boundaries are derived from the resolved sentences' whitespace
/// word counts. Records past the counted sentences, and all records of a
/// document without resolved sentences, are flushed as one final run.
pub fn write_conll<W: Write>(dataset: &CorpusDataset, writer: &mut W) -> Result<()> {
    let mut sink = DatasetWriter::new(writer, DatasetFormat::Conll);
    for document in &dataset.documents {
        sink.write_document(document)?;
    }
    sink.finish()?;
    Ok(())
}

fn write_conll_document<W: Write>(document: &DocumentRecords, writer: &mut W) -> Result<()> {
    let mut records = document.records.iter();

    for sentence in &document.sentences {
        let count = sentence.split_whitespace().count();
        if count == 0 {
            continue;
        }
        let mut written = 0;
        for record in records.by_ref().take(count) {
            writeln!(writer, "{}\t{}", record.orth, record.label)?;
            written += 1;
        }
        if written > 0 {
            writeln!(writer)?;
        }
        if written < count {
            // Sentence lengths outran the record stream; nothing left.
            return Ok(());
        }
    }

    let mut written = 0;
    for record in records {
        writeln!(writer, "{}\t{}", record.orth, record.label)?;
        written += 1;
    }
    if written > 0 {
        writeln!(writer)?;
    }
    Ok(())
}
