//! # XML Namespace Sanitizer
//!
//! NKJP annotation files declare a corpus-specific namespace whose prefixed
//! tokens make short substrings of the document invalid as standalone XML
//! fragments. The sanitizer rewrites a raw annotation file into a temporary
//! self-contained copy with those tokens removed, so the streaming reader can
//! parse matched fragments without resolving the namespace.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use regex::Regex;
use tempfile::NamedTempFile;

use crate::error::Result;

/// A sanitized copy of an annotation file, backed by a named temp file.
///
/// The temp file is deleted when this value is dropped, on success and
/// failure paths alike. Keep it alive for as long as the streaming read
/// loop runs.
#[derive(Debug)]
pub struct SanitizedXml {
    file: NamedTempFile,
}

impl SanitizedXml {
    /// Path of the sanitized copy.
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// Rewrites raw annotation files into fragment-parsable temp copies.
///
/// Removal happens line by line, so arbitrarily large files are processed
/// in bounded memory. Each namespace-prefixed token (the prefix up to the
/// next space) and each marker tag is replaced with a single space; the
/// token pattern is applied before the marker literals, matching the
/// reference preprocessing order.
#[derive(Debug)]
pub struct Sanitizer {
    ns_token: Regex,
    markers: [String; 4],
}

impl Sanitizer {
    /// Construct a sanitizer for the given namespace prefix.
    ///
    /// # Errors
    ///
    /// Returns [`crate::KosaError::Regex`] if the token pattern fails to
    /// compile (possible only with a prefix containing regex metacharacters
    /// that do not escape cleanly).
    pub fn new(prefix: &str) -> Result<Self> {
        let ns_token = Regex::new(&format!("{}:[^ ]* ", regex::escape(prefix)))?;
        let markers = [
            format!("<{prefix}:paren>"),
            format!("</{prefix}:paren>"),
            "<choice>".to_string(),
            "</choice>".to_string(),
        ];
        Ok(Self { ns_token, markers })
    }

    /// Rewrite `source` into a fresh temp file and return the handle owning it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::KosaError::Io`] if the source cannot be read or the
    /// temp file cannot be written; the partially written temp file is
    /// deleted before the error is surfaced.
    pub fn sanitize(&self, source: &Path) -> Result<SanitizedXml> {
        let mut reader = BufReader::new(File::open(source)?);
        let file = NamedTempFile::new()?;
        let mut writer = BufWriter::new(file.as_file());

        // Any early return drops `file`, which unlinks the partial output.
        let mut line = String::new();
        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            let cleaned = self.sanitize_line(&line);
            writer.write_all(cleaned.as_bytes())?;
        }
        writer.flush()?;
        drop(writer);

        Ok(SanitizedXml { file })
    }

    fn sanitize_line(&self, line: &str) -> String {
        let mut cleaned = self.ns_token.replace_all(line, " ").into_owned();
        for marker in &self.markers {
            cleaned = cleaned.replace(marker.as_str(), " ");
        }
        cleaned
    }
}
