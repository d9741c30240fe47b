use thiserror::Error;

/// Errors that can occur during corpus extraction.
#[derive(Debug, Error)]
pub enum KosaError {
    /// Temp-file creation, write, or cleanup failed, or a source file
    /// could not be read.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// A sanitizer pattern failed to compile (should not happen with the
    /// default namespace prefix).
    #[error("regex compilation error: {0}")]
    Regex(#[from] regex::Error),

    /// The XML stream is syntactically malformed.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// An element attribute could not be decoded.
    #[error("malformed XML attribute: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    /// The document is structurally broken, e.g. truncated inside an element.
    #[error("malformed document: {0}")]
    Malformed(String),

    /// A sentence reference points at an unknown segment id or an
    /// out-of-range slice of the segment text.
    #[error("unresolvable reference {reference:?}: {reason}")]
    Reference {
        /// The offending correspondence reference, as read from the file.
        reference: String,
        /// Why it could not be resolved.
        reason: String,
    },

    /// An unknown extraction mode was requested.
    #[error("unknown extraction mode: {0:?}")]
    UnknownMode(String),
}

impl KosaError {
    /// Shorthand for a [`KosaError::Reference`] with an owned reference string.
    pub(crate) fn reference(reference: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Reference {
            reference: reference.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for corpus extraction operations.
pub type Result<T> = std::result::Result<T, KosaError>;
