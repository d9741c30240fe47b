use std::fmt;

use crate::error::{KosaError, Result};

/// One word reference inside a sentence-segmentation entry.
///
/// References are encoded as `segment(kind,begin,length)`: the segment id
/// before the opening parenthesis, then the reference kind, the character
/// begin offset, and the character length. Offsets index into the raw text
/// of the referenced segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanRef {
    /// Id of the text segment the offsets point into.
    pub segment: String,
    /// Reference kind tag (unused beyond parsing, kept for diagnostics).
    pub kind: String,
    /// Character begin offset.
    pub begin: usize,
    /// Character length.
    pub length: usize,
}

impl SpanRef {
    /// Parse the `segment(kind,begin,length)` encoding.
    ///
    /// # Errors
    ///
    /// Returns [`KosaError::Reference`] when the delimiters or the numeric
    /// fields do not match the encoding.
    pub fn parse(raw: &str) -> Result<Self> {
        let (segment, rest) = raw
            .split_once('(')
            .ok_or_else(|| KosaError::reference(raw, "missing '('"))?;
        let body = rest
            .split(')')
            .next()
            .unwrap_or(rest);

        let mut fields = body.split(',');
        let kind = fields
            .next()
            .ok_or_else(|| KosaError::reference(raw, "missing kind field"))?;
        let begin = fields
            .next()
            .ok_or_else(|| KosaError::reference(raw, "missing begin offset"))?;
        let length = fields
            .next()
            .ok_or_else(|| KosaError::reference(raw, "missing length"))?;

        let begin = begin
            .trim()
            .parse()
            .map_err(|_| KosaError::reference(raw, "begin offset is not a number"))?;
        let length = length
            .trim()
            .parse()
            .map_err(|_| KosaError::reference(raw, "length is not a number"))?;

        Ok(Self {
            segment: segment.to_string(),
            kind: kind.to_string(),
            begin,
            length,
        })
    }

    /// One past the last character of the referenced span.
    pub fn end(&self) -> usize {
        self.begin + self.length
    }
}

impl fmt::Display for SpanRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({},{},{})",
            self.segment, self.kind, self.begin, self.length
        )
    }
}
