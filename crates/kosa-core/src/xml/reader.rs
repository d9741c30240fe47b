//! # Streaming Tag-Path Reader
//!
//! An incremental pull reader over sanitized annotation files. It tracks the
//! stack of open element names, and whenever the stack matches a [`TagPath`]
//! it materializes that one element's subtree as an [`Element`] and yields
//! it. The document as a whole is never held in memory, which is what makes
//! multi-hundred-megabyte annotation files readable on small machines.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::element::Element;
use super::path::TagPath;
use crate::error::{KosaError, Result};

/// Elements pulled per block in [`TagPathReader::drain_with`].
const BLOCK_SIZE: usize = 64;

/// Streaming reader yielding elements whose ancestor path matches a pattern.
///
/// A reader is a finite lazy sequence over one open file: [`next_match`]
/// returns matched elements in document order and `None` at end of input;
/// [`read_block`] wraps the same cursor in block-sized pulls. Re-opening the
/// file restarts the sequence.
///
/// [`next_match`]: TagPathReader::next_match
/// [`read_block`]: TagPathReader::read_block
pub struct TagPathReader<R: BufRead> {
    reader: Reader<R>,
    path: TagPath,
    stack: Vec<String>,
    buf: Vec<u8>,
    finished: bool,
}

impl<R: BufRead> std::fmt::Debug for TagPathReader<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TagPathReader")
            .field("path", &self.path)
            .field("stack", &self.stack)
            .field("buf", &self.buf)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl TagPathReader<BufReader<File>> {
    /// Open a (sanitized) file for streaming.
    ///
    /// # Errors
    ///
    /// Returns [`KosaError::Xml`] if the file cannot be opened.
    pub fn open(path: &Path, pattern: TagPath) -> Result<Self> {
        let reader = Reader::from_file(path)?;
        Ok(Self::configure(reader, pattern))
    }
}

impl<R: BufRead> TagPathReader<R> {
    /// Stream from an arbitrary buffered reader.
    pub fn from_reader(inner: R, pattern: TagPath) -> Self {
        Self::configure(Reader::from_reader(inner), pattern)
    }

    fn configure(mut reader: Reader<R>, path: TagPath) -> Self {
        // Self-closed elements become Start/End pairs so subtree collection
        // has a single code path.
        reader.config_mut().expand_empty_elements = true;
        Self {
            reader,
            path,
            stack: Vec::new(),
            buf: Vec::new(),
            finished: false,
        }
    }

    /// Pull the next matching element, or `None` when the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`KosaError::Xml`] on malformed XML and
    /// [`KosaError::Malformed`] if the input ends with unclosed elements.
    pub fn next_match(&mut self) -> Result<Option<Element>> {
        if self.finished {
            return Ok(None);
        }
        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf) {
                Ok(Event::Start(ref start)) => {
                    let elem = element_from_start(start)?;
                    self.stack.push(elem.name.clone());
                    if self.path.matches(&self.stack) {
                        self.stack.pop();
                        let collected = self.collect(elem)?;
                        return Ok(Some(collected));
                    }
                }
                Ok(Event::End(_)) => {
                    self.stack.pop();
                }
                Ok(Event::Eof) => {
                    self.finished = true;
                    if !self.stack.is_empty() {
                        return Err(KosaError::Malformed(format!(
                            "unexpected end of input with <{}> still open",
                            self.stack.join("> <")
                        )));
                    }
                    return Ok(None);
                }
                Ok(_) => {}
                Err(e) => {
                    self.finished = true;
                    return Err(e.into());
                }
            }
        }
    }

    /// Pull up to `max` matching elements. An empty vector means the input
    /// is exhausted.
    pub fn read_block(&mut self, max: usize) -> Result<Vec<Element>> {
        let mut block = Vec::new();
        while block.len() < max {
            match self.next_match()? {
                Some(elem) => block.push(elem),
                None => break,
            }
        }
        Ok(block)
    }

    /// Drain the stream in blocks, applying `handler` to every matched
    /// element and collecting the records it produces. A handler returning
    /// `None` drops that element.
    pub fn drain_with<T>(
        &mut self,
        mut handler: impl FnMut(&Element) -> Option<T>,
    ) -> Result<Vec<T>> {
        let mut records = Vec::new();
        loop {
            let block = self.read_block(BLOCK_SIZE)?;
            if block.is_empty() {
                return Ok(records);
            }
            records.extend(block.iter().filter_map(&mut handler));
        }
    }

    /// Materialize the subtree of the element whose start tag was just read.
    fn collect(&mut self, root: Element) -> Result<Element> {
        let root_name = root.name.clone();
        let mut spine = vec![root];
        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf) {
                Ok(Event::Start(ref start)) => {
                    spine.push(element_from_start(start)?);
                }
                Ok(Event::Text(ref text)) => {
                    let unescaped = text.unescape()?;
                    if let Some(current) = spine.last_mut() {
                        current.text.push_str(&unescaped);
                    }
                }
                Ok(Event::CData(ref cdata)) => {
                    if let Some(current) = spine.last_mut() {
                        current.text.push_str(&String::from_utf8_lossy(cdata));
                    }
                }
                Ok(Event::End(_)) => {
                    let closed = spine.pop().ok_or_else(|| {
                        KosaError::Malformed(format!("unbalanced close inside <{root_name}>"))
                    })?;
                    match spine.last_mut() {
                        Some(parent) => parent.children.push(closed),
                        None => return Ok(closed),
                    }
                }
                Ok(Event::Eof) => {
                    self.finished = true;
                    return Err(KosaError::Malformed(format!(
                        "unexpected end of input inside <{root_name}>"
                    )));
                }
                Ok(_) => {}
                Err(e) => {
                    self.finished = true;
                    return Err(e.into());
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for TagPathReader<R> {
    type Item = Result<Element>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_match().transpose()
    }
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element> {
    let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
    let mut elem = Element::new(name);
    for attr in start.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        elem.attrs.push((key, value));
    }
    Ok(elem)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MORPH_SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<body>
  <p>
    <seg xml:id="seg-1">
      <fs type="morph">
        <f name="orth">
          <string>Jan</string>
        </f>
        <f name="ctag">
          <symbol value="subst"/>
        </f>
      </fs>
    </seg>
    <seg xml:id="seg-2">
      <fs type="morph">
        <f name="orth">
          <string>idzie</string>
        </f>
      </fs>
    </seg>
  </p>
</body>
"#;

    fn reader_over<'a>(input: &'a str, pattern: &str) -> TagPathReader<&'a [u8]> {
        TagPathReader::from_reader(input.as_bytes(), TagPath::parse(pattern))
    }

    #[test]
    fn yields_matching_elements_in_order() {
        let mut reader = reader_over(MORPH_SAMPLE, "seg/fs");

        let first = reader.next_match().unwrap().unwrap();
        assert_eq!(first.name, "fs");
        assert_eq!(first.attr("type"), Some("morph"));

        let second = reader.next_match().unwrap().unwrap();
        assert_eq!(second.name, "fs");

        assert!(reader.next_match().unwrap().is_none());
        // Exhausted readers keep reporting end of input.
        assert!(reader.next_match().unwrap().is_none());
    }

    #[test]
    fn materializes_subtree_with_text_and_attrs() {
        let mut reader = reader_over(MORPH_SAMPLE, "seg/fs");
        let fs = reader.next_match().unwrap().unwrap();

        let orth = fs
            .children
            .iter()
            .find(|f| f.attr("name") == Some("orth"))
            .unwrap();
        let string = orth.find_child("string").unwrap();
        assert_eq!(string.text, "Jan");

        let ctag = fs
            .children
            .iter()
            .find(|f| f.attr("name") == Some("ctag"))
            .unwrap();
        assert_eq!(ctag.find_child("symbol").unwrap().attr("value"), Some("subst"));
    }

    #[test]
    fn read_block_drains_then_reports_empty() {
        let mut reader = reader_over(MORPH_SAMPLE, "seg/fs");

        let block = reader.read_block(1).unwrap();
        assert_eq!(block.len(), 1);

        let block = reader.read_block(10).unwrap();
        assert_eq!(block.len(), 1);

        assert!(reader.read_block(10).unwrap().is_empty());
    }

    #[test]
    fn drain_with_filters_via_handler() {
        let mut reader = reader_over(MORPH_SAMPLE, "seg/fs");
        let ids = reader
            .drain_with(|fs| fs.attr("type").map(str::to_string))
            .unwrap();
        assert_eq!(ids, vec!["morph", "morph"]);

        // Handlers returning None drop the element.
        let mut reader = reader_over(MORPH_SAMPLE, "seg/fs");
        let none: Vec<String> = reader.drain_with(|_| None).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn iterator_interface() {
        let reader = reader_over(MORPH_SAMPLE, "seg/fs");
        let names: Vec<_> = reader.map(|e| e.unwrap().name).collect();
        assert_eq!(names, vec!["fs", "fs"]);
    }

    #[test]
    fn truncated_input_is_malformed() {
        let mut reader = reader_over("<body><seg><fs><f name=\"orth\">", "seg/fs");
        let result = reader.next_match();
        assert!(matches!(
            result,
            Err(KosaError::Malformed(_)) | Err(KosaError::Xml(_))
        ));
    }

    #[test]
    fn non_matching_document_yields_nothing() {
        let mut reader = reader_over(MORPH_SAMPLE, "div/ab");
        assert!(reader.next_match().unwrap().is_none());
    }

    #[test]
    fn unescapes_entities_in_text() {
        let xml = "<p><seg><fs><f name=\"orth\"><string>Kowalski &amp; Syn</string></f></fs></seg></p>";
        let mut reader = reader_over(xml, "seg/fs");
        let fs = reader.next_match().unwrap().unwrap();
        let string = fs.children[0].find_child("string").unwrap();
        assert_eq!(string.text, "Kowalski & Syn");
    }
}
