//! # Per-document extraction
//!
//! One [`DocumentReader`] serves a whole corpus: it pre-compiles the
//! sanitizer and the tag paths once, then extracts annotation layers
//! document by document. Every operation sanitizes its source file into a
//! scoped temp copy whose lifetime covers exactly the streaming read loop;
//! the copy is deleted when the loop finishes, whether it finished cleanly
//! or by error.

use std::path::Path;
use std::str::FromStr;

use tracing::warn;

use crate::config::CorpusConfig;
use crate::error::{KosaError, Result};
use crate::sentences::{SegmentMap, prune_alternates, resolve_sentence};
use crate::types::{EntityMention, SpanRef, Token};
use crate::xml::{Element, SanitizedXml, Sanitizer, TagPath, TagPathReader};

/// Which annotation layer to extract (CLI dispatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    /// Morphosyntactic tokens.
    Words,
    /// Named-entity mentions.
    NamedEntities,
    /// Resolved sentence strings.
    Sentences,
}

impl FromStr for ExtractionMode {
    type Err = KosaError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "words" => Ok(Self::Words),
            "named" => Ok(Self::NamedEntities),
            "sentences" => Ok(Self::Sentences),
            other => Err(KosaError::UnknownMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Words => write!(f, "words"),
            Self::NamedEntities => write!(f, "named"),
            Self::Sentences => write!(f, "sentences"),
        }
    }
}

/// Streaming reader for the annotation layers of corpus documents.
pub struct DocumentReader {
    config: CorpusConfig,
    sanitizer: Sanitizer,
    word_path: TagPath,
    block_path: TagPath,
    sentence_path: TagPath,
}

impl DocumentReader {
    /// Construct a reader for the given corpus configuration.
    ///
    /// # Errors
    ///
    /// Returns [`KosaError::Regex`] if the sanitizer pattern for the
    /// configured namespace prefix fails to compile.
    pub fn new(config: CorpusConfig) -> Result<Self> {
        let sanitizer = Sanitizer::new(&config.namespace_prefix)?;
        Ok(Self {
            config,
            sanitizer,
            word_path: TagPath::parse("seg/fs"),
            block_path: TagPath::parse("div/ab"),
            sentence_path: TagPath::parse("p/s"),
        })
    }

    /// The configuration this reader was built from.
    pub fn config(&self) -> &CorpusConfig {
        &self.config
    }

    /// Extract the retained (non-interpunction) tokens of one document,
    /// in document order.
    ///
    /// An absent token annotation file is a valid document state and yields
    /// an empty list.
    pub fn words(&self, doc_dir: &Path) -> Result<Vec<Token>> {
        let source = doc_dir.join(&self.config.words_file);
        if !source.exists() {
            return Ok(Vec::new());
        }
        let sanitized = self.sanitizer.sanitize(&source)?;
        let mut reader = open_stream(&sanitized, self.word_path.clone())?;

        reader.drain_with(|fs| {
            let token = token_from_feature_structure(fs);
            (!token.interp).then_some(token)
        })
    }

    /// Extract the named-entity mentions of one document, in document order.
    ///
    /// An absent entity annotation file yields an empty list.
    pub fn named_entities(&self, doc_dir: &Path) -> Result<Vec<EntityMention>> {
        let source = doc_dir.join(&self.config.named_file);
        if !source.exists() {
            return Ok(Vec::new());
        }
        let sanitized = self.sanitizer.sanitize(&source)?;
        let mut reader = open_stream(&sanitized, self.word_path.clone())?;

        reader.drain_with(|fs| Some(mention_from_feature_structure(fs)))
    }

    /// Build the segment-id → raw-text map of one document.
    ///
    /// An absent raw text file yields an empty map.
    pub fn segments(&self, doc_dir: &Path) -> Result<SegmentMap> {
        let source = doc_dir.join(&self.config.text_file);
        if !source.exists() {
            return Ok(SegmentMap::new());
        }
        let sanitized = self.sanitizer.sanitize(&source)?;
        let mut reader = open_stream(&sanitized, self.block_path.clone())?;

        let blocks = reader.drain_with(|ab| {
            ab.attr_with_suffix("id")
                .map(|id| (id.to_string(), ab.text.clone()))
        })?;

        let mut segments = SegmentMap::new();
        for (id, text) in blocks {
            segments.insert(id, text);
        }
        Ok(segments)
    }

    /// Resolve the literal sentence strings of one document, in order.
    ///
    /// Sentences whose references cannot be resolved are dropped with a
    /// warning; an absent segmentation or text file yields an empty list.
    pub fn sentences(&self, doc_dir: &Path) -> Result<Vec<String>> {
        let source = doc_dir.join(&self.config.segmentation_file);
        if !source.exists() {
            return Ok(Vec::new());
        }
        let segments = self.segments(doc_dir)?;
        if segments.is_empty() {
            return Ok(Vec::new());
        }

        let sanitized = self.sanitizer.sanitize(&source)?;
        let mut reader = open_stream(&sanitized, self.sentence_path.clone())?;

        let resolved = reader.drain_with(|s| Some(resolve_sentence_element(s, &segments)))?;

        let mut sentences = Vec::new();
        for result in resolved {
            match result {
                Ok(sentence) => sentences.push(sentence),
                Err(err) => warn!("dropping unresolvable sentence: {err}"),
            }
        }
        Ok(sentences)
    }
}

/// Parse and resolve one `<s>` element against the segment map.
fn resolve_sentence_element(s: &Element, segments: &SegmentMap) -> Result<String> {
    let refs = s
        .children
        .iter()
        .filter_map(|seg| seg.attr("corresp"))
        .map(SpanRef::parse)
        .collect::<Result<Vec<_>>>()?;
    let kept = prune_alternates(&refs);
    resolve_sentence(&kept, segments)
}

fn open_stream(
    sanitized: &SanitizedXml,
    path: TagPath,
) -> Result<TagPathReader<std::io::BufReader<std::fs::File>>> {
    TagPathReader::open(sanitized.path(), path)
}

/// Read one token out of a morphosyntax feature structure.
///
/// `orth` carries the surface form in a nested `<string>`; `ctag` carries
/// the grammatical tag as a `<symbol value>`. A `ctag` value equal to
/// `Interp` marks pure punctuation and sets the exclusion flag instead of
/// the tag.
fn token_from_feature_structure(fs: &Element) -> Token {
    let mut token = Token::new("", "");
    for f in &fs.children {
        match f.attr("name") {
            Some("orth") => {
                if let Some(string) = f.find_child("string") {
                    token.orth = string.text.clone();
                }
            }
            Some("ctag") => {
                for symbol in &f.children {
                    match symbol.attr("value") {
                        Some("Interp") => token.interp = true,
                        Some(value) => token.ctag = value.to_string(),
                        None => {}
                    }
                }
            }
            _ => {}
        }
    }
    token
}

/// Read one mention out of a named-entity feature structure.
///
/// Same shape as the morphosyntax entry, with the entity category under
/// `type` and no exclusion filter.
fn mention_from_feature_structure(fs: &Element) -> EntityMention {
    let mut mention = EntityMention::new("", "");
    for f in &fs.children {
        match f.attr("name") {
            Some("orth") => {
                if let Some(string) = f.find_child("string") {
                    mention.text = string.text.clone();
                }
            }
            Some("type") => {
                for symbol in &f.children {
                    if let Some(value) = symbol.attr("value") {
                        mention.category = value.to_string();
                    }
                }
            }
            _ => {}
        }
    }
    mention
}
