//! dkg Annotate - Linguistic annotation layer
//!
//! Defines the annotation contract the extraction pipeline consumes: a token
//! sequence with part-of-speech tags and dependency-grammar relations, plus a
//! typed named-entity list. Parsing itself is an external capability; this
//! crate wraps it behind the [`Annotator`] trait and ships an HTTP client for
//! a spaCy-style annotation service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use dkg_core::{Entity, Result};

pub mod http;

pub use http::HttpAnnotator;

/// Tag and dependency-relation labels as emitted by the annotation service.
///
/// Dependency labels follow the ClearNLP/Universal Dependencies convention
/// the underlying parser uses; these are the ones the extractor matches on.
pub mod labels {
    /// Part-of-speech tag for verbs
    pub const VERB: &str = "VERB";

    /// Nominal subject
    pub const NSUBJ: &str = "nsubj";

    /// Direct object
    pub const DOBJ: &str = "dobj";

    /// Prepositional object
    pub const POBJ: &str = "pobj";

    /// Dependency label carried by a sentence's syntactic root
    pub const ROOT: &str = "ROOT";
}

// ============================================================================
// Annotated Document Model
// ============================================================================

/// One token of an annotated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text
    pub text: String,

    /// Coarse part-of-speech tag (e.g. "VERB", "PROPN")
    pub pos: String,

    /// Dependency relation to the governing token (e.g. "nsubj", "dobj")
    pub dep: String,

    /// Index of the governing token; roots govern themselves
    pub head: usize,

    /// Whether this token is a sentence's syntactic root
    pub is_root: bool,
}

impl Token {
    /// Construct a token governed by `head`
    pub fn new(text: impl Into<String>, pos: impl Into<String>, dep: impl Into<String>, head: usize) -> Self {
        Self {
            text: text.into(),
            pos: pos.into(),
            dep: dep.into(),
            head,
            is_root: false,
        }
    }

    /// Construct a root token at index `index`
    pub fn root(text: impl Into<String>, pos: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            pos: pos.into(),
            dep: labels::ROOT.to_string(),
            head: index,
            is_root: true,
        }
    }
}

/// The annotator's full output for one document: dependency-parsed tokens and
/// recognized named entities.
///
/// Dependent navigation is derived from head indices: token `j` is a child of
/// token `i` when `tokens[j].head == i`. Left children precede their head in
/// token order, right children follow it. Enumeration order is always token
/// order, which is the tie-break order the extractor inherits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnnotatedDocument {
    pub tokens: Vec<Token>,
    pub entities: Vec<Entity>,
}

impl AnnotatedDocument {
    /// Create an annotated document
    pub fn new(tokens: Vec<Token>, entities: Vec<Entity>) -> Self {
        Self { tokens, entities }
    }

    /// Whether the document annotated to nothing
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty() && self.entities.is_empty()
    }

    /// All dependents of the token at `head`, in token order
    pub fn children(&self, head: usize) -> impl Iterator<Item = (usize, &Token)> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .filter(move |(i, t)| t.head == head && *i != head)
    }

    /// Dependents of `head` that precede it in token order
    pub fn lefts(&self, head: usize) -> impl Iterator<Item = (usize, &Token)> + '_ {
        self.children(head).filter(move |(i, _)| *i < head)
    }

    /// Dependents of `head` that follow it in token order
    pub fn rights(&self, head: usize) -> impl Iterator<Item = (usize, &Token)> + '_ {
        self.children(head).filter(move |(i, _)| *i > head)
    }

    /// Sentence roots, in token order (one per sentence)
    pub fn roots(&self) -> impl Iterator<Item = (usize, &Token)> + '_ {
        self.tokens.iter().enumerate().filter(|(_, t)| t.is_root)
    }
}

// ============================================================================
// Annotator Contract
// ============================================================================

/// Trait for linguistic annotators.
///
/// An implementation is acquired once at process start and injected into the
/// pipeline as a shared read-only dependency. For a given text and model
/// version the output must be deterministic. A text the annotator cannot
/// process (unsupported language, model unavailable) fails with
/// [`dkg_core::DkgError::Annotation`]; no partial document is returned.
#[async_trait]
pub trait Annotator: Send + Sync {
    /// Annotate raw text
    async fn annotate(&self, text: &str) -> Result<AnnotatedDocument>;

    /// Annotator name for logging
    fn name(&self) -> &str;
}

// ============================================================================
// Tests
// ============================================================================
