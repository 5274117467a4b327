//! dkg Core - Domain models and shared types
//!
//! This crate defines the core abstractions used throughout the dkg system:
//! - Extraction models (entities, relationship triples, extraction results)
//! - Document input wrapper
//! - Common error types
//! - Configuration management

pub mod config;

pub use config::{AnnotatorConfig, AppConfig, ConfigError, LoggingConfig};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

// ============================================================================
// Error Types
// ============================================================================

/// Core error types for dkg operations
#[derive(Error, Debug)]
pub enum DkgError {
    /// The linguistic annotator could not produce an annotated structure.
    /// Fatal for the document being processed; no partial output is returned.
    #[error("Annotation failed: {0}")]
    Annotation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, DkgError>;

// ============================================================================
// Extraction Models
// ============================================================================

/// A text span classified with a semantic type, as produced by named entity
/// recognition.
///
/// The label is an open string tag (organization, location, person, date,
/// event, ...). Unrecognized labels pass through untouched; callers must not
/// assume a fixed finite set. The base pipeline gives no deduplication
/// guarantee: the same text may appear more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Surface text of the entity
    pub text: String,

    /// Semantic type label (open-ended)
    pub label: String,
}

impl Entity {
    /// Create a new entity
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// A directed (subject, predicate, object) fact extracted from a sentence.
///
/// The predicate is surface text (the verb as it appeared), not a canonical
/// vocabulary term. Triples are directional: subject → object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl Triple {
    /// Create a new triple
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

/// Output of one extraction pass over a document.
///
/// Entities and relationships are immutable values; a new pass produces a new
/// result. Relationship subjects/objects are not required to appear in
/// `entities` — the graph builder reconciles by inserting missing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub entities: Vec<Entity>,
    pub relationships: Vec<Triple>,

    /// Extraction timestamp
    pub extracted_at: DateTime<Utc>,
}

impl ExtractionResult {
    /// Create a result stamped with the current time
    pub fn new(entities: Vec<Entity>, relationships: Vec<Triple>) -> Self {
        Self {
            entities,
            relationships,
            extracted_at: Utc::now(),
        }
    }

    /// Check whether the pass produced anything
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.relationships.is_empty()
    }
}

// ============================================================================
// Document Input
// ============================================================================

/// A document handed to the pipeline.
///
/// Format detection and raw text extraction are owned by the ingestion
/// collaborator; the pipeline consumes plain UTF-8 text and nothing else.
/// The id exists for logging and traceability only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier for this processing pass
    pub id: Uuid,

    /// Optional title (for logging)
    pub title: Option<String>,

    /// Plain text content, arbitrary length, may be empty
    pub text: String,
}

impl Document {
    /// Wrap raw text as a document
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: None,
            text: text.into(),
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_open_label() {
        let entity = Entity::new("Acme Corp", "ORG");
        assert_eq!(entity.text, "Acme Corp");
        assert_eq!(entity.label, "ORG");

        // Labels the pipeline has never seen pass through as-is
        let odd = Entity::new("Q3", "FISCAL_QUARTER");
        assert_eq!(odd.label, "FISCAL_QUARTER");
    }

    #[test]
    fn test_triple_direction() {
        let triple = Triple::new("Alice", "works", "Acme");
        assert_eq!(triple.subject, "Alice");
        assert_eq!(triple.predicate, "works");
        assert_eq!(triple.object, "Acme");
        assert_ne!(triple, Triple::new("Acme", "works", "Alice"));
    }

    #[test]
    fn test_extraction_result_empty() {
        let result = ExtractionResult::new(Vec::new(), Vec::new());
        assert!(result.is_empty());

        let result = ExtractionResult::new(vec![Entity::new("Paris", "LOC")], Vec::new());
        assert!(!result.is_empty());
    }

    #[test]
    fn test_document_wrapper() {
        let doc = Document::new("Alice works at Acme.").with_title("staff notes");
        assert_eq!(doc.text, "Alice works at Acme.");
        assert_eq!(doc.title.as_deref(), Some("staff notes"));
        assert!(!doc.id.is_nil());
    }

    #[test]
    fn test_error_display() {
        let err = DkgError::Annotation("model unavailable".to_string());
        assert_eq!(err.to_string(), "Annotation failed: model unavailable");
    }
}
