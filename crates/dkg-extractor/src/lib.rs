//! dkg Extractor - Relationship extraction pipeline
//!
//! Derives candidate (subject, predicate, object) triples from an annotated
//! document using two complementary strategies over the dependency parse:
//! verb-governed subject/object pattern matching ([`SvoPatternExtractor`])
//! and root-verb argument scanning ([`RootArgumentExtractor`]).
//!
//! The strategies are independent and their outputs are concatenated without
//! deduplication. Two cheap heuristics trade recall for simplicity: emitting
//! the union over-recalls, and colliding subject/object pairs are resolved
//! downstream by the graph's overwrite policy.

use dkg_annotate::AnnotatedDocument;
use dkg_core::{ExtractionResult, Triple};

pub mod pattern;
pub mod rootscan;

pub use pattern::SvoPatternExtractor;
pub use rootscan::RootArgumentExtractor;

/// Trait for triple extraction strategies.
///
/// Extraction is total: a document with no matching structure yields an empty
/// list, never an error.
pub trait TripleExtractor: Send + Sync {
    /// Extract triples from an annotated document
    fn extract(&self, doc: &AnnotatedDocument) -> Vec<Triple>;
}

/// Both strategies run in sequence, outputs concatenated.
///
/// A triple found by both strategies appears twice in the output; duplicates
/// are kept deliberately.
#[derive(Debug, Default)]
pub struct CombinedExtractor {
    pattern: SvoPatternExtractor,
    root_scan: RootArgumentExtractor,
}

impl CombinedExtractor {
    /// Create the default strategy combination
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a full extraction result: the annotator's entities passed
    /// through unchanged, plus the triples from both strategies.
    pub fn extract_result(&self, doc: &AnnotatedDocument) -> ExtractionResult {
        ExtractionResult::new(doc.entities.clone(), self.extract(doc))
    }
}

impl TripleExtractor for CombinedExtractor {
    fn extract(&self, doc: &AnnotatedDocument) -> Vec<Triple> {
        let mut triples = self.pattern.extract(doc);
        triples.extend(self.root_scan.extract(doc));
        triples
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use dkg_annotate::{labels, Token};
    use dkg_core::Entity;

    // "Bob met Alice": met is root VERB, Bob left nsubj, Alice right dobj.
    // Both strategies qualify independently.
    fn met_doc() -> AnnotatedDocument {
        AnnotatedDocument::new(
            vec![
                Token::new("Bob", "PROPN", labels::NSUBJ, 1),
                Token::root("met", labels::VERB, 1),
                Token::new("Alice", "PROPN", labels::DOBJ, 1),
            ],
            vec![Entity::new("Bob", "PERSON"), Entity::new("Alice", "PERSON")],
        )
    }

    #[test]
    fn test_union_keeps_duplicates() {
        let extractor = CombinedExtractor::new();
        let triples = extractor.extract(&met_doc());

        let expected = Triple::new("Bob", "met", "Alice");
        assert_eq!(triples.len(), 2);
        assert_eq!(triples[0], expected);
        assert_eq!(triples[1], expected);
    }

    #[test]
    fn test_pattern_output_precedes_root_scan_output() {
        // "Alice works at Acme": root verb with a pobj only. Pattern strategy
        // stays silent, root scan contributes, so the single triple comes
        // from the scan.
        let doc = AnnotatedDocument::new(
            vec![
                Token::new("Alice", "PROPN", labels::NSUBJ, 1),
                Token::root("works", labels::VERB, 1),
                Token::new("at", "ADP", "prep", 1),
                Token::new("Acme", "PROPN", labels::POBJ, 1),
            ],
            vec![Entity::new("Alice", "PERSON"), Entity::new("Acme", "ORG")],
        );

        let triples = CombinedExtractor::new().extract(&doc);
        assert_eq!(triples, vec![Triple::new("Alice", "works", "Acme")]);
    }

    #[test]
    fn test_extract_result_passes_entities_through() {
        let result = CombinedExtractor::new().extract_result(&met_doc());

        assert_eq!(
            result.entities,
            vec![Entity::new("Bob", "PERSON"), Entity::new("Alice", "PERSON")]
        );
        assert_eq!(result.relationships.len(), 2);
    }

    #[test]
    fn test_empty_document_extracts_nothing() {
        let result = CombinedExtractor::new().extract_result(&AnnotatedDocument::default());
        assert!(result.is_empty());
    }
}
