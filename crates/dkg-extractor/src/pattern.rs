//! Dependency pattern matching strategy.
//!
//! Matches the subject-verb-object pattern over the dependency graph: a VERB
//! token governing both a nominal-subject child and a direct-object child.

use dkg_annotate::{labels, AnnotatedDocument};
use dkg_core::Triple;

use crate::TripleExtractor;

/// Subject-verb-object pattern extractor.
///
/// Every VERB token with an `nsubj` child and a `dobj` child yields one
/// triple; a verb lacking either child yields nothing. When a noisy parse
/// hangs several qualifying children off the same verb, the first in token
/// order wins — that tie-break mirrors the underlying matcher's enumeration
/// order and is pinned by tests rather than corrected.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvoPatternExtractor;

impl TripleExtractor for SvoPatternExtractor {
    fn extract(&self, doc: &AnnotatedDocument) -> Vec<Triple> {
        let mut triples = Vec::new();

        for (i, token) in doc.tokens.iter().enumerate() {
            if token.pos != labels::VERB {
                continue;
            }

            let subject = doc.children(i).find(|(_, t)| t.dep == labels::NSUBJ);
            let object = doc.children(i).find(|(_, t)| t.dep == labels::DOBJ);

            if let (Some((_, subject)), Some((_, object))) = (subject, object) {
                triples.push(Triple::new(&subject.text, &token.text, &object.text));
            }
        }

        triples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dkg_annotate::Token;

    #[test]
    fn test_matches_verb_with_subject_and_object() {
        let doc = AnnotatedDocument::new(
            vec![
                Token::new("Alice", "PROPN", labels::NSUBJ, 1),
                Token::root("founded", labels::VERB, 1),
                Token::new("Acme", "PROPN", labels::DOBJ, 1),
            ],
            Vec::new(),
        );

        let triples = SvoPatternExtractor.extract(&doc);
        assert_eq!(triples, vec![Triple::new("Alice", "founded", "Acme")]);
    }

    #[test]
    fn test_verb_without_direct_object_yields_nothing() {
        // "Alice works at Acme" with Acme as pobj: no dobj, pattern is silent
        let doc = AnnotatedDocument::new(
            vec![
                Token::new("Alice", "PROPN", labels::NSUBJ, 1),
                Token::root("works", labels::VERB, 1),
                Token::new("at", "ADP", "prep", 1),
                Token::new("Acme", "PROPN", labels::POBJ, 1),
            ],
            Vec::new(),
        );

        assert!(SvoPatternExtractor.extract(&doc).is_empty());
    }

    #[test]
    fn test_verb_without_subject_yields_nothing() {
        let doc = AnnotatedDocument::new(
            vec![
                Token::root("Take", labels::VERB, 0),
                Token::new("notes", "NOUN", labels::DOBJ, 0),
            ],
            Vec::new(),
        );

        assert!(SvoPatternExtractor.extract(&doc).is_empty());
    }

    #[test]
    fn test_non_verb_head_is_ignored() {
        let doc = AnnotatedDocument::new(
            vec![
                Token::new("red", "ADJ", labels::NSUBJ, 1),
                Token::root("car", "NOUN", 1),
                Token::new("wheels", "NOUN", labels::DOBJ, 1),
            ],
            Vec::new(),
        );

        assert!(SvoPatternExtractor.extract(&doc).is_empty());
    }

    #[test]
    fn test_each_verb_yields_its_own_triple() {
        // "Alice founded Acme" + "Bob sold shares" parsed as two sentences
        let doc = AnnotatedDocument::new(
            vec![
                Token::new("Alice", "PROPN", labels::NSUBJ, 1),
                Token::root("founded", labels::VERB, 1),
                Token::new("Acme", "PROPN", labels::DOBJ, 1),
                Token::new("Bob", "PROPN", labels::NSUBJ, 4),
                Token::root("sold", labels::VERB, 4),
                Token::new("shares", "NOUN", labels::DOBJ, 4),
            ],
            Vec::new(),
        );

        let triples = SvoPatternExtractor.extract(&doc);
        assert_eq!(
            triples,
            vec![
                Triple::new("Alice", "founded", "Acme"),
                Triple::new("Bob", "sold", "shares"),
            ]
        );
    }

    #[test]
    fn test_double_object_tie_break_takes_first_in_token_order() {
        // Ungrammatical but possible under a noisy parse: two dobj children.
        // The first in token order is used; this pins the accepted
        // nondeterminism boundary.
        let doc = AnnotatedDocument::new(
            vec![
                Token::new("Alice", "PROPN", labels::NSUBJ, 1),
                Token::root("saw", labels::VERB, 1),
                Token::new("Bob", "PROPN", labels::DOBJ, 1),
                Token::new("Carol", "PROPN", labels::DOBJ, 1),
            ],
            Vec::new(),
        );

        let triples = SvoPatternExtractor.extract(&doc);
        assert_eq!(triples, vec![Triple::new("Alice", "saw", "Bob")]);
    }
}
