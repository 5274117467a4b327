//! Root-verb argument scanning strategy.
//!
//! Complements the dependency pattern matcher by catching sentences whose
//! object surfaces as a prepositional object rather than a direct object,
//! which the strict subject-verb-object pattern misses.

use dkg_annotate::{labels, AnnotatedDocument};
use dkg_core::Triple;

use crate::TripleExtractor;

/// Root argument scan extractor.
///
/// For every sentence root: its left dependents are scanned for a nominal
/// subject and its right dependents for a direct or prepositional object.
/// One triple is emitted per root from the first subject candidate and the
/// first object candidate, with the root's text as predicate. All candidate
/// combinations beyond the first pair are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct RootArgumentExtractor;

impl TripleExtractor for RootArgumentExtractor {
    fn extract(&self, doc: &AnnotatedDocument) -> Vec<Triple> {
        let mut triples = Vec::new();

        for (i, root) in doc.roots() {
            let subject = doc.lefts(i).find(|(_, t)| t.dep == labels::NSUBJ);
            let object = doc
                .rights(i)
                .find(|(_, t)| t.dep == labels::DOBJ || t.dep == labels::POBJ);

            if let (Some((_, subject)), Some((_, object))) = (subject, object) {
                triples.push(Triple::new(&subject.text, &root.text, &object.text));
            }
        }

        triples
    }
}
