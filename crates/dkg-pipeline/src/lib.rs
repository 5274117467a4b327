//! dkg Pipeline - Processing orchestrator
//!
//! Composes the three stages: linguistic annotation, relationship extraction,
//! and graph construction. One document is processed start-to-finish per
//! invocation; each stage's full output is required before the next begins,
//! and a document that fails annotation terminates the whole run with no
//! partial output.

use std::sync::Arc;
use std::time::Instant;

use dkg_annotate::Annotator;
use dkg_core::{Document, ExtractionResult, Result};
use dkg_extractor::CombinedExtractor;
use dkg_graph::KnowledgeGraph;

/// Everything one processing pass produced.
///
/// The extraction values are immutable; the graph is the session's mutable
/// state and the starting point for manual refinement.
#[derive(Debug)]
pub struct PipelineOutput {
    /// Entities and relationship triples from the extraction pass
    pub extraction: ExtractionResult,

    /// Graph built from the extraction pass
    pub graph: KnowledgeGraph,

    /// Wall-clock processing time
    pub processing_time_ms: u64,
}

/// Document-to-knowledge-graph pipeline.
///
/// The annotator is acquired once at process start and shared read-only; the
/// pipeline never re-creates it per call.
pub struct GraphPipeline {
    annotator: Arc<dyn Annotator>,
    extractor: CombinedExtractor,
}

impl GraphPipeline {
    /// Create a pipeline around an annotator
    pub fn new(annotator: Arc<dyn Annotator>) -> Self {
        Self {
            annotator,
            extractor: CombinedExtractor::new(),
        }
    }

    /// Run the full pass: annotate, extract, build the graph.
    pub async fn process(&self, document: &Document) -> Result<PipelineOutput> {
        let start = Instant::now();

        tracing::info!(
            document_id = %document.id,
            title = ?document.title,
            text_len = document.text.len(),
            annotator = %self.annotator.name(),
            "Processing document"
        );

        let extraction = self.extract(document).await?;

        let graph = KnowledgeGraph::build(&extraction.entities, &extraction.relationships);

        let processing_time_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            document_id = %document.id,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            elapsed_ms = processing_time_ms,
            "Document processed"
        );

        Ok(PipelineOutput {
            extraction,
            graph,
            processing_time_ms,
        })
    }

    /// Run the annotate + extract prefix without building a graph, for
    /// callers that construct and refine the graph themselves.
    pub async fn extract(&self, document: &Document) -> Result<ExtractionResult> {
        let annotated = self.annotator.annotate(&document.text).await?;
        tracing::debug!(
            document_id = %document.id,
            tokens = annotated.tokens.len(),
            entities = annotated.entities.len(),
            "Annotation complete"
        );

        let extraction = self.extractor.extract_result(&annotated);
        tracing::debug!(
            document_id = %document.id,
            entities = extraction.entities.len(),
            relationships = extraction.relationships.len(),
            "Extraction complete"
        );

        Ok(extraction)
    }
}
