//! dkg Graph - In-memory knowledge graph
//!
//! A directed labeled graph over entity text. Node identity is the exact
//! text string; nodes carry an optional entity-type label and edges carry the
//! relation's surface text. The graph is session-scoped mutable state: built
//! in bulk from an extraction pass and refined through discrete manual
//! operations. It is a visualization/editing aid, not a validated knowledge
//! base, so mutation accepts any string input and never fails.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

use dkg_core::{Entity, Triple};

/// Node payload: the entity text plus its optional type label.
///
/// A `None` label marks a node created as a relationship endpoint without
/// ever being recognized as a named entity.
#[derive(Debug, Clone)]
struct NodeData {
    text: String,
    label: Option<String>,
}

/// A node in the enumerable graph snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub text: String,
    pub label: Option<String>,
}

/// An edge in the enumerable graph snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub predicate: String,
}

/// Enumerable snapshot of the graph, owed to the visualization collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphExport {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Graph size statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
}

/// Directed labeled knowledge graph.
///
/// This is a simple graph, not a multigraph: inserting a second relationship
/// between the same (subject, object) pair overwrites the existing edge's
/// predicate (last-write-wins). Duplicate entity text likewise overwrites the
/// node's label. Both policies are pinned by tests.
#[derive(Debug, Default)]
pub struct KnowledgeGraph {
    graph: DiGraph<NodeData, String>,
    node_index: HashMap<String, NodeIndex>,
}

impl KnowledgeGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an extraction pass.
    ///
    /// Inserts one node per entity, then one edge per triple. Endpoints a
    /// triple names that were never listed as entities are created unlabeled.
    /// Pure over its inputs: building twice from the same slices yields
    /// graphs with identical node and edge sets and labels.
    pub fn build(entities: &[Entity], relationships: &[Triple]) -> Self {
        let mut graph = Self::new();

        for entity in entities {
            graph.add_entity(&entity.text, &entity.label);
        }
        for triple in relationships {
            graph.add_relationship(&triple.subject, &triple.predicate, &triple.object);
        }

        graph
    }

    /// Insert a node, or overwrite the label of an existing one.
    ///
    /// Accepts any string, including empty or whitespace-only text; input
    /// validation belongs to the refinement surface, not here.
    pub fn add_entity(&mut self, text: impl Into<String>, label: impl Into<String>) {
        let text = text.into();
        let label = label.into();

        match self.node_index.get(&text) {
            Some(&idx) => {
                self.graph[idx].label = Some(label);
            }
            None => {
                let idx = self.graph.add_node(NodeData {
                    text: text.clone(),
                    label: Some(label),
                });
                self.node_index.insert(text, idx);
            }
        }
    }

    /// Insert an edge, or overwrite the predicate of an existing one.
    ///
    /// Endpoints missing from the graph are created without a type label.
    pub fn add_relationship(
        &mut self,
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) {
        let subject = self.ensure_node(subject.into());
        let object = self.ensure_node(object.into());
        self.graph.update_edge(subject, object, predicate.into());
    }

    fn ensure_node(&mut self, text: String) -> NodeIndex {
        match self.node_index.get(&text) {
            Some(&idx) => idx,
            None => {
                let idx = self.graph.add_node(NodeData {
                    text: text.clone(),
                    label: None,
                });
                self.node_index.insert(text, idx);
                idx
            }
        }
    }

    /// Whether a node with this exact text exists
    pub fn contains_node(&self, text: &str) -> bool {
        self.node_index.contains_key(text)
    }

    /// Type label of a node, if the node exists and carries one
    pub fn node_label(&self, text: &str) -> Option<&str> {
        let idx = self.node_index.get(text)?;
        self.graph[*idx].label.as_deref()
    }

    /// Predicate of the subject → object edge, if present
    pub fn edge_label(&self, subject: &str, object: &str) -> Option<&str> {
        let s = *self.node_index.get(subject)?;
        let o = *self.node_index.get(object)?;
        let edge = self.graph.find_edge(s, o)?;
        Some(self.graph[edge].as_str())
    }

    /// Nodes as (text, label) pairs, in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        self.graph
            .node_weights()
            .map(|n| (n.text.as_str(), n.label.as_deref()))
    }

    /// Edges as (source, target, predicate) triples, in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &str)> + '_ {
        self.graph.edge_references().map(|e| {
            (
                self.graph[e.source()].text.as_str(),
                self.graph[e.target()].text.as_str(),
                e.weight().as_str(),
            )
        })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Take an enumerable snapshot of the graph
    pub fn export(&self) -> GraphExport {
        GraphExport {
            nodes: self
                .nodes()
                .map(|(text, label)| GraphNode {
                    text: text.to_string(),
                    label: label.map(String::from),
                })
                .collect(),
            edges: self
                .edges()
                .map(|(source, target, predicate)| GraphEdge {
                    source: source.to_string(),
                    target: target.to_string(),
                    predicate: predicate.to_string(),
                })
                .collect(),
        }
    }

    /// Get graph statistics
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            node_count: self.graph.node_count(),
            edge_count: self.graph.edge_count(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
