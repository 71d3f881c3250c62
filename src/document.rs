//! JSON5 graph documents and the interned store that backs the lookups.
//!
//! ```json5
//! {
//!   vertices: [{ id: "a", label: "Alpha" }, { id: "b" }],
//!   edges: [{ id: "ab", label: "calls", source: "a", dest: "b" }],
//!   images: [
//!     { id: "vertexIcon", filename: "vertex.svg", width: 32, height: 32 },
//!     { id: "arrow", filename: "arrow.svg", width: 16, height: 8 },
//!   ],
//! }
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ir::{Edge, Subgraph, Vertex, VertexImage};
use crate::renderer::RenderSettings;
use crate::resolve::Reference;

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("invalid graph document: {0}")]
    Syntax(#[from] json5::Error),
    #[error("duplicate {kind} id `{id}`")]
    DuplicateId { kind: &'static str, id: String },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub vertices: Vec<VertexRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
    #[serde(default)]
    pub images: Vec<VertexImage>,
    /// Edge ids to draw; every edge in document order when absent.
    #[serde(default)]
    pub subgraph: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VertexRecord {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub id: String,
    #[serde(default)]
    pub label: String,
    pub source: String,
    pub dest: String,
}

pub fn parse_document(input: &str) -> Result<GraphDocument, DocumentError> {
    Ok(json5::from_str(input)?)
}

/// Interns every vertex and edge once, so identity comparison holds across
/// lookups. Edge endpoints stay id references until a render resolves them.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    vertices: Arc<BTreeMap<String, Arc<Vertex>>>,
    edges: Arc<BTreeMap<String, Arc<Edge>>>,
    images: Arc<BTreeMap<String, VertexImage>>,
    subgraph: Vec<String>,
}

impl GraphStore {
    pub fn from_document(document: GraphDocument) -> Result<Self, DocumentError> {
        let mut vertices = BTreeMap::new();
        for record in document.vertices {
            let label = record.label.unwrap_or_else(|| record.id.clone());
            let vertex = Arc::new(Vertex::new(record.id.clone(), label));
            if vertices.insert(record.id.clone(), vertex).is_some() {
                return Err(DocumentError::DuplicateId {
                    kind: "vertex",
                    id: record.id,
                });
            }
        }

        let mut edges = BTreeMap::new();
        let mut order = Vec::with_capacity(document.edges.len());
        for record in document.edges {
            let edge = Arc::new(Edge::new(
                record.id.clone(),
                record.label,
                Reference::<Arc<Vertex>>::by_id(record.source),
                Reference::<Arc<Vertex>>::by_id(record.dest),
            ));
            if edges.insert(record.id.clone(), edge).is_some() {
                return Err(DocumentError::DuplicateId {
                    kind: "edge",
                    id: record.id,
                });
            }
            order.push(record.id);
        }

        let mut images = BTreeMap::new();
        for image in document.images {
            if images.contains_key(&image.id) {
                return Err(DocumentError::DuplicateId {
                    kind: "image",
                    id: image.id,
                });
            }
            images.insert(image.id.clone(), image);
        }

        Ok(Self {
            vertices: Arc::new(vertices),
            edges: Arc::new(edges),
            images: Arc::new(images),
            subgraph: document.subgraph.unwrap_or(order),
        })
    }

    pub fn parse(input: &str) -> Result<Self, DocumentError> {
        Self::from_document(parse_document(input)?)
    }

    pub fn vertex(&self, id: &str) -> Option<Arc<Vertex>> {
        self.vertices.get(id).cloned()
    }

    pub fn edge(&self, id: &str) -> Option<Arc<Edge>> {
        self.edges.get(id).cloned()
    }

    pub fn image(&self, id: &str) -> Option<VertexImage> {
        self.images.get(id).cloned()
    }

    /// The drawable edges as id references, in document order.
    pub fn subgraph(&self) -> Subgraph {
        self.subgraph
            .iter()
            .map(|id| Reference::<Arc<Edge>>::by_id(id.as_str()))
            .collect()
    }

    /// Settings centered on `focus` with every lookup wired to this store.
    pub fn settings(&self, focus: &str, page_size: usize) -> RenderSettings {
        let vertices = Arc::clone(&self.vertices);
        let edges = Arc::clone(&self.edges);
        let images = Arc::clone(&self.images);
        RenderSettings::new(Reference::<Arc<Vertex>>::by_id(focus), move |id: &str| images.get(id).cloned())
            .with_page_size(page_size)
            .with_vertex_lookup(move |id: &str| vertices.get(id).cloned())
            .with_edge_lookup(move |id: &str| edges.get(id).cloned())
    }
}
