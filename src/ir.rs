use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::resolve::Reference;

/// Which column of the three-column layout an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justification {
    Left,
    Center,
    Right,
}

impl Justification {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Side of the focal column an edge's far endpoint sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        Justification::from(self).as_str()
    }
}

impl From<Side> for Justification {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => Justification::Left,
            Side::Right => Justification::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentEdgeDirection {
    Incoming,
    Outgoing,
}

#[derive(Debug, Clone)]
pub struct Vertex {
    pub id: String,
    pub label: Reference<String>,
}

impl Vertex {
    pub fn new(id: impl Into<String>, label: impl Into<Reference<String>>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A directed edge; `source -> dest`.
#[derive(Debug, Clone)]
pub struct Edge {
    pub id: String,
    pub label: Reference<String>,
    pub source: Reference<Arc<Vertex>>,
    pub dest: Reference<Arc<Vertex>>,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<Reference<String>>,
        source: impl Into<Reference<Arc<Vertex>>>,
        dest: impl Into<Reference<Arc<Vertex>>>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            source: source.into(),
            dest: dest.into(),
        }
    }
}

/// Glyph metadata for one of the fixed image identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexImage {
    pub id: String,
    pub filename: String,
    pub width: f32,
    pub height: f32,
}

/// Ordered edge references making up the neighborhood to draw.
#[derive(Debug, Clone, Default)]
pub struct Subgraph {
    pub edges: Vec<Reference<Arc<Edge>>>,
}

impl Subgraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, edge: impl Into<Reference<Arc<Edge>>>) {
        self.edges.push(edge.into());
    }
}

impl<R> FromIterator<R> for Subgraph
where
    R: Into<Reference<Arc<Edge>>>,
{
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().map(Into::into).collect(),
        }
    }
}
