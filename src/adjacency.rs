//! Incoming/outgoing selection around the focal vertex, plus pagination.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ir::{Edge, IncidentEdgeDirection, Vertex};
use crate::resolve::{Reference, ResolveError, Resolver};

/// An edge paired with the vertex on its far end from the focal vertex.
#[derive(Debug, Clone)]
pub struct AdjacentVertex {
    pub edge: Arc<Edge>,
    pub other: Arc<Vertex>,
}

/// Pagination cursor, one offset per neighbor column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageOffsets {
    pub incoming: usize,
    pub outgoing: usize,
}

impl PageOffsets {
    pub fn new(incoming: usize, outgoing: usize) -> Self {
        Self { incoming, outgoing }
    }
}

/// Keeps the edges whose endpoint on the `direction` side is `focal` itself.
///
/// Vertices are compared by identity (`Arc::ptr_eq`), never by id, so two
/// distinct vertices sharing an id string stay distinct. Input order is kept;
/// a self-loop on the focal vertex shows up in both directions.
pub fn select_adjacency(
    edges: &[Reference<Arc<Edge>>],
    focal: &Arc<Vertex>,
    direction: IncidentEdgeDirection,
    edge_resolver: &Resolver<'_, Arc<Edge>>,
    vertex_resolver: &Resolver<'_, Arc<Vertex>>,
) -> Result<Vec<AdjacentVertex>, ResolveError> {
    let mut selected = Vec::new();
    for reference in edges {
        let edge = edge_resolver.resolve(reference)?;
        let (near, far) = match direction {
            IncidentEdgeDirection::Incoming => (&edge.dest, &edge.source),
            IncidentEdgeDirection::Outgoing => (&edge.source, &edge.dest),
        };
        if !Arc::ptr_eq(&vertex_resolver.resolve(near)?, focal) {
            continue;
        }
        let other = vertex_resolver.resolve(far)?;
        selected.push(AdjacentVertex { edge, other });
    }
    Ok(selected)
}

/// The window `[offset, offset + limit)` clamped to `list`.
pub fn paginate<T>(list: &[T], offset: usize, limit: usize) -> &[T] {
    let start = offset.min(list.len());
    let end = offset.saturating_add(limit).min(list.len());
    &list[start..end]
}
