//! Three-column neighborhood layout.
//!
//! The focal vertex sits centered at the top, incoming neighbors stack down
//! the left column and outgoing neighbors down the right column, one row per
//! neighbor. Every edge is a four-point polyline between its neighbor and the
//! focal vertex.

mod routing;
pub(crate) mod types;
pub use types::*;
use routing::*;

use std::sync::Arc;

use crate::adjacency::AdjacentVertex;
use crate::ir::{Justification, Side, Vertex};

/// Places the focal vertex and both neighbor windows on a surface of
/// `surface_width`. Output order is focal, incoming, outgoing for vertices and
/// incoming, outgoing for edges; each window keeps its own order.
pub fn compute_layout(
    focal: &Arc<Vertex>,
    incoming: &[AdjacentVertex],
    outgoing: &[AdjacentVertex],
    surface_width: f32,
    metrics: &LayoutMetrics,
) -> GraphLayout {
    let mut layout = GraphLayout {
        vertices: Vec::with_capacity(1 + incoming.len() + outgoing.len()),
        edges: Vec::with_capacity(incoming.len() + outgoing.len()),
        surface_width,
    };

    let focal_position = Point::new(surface_width / 2.0, metrics.view_margin_y);
    layout.vertices.push(VertexLayout {
        vertex: Arc::clone(focal),
        position: focal_position,
        justification: Justification::Center,
    });

    if !incoming.is_empty() {
        let segment_dx = (focal_position.x - metrics.view_margin_x) / 3.0;
        for (idx, adj) in incoming.iter().enumerate() {
            let position = Point::new(metrics.view_margin_x, row_y(idx, metrics));
            layout.vertices.push(VertexLayout {
                vertex: Arc::clone(&adj.other),
                position,
                justification: Justification::Left,
            });
            layout.edges.push(EdgeLayout {
                edge: Arc::clone(&adj.edge),
                segments: incoming_route(position, focal_position, segment_dx),
                justification: Side::Left,
                label_position: position,
            });
        }
    }

    if !outgoing.is_empty() {
        let column_x = surface_width - metrics.view_margin_x - metrics.icon_width;
        let segment_dx = (column_x - focal_position.x) / 3.0;
        for (idx, adj) in outgoing.iter().enumerate() {
            let position = Point::new(column_x, row_y(idx, metrics));
            layout.vertices.push(VertexLayout {
                vertex: Arc::clone(&adj.other),
                position,
                justification: Justification::Right,
            });
            layout.edges.push(EdgeLayout {
                edge: Arc::clone(&adj.edge),
                segments: outgoing_route(focal_position, position, segment_dx),
                justification: Side::Right,
                label_position: position,
            });
        }
    }

    layout
}

fn row_y(idx: usize, metrics: &LayoutMetrics) -> f32 {
    metrics.view_margin_y + idx as f32 * metrics.vertex_group_height
}
