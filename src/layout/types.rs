use std::sync::Arc;

use serde::Serialize;

use crate::config::LayoutConfig;
use crate::images::ImageTable;
use crate::ir::{Edge, Justification, Side, Vertex, VertexImage};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone)]
pub struct VertexLayout {
    pub vertex: Arc<Vertex>,
    pub position: Point,
    pub justification: Justification,
}

impl VertexLayout {
    /// Diff key: the same vertex may sit in different columns across renders.
    pub fn id(&self) -> String {
        format!("{}/{}", self.justification.as_str(), self.vertex.id)
    }
}

#[derive(Debug, Clone)]
pub struct EdgeLayout {
    pub edge: Arc<Edge>,
    /// Drawn left to right whatever the edge direction.
    pub segments: [Point; 4],
    pub justification: Side,
    pub label_position: Point,
}

impl EdgeLayout {
    pub fn id(&self) -> String {
        format!("{}/{}", self.justification.as_str(), self.edge.id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GraphLayout {
    /// The focal vertex is always first.
    pub vertices: Vec<VertexLayout>,
    pub edges: Vec<EdgeLayout>,
    /// Width of the surface the positions were computed for.
    pub surface_width: f32,
}

impl GraphLayout {
    pub fn focal(&self) -> Option<&VertexLayout> {
        self.vertices.first()
    }

    pub fn neighbors(&self) -> &[VertexLayout] {
        self.vertices.get(1..).unwrap_or(&[])
    }

    pub fn has_side(&self, side: Side) -> bool {
        self.edges.iter().any(|edge| edge.justification == side)
    }

    /// The non-focal vertex whose glyph group contains `point`.
    pub fn vertex_at(&self, point: Point, metrics: &LayoutMetrics) -> Option<&VertexLayout> {
        self.neighbors().iter().find(|vl| {
            let left = vl.position.x;
            let top = vl.position.y;
            point.x >= left
                && point.x <= left + metrics.group_width()
                && point.y >= top
                && point.y <= top + metrics.group_hit_height()
        })
    }
}

/// Fixed geometry for one renderer, derived from margins and the vertex icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub view_margin_x: f32,
    pub view_margin_y: f32,
    pub icon_margin: Point,
    pub icon_width: f32,
    pub icon_height: f32,
    pub vertex_text_margin_y: f32,
    pub neighbor_margin_y: f32,
    pub edge_text_height: f32,
    /// Row pitch between consecutive neighbors in a column.
    pub vertex_group_height: f32,
}

impl LayoutMetrics {
    pub fn new(config: &LayoutConfig, images: &ImageTable) -> Self {
        Self::from_icon(config, images.vertex_icon())
    }

    pub fn from_icon(config: &LayoutConfig, icon: &VertexImage) -> Self {
        let vertex_group_height = icon.height
            + config.vertex_text_height
            + 2.0 * config.vertex_icon_margin_y
            + config.neighbor_margin_y;
        Self {
            view_margin_x: config.view_margin_x,
            view_margin_y: config.view_margin_y,
            icon_margin: Point::new(config.vertex_icon_margin_x, config.vertex_icon_margin_y),
            icon_width: icon.width,
            icon_height: icon.height,
            vertex_text_margin_y: config.vertex_text_margin_y,
            neighbor_margin_y: config.neighbor_margin_y,
            edge_text_height: config.edge_text_height,
            vertex_group_height,
        }
    }

    pub fn group_width(&self) -> f32 {
        self.icon_width + 2.0 * self.icon_margin.x
    }

    pub fn group_hit_height(&self) -> f32 {
        self.vertex_group_height - self.neighbor_margin_y + self.vertex_text_margin_y
    }
}
