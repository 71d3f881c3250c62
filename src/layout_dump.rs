use crate::ir::{Justification, Side};
use crate::layout::GraphLayout;
use crate::renderer::RenderedLayout;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub focal: Option<String>,
    pub width: f32,
    pub incoming_total: usize,
    pub outgoing_total: usize,
    pub vertices: Vec<VertexDump>,
    pub edges: Vec<EdgeDump>,
}

#[derive(Debug, Serialize)]
pub struct VertexDump {
    pub key: String,
    pub id: String,
    pub justification: Justification,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Serialize)]
pub struct EdgeDump {
    pub key: String,
    pub id: String,
    pub justification: Side,
    pub points: Vec<[f32; 2]>,
    pub label_anchor: [f32; 2],
}

impl LayoutDump {
    pub fn from_layout(layout: &GraphLayout, incoming_total: usize, outgoing_total: usize) -> Self {
        let vertices = layout
            .vertices
            .iter()
            .map(|vl| VertexDump {
                key: vl.id(),
                id: vl.vertex.id.clone(),
                justification: vl.justification,
                x: vl.position.x,
                y: vl.position.y,
            })
            .collect();

        let edges = layout
            .edges
            .iter()
            .map(|el| EdgeDump {
                key: el.id(),
                id: el.edge.id.clone(),
                justification: el.justification,
                points: el.segments.iter().map(|p| [p.x, p.y]).collect(),
                label_anchor: [el.label_position.x, el.label_position.y],
            })
            .collect();

        LayoutDump {
            focal: layout.focal().map(|vl| vl.vertex.id.clone()),
            width: layout.surface_width,
            incoming_total,
            outgoing_total,
            vertices,
            edges,
        }
    }
}

impl From<&RenderedLayout> for LayoutDump {
    fn from(rendered: &RenderedLayout) -> Self {
        Self::from_layout(&rendered.layout, rendered.incoming_total, rendered.outgoing_total)
    }
}

pub fn write_layout_dump(path: Option<&Path>, rendered: &RenderedLayout) -> anyhow::Result<()> {
    let dump = LayoutDump::from(rendered);
    match path {
        Some(path) => {
            let writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(writer, &dump)?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &dump)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}
