//! Ties resolution, adjacency selection, pagination and layout together for
//! one graph and one set of caller-supplied lookups.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::adjacency::{PageOffsets, paginate, select_adjacency};
use crate::config::{Config, DEFAULT_PAGE_SIZE};
use crate::images::{ImageError, ImageTable};
use crate::ir::{Edge, IncidentEdgeDirection, Subgraph, Vertex, VertexImage};
use crate::layout::{GraphLayout, LayoutMetrics, Point, compute_layout};
use crate::render::render_svg;
use crate::resolve::{LookupFn, Reference, ResolveError, Resolver};
use crate::theme::Theme;

pub type SelectionCallback = dyn Fn(&str) + Send + Sync;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Image(#[from] ImageError),
}

pub struct RenderSettings {
    pub target_vertex: Reference<Arc<Vertex>>,
    pub vertex_column_page_size: usize,
    pub get_vertex_image_by_id: Box<LookupFn<VertexImage>>,
    pub get_vertex_by_id: Option<Box<LookupFn<Arc<Vertex>>>>,
    pub get_edge_by_id: Option<Box<LookupFn<Arc<Edge>>>>,
    pub on_vertex_selected: Option<Box<SelectionCallback>>,
}

impl RenderSettings {
    pub fn new<F>(target_vertex: impl Into<Reference<Arc<Vertex>>>, get_vertex_image_by_id: F) -> Self
    where
        F: Fn(&str) -> Option<VertexImage> + Send + Sync + 'static,
    {
        Self {
            target_vertex: target_vertex.into(),
            vertex_column_page_size: DEFAULT_PAGE_SIZE,
            get_vertex_image_by_id: Box::new(get_vertex_image_by_id),
            get_vertex_by_id: None,
            get_edge_by_id: None,
            on_vertex_selected: None,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.vertex_column_page_size = page_size;
        self
    }

    pub fn with_vertex_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<Arc<Vertex>> + Send + Sync + 'static,
    {
        self.get_vertex_by_id = Some(Box::new(lookup));
        self
    }

    pub fn with_edge_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<Arc<Edge>> + Send + Sync + 'static,
    {
        self.get_edge_by_id = Some(Box::new(lookup));
        self
    }

    pub fn on_vertex_selected<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_vertex_selected = Some(Box::new(callback));
        self
    }
}

/// A layout plus the unpaginated neighbor totals, for driving page controls.
#[derive(Debug, Clone)]
pub struct RenderedLayout {
    pub layout: GraphLayout,
    pub incoming_total: usize,
    pub outgoing_total: usize,
}

pub struct SubgraphRenderer {
    graph: Subgraph,
    settings: RenderSettings,
    config: Config,
    images: ImageTable,
    metrics: LayoutMetrics,
}

impl SubgraphRenderer {
    pub fn new(graph: Subgraph, settings: RenderSettings, config: Config) -> Result<Self, RenderError> {
        let images = ImageTable::load(&*settings.get_vertex_image_by_id)?;
        let metrics = LayoutMetrics::new(&config.layout, &images);
        debug!(
            edges = graph.edges.len(),
            row_pitch = metrics.vertex_group_height,
            "subgraph renderer ready"
        );
        Ok(Self {
            graph,
            settings,
            config,
            images,
            metrics,
        })
    }

    pub fn images(&self) -> &ImageTable {
        &self.images
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolves the target, selects and paginates both neighbor columns, and
    /// lays them out on a surface `surface_width` wide.
    pub fn layout(&self, offsets: PageOffsets, surface_width: f32) -> Result<RenderedLayout, RenderError> {
        let edges = Resolver::new("edge", self.settings.get_edge_by_id.as_deref());
        let vertices = Resolver::new("vertex", self.settings.get_vertex_by_id.as_deref());

        let target = vertices.resolve(&self.settings.target_vertex)?;
        let incoming = select_adjacency(
            &self.graph.edges,
            &target,
            IncidentEdgeDirection::Incoming,
            &edges,
            &vertices,
        )?;
        let outgoing = select_adjacency(
            &self.graph.edges,
            &target,
            IncidentEdgeDirection::Outgoing,
            &edges,
            &vertices,
        )?;

        let page_size = self.settings.vertex_column_page_size;
        let incoming_window = paginate(&incoming, offsets.incoming, page_size);
        let outgoing_window = paginate(&outgoing, offsets.outgoing, page_size);
        debug!(
            focal = %target.id,
            incoming = incoming.len(),
            outgoing = outgoing.len(),
            incoming_window = incoming_window.len(),
            outgoing_window = outgoing_window.len(),
            surface_width,
            "computing subgraph layout"
        );

        let layout = compute_layout(
            &target,
            incoming_window,
            outgoing_window,
            surface_width,
            &self.metrics,
        );
        Ok(RenderedLayout {
            layout,
            incoming_total: incoming.len(),
            outgoing_total: outgoing.len(),
        })
    }

    /// Draws the page at `offsets` from scratch on a surface `surface_width`
    /// wide.
    pub fn render(&self, offsets: PageOffsets, surface_width: f32, theme: &Theme) -> Result<String, RenderError> {
        let rendered = self.layout(offsets, surface_width)?;
        Ok(render_svg(&rendered.layout, &self.images, theme, &self.config)?)
    }

    /// Activates the non-focal vertex under `point`, notifying the selection
    /// callback. Returns the selected vertex id.
    pub fn activate(&self, layout: &GraphLayout, point: Point) -> Option<String> {
        let hit = layout.vertex_at(point, &self.metrics)?;
        trace!(vertex = %hit.vertex.id, "vertex activated");
        if let Some(callback) = &self.settings.on_vertex_selected {
            callback(&hit.vertex.id);
        }
        Some(hit.vertex.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn glyphs(id: &str) -> Option<VertexImage> {
        Some(VertexImage {
            id: id.to_string(),
            filename: format!("{id}.png"),
            width: 24.0,
            height: 24.0,
        })
    }

    fn star(spokes: usize) -> (Arc<Vertex>, Subgraph) {
        let hub = Arc::new(Vertex::new("hub", "Hub"));
        let mut graph = Subgraph::new();
        for idx in 0..spokes {
            let leaf = Arc::new(Vertex::new(format!("in{idx}"), "in"));
            graph.push(Arc::new(Edge::new(format!("e-in{idx}"), "", leaf, hub.clone())));
        }
        (hub, graph)
    }

    #[test]
    fn missing_glyph_fails_construction() {
        let (hub, graph) = star(1);
        let settings = RenderSettings::new(hub, |_: &str| None);
        let err = SubgraphRenderer::new(graph, settings, Config::default())
            .err()
            .unwrap();
        assert!(matches!(err, RenderError::Image(_)));
    }

    #[test]
    fn pages_through_incoming_neighbors() {
        let (hub, graph) = star(5);
        let settings = RenderSettings::new(hub, glyphs).with_page_size(2);
        let renderer = SubgraphRenderer::new(graph, settings, Config::default()).unwrap();

        let first = renderer.layout(PageOffsets::new(0, 0), 400.0).unwrap();
        assert_eq!(first.incoming_total, 5);
        assert_eq!(first.outgoing_total, 0);
        let ids: Vec<_> = first.layout.neighbors().iter().map(|vl| vl.vertex.id.as_str()).collect();
        assert_eq!(ids, vec!["in0", "in1"]);

        let last = renderer.layout(PageOffsets::new(4, 0), 400.0).unwrap();
        assert_eq!(last.layout.neighbors().len(), 1);
        assert_eq!(last.layout.neighbors()[0].vertex.id, "in4");

        let past_end = renderer.layout(PageOffsets::new(9, 0), 400.0).unwrap();
        assert_eq!(past_end.layout.vertices.len(), 1);
        assert!(past_end.layout.edges.is_empty());
    }

    #[test]
    fn unresolvable_target_propagates() {
        let (_, graph) = star(1);
        let settings = RenderSettings::new(Reference::<Arc<Vertex>>::by_id("hub"), glyphs);
        let renderer = SubgraphRenderer::new(graph, settings, Config::default()).unwrap();
        let err = renderer.layout(PageOffsets::default(), 400.0).unwrap_err();
        assert!(matches!(err, RenderError::Resolve(ResolveError::Unresolved { .. })));
    }

    #[test]
    fn activating_a_neighbor_notifies_the_callback() {
        let selected = Arc::new(Mutex::new(Vec::new()));
        let sink = selected.clone();
        let (hub, graph) = star(2);
        let settings = RenderSettings::new(hub, glyphs)
            .on_vertex_selected(move |id| sink.lock().unwrap().push(id.to_string()));
        let renderer = SubgraphRenderer::new(graph, settings, Config::default()).unwrap();
        let rendered = renderer.layout(PageOffsets::default(), 400.0).unwrap();

        let second_row = rendered.layout.vertices[2].position;
        let hit = renderer.activate(&rendered.layout, Point::new(second_row.x + 5.0, second_row.y + 5.0));
        assert_eq!(hit.as_deref(), Some("in1"));

        let focal = rendered.layout.vertices[0].position;
        assert!(renderer.activate(&rendered.layout, Point::new(focal.x + 5.0, focal.y + 5.0)).is_none());
        assert_eq!(*selected.lock().unwrap(), vec!["in1".to_string()]);
    }

    #[test]
    fn render_draws_fresh_svg_each_call() {
        let (hub, graph) = star(3);
        let settings = RenderSettings::new(hub, glyphs);
        let renderer = SubgraphRenderer::new(graph, settings, Config::default()).unwrap();
        let theme = Theme::default();
        let first = renderer.render(PageOffsets::default(), 400.0, &theme).unwrap();
        let second = renderer.render(PageOffsets::default(), 400.0, &theme).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.matches("graph-edge-line").count(), 3);
    }

    #[test]
    fn render_uses_the_requested_surface_and_theme() {
        let (hub, graph) = star(1);
        let settings = RenderSettings::new(hub, glyphs);
        let renderer = SubgraphRenderer::new(graph, settings, Config::default()).unwrap();

        let narrow = renderer.render(PageOffsets::default(), 300.0, &Theme::light()).unwrap();
        let wide = renderer.render(PageOffsets::default(), 800.0, &Theme::dark()).unwrap();
        assert!(narrow.contains("viewBox=\"0 0 300 "));
        assert!(wide.contains("viewBox=\"0 0 800 "));
        // focal vertex centered on each surface
        assert!(narrow.contains("id=\"center/hub\" transform=\"translate(150.00 15.00)\""));
        assert!(wide.contains("id=\"center/hub\" transform=\"translate(400.00 15.00)\""));
        assert!(narrow.contains(&Theme::light().background));
        assert!(wide.contains(&Theme::dark().background));
    }
}
