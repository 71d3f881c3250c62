pub mod adjacency;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod document;
pub mod images;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod render;
pub mod renderer;
pub mod resolve;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;

pub use adjacency::{AdjacentVertex, PageOffsets, paginate, select_adjacency};
pub use config::{Config, LayoutConfig, RenderConfig, load_config};
pub use document::{GraphDocument, GraphStore, parse_document};
pub use images::{ImageIdentifier, ImageTable};
pub use ir::{Edge, IncidentEdgeDirection, Justification, Side, Subgraph, Vertex, VertexImage};
pub use layout::{EdgeLayout, GraphLayout, LayoutMetrics, Point, VertexLayout, compute_layout};
pub use render::render_svg;
pub use renderer::{RenderError, RenderSettings, RenderedLayout, SubgraphRenderer};
pub use resolve::{Reference, ResolveError, Resolver};
pub use theme::Theme;

/// Everything needed to render one page of a graph document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub focus: String,
    pub offsets: PageOffsets,
    pub config: Config,
}

impl RenderOptions {
    pub fn new(focus: impl Into<String>) -> Self {
        Self {
            focus: focus.into(),
            offsets: PageOffsets::default(),
            config: Config::default(),
        }
    }
}

/// Parses a graph document and renders the neighborhood of `options.focus`
/// to SVG.
pub fn render_with_options(document: &str, options: RenderOptions) -> anyhow::Result<String> {
    let store = GraphStore::parse(document)?;
    let settings = store.settings(&options.focus, options.config.render.page_size);
    let width = options.config.render.width;
    let theme = options.config.theme.clone();
    let renderer = SubgraphRenderer::new(store.subgraph(), settings, options.config)?;
    Ok(renderer.render(options.offsets, width, &theme)?)
}
