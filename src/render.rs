use crate::config::{Config, RenderConfig};
use crate::images::{ImageIdentifier, ImageTable};
use crate::ir::{Justification, Side};
use crate::layout::{EdgeLayout, GraphLayout, LayoutMetrics, Point, VertexLayout};
use crate::resolve::{ResolveError, label_resolver};
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

const SVG_TEMPLATE_PREFIX: &str = "svgTemplate_";

/// Draws `layout` as a standalone SVG document as wide as the surface the
/// layout was computed for. Labels are resolved here, so an unresolvable
/// label fails the whole drawing.
pub fn render_svg(
    layout: &GraphLayout,
    images: &ImageTable,
    theme: &Theme,
    config: &Config,
) -> std::result::Result<String, ResolveError> {
    let metrics = LayoutMetrics::new(&config.layout, images);
    let labels = label_resolver();
    let width = layout.surface_width;
    let height = config.render.height.max(content_height(layout, &metrics));

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        escape_xml(&theme.background)
    ));

    svg.push_str("<defs>");
    for (id, image) in images.iter() {
        svg.push_str(&format!(
            "<symbol id=\"{SVG_TEMPLATE_PREFIX}{}\"><image xlink:href=\"{}\" width=\"{}\" height=\"{}\"/></symbol>",
            id.as_str(),
            escape_xml(&format!("{}{}", config.render.image_base_path, image.filename)),
            image.width,
            image.height
        ));
    }
    svg.push_str("</defs>");

    svg.push_str("<g class=\"graph-subgraph\">");
    for edge in &layout.edges {
        let label = labels.resolve(&edge.edge.label)?;
        svg.push_str(&edge_svg(edge, &label, &metrics, theme));
    }
    for (idx, vertex) in layout.vertices.iter().enumerate() {
        let label = labels.resolve(&vertex.vertex.label)?;
        svg.push_str(&vertex_svg(vertex, &label, idx == 0, &metrics, theme));
    }
    svg.push_str(&arrows_svg(layout, images, &metrics));
    svg.push_str("</g>");

    svg.push_str("</svg>");
    Ok(svg)
}

fn content_height(layout: &GraphLayout, metrics: &LayoutMetrics) -> f32 {
    layout
        .vertices
        .iter()
        .map(|vl| vl.position.y + metrics.vertex_group_height)
        .fold(0.0, f32::max)
}

fn vertex_svg(
    vl: &VertexLayout,
    label: &str,
    focal: bool,
    metrics: &LayoutMetrics,
    theme: &Theme,
) -> String {
    let (text_x, anchor) = match vl.justification {
        Justification::Left => (metrics.icon_margin.x, "start"),
        Justification::Center => (metrics.icon_margin.x + metrics.icon_width / 2.0, "middle"),
        Justification::Right => (metrics.icon_margin.x + metrics.icon_width, "end"),
    };
    let text_y = metrics.vertex_group_height - metrics.neighbor_margin_y + metrics.vertex_text_margin_y;
    // The focal vertex gets no selection hook.
    let selectable = if focal {
        String::new()
    } else {
        format!(" class=\"selectable\" data-vertex-id=\"{}\"", escape_xml(&vl.vertex.id))
    };

    let mut out = String::new();
    out.push_str(&format!(
        "<g id=\"{}\" transform=\"translate({:.2} {:.2})\"{selectable}>",
        escape_xml(&vl.id()),
        vl.position.x,
        vl.position.y
    ));
    out.push_str(&format!(
        "<use xlink:href=\"#{SVG_TEMPLATE_PREFIX}{}\" x=\"{}\" y=\"{}\"/>",
        ImageIdentifier::VertexIcon.as_str(),
        metrics.icon_margin.x,
        metrics.icon_margin.y
    ));
    out.push_str(&format!(
        "<text class=\"graph-vertex-label {}\" x=\"{text_x:.2}\" y=\"{text_y:.2}\" text-anchor=\"{anchor}\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
        vl.justification.as_str(),
        escape_xml(&theme.font_family),
        theme.vertex_font_size,
        escape_xml(&theme.vertex_label_color),
        escape_xml(label)
    ));
    out.push_str("</g>");
    out
}

/// Horizontal shift from a layout point to the glyph edge a line attaches to.
fn edge_x_offset(side: Side, metrics: &LayoutMetrics) -> f32 {
    match side {
        Side::Left => metrics.icon_margin.x + metrics.icon_width - 1.0,
        Side::Right => metrics.icon_margin.x + 1.0,
    }
}

fn edge_y_offset(metrics: &LayoutMetrics) -> f32 {
    metrics.icon_margin.y + metrics.icon_height / 2.0
}

/// Moves layout points onto the glyph edges: lines leave the right side of
/// a left-column icon and enter the left side of a right-column icon.
pub(crate) fn adjusted_segments(edge: &EdgeLayout, metrics: &LayoutMetrics) -> [Point; 4] {
    let dx = edge_x_offset(edge.justification, metrics);
    let dy = edge_y_offset(metrics);
    let mut points = edge.segments.map(|p| Point::new(p.x + dx, p.y + dy));
    let inset = metrics.icon_width - metrics.icon_margin.x;
    match edge.justification {
        Side::Left => points[3].x -= inset,
        Side::Right => points[0].x += inset,
    }
    points
}

fn edge_svg(edge: &EdgeLayout, label: &str, metrics: &LayoutMetrics, theme: &Theme) -> String {
    let points = adjusted_segments(edge, metrics);
    let label_x = edge.label_position.x + edge_x_offset(edge.justification, metrics);
    let label_y = edge.label_position.y + edge_y_offset(metrics) + metrics.edge_text_height;
    let anchor = match edge.justification {
        Side::Left => "start",
        Side::Right => "end",
    };

    let mut out = String::new();
    out.push_str(&format!("<g id=\"{}\">", escape_xml(&edge.id())));
    out.push_str(&format!(
        "<polyline class=\"graph-edge-line\" points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
        points_path(&points),
        escape_xml(&theme.line_color),
        theme.line_width
    ));
    out.push_str(&format!(
        "<text class=\"graph-edge-label {}\" x=\"{label_x:.2}\" y=\"{label_y:.2}\" text-anchor=\"{anchor}\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
        edge.justification.as_str(),
        escape_xml(&theme.font_family),
        theme.edge_font_size,
        escape_xml(&theme.edge_label_color),
        escape_xml(label)
    ));
    out.push_str("</g>");
    out
}

/// One direction arrow per non-empty neighbor column.
fn arrows_svg(layout: &GraphLayout, images: &ImageTable, metrics: &LayoutMetrics) -> String {
    let Some(focal) = layout.focal() else {
        return String::new();
    };
    let span = focal.position.x - metrics.view_margin_x;
    let y = focal.position.y + metrics.icon_margin.y + metrics.icon_height / 2.0
        - images.arrow().height / 2.0;

    let mut out = String::new();
    for side in [Side::Left, Side::Right] {
        if !layout.has_side(side) {
            continue;
        }
        let x = match side {
            Side::Left => span * 5.0 / 6.0,
            Side::Right => span * 7.0 / 6.0,
        };
        out.push_str(&format!(
            "<use class=\"graph-arrow {}\" xlink:href=\"#{SVG_TEMPLATE_PREFIX}{}\" x=\"{x:.2}\" y=\"{y:.2}\"/>",
            side.as_str(),
            ImageIdentifier::Arrow.as_str()
        ));
    }
    out
}

fn points_path(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.default_size = usvg::Size::from_wh(render_cfg.width, render_cfg.height)
        .ok_or_else(|| anyhow::anyhow!("Invalid surface size"))?;
    // Glyph hrefs are relative to the working directory.
    opt.resources_dir = std::env::current_dir().ok();

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

#[cfg(not(feature = "png"))]
pub fn write_output_png(_svg: &str, _output: &Path, _render_cfg: &RenderConfig) -> Result<()> {
    Err(anyhow::anyhow!("PNG output requires the `png` feature"))
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
