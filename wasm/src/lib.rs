use serde::Deserialize;
use subgraph_renderer::{PageOffsets, RenderOptions, Theme, render_with_options};
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubgraphRenderOptions {
    focus: String,
    incoming_offset: Option<usize>,
    outgoing_offset: Option<usize>,
    page_size: Option<usize>,
    width: Option<f32>,
    height: Option<f32>,
    theme: Option<String>,
    image_base_path: Option<String>,
}

fn build_render_options(options: SubgraphRenderOptions) -> RenderOptions {
    let mut render_options = RenderOptions::new(options.focus);
    render_options.offsets = PageOffsets::new(
        options.incoming_offset.unwrap_or(0),
        options.outgoing_offset.unwrap_or(0),
    );

    let config = &mut render_options.config;
    if let Some(theme) = options.theme.as_deref().and_then(Theme::from_name) {
        config.theme = theme;
    }
    if let Some(page_size) = options.page_size {
        config.render.page_size = page_size;
    }
    if let Some(width) = options.width {
        config.render.width = width;
    }
    if let Some(height) = options.height {
        config.render.height = height;
    }
    if let Some(base) = options.image_base_path {
        config.render.image_base_path = base;
    }

    render_options
}

#[wasm_bindgen]
pub fn render_subgraph_svg(document: &str, options_json: &str) -> Result<String, JsValue> {
    let options = serde_json::from_str::<SubgraphRenderOptions>(options_json)
        .map_err(|error| JsValue::from_str(&error.to_string()))?;
    render_with_options(document, build_render_options(options))
        .map_err(|error| JsValue::from_str(&error.to_string()))
}

#[cfg(test)]
mod tests {
    use subgraph_renderer::render_with_options;

    use crate::{SubgraphRenderOptions, build_render_options};

    const DOCUMENT: &str = r#"{
        vertices: [{ id: "a", label: "Alpha" }, { id: "b", label: "Beta" }, { id: "c", label: "Gamma" }],
        edges: [
            { id: "ab", label: "yes", source: "a", dest: "b" },
            { id: "cb", label: "no", source: "c", dest: "b" },
        ],
        images: [
            { id: "vertexIcon", filename: "vertex.svg", width: 32, height: 32 },
            { id: "arrow", filename: "arrow.svg", width: 16, height: 8 },
        ],
    }"#;

    #[test]
    fn renders_incoming_page_with_edge_labels() {
        let options: SubgraphRenderOptions =
            serde_json::from_str(r#"{"focus":"b","pageSize":1,"incomingOffset":1,"theme":"dark"}"#)
                .unwrap();
        let svg = render_with_options(DOCUMENT, build_render_options(options))
            .expect("neighborhood should render");

        assert!(svg.contains("<svg"));
        assert!(svg.contains("Gamma"));
        assert!(svg.contains(">no</text>"));
        assert!(!svg.contains("Alpha"));
    }
}
