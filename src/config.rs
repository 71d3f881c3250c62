use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Margins and text metrics for the three-column layout. Glyph sizes come from
/// the image table, not from here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub view_margin_x: f32,
    pub view_margin_y: f32,
    pub vertex_icon_margin_x: f32,
    pub vertex_icon_margin_y: f32,
    pub vertex_text_margin_y: f32,
    pub neighbor_margin_y: f32,
    pub vertex_text_height: f32,
    pub edge_text_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            view_margin_x: 10.0,
            view_margin_y: 15.0,
            vertex_icon_margin_x: 2.0,
            vertex_icon_margin_y: 2.0,
            vertex_text_margin_y: 5.0,
            neighbor_margin_y: 18.0,
            vertex_text_height: 14.0,
            edge_text_height: 12.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
    pub page_size: usize,
    pub image_base_path: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 300.0,
            page_size: DEFAULT_PAGE_SIZE,
            image_base_path: "images/".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    font_size: Option<f32>,
    edge_font_size: Option<f32>,
    text_color: Option<String>,
    edge_label_color: Option<String>,
    line_color: Option<String>,
    line_width: Option<f32>,
    background: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    layout: Option<LayoutConfig>,
    render: Option<RenderConfig>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile = serde_json::from_str(contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        config.theme = Theme::from_name(theme_name)
            .ok_or_else(|| anyhow::anyhow!("unknown theme `{theme_name}`"))?;
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.font_size {
            config.theme.vertex_font_size = v;
        }
        if let Some(v) = vars.edge_font_size {
            config.theme.edge_font_size = v;
        }
        if let Some(v) = vars.text_color {
            config.theme.vertex_label_color = v;
        }
        if let Some(v) = vars.edge_label_color {
            config.theme.edge_label_color = v;
        }
        if let Some(v) = vars.line_color {
            config.theme.line_color = v;
        }
        if let Some(v) = vars.line_width {
            config.theme.line_width = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
    }

    if let Some(layout) = parsed.layout {
        config.layout = layout;
    }
    if let Some(render) = parsed.render {
        config.render = render;
    }
    Ok(config)
}
