use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub vertex_font_size: f32,
    pub edge_font_size: f32,
    pub vertex_label_color: String,
    pub edge_label_color: String,
    pub line_color: String,
    pub line_width: f32,
    pub background: String,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            font_family: "\"Helvetica Neue\", Helvetica, Arial, sans-serif".to_string(),
            vertex_font_size: 12.0,
            edge_font_size: 10.0,
            vertex_label_color: "#222222".to_string(),
            edge_label_color: "#666666".to_string(),
            line_color: "#9AA5B1".to_string(),
            line_width: 1.0,
            background: "#FFFFFF".to_string(),
        }
    }

    pub fn dark() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            vertex_font_size: 12.0,
            edge_font_size: 10.0,
            vertex_label_color: "#E6EDF3".to_string(),
            edge_label_color: "#8B949E".to_string(),
            line_color: "#58A6FF".to_string(),
            line_width: 1.2,
            background: "#0D1117".to_string(),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" | "default" => Some(Self::light()),
            "dark" => Some(Self::dark()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
