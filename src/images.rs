use crate::ir::VertexImage;
use crate::resolve::LookupFn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageIdentifier {
    VertexIcon,
    Arrow,
}

impl ImageIdentifier {
    pub const ALL: [ImageIdentifier; 2] = [ImageIdentifier::VertexIcon, ImageIdentifier::Arrow];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::VertexIcon => "vertexIcon",
            Self::Arrow => "arrow",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageError {
    #[error("glyph metadata for `{id}` was not supplied")]
    Missing { id: &'static str },
}

/// Glyph metadata for every fixed identifier, fetched once per renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTable {
    vertex_icon: VertexImage,
    arrow: VertexImage,
}

impl ImageTable {
    pub fn load(lookup: &LookupFn<VertexImage>) -> Result<Self, ImageError> {
        let fetch = |id: ImageIdentifier| {
            lookup(id.as_str()).ok_or(ImageError::Missing { id: id.as_str() })
        };
        Ok(Self {
            vertex_icon: fetch(ImageIdentifier::VertexIcon)?,
            arrow: fetch(ImageIdentifier::Arrow)?,
        })
    }

    pub fn get(&self, id: ImageIdentifier) -> &VertexImage {
        match id {
            ImageIdentifier::VertexIcon => &self.vertex_icon,
            ImageIdentifier::Arrow => &self.arrow,
        }
    }

    pub fn vertex_icon(&self) -> &VertexImage {
        &self.vertex_icon
    }

    pub fn arrow(&self) -> &VertexImage {
        &self.arrow
    }

    pub fn iter(&self) -> impl Iterator<Item = (ImageIdentifier, &VertexImage)> {
        ImageIdentifier::ALL.into_iter().map(|id| (id, self.get(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(id: &str, width: f32, height: f32) -> VertexImage {
        VertexImage {
            id: id.to_string(),
            filename: format!("{id}.svg"),
            width,
            height,
        }
    }

    #[test]
    fn loads_every_identifier_once() {
        let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let seen_in_lookup = std::sync::Arc::clone(&seen);
        let lookup = move |id: &str| {
            seen_in_lookup.lock().unwrap().push(id.to_string());
            Some(glyph(id, 32.0, 24.0))
        };
        let table = ImageTable::load(&lookup).unwrap();
        assert_eq!(table.vertex_icon().id, "vertexIcon");
        assert_eq!(table.arrow().filename, "arrow.svg");
        assert_eq!(*seen.lock().unwrap(), vec!["vertexIcon", "arrow"]);
    }

    #[test]
    fn missing_glyph_is_an_error() {
        let lookup = |id: &str| (id == "vertexIcon").then(|| glyph(id, 32.0, 32.0));
        let err = ImageTable::load(&lookup).unwrap_err();
        assert_eq!(err, ImageError::Missing { id: "arrow" });
    }
}
