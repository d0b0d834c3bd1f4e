//! Positioned canvas elements.

mod container;
mod image;
mod text;

pub use container::ContainerProps;
pub use image::{ImageFormat, ImageProps, data_url};
pub use text::{TextAlign, TextProps};

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Stable element identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Generate a fresh, never-before-used identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Element variant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Image,
    Container,
}

impl ElementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Image => "image",
            ElementKind::Container => "container",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific attributes. Opaque to the state manager; only the
/// renderer interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementPayload {
    Text(TextProps),
    Image(ImageProps),
    Container(ContainerProps),
}

impl ElementPayload {
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementPayload::Text(_) => ElementKind::Text,
            ElementPayload::Image(_) => ElementKind::Image,
            ElementPayload::Container(_) => ElementKind::Container,
        }
    }
}

/// Structural violations found when checking elements that arrive from
/// outside the process (saved states, content imports).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ElementError {
    #[error("Element has an empty id")]
    EmptyId,
    #[error("Element {id} has invalid size {width}x{height}")]
    InvalidSize { id: String, width: f64, height: f64 },
    #[error("Element {id} has a non-finite position")]
    InvalidPosition { id: String },
    #[error("Duplicate element id: {0}")]
    DuplicateId(String),
}

/// A positioned visual unit on the logical canvas.
///
/// Serializes to the flat shape the editor front-end exchanges:
/// `{id, type, position, size, zIndex, ...attributes}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    id: ElementId,
    /// Top-left corner in logical canvas units.
    pub position: Point,
    /// Extent in logical canvas units.
    pub size: Size,
    /// Paint order; higher paints later.
    pub z_index: i64,
    #[serde(flatten)]
    payload: ElementPayload,
}

impl Element {
    /// Create an element.
    ///
    /// # Panics
    ///
    /// Panics if the id is empty or the size is not strictly positive.
    /// Both are caller bugs, not runtime conditions.
    pub fn new(id: impl Into<ElementId>, position: Point, size: Size, payload: ElementPayload) -> Self {
        let element = Self {
            id: id.into(),
            position,
            size,
            z_index: 0,
            payload,
        };
        if let Err(e) = element.validate() {
            panic!("invalid element: {e}");
        }
        element
    }

    /// Create a text element with a fresh id.
    pub fn text(position: Point, size: Size, content: impl Into<String>) -> Self {
        Self::new(
            ElementId::generate(),
            position,
            size,
            ElementPayload::Text(TextProps::new(content)),
        )
    }

    /// Create an image element with a fresh id.
    pub fn image(position: Point, size: Size, image_url: impl Into<String>) -> Self {
        Self::new(
            ElementId::generate(),
            position,
            size,
            ElementPayload::Image(ImageProps::new(image_url)),
        )
    }

    /// Create a container element with a fresh id.
    pub fn container(position: Point, size: Size, props: ContainerProps) -> Self {
        Self::new(ElementId::generate(), position, size, ElementPayload::Container(props))
    }

    /// Set the paint order.
    pub fn with_z_index(mut self, z_index: i64) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.payload.kind()
    }

    pub fn payload(&self) -> &ElementPayload {
        &self.payload
    }

    /// Text attributes, if this is a text element.
    pub fn text_props_mut(&mut self) -> Option<&mut TextProps> {
        match &mut self.payload {
            ElementPayload::Text(props) => Some(props),
            _ => None,
        }
    }

    /// Image attributes, if this is an image element.
    pub fn image_props_mut(&mut self) -> Option<&mut ImageProps> {
        match &mut self.payload {
            ElementPayload::Image(props) => Some(props),
            _ => None,
        }
    }

    /// Container attributes, if this is a container element.
    pub fn container_props_mut(&mut self) -> Option<&mut ContainerProps> {
        match &mut self.payload {
            ElementPayload::Container(props) => Some(props),
            _ => None,
        }
    }

    /// Bounding box in logical canvas units.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// Check the structural invariant: non-empty id, finite position and a
    /// strictly positive size.
    pub fn validate(&self) -> Result<(), ElementError> {
        if self.id.is_empty() {
            return Err(ElementError::EmptyId);
        }
        let Size { width, height } = self.size;
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(ElementError::InvalidSize {
                id: self.id.to_string(),
                width,
                height,
            });
        }
        if !(self.position.x.is_finite() && self.position.y.is_finite()) {
            return Err(ElementError::InvalidPosition { id: self.id.to_string() });
        }
        Ok(())
    }
}

/// Validate every element of a collection and check id uniqueness.
pub fn validate_collection(elements: &[Element]) -> Result<(), ElementError> {
    let mut seen = HashSet::with_capacity(elements.len());
    for element in elements {
        element.validate()?;
        if !seen.insert(element.id()) {
            return Err(ElementError::DuplicateId(element.id().to_string()));
        }
    }
    Ok(())
}

/// Elements sorted back to front.
///
/// Sorting is stable, so elements sharing a `z_index` paint in insertion
/// order (earlier first, later on top).
pub fn paint_order(elements: &[Element]) -> Vec<&Element> {
    let mut ordered: Vec<&Element> = elements.iter().collect();
    ordered.sort_by_key(|e| e.z_index);
    ordered
}

/// A `z_index` that paints above every element in the collection.
pub fn next_z_index(elements: &[Element]) -> i64 {
    elements.iter().map(|e| e.z_index).max().map_or(1, |z| z.saturating_add(1))
}
