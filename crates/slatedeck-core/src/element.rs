//! Slide element model.

use crate::color::Rgba;
use kurbo::{Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest font size a text element may take, in pixels.
pub const MIN_FONT_SIZE: f64 = 8.0;
/// Largest font size a text element may take, in pixels.
pub const MAX_FONT_SIZE: f64 = 72.0;

/// Clamp a requested font size into the supported range.
pub fn clamp_font_size(size: f64) -> f64 {
    size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}

/// Stable element identifier, scoped to the owning slide.
///
/// Ids name the element's role in its layout (`"title"`, `"bullet-2-title"`,
/// `"image-mockup"`), so hosts can merge persisted patches across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Create an id from a role name.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

/// The kind of content an element carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Image,
}

/// Pixel offset from an element's natural (flow) position.
///
/// Starts at zero and accumulates across committed drags; it is never
/// recomputed from the natural layout, so re-instantiating a layout and
/// replaying patches reproduces the element's position exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub dx: f64,
    pub dy: f64,
}

impl Transform {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }

    /// The transform as a displacement vector.
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.dx, self.dy)
    }

    /// This transform translated by a pointer delta.
    pub fn translated(self, delta: Vec2) -> Self {
        Self::new(self.dx + delta.x, self.dy + delta.y)
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Style overrides for a text element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels, kept within `[MIN_FONT_SIZE, MAX_FONT_SIZE]`.
    pub font_size: f64,
    /// Host-defined font family name.
    pub font_family: String,
    /// Text color.
    pub color: Rgba,
    /// Horizontal alignment.
    pub alignment: Alignment,
}

impl TextStyle {
    /// Default font size for body text.
    pub const DEFAULT_FONT_SIZE: f64 = 16.0;
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: Self::DEFAULT_FONT_SIZE,
            font_family: "Inter".to_string(),
            color: Rgba::black(),
            alignment: Alignment::default(),
        }
    }
}

/// Text content plus its style overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub text: String,
    pub style: TextStyle,
}

/// Image content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageContent {
    pub source_url: String,
}

/// Content payload of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ElementContent {
    Text(TextContent),
    Image(ImageContent),
}

impl ElementContent {
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Text(_) => ElementKind::Text,
            Self::Image(_) => ElementKind::Image,
        }
    }

    /// Clear the content in place, keeping the element record alive.
    pub fn clear(&mut self) {
        match self {
            Self::Text(text) => text.text.clear(),
            Self::Image(image) => image.source_url.clear(),
        }
    }
}

/// One addressable, independently selectable unit on a slide.
///
/// Selection and interaction state is not stored here; it lives in the
/// owning [`SelectionScope`](crate::selection::SelectionScope) registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    id: ElementId,
    /// Content payload and (for text) style overrides.
    pub content: ElementContent,
    /// Offset from the natural layout position.
    pub transform: Transform,
    /// The rectangle the owning layout declared for this element, if the
    /// layout has been measured. `None` means the element is not mounted yet.
    pub natural_bounds: Option<Rect>,
}

impl Element {
    /// Create a text element with default style.
    pub fn text(id: impl Into<ElementId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: ElementContent::Text(TextContent {
                text: text.into(),
                style: TextStyle::default(),
            }),
            transform: Transform::ZERO,
            natural_bounds: None,
        }
    }

    /// Create an image element.
    pub fn image(id: impl Into<ElementId>, source_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: ElementContent::Image(ImageContent {
                source_url: source_url.into(),
            }),
            transform: Transform::ZERO,
            natural_bounds: None,
        }
    }

    /// Set the natural bounds declared by the layout.
    pub fn with_natural_bounds(mut self, bounds: Rect) -> Self {
        self.natural_bounds = Some(bounds);
        self
    }

    /// Set the text style (text elements only; no-op otherwise).
    pub fn with_style(mut self, style: TextStyle) -> Self {
        if let ElementContent::Text(text) = &mut self.content {
            text.style = style;
        }
        self
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.content.kind()
    }

    /// Current bounds: natural bounds translated by the transform.
    /// `None` until the layout has been measured.
    pub fn bounds(&self) -> Option<Rect> {
        self.natural_bounds
            .map(|rect| rect + self.transform.to_vec2())
    }

    /// Text payload, if this is a text element.
    pub fn text_content(&self) -> Option<&TextContent> {
        match &self.content {
            ElementContent::Text(text) => Some(text),
            ElementContent::Image(_) => None,
        }
    }

    pub fn text_content_mut(&mut self) -> Option<&mut TextContent> {
        match &mut self.content {
            ElementContent::Text(text) => Some(text),
            ElementContent::Image(_) => None,
        }
    }

    /// Image payload, if this is an image element.
    pub fn image_content(&self) -> Option<&ImageContent> {
        match &self.content {
            ElementContent::Image(image) => Some(image),
            ElementContent::Text(_) => None,
        }
    }

    pub fn image_content_mut(&mut self) -> Option<&mut ImageContent> {
        match &mut self.content {
            ElementContent::Image(image) => Some(image),
            ElementContent::Text(_) => None,
        }
    }

    /// Clear content and reset the transform. The record itself survives.
    pub fn clear(&mut self) {
        self.content.clear();
        self.transform = Transform::ZERO;
    }

    /// Whether a point (in canvas coordinates) hits this element.
    pub fn hit_test(&self, point: kurbo::Point) -> bool {
        self.bounds().is_some_and(|bounds| bounds.contains(point))
    }
}
