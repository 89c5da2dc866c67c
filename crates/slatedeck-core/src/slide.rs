//! Slide document and deck container.

use crate::element::{clamp_font_size, Element, ElementId};
use crate::error::{DeckError, DeckResult};
use crate::patch::{ElementPatch, PatchChange};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// One slide: the element arena for a single layout instance.
///
/// Elements are stored keyed by id, with a separate declaration-order list
/// (back to front) for stacking, the same split the canvas document uses for
/// shapes and z-order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    /// Unique slide identifier.
    pub id: String,
    /// Name of the layout template that produced this slide.
    pub layout: String,
    /// All elements, keyed by role id.
    elements: HashMap<ElementId, Element>,
    /// Declaration order (back to front).
    order: Vec<ElementId>,
}

impl Slide {
    /// Create an empty slide for a layout.
    pub fn new(layout: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            layout: layout.into(),
            elements: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Insert an element. Role ids must be unique within a slide.
    pub fn insert(&mut self, element: Element) -> DeckResult<()> {
        let id = element.id().clone();
        if self.elements.contains_key(&id) {
            return Err(DeckError::DuplicateElement(id));
        }
        self.order.push(id.clone());
        self.elements.insert(id, element);
        Ok(())
    }

    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn get_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.elements.contains_key(id)
    }

    /// Element ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &ElementId> {
        self.order.iter()
    }

    /// Elements in declaration order (back to front).
    pub fn elements_ordered(&self) -> impl Iterator<Item = &Element> {
        self.order.iter().filter_map(|id| self.elements.get(id))
    }

    /// Find the topmost element at a point (in canvas coordinates).
    ///
    /// Searches front to back, the order a pointer event would be routed.
    pub fn element_at(&self, point: Point) -> Option<&ElementId> {
        self.order
            .iter()
            .rev()
            .find(|id| self.elements.get(*id).is_some_and(|e| e.hit_test(point)))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Union of all measured element bounds.
    pub fn bounds(&self) -> Option<Rect> {
        let mut result: Option<Rect> = None;
        for element in self.elements.values() {
            if let Some(bounds) = element.bounds() {
                result = Some(match result {
                    Some(acc) => acc.union(bounds),
                    None => bounds,
                });
            }
        }
        result
    }

    /// Apply a journaled patch to this slide's state.
    ///
    /// This is how hosts seed persisted transforms and styles after
    /// instantiating a layout: replaying the patch stream reproduces the
    /// slide exactly. Values clamp the same way live operations do; patches
    /// addressing unknown ids or the wrong element kind are skipped.
    pub fn apply_patch(&mut self, patch: &ElementPatch) {
        let Some(element) = self.elements.get_mut(&patch.element) else {
            log::debug!("patch for unknown element {} skipped", patch.element);
            return;
        };
        match &patch.change {
            PatchChange::Transform(transform) => element.transform = *transform,
            PatchChange::FontSize(size) => {
                if let Some(text) = element.text_content_mut() {
                    text.style.font_size = clamp_font_size(*size);
                }
            }
            PatchChange::FontFamily(family) => {
                if let Some(text) = element.text_content_mut() {
                    text.style.font_family = family.clone();
                }
            }
            PatchChange::Color(color) => {
                if let Some(text) = element.text_content_mut() {
                    text.style.color = *color;
                }
            }
            PatchChange::Alignment(alignment) => {
                if let Some(text) = element.text_content_mut() {
                    text.style.alignment = *alignment;
                }
            }
            PatchChange::Text(text) => {
                if let Some(content) = element.text_content_mut() {
                    content.text = text.clone();
                }
            }
            PatchChange::ImageSource(url) => {
                if let Some(image) = element.image_content_mut() {
                    image.source_url = url.clone();
                }
            }
            PatchChange::Cleared => element.clear(),
        }
    }
}

/// An ordered collection of slides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    /// Unique deck identifier.
    pub id: String,
    /// Deck name.
    pub name: String,
    /// Slides in presentation order.
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Create a new empty deck.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            slides: Vec::new(),
        }
    }

    pub fn push(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// Serialize the deck to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a deck from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
