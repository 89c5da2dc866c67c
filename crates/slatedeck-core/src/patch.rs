//! Committed-change patches forwarded to the host.
//!
//! Every mutation the engine performs, down to individual drag ticks, is
//! echoed synchronously through a single update sink. The
//! patch pairs the stable element id with the mutated field, so hosts can
//! merge patches into their own state without losing unrelated edits, and
//! replay a journaled stream to reconstruct a slide.

use crate::color::Rgba;
use crate::element::{Alignment, ElementId, Transform};
use serde::{Deserialize, Serialize};

/// The mutated field of a single element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum PatchChange {
    /// Pixel offset from the natural position.
    Transform(Transform),
    /// Font size in pixels (already clamped).
    FontSize(f64),
    /// Host-defined font family name.
    FontFamily(String),
    /// Text color as hex on the wire.
    Color(Rgba),
    /// Horizontal alignment.
    Alignment(Alignment),
    /// Replaced text content.
    Text(String),
    /// Replaced image source URL.
    ImageSource(String),
    /// Content cleared and transform reset by a delete.
    Cleared,
}

/// One committed change to one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementPatch {
    pub element: ElementId,
    #[serde(flatten)]
    pub change: PatchChange,
}

impl ElementPatch {
    pub fn new(element: ElementId, change: PatchChange) -> Self {
        Self { element, change }
    }
}

/// The host-supplied update callback.
///
/// Called synchronously within the same event-handling turn that produced the
/// mutation, never batched or debounced, so drag feedback is visually
/// immediate.
pub type UpdateSink = Box<dyn FnMut(ElementPatch)>;

/// A sink that drops every patch, for hosts that do not persist.
pub fn null_sink() -> UpdateSink {
    Box::new(|_| {})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_wire_format() {
        let patch = ElementPatch::new(
            ElementId::new("title"),
            PatchChange::Transform(Transform::new(40.0, -15.0)),
        );
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["element"], "title");
        assert_eq!(json["field"], "transform");
        assert_eq!(json["value"]["dx"], 40.0);
        assert_eq!(json["value"]["dy"], -15.0);
    }

    #[test]
    fn test_color_patch_is_hex() {
        let patch = ElementPatch::new(
            ElementId::new("title"),
            PatchChange::Color(Rgba::new(255, 0, 0)),
        );
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["value"], "#ff0000");
    }

    #[test]
    fn test_patch_roundtrip() {
        let patch = ElementPatch::new(ElementId::new("bullet-2-title"), PatchChange::Cleared);
        let json = serde_json::to_string(&patch).unwrap();
        let back: ElementPatch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, patch);
    }
}
