//! The drag engine: pointer-driven repositioning.

use crate::element::Transform;
use kurbo::{Point, Vec2};

/// One drag session, from press to release.
///
/// The session records the pointer position and the element's transform at
/// drag start; every move derives the new transform from those anchors, so
/// the result is independent of how many intermediate move events the input
/// source delivers. Deltas are raw screen pixels (the canvas is unscaled),
/// and no snapping or bounds-clamping is applied; elements may be dragged
/// off-canvas.
#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    start_pointer: Point,
    start_transform: Transform,
}

impl DragSession {
    /// Begin a session at the given pointer position with the element's
    /// committed transform.
    pub fn begin(pointer: Point, transform: Transform) -> Self {
        Self {
            start_pointer: pointer,
            start_transform: transform,
        }
    }

    /// The transform the session recorded at drag start.
    pub fn start_transform(&self) -> Transform {
        self.start_transform
    }

    /// Pointer displacement since drag start.
    pub fn delta(&self, pointer: Point) -> Vec2 {
        pointer - self.start_pointer
    }

    /// The element transform for the current pointer position:
    /// `start_transform + (pointer − start_pointer)`.
    pub fn transform_at(&self, pointer: Point) -> Transform {
        self.start_transform.translated(self.delta(pointer))
    }
}
