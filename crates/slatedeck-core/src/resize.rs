//! The resize engine: pointer-driven font-size adjustment.

use crate::element::clamp_font_size;
use kurbo::{Point, Rect, Vec2};

/// Pixels of pointer travel per point of font size.
pub const RESIZE_PX_PER_PT: f64 = 2.0;

/// Handle hit tolerance in screen pixels.
pub const HANDLE_HIT_TOLERANCE: f64 = 12.0;

/// Corner positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Edge midpoint positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// A resize handle on the selected element's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    Corner(Corner),
    Edge(Edge),
}

impl ResizeHandle {
    /// Project a pointer delta onto this handle's resize axis,
    /// outward-positive: dragging away from the element grows it.
    ///
    /// Edges use their own axis; corners take the mean of their two
    /// adjacent edges.
    pub fn axis_delta(&self, delta: Vec2) -> f64 {
        match self {
            Self::Edge(Edge::Right) => delta.x,
            Self::Edge(Edge::Left) => -delta.x,
            Self::Edge(Edge::Bottom) => delta.y,
            Self::Edge(Edge::Top) => -delta.y,
            Self::Corner(Corner::TopLeft) => (-delta.x - delta.y) / 2.0,
            Self::Corner(Corner::TopRight) => (delta.x - delta.y) / 2.0,
            Self::Corner(Corner::BottomLeft) => (-delta.x + delta.y) / 2.0,
            Self::Corner(Corner::BottomRight) => (delta.x + delta.y) / 2.0,
        }
    }

    /// Handle position on a bounding rectangle.
    pub fn position(&self, bounds: Rect) -> Point {
        let center = bounds.center();
        match self {
            Self::Corner(Corner::TopLeft) => Point::new(bounds.x0, bounds.y0),
            Self::Corner(Corner::TopRight) => Point::new(bounds.x1, bounds.y0),
            Self::Corner(Corner::BottomLeft) => Point::new(bounds.x0, bounds.y1),
            Self::Corner(Corner::BottomRight) => Point::new(bounds.x1, bounds.y1),
            Self::Edge(Edge::Top) => Point::new(center.x, bounds.y0),
            Self::Edge(Edge::Right) => Point::new(bounds.x1, center.y),
            Self::Edge(Edge::Bottom) => Point::new(center.x, bounds.y1),
            Self::Edge(Edge::Left) => Point::new(bounds.x0, center.y),
        }
    }

    /// All eight handles.
    pub fn all() -> [ResizeHandle; 8] {
        [
            Self::Corner(Corner::TopLeft),
            Self::Corner(Corner::TopRight),
            Self::Corner(Corner::BottomLeft),
            Self::Corner(Corner::BottomRight),
            Self::Edge(Edge::Top),
            Self::Edge(Edge::Right),
            Self::Edge(Edge::Bottom),
            Self::Edge(Edge::Left),
        ]
    }

    /// Find the handle hit by a point on the given bounds, if any.
    pub fn hit_test(bounds: Rect, point: Point, tolerance: f64) -> Option<ResizeHandle> {
        Self::all().into_iter().find(|handle| {
            let pos = handle.position(bounds);
            let dx = point.x - pos.x;
            let dy = point.y - pos.y;
            dx * dx + dy * dy <= tolerance * tolerance
        })
    }
}

/// One resize session, from press on a handle to release.
///
/// Resize never repositions the element: the axis-projected pixel delta is
/// translated into a font-size delta through a fixed ratio and clamped.
#[derive(Debug, Clone, Copy)]
pub struct ResizeSession {
    start_pointer: Point,
    start_font_size: f64,
    handle: ResizeHandle,
}

impl ResizeSession {
    /// Begin a session at the given pointer position, on a handle, with the
    /// element's current font size.
    pub fn begin(pointer: Point, handle: ResizeHandle, font_size: f64) -> Self {
        Self {
            start_pointer: pointer,
            start_font_size: font_size,
            handle,
        }
    }

    pub fn handle(&self) -> ResizeHandle {
        self.handle
    }

    /// The clamped font size for the current pointer position.
    pub fn font_size_at(&self, pointer: Point) -> f64 {
        let delta = self.handle.axis_delta(pointer - self.start_pointer);
        clamp_font_size(self.start_font_size + delta / RESIZE_PX_PER_PT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{MAX_FONT_SIZE, MIN_FONT_SIZE};

    #[test]
    fn test_edge_axis_projection() {
        let delta = Vec2::new(10.0, -4.0);
        assert!((ResizeHandle::Edge(Edge::Right).axis_delta(delta) - 10.0).abs() < f64::EPSILON);
        assert!((ResizeHandle::Edge(Edge::Left).axis_delta(delta) + 10.0).abs() < f64::EPSILON);
        assert!((ResizeHandle::Edge(Edge::Top).axis_delta(delta) - 4.0).abs() < f64::EPSILON);
        assert!((ResizeHandle::Edge(Edge::Bottom).axis_delta(delta) + 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_corner_axis_projection() {
        // Dragging the bottom-right corner down-right grows on both axes.
        let grow = ResizeHandle::Corner(Corner::BottomRight).axis_delta(Vec2::new(10.0, 6.0));
        assert!((grow - 8.0).abs() < f64::EPSILON);
        // The opposite corner sees the same motion as shrinking.
        let shrink = ResizeHandle::Corner(Corner::TopLeft).axis_delta(Vec2::new(10.0, 6.0));
        assert!((shrink + 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_font_size_tracks_pointer() {
        let session = ResizeSession::begin(
            Point::new(100.0, 100.0),
            ResizeHandle::Edge(Edge::Right),
            20.0,
        );
        // 20 px of travel at 2 px/pt is +10 pt.
        let size = session.font_size_at(Point::new(120.0, 100.0));
        assert!((size - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_font_size_clamped() {
        let session = ResizeSession::begin(
            Point::new(0.0, 0.0),
            ResizeHandle::Edge(Edge::Right),
            20.0,
        );
        assert!(
            (session.font_size_at(Point::new(10_000.0, 0.0)) - MAX_FONT_SIZE).abs() < f64::EPSILON
        );
        assert!(
            (session.font_size_at(Point::new(-10_000.0, 0.0)) - MIN_FONT_SIZE).abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn test_handle_hit_test() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(
            ResizeHandle::hit_test(bounds, Point::new(99.0, 49.0), 8.0),
            Some(ResizeHandle::Corner(Corner::BottomRight))
        );
        assert_eq!(
            ResizeHandle::hit_test(bounds, Point::new(50.0, 1.0), 8.0),
            Some(ResizeHandle::Edge(Edge::Top))
        );
        assert_eq!(
            ResizeHandle::hit_test(bounds, Point::new(50.0, 25.0), 8.0),
            None
        );
    }
}
