//! Coordinate mapping between screen space and rectangular containers.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// A rectangular container positioned in screen coordinates.
///
/// Both the drag/resize engine and the color picker do their pointer math
/// through this mapper: pointer positions arrive in screen pixels and are
/// converted into container-relative offsets, either as pixels or as
/// fractions of the container size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerFrame {
    /// Top-left corner in screen coordinates.
    pub origin: Point,
    /// Container size in pixels.
    pub size: Size,
}

impl ContainerFrame {
    /// Create a frame from its screen origin and size.
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Create a frame from a screen rectangle.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            origin: Point::new(rect.x0, rect.y0),
            size: rect.size(),
        }
    }

    /// The frame as a screen rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Whether a screen point lies inside the container.
    pub fn contains(&self, screen: Point) -> bool {
        self.rect().contains(screen)
    }

    /// Convert a screen point to container-relative pixels.
    pub fn to_local(&self, screen: Point) -> Point {
        Point::new(screen.x - self.origin.x, screen.y - self.origin.y)
    }

    /// Convert a screen point to container-relative pixels, clamped to the
    /// container bounds. Used while a press continues outside the surface.
    pub fn to_local_clamped(&self, screen: Point) -> Point {
        let local = self.to_local(screen);
        Point::new(
            local.x.clamp(0.0, self.size.width),
            local.y.clamp(0.0, self.size.height),
        )
    }

    /// Convert a container-relative point back to screen coordinates.
    pub fn to_screen(&self, local: Point) -> Point {
        Point::new(local.x + self.origin.x, local.y + self.origin.y)
    }

    /// Convert a screen point to fractions of the container size in `[0, 1]`.
    ///
    /// A degenerate (zero-sized) axis maps to `0.0`.
    pub fn to_fraction(&self, screen: Point) -> (f64, f64) {
        let local = self.to_local_clamped(screen);
        let fx = if self.size.width > 0.0 {
            local.x / self.size.width
        } else {
            0.0
        };
        let fy = if self.size.height > 0.0 {
            local.y / self.size.height
        } else {
            0.0
        };
        (fx, fy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_local_identity() {
        let frame = ContainerFrame::new(Point::ZERO, Size::new(200.0, 100.0));
        let local = frame.to_local(Point::new(50.0, 25.0));
        assert!((local.x - 50.0).abs() < f64::EPSILON);
        assert!((local.y - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_to_local_with_origin() {
        let frame = ContainerFrame::new(Point::new(100.0, 40.0), Size::new(200.0, 100.0));
        let local = frame.to_local(Point::new(150.0, 65.0));
        assert!((local.x - 50.0).abs() < f64::EPSILON);
        assert!((local.y - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clamping() {
        let frame = ContainerFrame::new(Point::new(10.0, 10.0), Size::new(100.0, 100.0));
        let local = frame.to_local_clamped(Point::new(500.0, -500.0));
        assert!((local.x - 100.0).abs() < f64::EPSILON);
        assert!((local.y).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fraction() {
        let frame = ContainerFrame::new(Point::new(10.0, 10.0), Size::new(200.0, 100.0));
        let (fx, fy) = frame.to_fraction(Point::new(110.0, 35.0));
        assert!((fx - 0.5).abs() < f64::EPSILON);
        assert!((fy - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fraction_clamped_outside() {
        let frame = ContainerFrame::new(Point::ZERO, Size::new(100.0, 100.0));
        let (fx, fy) = frame.to_fraction(Point::new(-50.0, 1000.0));
        assert!((fx).abs() < f64::EPSILON);
        assert!((fy - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fraction_degenerate() {
        let frame = ContainerFrame::new(Point::ZERO, Size::new(0.0, 100.0));
        let (fx, _) = frame.to_fraction(Point::new(42.0, 0.0));
        assert!((fx).abs() < f64::EPSILON);
    }

    #[test]
    fn test_roundtrip() {
        let frame = ContainerFrame::new(Point::new(30.0, -20.0), Size::new(640.0, 480.0));
        let original = Point::new(123.0, 456.0);
        let back = frame.to_screen(frame.to_local(original));
        assert!((back.x - original.x).abs() < 1e-10);
        assert!((back.y - original.y).abs() < 1e-10);
    }
}
