//! Floating toolbar position tracking.

use crate::element::{ElementId, Transform};
use kurbo::{Point, Rect, Size};

/// Vertical gap between an element's top edge and the toolbar.
pub const TOOLBAR_OFFSET_Y: f64 = 48.0;
/// Margin kept between the toolbar and the viewport edge when clamping.
pub const VIEWPORT_MARGIN: f64 = 8.0;
/// Default toolbar footprint used for viewport clamping.
pub const DEFAULT_TOOLBAR_SIZE: Size = Size::new(320.0, 40.0);

/// The toolbar anchor derived from the active element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupAnchor {
    /// Anchor computed at show time (or at the last re-baseline).
    pub original: Point,
    /// Anchor while the element is being dragged.
    pub live: Point,
}

/// Keeps the floating toolbar visually attached to the selected element,
/// surviving drags.
///
/// The tracker never measures geometry itself: bounds are passed in at show
/// time (already measured by the host), and transform ticks arrive from the
/// editor while a drag is in flight. When a drag completes the anchor is
/// re-baselined to the live position, so the next drag's delta is measured
/// from the element's current rendered position and repeated drags do not
/// drift.
#[derive(Debug, Clone)]
pub struct PopupTracker {
    viewport: Size,
    toolbar_size: Size,
    target: Option<ElementId>,
    anchor: Option<PopupAnchor>,
    /// Transform of the target at show/re-baseline time; live tracking is
    /// relative to this.
    baseline: Transform,
}

impl PopupTracker {
    /// Create a tracker for a viewport, using the default toolbar footprint.
    pub fn new(viewport: Size) -> Self {
        Self::with_toolbar_size(viewport, DEFAULT_TOOLBAR_SIZE)
    }

    /// Create a tracker with an explicit toolbar footprint.
    pub fn with_toolbar_size(viewport: Size, toolbar_size: Size) -> Self {
        Self {
            viewport,
            toolbar_size,
            target: None,
            anchor: None,
            baseline: Transform::ZERO,
        }
    }

    /// Update the viewport (window resize).
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Whether the toolbar is currently shown.
    pub fn is_open(&self) -> bool {
        self.anchor.is_some()
    }

    /// The element the toolbar is attached to.
    pub fn target(&self) -> Option<&ElementId> {
        self.target.as_ref()
    }

    /// The toolbar's current screen position.
    pub fn position(&self) -> Option<Point> {
        self.anchor.map(|anchor| anchor.live)
    }

    pub fn anchor(&self) -> Option<PopupAnchor> {
        self.anchor
    }

    /// Attach the toolbar to an element.
    ///
    /// `bounds` is the element's measured bounds (transform included);
    /// `transform` is its transform at this moment, the baseline for live
    /// tracking. An unmeasurable element (`None` bounds) drops the request
    /// silently; no popup is shown at a wrong position.
    pub fn show(&mut self, id: ElementId, bounds: Option<Rect>, transform: Transform) -> bool {
        let Some(bounds) = bounds else {
            log::debug!("popup request for unmeasured element {id} dropped");
            return false;
        };
        let original = self.clamp_to_viewport(Point::new(bounds.x0, bounds.y0 - TOOLBAR_OFFSET_Y));
        self.target = Some(id);
        self.anchor = Some(PopupAnchor {
            original,
            live: original,
        });
        self.baseline = transform;
        true
    }

    /// Track a transform tick of the active target during a drag:
    /// `live = original + (transform − baseline)`.
    pub fn track(&mut self, id: &ElementId, transform: Transform) {
        if self.target.as_ref() != Some(id) {
            return;
        }
        if let Some(anchor) = &mut self.anchor {
            let delta = transform.to_vec2() - self.baseline.to_vec2();
            anchor.live = anchor.original + delta;
        }
    }

    /// Re-baseline after a completed drag: the live position becomes the new
    /// original, and the target's settled transform becomes the new baseline.
    pub fn rebaseline(&mut self, id: &ElementId, transform: Transform) {
        if self.target.as_ref() != Some(id) {
            return;
        }
        if let Some(anchor) = &mut self.anchor {
            anchor.original = anchor.live;
            self.baseline = transform;
        }
    }

    /// Detach and hide the toolbar.
    pub fn clear(&mut self) {
        self.target = None;
        self.anchor = None;
        self.baseline = Transform::ZERO;
    }

    fn clamp_to_viewport(&self, point: Point) -> Point {
        let max_x = (self.viewport.width - self.toolbar_size.width - VIEWPORT_MARGIN)
            .max(VIEWPORT_MARGIN);
        let max_y = (self.viewport.height - self.toolbar_size.height - VIEWPORT_MARGIN)
            .max(VIEWPORT_MARGIN);
        Point::new(
            point.x.clamp(VIEWPORT_MARGIN, max_x),
            point.y.clamp(VIEWPORT_MARGIN, max_y),
        )
    }
}
