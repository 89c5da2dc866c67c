//! Layout template trait and canvas geometry.

use slatedeck_core::{DeckResult, Element, Slide};

/// Fixed slide canvas width in pixels (16:9).
pub const CANVAS_WIDTH: f64 = 960.0;
/// Fixed slide canvas height in pixels.
pub const CANVAS_HEIGHT: f64 = 540.0;
/// Default margin between content and the canvas edge.
pub const CANVAS_MARGIN: f64 = 60.0;

/// A declarative slide arrangement.
///
/// Templates declare elements; they never hold interaction logic. The
/// default `instantiate` builds a slide from the declared elements, which is
/// all any template needs.
pub trait LayoutTemplate {
    /// Template name, recorded on the slide it produces.
    fn name(&self) -> &'static str;

    /// The elements this layout declares, back to front, with their natural
    /// bounds and seed content.
    fn elements(&self) -> Vec<Element>;

    /// Build a slide from the declared elements.
    ///
    /// Fails only on a declaration bug: duplicate role ids.
    fn instantiate(&self) -> DeckResult<Slide> {
        let mut slide = Slide::new(self.name());
        for element in self.elements() {
            slide.insert(element)?;
        }
        log::debug!("instantiated layout {} ({} elements)", self.name(), slide.len());
        Ok(slide)
    }
}
