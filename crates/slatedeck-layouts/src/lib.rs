//! SlateDeck Layout Templates
//!
//! Declarative slide arrangements. A template only declares its elements
//! (role id, kind, natural bounds, seed content) and instantiates them
//! into a [`Slide`](slatedeck_core::Slide); all interaction behavior comes
//! from the engine. Each instantiated template composes exactly one selection
//! scope covering all of its elements.

mod template;
mod templates;

pub use template::{LayoutTemplate, CANVAS_HEIGHT, CANVAS_MARGIN, CANVAS_WIDTH};
pub use templates::{BulletList, CardGrid, ImageLeft, TitleSlide, TwoColumn};
