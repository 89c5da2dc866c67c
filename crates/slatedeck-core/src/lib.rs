//! SlateDeck Core Library
//!
//! Platform-agnostic selection/transform engine and document model for the
//! SlateDeck slide editor. Hosts render slides however they like; this crate
//! owns the interaction state and forwards every committed change through a
//! single update sink.

pub mod color;
pub mod drag;
pub mod editor;
pub mod element;
pub mod error;
pub mod geometry;
pub mod input;
pub mod patch;
pub mod popup;
pub mod resize;
pub mod selection;
pub mod slide;

pub use color::{ColorPicker, Hsv, PickerSurface, Rgba};
pub use drag::DragSession;
pub use editor::{Editor, ImageView, TextView, ToolbarProps};
pub use element::{
    Alignment, Element, ElementContent, ElementId, ElementKind, ImageContent, TextContent,
    TextStyle, Transform, clamp_font_size, MAX_FONT_SIZE, MIN_FONT_SIZE,
};
pub use error::{DeckError, DeckResult};
pub use geometry::ContainerFrame;
pub use input::{Modifiers, MouseButton, PointerEvent};
pub use patch::{null_sink, ElementPatch, PatchChange, UpdateSink};
pub use popup::{PopupAnchor, PopupTracker};
pub use resize::{Corner, Edge, ResizeHandle, ResizeSession};
pub use selection::{ElementController, ElementState, SelectionScope};
pub use slide::{Deck, Slide};
