//! The editor: one slide's interaction engine.
//!
//! Composes the slide document, the selection scope, the pointer session
//! slot, and the popup tracker, and funnels every committed change through
//! the host-supplied update sink. Layout hosts only declare elements and
//! route pointer events here.

use crate::color::Rgba;
use crate::drag::DragSession;
use crate::element::{
    clamp_font_size, Alignment, ElementId, ElementKind, TextStyle, Transform,
};
use crate::input::{MouseButton, PointerEvent};
use crate::patch::{null_sink, ElementPatch, PatchChange, UpdateSink};
use crate::popup::PopupTracker;
use crate::resize::{ResizeHandle, ResizeSession, HANDLE_HIT_TOLERANCE};
use crate::selection::{ElementState, SelectionScope};
use crate::slide::Slide;
use kurbo::{Point, Size};

/// The pointer session in flight, if any. Only one drag or resize may be
/// active at a time per pointer; the slot enforces it.
#[derive(Debug, Clone, Copy)]
enum PointerSession {
    Drag(DragSession),
    Resize(ResizeSession),
}

#[derive(Debug, Clone)]
struct ActiveSession {
    element: ElementId,
    session: PointerSession,
}

/// Toolbar view model: a stateless snapshot for the host to render.
///
/// Style fields are `None` when the active element is an image.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarProps {
    pub target: ElementId,
    pub position: Point,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub color: Option<Rgba>,
    pub alignment: Option<Alignment>,
}

/// Read-back view of a text element, so host rendering is a pure function
/// of engine state.
#[derive(Debug, Clone, PartialEq)]
pub struct TextView {
    pub is_selected: bool,
    pub is_dragging: bool,
    pub is_resizing: bool,
    pub transform: Transform,
    pub text: String,
    pub style: TextStyle,
}

/// Read-back view of an image element.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageView {
    pub is_selected: bool,
    pub is_dragging: bool,
    pub transform: Transform,
    pub source_url: String,
}

/// Interaction engine for one slide.
pub struct Editor {
    slide: Slide,
    scope: SelectionScope,
    popup: PopupTracker,
    session: Option<ActiveSession>,
    last_pointer: Point,
    on_update: UpdateSink,
}

impl Editor {
    /// Create an editor over a slide, registering every element with the
    /// selection scope. Changes are dropped until a sink is installed.
    pub fn new(slide: Slide, viewport: Size) -> Self {
        let mut scope = SelectionScope::new();
        for id in slide.ids() {
            scope.register(id.clone());
        }
        Self {
            slide,
            scope,
            popup: PopupTracker::new(viewport),
            session: None,
            last_pointer: Point::ZERO,
            on_update: null_sink(),
        }
    }

    /// Install the host's update sink.
    pub fn with_sink(mut self, sink: UpdateSink) -> Self {
        self.on_update = sink;
        self
    }

    pub fn set_update_sink(&mut self, sink: UpdateSink) {
        self.on_update = sink;
    }

    pub fn slide(&self) -> &Slide {
        &self.slide
    }

    pub fn selection(&self) -> &SelectionScope {
        &self.scope
    }

    pub fn popup(&self) -> &PopupTracker {
        &self.popup
    }

    /// Whether a drag or resize session is in flight.
    pub fn is_interacting(&self) -> bool {
        self.session.is_some()
    }

    /// Update the viewport used for toolbar clamping (window resize).
    pub fn set_viewport(&mut self, viewport: Size) {
        self.popup.set_viewport(viewport);
    }

    // ---- selection -------------------------------------------------------

    /// Click an element: make it the exclusive selection and attach the
    /// toolbar. Re-clicking the active element is a no-op (no popup flicker).
    pub fn select(&mut self, id: &ElementId) {
        let newly = self.scope.controller(id.clone()).select();
        match self.scope.active() {
            Some(active) if newly => {
                let active = active.clone();
                let (bounds, transform) = match self.slide.get(&active) {
                    Some(element) => (element.bounds(), element.transform),
                    None => (None, Transform::ZERO),
                };
                self.popup.show(active, bounds, transform);
            }
            Some(_) => {} // already active, popup stays put
            None => self.popup.clear(), // unknown id deselected everything
        }
    }

    /// Click outside all interactive regions: deselect everything and hide
    /// the toolbar. Any session in flight is dropped.
    pub fn deselect_all(&mut self) {
        if self.session.take().is_some() {
            log::debug!("pointer session dropped by deselect");
        }
        self.scope.deactivate_all();
        self.popup.clear();
    }

    /// The toolbar's close button.
    pub fn close_popup(&mut self) {
        self.deselect_all();
    }

    // ---- pointer sessions ------------------------------------------------

    /// Begin dragging the element. Valid only while it is Selected and no
    /// other session is in flight; anything else is a logged no-op.
    pub fn begin_drag(&mut self, id: &ElementId, pointer: Point) -> bool {
        if self.session.is_some() {
            log::debug!("begin_drag for {id} ignored: session already in flight");
            return false;
        }
        let Some(element) = self.slide.get(id) else {
            log::debug!("begin_drag for unknown element {id} ignored");
            return false;
        };
        let transform = element.transform;
        if !self.scope.begin_drag(id) {
            return false;
        }
        self.session = Some(ActiveSession {
            element: id.clone(),
            session: PointerSession::Drag(DragSession::begin(pointer, transform)),
        });
        self.last_pointer = pointer;
        true
    }

    /// Begin resizing the element from a handle. Text elements only: the
    /// image data model carries no size override, so image resize requests
    /// degrade to a logged no-op.
    pub fn begin_resize(&mut self, id: &ElementId, handle: ResizeHandle, pointer: Point) -> bool {
        if self.session.is_some() {
            log::debug!("begin_resize for {id} ignored: session already in flight");
            return false;
        }
        let Some(element) = self.slide.get(id) else {
            log::debug!("begin_resize for unknown element {id} ignored");
            return false;
        };
        let Some(text) = element.text_content() else {
            log::debug!("begin_resize for image element {id} ignored");
            return false;
        };
        let font_size = text.style.font_size;
        if !self.scope.begin_resize(id) {
            return false;
        }
        self.session = Some(ActiveSession {
            element: id.clone(),
            session: PointerSession::Resize(ResizeSession::begin(pointer, handle, font_size)),
        });
        self.last_pointer = pointer;
        true
    }

    /// Process a pointer move. While a session is in flight every move
    /// mutates the element and commits through the sink, one patch per tick
    /// in delivery order, with no coalescing.
    pub fn pointer_moved(&mut self, pointer: Point) {
        self.last_pointer = pointer;
        let Some(active) = self.session.clone() else {
            return;
        };
        let id = active.element;
        match active.session {
            PointerSession::Drag(drag) => {
                let transform = drag.transform_at(pointer);
                if let Some(element) = self.slide.get_mut(&id) {
                    element.transform = transform;
                }
                self.popup.track(&id, transform);
                self.emit(id, PatchChange::Transform(transform));
            }
            PointerSession::Resize(resize) => {
                let size = resize.font_size_at(pointer);
                if let Some(text) = self.slide.get_mut(&id).and_then(|e| e.text_content_mut()) {
                    text.style.font_size = size;
                }
                self.emit(id, PatchChange::FontSize(size));
            }
        }
    }

    /// End the session on pointer release. The last moved-to value stands
    /// (every tick already committed), and a completed drag re-baselines the
    /// toolbar anchor.
    pub fn release(&mut self) {
        let Some(active) = self.session.take() else {
            return;
        };
        let id = active.element;
        self.scope.settle(&id);
        if matches!(active.session, PointerSession::Drag(_)) {
            let transform = self
                .slide
                .get(&id)
                .map(|element| element.transform)
                .unwrap_or_default();
            self.popup.rebaseline(&id, transform);
        }
    }

    /// Pointer capture lost (window blur, release outside the window): end
    /// the session at the last observed pointer position, exactly as a
    /// release would.
    pub fn interrupt(&mut self) {
        if self.session.is_some() {
            log::debug!("pointer session interrupted at {:?}", self.last_pointer);
            self.release();
        }
    }

    /// Route a raw pointer event: press on the selected element (or one of
    /// its handles) starts a session, press on another element moves the
    /// selection, press on empty canvas deselects.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down {
                position,
                button: MouseButton::Left,
            } => self.pointer_down(position),
            PointerEvent::Move { position } => self.pointer_moved(position),
            PointerEvent::Up {
                button: MouseButton::Left,
                ..
            } => self.release(),
            _ => {}
        }
    }

    fn pointer_down(&mut self, position: Point) {
        if let Some(active) = self.scope.active().cloned() {
            if self.scope.state(&active) == ElementState::Selected {
                if let Some(bounds) = self.slide.get(&active).and_then(|e| e.bounds()) {
                    let is_text = self
                        .slide
                        .get(&active)
                        .is_some_and(|e| e.kind() == ElementKind::Text);
                    if is_text {
                        if let Some(handle) =
                            ResizeHandle::hit_test(bounds, position, HANDLE_HIT_TOLERANCE)
                        {
                            self.begin_resize(&active, handle, position);
                            return;
                        }
                    }
                    if bounds.contains(position) {
                        self.begin_drag(&active, position);
                        return;
                    }
                }
            }
        }
        match self.slide.element_at(position).cloned() {
            Some(id) => self.select(&id),
            None => self.deselect_all(),
        }
    }

    // ---- content and style operations ------------------------------------

    /// Replace the element's text content.
    pub fn set_text(&mut self, id: &ElementId, text: impl Into<String>) {
        let text = text.into();
        let Some(content) = self.slide.get_mut(id).and_then(|e| e.text_content_mut()) else {
            log::debug!("set_text for {id} ignored");
            return;
        };
        content.text = text.clone();
        self.emit(id.clone(), PatchChange::Text(text));
    }

    /// Clear the element's content and transform, and deselect it. The
    /// element record survives for later re-population.
    pub fn delete_content(&mut self, id: &ElementId) {
        let Some(element) = self.slide.get_mut(id) else {
            log::debug!("delete for unknown element {id} ignored");
            return;
        };
        element.clear();
        if self
            .session
            .as_ref()
            .is_some_and(|active| &active.element == id)
        {
            self.session = None;
        }
        if self.popup.target() == Some(id) {
            self.popup.clear();
        }
        self.scope.deactivate(id);
        self.emit(id.clone(), PatchChange::Cleared);
    }

    /// Set the font size, clamped into the supported range.
    pub fn set_font_size(&mut self, id: &ElementId, size: f64) {
        let size = clamp_font_size(size);
        if self.update_style(id, |style| style.font_size = size) {
            self.emit(id.clone(), PatchChange::FontSize(size));
        }
    }

    pub fn set_font_family(&mut self, id: &ElementId, family: impl Into<String>) {
        let family = family.into();
        let value = family.clone();
        if self.update_style(id, move |style| style.font_family = value) {
            self.emit(id.clone(), PatchChange::FontFamily(family));
        }
    }

    pub fn set_color(&mut self, id: &ElementId, color: Rgba) {
        if self.update_style(id, |style| style.color = color) {
            self.emit(id.clone(), PatchChange::Color(color));
        }
    }

    pub fn set_alignment(&mut self, id: &ElementId, alignment: Alignment) {
        if self.update_style(id, |style| style.alignment = alignment) {
            self.emit(id.clone(), PatchChange::Alignment(alignment));
        }
    }

    /// Replace an image element's source URL.
    pub fn replace_image_source(&mut self, id: &ElementId, url: impl Into<String>) {
        let url = url.into();
        let Some(image) = self.slide.get_mut(id).and_then(|e| e.image_content_mut()) else {
            log::debug!("replace_image_source for {id} ignored");
            return;
        };
        image.source_url = url.clone();
        self.emit(id.clone(), PatchChange::ImageSource(url));
    }

    // ---- view models ------------------------------------------------------

    /// Toolbar snapshot, present while an element is selected and measured.
    pub fn toolbar(&self) -> Option<ToolbarProps> {
        let target = self.popup.target()?.clone();
        let position = self.popup.position()?;
        let style = self
            .slide
            .get(&target)
            .and_then(|element| element.text_content())
            .map(|text| text.style.clone());
        Some(ToolbarProps {
            target,
            position,
            font_size: style.as_ref().map(|s| s.font_size),
            font_family: style.as_ref().map(|s| s.font_family.clone()),
            color: style.as_ref().map(|s| s.color),
            alignment: style.as_ref().map(|s| s.alignment),
        })
    }

    /// Read-back view of a text element.
    pub fn text_view(&self, id: &ElementId) -> Option<TextView> {
        let element = self.slide.get(id)?;
        let text = element.text_content()?;
        let state = self.scope.state(id);
        Some(TextView {
            is_selected: state.is_selected(),
            is_dragging: state == ElementState::Dragging,
            is_resizing: state == ElementState::Resizing,
            transform: element.transform,
            text: text.text.clone(),
            style: text.style.clone(),
        })
    }

    /// Read-back view of an image element.
    pub fn image_view(&self, id: &ElementId) -> Option<ImageView> {
        let element = self.slide.get(id)?;
        let image = element.image_content()?;
        let state = self.scope.state(id);
        Some(ImageView {
            is_selected: state.is_selected(),
            is_dragging: state == ElementState::Dragging,
            transform: element.transform,
            source_url: image.source_url.clone(),
        })
    }

    // ----------------------------------------------------------------------

    fn update_style(&mut self, id: &ElementId, apply: impl FnOnce(&mut TextStyle)) -> bool {
        match self.slide.get_mut(id).and_then(|e| e.text_content_mut()) {
            Some(text) => {
                apply(&mut text.style);
                true
            }
            None => {
                log::debug!("style change for {id} ignored");
                false
            }
        }
    }

    fn emit(&mut self, element: ElementId, change: PatchChange) {
        log::trace!("commit {element}: {change:?}");
        (self.on_update)(ElementPatch::new(element, change));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use kurbo::{Rect, Vec2};
    use std::cell::RefCell;
    use std::rc::Rc;

    const VIEWPORT: Size = Size::new(1280.0, 720.0);

    fn title_bounds() -> Rect {
        Rect::new(200.0, 160.0, 600.0, 220.0)
    }

    fn demo_slide() -> Slide {
        let mut slide = Slide::new("title-slide");
        slide
            .insert(Element::text("title", "Quarterly review").with_natural_bounds(title_bounds()))
            .unwrap();
        slide
            .insert(
                Element::text("description", "What happened and why")
                    .with_natural_bounds(Rect::new(200.0, 260.0, 600.0, 320.0)),
            )
            .unwrap();
        slide
            .insert(
                Element::image("image-mockup", "https://example.com/mock.png")
                    .with_natural_bounds(Rect::new(700.0, 160.0, 900.0, 320.0)),
            )
            .unwrap();
        slide
    }

    fn editor_with_journal() -> (Editor, Rc<RefCell<Vec<ElementPatch>>>) {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&journal);
        let editor = Editor::new(demo_slide(), VIEWPORT)
            .with_sink(Box::new(move |patch| sink.borrow_mut().push(patch)));
        (editor, journal)
    }

    #[test]
    fn test_select_shows_toolbar_above_element() {
        let (mut editor, _) = editor_with_journal();
        editor.select(&ElementId::new("title"));

        let toolbar = editor.toolbar().unwrap();
        assert_eq!(toolbar.target, ElementId::new("title"));
        assert_eq!(
            toolbar.position,
            Point::new(title_bounds().x0, title_bounds().y0 - crate::popup::TOOLBAR_OFFSET_Y)
        );
        assert_eq!(toolbar.font_size, Some(TextStyle::DEFAULT_FONT_SIZE));
    }

    #[test]
    fn test_selecting_b_deselects_a_atomically() {
        let (mut editor, _) = editor_with_journal();
        let a = ElementId::new("title");
        let b = ElementId::new("description");

        editor.select(&a);
        editor.select(&b);

        assert!(!editor.selection().state(&a).is_selected());
        assert!(editor.selection().state(&b).is_selected());
        assert_eq!(editor.selection().selected_count(), 1);
        assert_eq!(editor.toolbar().unwrap().target, b);
    }

    #[test]
    fn test_reselect_is_idempotent() {
        let (mut editor, _) = editor_with_journal();
        let id = ElementId::new("title");
        editor.select(&id);
        let toolbar = editor.toolbar();
        editor.select(&id);
        assert_eq!(editor.toolbar(), toolbar);
        assert_eq!(editor.selection().selected_count(), 1);
    }

    #[test]
    fn test_drag_scenario_with_popup_rebaseline() {
        let (mut editor, _) = editor_with_journal();
        let id = ElementId::new("title");
        editor.select(&id);
        let p0 = editor.popup().position().unwrap();

        // First drag: (40, -15) in two ticks.
        assert!(editor.begin_drag(&id, Point::new(400.0, 190.0)));
        editor.pointer_moved(Point::new(420.0, 180.0));
        editor.pointer_moved(Point::new(440.0, 175.0));
        editor.release();

        let element = editor.slide().get(&id).unwrap();
        assert_eq!(element.transform, Transform::new(40.0, -15.0));
        assert_eq!(
            editor.popup().position(),
            Some(p0 + Vec2::new(40.0, -15.0))
        );

        // Second drag: (10, 10); deltas compose, no drift.
        assert!(editor.begin_drag(&id, Point::new(440.0, 175.0)));
        editor.pointer_moved(Point::new(450.0, 185.0));
        editor.release();

        let element = editor.slide().get(&id).unwrap();
        assert_eq!(element.transform, Transform::new(50.0, -5.0));
        assert_eq!(editor.popup().position(), Some(p0 + Vec2::new(50.0, -5.0)));
    }

    #[test]
    fn test_popup_adheres_during_drag() {
        let (mut editor, _) = editor_with_journal();
        let id = ElementId::new("title");
        editor.select(&id);
        let p0 = editor.popup().position().unwrap();

        editor.begin_drag(&id, Point::new(400.0, 190.0));
        for (dx, dy) in [(3.0, 2.0), (9.0, -4.0), (25.0, 11.0)] {
            editor.pointer_moved(Point::new(400.0 + dx, 190.0 + dy));
            assert_eq!(
                editor.popup().position(),
                Some(p0 + Vec2::new(dx, dy)),
                "popup must track every tick"
            );
        }
    }

    #[test]
    fn test_each_tick_commits_a_patch() {
        let (mut editor, journal) = editor_with_journal();
        let id = ElementId::new("title");
        editor.select(&id);
        editor.begin_drag(&id, Point::ZERO);
        editor.pointer_moved(Point::new(1.0, 0.0));
        editor.pointer_moved(Point::new(2.0, 0.0));
        editor.pointer_moved(Point::new(3.0, 0.0));
        editor.release();

        let patches = journal.borrow();
        let transforms: Vec<_> = patches
            .iter()
            .filter_map(|p| match &p.change {
                PatchChange::Transform(t) => Some(*t),
                _ => None,
            })
            .collect();
        assert_eq!(
            transforms,
            vec![
                Transform::new(1.0, 0.0),
                Transform::new(2.0, 0.0),
                Transform::new(3.0, 0.0)
            ]
        );
    }

    #[test]
    fn test_drag_requires_selection() {
        let (mut editor, journal) = editor_with_journal();
        let id = ElementId::new("title");
        assert!(!editor.begin_drag(&id, Point::ZERO));
        editor.pointer_moved(Point::new(50.0, 50.0));
        assert!(journal.borrow().is_empty());
    }

    #[test]
    fn test_second_session_ignored() {
        let (mut editor, _) = editor_with_journal();
        let id = ElementId::new("title");
        editor.select(&id);
        assert!(editor.begin_drag(&id, Point::ZERO));
        // Either kind of second session is refused while one is in flight.
        assert!(!editor.begin_drag(&id, Point::ZERO));
        assert!(!editor.begin_resize(
            &id,
            ResizeHandle::Corner(crate::resize::Corner::BottomRight),
            Point::ZERO
        ));
    }

    #[test]
    fn test_resize_clamps_and_commits() {
        let (mut editor, journal) = editor_with_journal();
        let id = ElementId::new("title");
        editor.select(&id);

        editor.begin_resize(
            &id,
            ResizeHandle::Edge(crate::resize::Edge::Right),
            Point::ZERO,
        );
        editor.pointer_moved(Point::new(10_000.0, 0.0));
        editor.release();

        let view = editor.text_view(&id).unwrap();
        assert!((view.style.font_size - crate::element::MAX_FONT_SIZE).abs() < f64::EPSILON);
        // Resize never repositions.
        assert!(view.transform.is_zero());
        assert!(matches!(
            journal.borrow().last().unwrap().change,
            PatchChange::FontSize(size) if (size - crate::element::MAX_FONT_SIZE).abs() < f64::EPSILON
        ));
    }

    #[test]
    fn test_resize_on_image_ignored() {
        let (mut editor, journal) = editor_with_journal();
        let id = ElementId::new("image-mockup");
        editor.select(&id);
        assert!(!editor.begin_resize(
            &id,
            ResizeHandle::Edge(crate::resize::Edge::Right),
            Point::ZERO
        ));
        assert!(journal.borrow().is_empty());
    }

    #[test]
    fn test_font_size_requests_clamped() {
        let (mut editor, _) = editor_with_journal();
        let id = ElementId::new("title");
        editor.set_font_size(&id, 90.0);
        assert!(
            (editor.text_view(&id).unwrap().style.font_size - 72.0).abs() < f64::EPSILON
        );
        editor.set_font_size(&id, -5.0);
        assert!((editor.text_view(&id).unwrap().style.font_size - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_delete_resets_and_deselects() {
        let (mut editor, journal) = editor_with_journal();
        let id = ElementId::new("title");
        editor.select(&id);
        editor.begin_drag(&id, Point::ZERO);
        editor.pointer_moved(Point::new(30.0, 30.0));
        editor.release();

        editor.delete_content(&id);

        let view = editor.text_view(&id).unwrap();
        assert!(view.transform.is_zero());
        assert!(!view.is_selected);
        assert_eq!(view.text, "");
        assert!(editor.toolbar().is_none());
        assert!(matches!(
            journal.borrow().last().unwrap().change,
            PatchChange::Cleared
        ));
    }

    #[test]
    fn test_pointer_routing() {
        let (mut editor, _) = editor_with_journal();
        let id = ElementId::new("title");
        let inside = Point::new(300.0, 190.0);

        // First press selects.
        editor.handle_pointer(PointerEvent::down(inside));
        editor.handle_pointer(PointerEvent::up(inside));
        assert!(editor.selection().state(&id).is_selected());

        // Second press starts a drag; moves follow the pointer.
        editor.handle_pointer(PointerEvent::down(inside));
        assert!(editor.is_interacting());
        editor.handle_pointer(PointerEvent::moved(Point::new(340.0, 175.0)));
        editor.handle_pointer(PointerEvent::up(Point::new(340.0, 175.0)));
        assert_eq!(
            editor.slide().get(&id).unwrap().transform,
            Transform::new(40.0, -15.0)
        );

        // Press on empty canvas deselects and hides the toolbar.
        editor.handle_pointer(PointerEvent::down(Point::new(50.0, 600.0)));
        assert_eq!(editor.selection().selected_count(), 0);
        assert!(editor.toolbar().is_none());
    }

    #[test]
    fn test_press_on_handle_starts_resize() {
        let (mut editor, _) = editor_with_journal();
        let id = ElementId::new("title");
        editor.select(&id);

        // Bottom-right corner of the title's bounds.
        let corner = Point::new(title_bounds().x1, title_bounds().y1);
        editor.handle_pointer(PointerEvent::down(corner));
        assert_eq!(
            editor.selection().state(&id),
            ElementState::Resizing
        );
    }

    #[test]
    fn test_interrupt_acts_as_release() {
        let (mut editor, _) = editor_with_journal();
        let id = ElementId::new("title");
        editor.select(&id);
        editor.begin_drag(&id, Point::ZERO);
        editor.pointer_moved(Point::new(12.0, 7.0));

        editor.interrupt();

        assert!(!editor.is_interacting());
        assert_eq!(editor.selection().state(&id), ElementState::Selected);
        assert_eq!(
            editor.slide().get(&id).unwrap().transform,
            Transform::new(12.0, 7.0)
        );
        // Popup re-baselined: a follow-up drag composes from here.
        editor.begin_drag(&id, Point::ZERO);
        editor.pointer_moved(Point::new(8.0, 3.0));
        editor.release();
        assert_eq!(
            editor.slide().get(&id).unwrap().transform,
            Transform::new(20.0, 10.0)
        );
    }

    #[test]
    fn test_host_without_sink_is_tolerated() {
        // No sink installed: every operation still works, patches drop.
        let mut editor = Editor::new(demo_slide(), VIEWPORT);
        let id = ElementId::new("title");
        editor.select(&id);
        editor.begin_drag(&id, Point::ZERO);
        editor.pointer_moved(Point::new(5.0, 5.0));
        editor.release();
        assert_eq!(
            editor.slide().get(&id).unwrap().transform,
            Transform::new(5.0, 5.0)
        );
    }

    #[test]
    fn test_style_ops_on_image_ignored() {
        let (mut editor, journal) = editor_with_journal();
        let id = ElementId::new("image-mockup");
        editor.set_font_size(&id, 30.0);
        editor.set_alignment(&id, Alignment::Center);
        editor.set_text(&id, "nope");
        assert!(journal.borrow().is_empty());

        editor.replace_image_source(&id, "https://example.com/new.png");
        assert_eq!(
            editor.image_view(&id).unwrap().source_url,
            "https://example.com/new.png"
        );
        assert_eq!(journal.borrow().len(), 1);
    }
}
