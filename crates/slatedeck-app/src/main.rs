//! Headless SlateDeck demo.
//!
//! Builds a deck from the shipped layout templates, drives a scripted
//! pointer session through the engine, journals every committed patch, and
//! round-trips the deck through JSON on disk. Run with `RUST_LOG=debug` to
//! see the engine's degraded-path diagnostics.

use kurbo::{Point, Size};
use slatedeck_core::{
    ColorPicker, ContainerFrame, Deck, DeckResult, Editor, ElementId, ElementPatch, PointerEvent,
};
use slatedeck_layouts::{
    BulletList, CardGrid, ImageLeft, LayoutTemplate, TitleSlide, TwoColumn, CANVAS_HEIGHT,
    CANVAS_WIDTH,
};
use std::cell::RefCell;
use std::rc::Rc;

fn main() -> DeckResult<()> {
    env_logger::init();
    log::info!("Starting SlateDeck demo");

    let templates: Vec<Box<dyn LayoutTemplate>> = vec![
        Box::new(TitleSlide),
        Box::new(TwoColumn),
        Box::new(BulletList::default()),
        Box::new(ImageLeft),
        Box::new(CardGrid::default()),
    ];

    let mut deck = Deck::new("SlateDeck demo deck");
    for template in &templates {
        deck.push(template.instantiate()?);
    }
    log::info!("built deck with {} slides", deck.slides.len());

    // Edit the title slide through a scripted pointer session, journaling
    // every committed patch the way a persisting host would.
    let journal: Rc<RefCell<Vec<ElementPatch>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&journal);
    let viewport = Size::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    let mut editor = Editor::new(deck.slides[0].clone(), viewport).with_sink(Box::new(
        move |patch| {
            log::info!("patch: {}", serde_json::to_string(&patch).unwrap_or_default());
            sink.borrow_mut().push(patch);
        },
    ));

    let title = ElementId::new("title");
    let press = Point::new(CANVAS_WIDTH / 2.0, 220.0);

    // Click the title: it becomes the exclusive selection and the toolbar
    // attaches above it.
    editor.handle_pointer(PointerEvent::down(press));
    editor.handle_pointer(PointerEvent::up(press));
    if let Some(toolbar) = editor.toolbar() {
        log::info!(
            "toolbar attached to {} at ({:.0}, {:.0})",
            toolbar.target,
            toolbar.position.x,
            toolbar.position.y
        );
    }

    // Drag the title by (40, -15), then by (10, 10); the toolbar follows
    // each tick and re-baselines on release.
    editor.handle_pointer(PointerEvent::down(press));
    editor.handle_pointer(PointerEvent::moved(press + kurbo::Vec2::new(20.0, -8.0)));
    editor.handle_pointer(PointerEvent::moved(press + kurbo::Vec2::new(40.0, -15.0)));
    editor.handle_pointer(PointerEvent::up(press + kurbo::Vec2::new(40.0, -15.0)));

    let second = press + kurbo::Vec2::new(40.0, -15.0);
    editor.handle_pointer(PointerEvent::down(second));
    editor.handle_pointer(PointerEvent::moved(second + kurbo::Vec2::new(10.0, 10.0)));
    editor.handle_pointer(PointerEvent::up(second + kurbo::Vec2::new(10.0, 10.0)));

    let settled = editor.slide().get(&title).map(|e| e.transform);
    log::info!("title transform after two drags: {settled:?}");

    // Restyle through the toolbar: an out-of-range size request clamps, and
    // the color comes from the pointer-driven picker.
    editor.set_font_size(&title, 90.0);

    let mut picker = ColorPicker::new(
        ContainerFrame::new(Point::new(1000.0, 100.0), Size::new(200.0, 200.0)),
        ContainerFrame::new(Point::new(1000.0, 320.0), Size::new(200.0, 20.0)),
    );
    picker.press(Point::new(1100.0, 330.0)); // mid hue bar
    picker.release();
    picker.press(Point::new(1200.0, 100.0)); // top-right of the panel
    picker.pointer_moved(Point::new(1180.0, 120.0));
    picker.release();
    log::info!("picked color {}", picker.hex());
    editor.set_color(&title, picker.color());

    // Click outside: selection clears and the toolbar hides.
    editor.handle_pointer(PointerEvent::down(Point::new(20.0, CANVAS_HEIGHT - 20.0)));
    editor.handle_pointer(PointerEvent::up(Point::new(20.0, CANVAS_HEIGHT - 20.0)));
    log::info!(
        "selection cleared: {} selected, toolbar open: {}",
        editor.selection().selected_count(),
        editor.popup().is_open()
    );

    // Replaying the journal onto a fresh instantiation reproduces the edits.
    let mut replayed = TitleSlide.instantiate()?;
    for patch in journal.borrow().iter() {
        replayed.apply_patch(patch);
    }
    let replay_matches = replayed.get(&title).map(|e| e.transform) == settled;
    log::info!("journal replay reproduces the slide: {replay_matches}");

    // Persist the edited deck and read it back.
    deck.slides[0] = editor.slide().clone();
    let path = std::env::temp_dir().join("slatedeck-demo.json");
    std::fs::write(&path, deck.to_json()?)?;
    let restored = Deck::from_json(&std::fs::read_to_string(&path)?)?;
    log::info!(
        "saved and restored {} ({} slides) via {}",
        restored.name,
        restored.slides.len(),
        path.display()
    );

    Ok(())
}
