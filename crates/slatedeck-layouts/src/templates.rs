//! The shipped layout templates.

use crate::template::{LayoutTemplate, CANVAS_HEIGHT, CANVAS_MARGIN, CANVAS_WIDTH};
use kurbo::Rect;
use slatedeck_core::{Alignment, Element, TextStyle};

fn heading(size: f64) -> TextStyle {
    TextStyle {
        font_size: size,
        ..TextStyle::default()
    }
}

fn centered(size: f64) -> TextStyle {
    TextStyle {
        font_size: size,
        alignment: Alignment::Center,
        ..TextStyle::default()
    }
}

/// Single centered title with a subtitle line.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleSlide;

impl LayoutTemplate for TitleSlide {
    fn name(&self) -> &'static str {
        "title-slide"
    }

    fn elements(&self) -> Vec<Element> {
        vec![
            Element::text("title", "Presentation title")
                .with_natural_bounds(Rect::new(CANVAS_MARGIN, 180.0, CANVAS_WIDTH - CANVAS_MARGIN, 260.0))
                .with_style(centered(44.0)),
            Element::text("description", "A short subtitle")
                .with_natural_bounds(Rect::new(CANVAS_MARGIN, 290.0, CANVAS_WIDTH - CANVAS_MARGIN, 340.0))
                .with_style(centered(20.0)),
        ]
    }
}

/// Heading over two equal text columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoColumn;

impl LayoutTemplate for TwoColumn {
    fn name(&self) -> &'static str {
        "two-column"
    }

    fn elements(&self) -> Vec<Element> {
        let gutter = 40.0;
        let column_width = (CANVAS_WIDTH - 2.0 * CANVAS_MARGIN - gutter) / 2.0;
        let mut elements = vec![
            Element::text("title", "Section heading")
                .with_natural_bounds(Rect::new(CANVAS_MARGIN, 40.0, CANVAS_WIDTH - CANVAS_MARGIN, 110.0))
                .with_style(heading(32.0)),
        ];
        for column in 0..2 {
            let x0 = CANVAS_MARGIN + column as f64 * (column_width + gutter);
            elements.push(
                Element::text(format!("column-{column}-title"), "Column heading")
                    .with_natural_bounds(Rect::new(x0, 150.0, x0 + column_width, 200.0))
                    .with_style(heading(24.0)),
            );
            elements.push(
                Element::text(format!("column-{column}-body"), "Column body copy")
                    .with_natural_bounds(Rect::new(x0, 210.0, x0 + column_width, CANVAS_HEIGHT - CANVAS_MARGIN)),
            );
        }
        elements
    }
}

/// Heading over a stack of bullet items, each a title/body pair.
#[derive(Debug, Clone, Copy)]
pub struct BulletList {
    /// Number of bullet rows.
    pub items: usize,
}

impl Default for BulletList {
    fn default() -> Self {
        Self { items: 3 }
    }
}

impl LayoutTemplate for BulletList {
    fn name(&self) -> &'static str {
        "bullet-list"
    }

    fn elements(&self) -> Vec<Element> {
        let row_height = 90.0;
        let x1 = CANVAS_WIDTH - CANVAS_MARGIN;
        let mut elements = vec![
            Element::text("title", "Agenda")
                .with_natural_bounds(Rect::new(CANVAS_MARGIN, 40.0, x1, 110.0))
                .with_style(heading(32.0)),
        ];
        for item in 0..self.items {
            let y0 = 140.0 + item as f64 * row_height;
            elements.push(
                Element::text(format!("bullet-{item}-title"), "Bullet point")
                    .with_natural_bounds(Rect::new(CANVAS_MARGIN, y0, x1, y0 + 32.0))
                    .with_style(heading(20.0)),
            );
            elements.push(
                Element::text(format!("bullet-{item}-body"), "Supporting detail")
                    .with_natural_bounds(Rect::new(CANVAS_MARGIN, y0 + 38.0, x1, y0 + 78.0))
                    .with_style(heading(14.0)),
            );
        }
        elements
    }
}

/// Image on the left, heading and description on the right.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageLeft;

impl LayoutTemplate for ImageLeft {
    fn name(&self) -> &'static str {
        "image-left"
    }

    fn elements(&self) -> Vec<Element> {
        let split = 460.0;
        vec![
            Element::image("image-mockup", "")
                .with_natural_bounds(Rect::new(CANVAS_MARGIN, 100.0, split, CANVAS_HEIGHT - CANVAS_MARGIN)),
            Element::text("title", "Feature name")
                .with_natural_bounds(Rect::new(split + 40.0, 120.0, CANVAS_WIDTH - CANVAS_MARGIN, 190.0))
                .with_style(heading(28.0)),
            Element::text("description", "What it does and who it is for")
                .with_natural_bounds(Rect::new(split + 40.0, 210.0, CANVAS_WIDTH - CANVAS_MARGIN, 460.0)),
        ]
    }
}

/// Heading over a grid of title/body cards.
#[derive(Debug, Clone, Copy)]
pub struct CardGrid {
    pub rows: usize,
    pub cols: usize,
}

impl Default for CardGrid {
    fn default() -> Self {
        Self { rows: 2, cols: 2 }
    }
}

impl LayoutTemplate for CardGrid {
    fn name(&self) -> &'static str {
        "card-grid"
    }

    fn elements(&self) -> Vec<Element> {
        let gutter = 24.0;
        let top = 140.0;
        let cols = self.cols.max(1);
        let rows = self.rows.max(1);
        let cell_width = (CANVAS_WIDTH - 2.0 * CANVAS_MARGIN - gutter * (cols - 1) as f64) / cols as f64;
        let cell_height =
            (CANVAS_HEIGHT - top - CANVAS_MARGIN - gutter * (rows - 1) as f64) / rows as f64;

        let mut elements = vec![
            Element::text("title", "Overview")
                .with_natural_bounds(Rect::new(CANVAS_MARGIN, 40.0, CANVAS_WIDTH - CANVAS_MARGIN, 110.0))
                .with_style(heading(32.0)),
        ];
        for row in 0..rows {
            for col in 0..cols {
                let card = row * cols + col;
                let x0 = CANVAS_MARGIN + col as f64 * (cell_width + gutter);
                let y0 = top + row as f64 * (cell_height + gutter);
                elements.push(
                    Element::text(format!("card-{card}-title"), "Card heading")
                        .with_natural_bounds(Rect::new(x0, y0, x0 + cell_width, y0 + 30.0))
                        .with_style(heading(18.0)),
                );
                elements.push(
                    Element::text(format!("card-{card}-body"), "Card body copy")
                        .with_natural_bounds(Rect::new(
                            x0,
                            y0 + 36.0,
                            x0 + cell_width,
                            y0 + cell_height,
                        ))
                        .with_style(heading(13.0)),
                );
            }
        }
        elements
    }
}
