use std::io;

use chrono::TimeDelta;
use unicode_width::UnicodeWidthChar;

use crate::format::format_clock;
use crate::surface::RenderSurface;

/// Top-left cell the clock text is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
}

impl Placement {
    /// Center a block of `text_width` x `text_height` cells on a `width` x `height` grid.
    pub fn centered(width: u16, height: u16, text_width: usize, text_height: usize) -> Self {
        let text_width = i32::try_from(text_width).unwrap_or(i32::MAX);
        let text_height = i32::try_from(text_height).unwrap_or(i32::MAX);
        Self {
            x: i32::from(width) / 2 - text_width / 2,
            y: i32::from(height) / 2 - text_height / 2,
        }
    }
}

fn glyph_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

fn text_width(text: &str) -> usize {
    text.chars().map(glyph_width).sum()
}

/// Draws the clock onto a surface.
///
/// The placement is fixed by the first frame; later resizes do not move the text.
pub struct Renderer<S> {
    surface: S,
    placement: Option<Placement>,
    closed: bool,
}

impl<S: RenderSurface> Renderer<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            placement: None,
            closed: false,
        }
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    pub fn render(&mut self, remaining: TimeDelta) -> io::Result<()> {
        let (width, height) = self.surface.size()?;
        self.surface.clear()?;

        let text = format_clock(remaining);
        let placement = *self
            .placement
            .get_or_insert_with(|| Placement::centered(width, height, text_width(&text), 1));

        let mut x = placement.x;
        for glyph in text.chars() {
            self.surface.paint(glyph, x, placement.y);
            x += glyph_width(glyph) as i32;
        }

        self.surface.flush()
    }

    /// Release the surface. Only the first call reaches it.
    pub fn close(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.surface.close()
    }
}
