use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A character-grid display the countdown draws on.
///
/// Coordinates are signed: a clock wider than the grid is centered at a
/// negative origin, and implementations drop glyphs that fall outside.
pub trait RenderSurface: Send {
    fn size(&mut self) -> io::Result<(u16, u16)>;
    fn clear(&mut self) -> io::Result<()>;
    fn paint(&mut self, glyph: char, x: i32, y: i32);
    fn flush(&mut self) -> io::Result<()>;
    /// Release the display. Called once when the countdown terminates.
    fn close(&mut self) -> io::Result<()>;
}

/// One flushed frame: glyphs in the order they were painted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub glyphs: Vec<(char, i32, i32)>,
}

impl Frame {
    pub fn text(&self) -> String {
        self.glyphs.iter().map(|(c, _, _)| *c).collect()
    }

    pub fn origin(&self) -> Option<(i32, i32)> {
        self.glyphs.first().map(|(_, x, y)| (*x, *y))
    }
}

#[derive(Debug, Default)]
pub struct MockState {
    pub width: u16,
    pub height: u16,
    pub pending: Frame,
    pub frames: Vec<Frame>,
    pub clear_count: usize,
    pub flush_count: usize,
    pub close_count: usize,
}

/// In-memory surface that records every frame.
///
/// Clones share state, so a test can keep a handle while the countdown owns
/// the surface.
#[derive(Debug, Clone, Default)]
pub struct MockSurface {
    state: Arc<Mutex<MockState>>,
}

impl MockSurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                width,
                height,
                ..MockState::default()
            })),
        }
    }

    pub fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn resize(&self, width: u16, height: u16) {
        let mut state = self.state();
        state.width = width;
        state.height = height;
    }

    pub fn frames(&self) -> Vec<Frame> {
        self.state().frames.clone()
    }

    pub fn frame_count(&self) -> usize {
        self.state().frames.len()
    }

    pub fn last_text(&self) -> Option<String> {
        self.state().frames.last().map(Frame::text)
    }

    pub fn close_count(&self) -> usize {
        self.state().close_count
    }
}

impl RenderSurface for MockSurface {
    fn size(&mut self) -> io::Result<(u16, u16)> {
        let state = self.state();
        Ok((state.width, state.height))
    }

    fn clear(&mut self) -> io::Result<()> {
        let mut state = self.state();
        state.clear_count += 1;
        state.pending = Frame::default();
        Ok(())
    }

    fn paint(&mut self, glyph: char, x: i32, y: i32) {
        self.state().pending.glyphs.push((glyph, x, y));
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut state = self.state();
        state.flush_count += 1;
        let frame = std::mem::take(&mut state.pending);
        state.frames.push(frame);
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.state().close_count += 1;
        Ok(())
    }
}
