//! Plain linear text field
//!
//! Single caret, linear `String` buffer. Caret coordinates are approximated
//! from estimated font metrics: the text before the caret is split on line
//! breaks, the current column is multiplied by an average glyph width and
//! the line count by the line height. Close enough to anchor a floating
//! panel next to the caret, not glyph-exact.

use super::{Point, SurfaceEvent, TextSurface};

/// Estimated font metrics for coordinate approximation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Average glyph advance in pixels
    pub char_width: f32,
    /// Line height in pixels
    pub line_height: f32,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            line_height: 20.0,
        }
    }
}

/// A plain single-caret text field
#[derive(Debug, Clone, Default)]
pub struct PlainSurface {
    text: String,
    /// `None` while the field is unfocused
    caret: Option<usize>,
    /// On-screen position of the field's first glyph
    origin: Point,
    metrics: FontMetrics,
    events: Vec<SurfaceEvent>,
}

impl PlainSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focused field with the caret at the end of `text`
    pub fn with_text(text: &str) -> Self {
        Self {
            caret: Some(text.chars().count()),
            text: text.to_string(),
            ..Self::default()
        }
    }

    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_metrics(mut self, metrics: FontMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// Convert char offset to byte offset
    fn char_to_byte(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Give the field focus, restoring the caret to the end of the text
    pub fn focus(&mut self) {
        if self.caret.is_none() {
            self.caret = Some(self.len_chars());
        }
    }

    pub fn blur(&mut self) {
        self.caret = None;
        self.events.push(SurfaceEvent::Blurred);
    }

    /// Insert text at the caret, as if typed by the user
    pub fn insert_at_caret(&mut self, text: &str) {
        let Some(caret) = self.caret else {
            return;
        };
        let byte_offset = self.char_to_byte(caret);
        self.text.insert_str(byte_offset, text);
        self.caret = Some(caret + text.chars().count());
        self.events.push(SurfaceEvent::ContentChanged);
    }

    /// Delete the character before the caret (Backspace)
    pub fn delete_backward(&mut self) {
        let Some(caret) = self.caret else {
            return;
        };
        if caret == 0 {
            return;
        }
        let start = self.char_to_byte(caret - 1);
        let end = self.char_to_byte(caret);
        self.text.replace_range(start..end, "");
        self.caret = Some(caret - 1);
        self.events.push(SurfaceEvent::ContentChanged);
    }

    /// Move the caret by keyboard navigation
    pub fn move_caret(&mut self, offset: usize) {
        if self.caret.is_none() {
            return;
        }
        self.caret = Some(offset.min(self.len_chars()));
        self.events.push(SurfaceEvent::CaretMoved);
    }

    /// Settle a pointer click at a character offset
    pub fn click_at(&mut self, offset: usize) {
        self.caret = Some(offset.min(self.len_chars()));
        self.events.push(SurfaceEvent::ClickSettled);
    }
}

impl TextSurface for PlainSurface {
    fn current_text(&self) -> String {
        self.text.clone()
    }

    fn caret_offset(&self) -> Option<usize> {
        self.caret
    }

    fn coordinates_at_offset(&self, offset: usize) -> Option<Point> {
        // An unfocused field has no caret to anchor to
        self.caret?;

        let clamped = offset.min(self.len_chars());
        let prefix: String = self.text.chars().take(clamped).collect();
        let line_breaks = prefix.matches('\n').count();
        let column = prefix
            .rsplit('\n')
            .next()
            .map(|line| line.chars().count())
            .unwrap_or(0);

        Some(Point::new(
            self.origin.x + column as f32 * self.metrics.char_width,
            self.origin.y + line_breaks as f32 * self.metrics.line_height,
        ))
    }

    fn write_text(&mut self, text: &str) {
        self.text = text.to_string();
        if let Some(caret) = self.caret {
            self.caret = Some(caret.min(self.len_chars()));
        }
    }

    fn set_caret(&mut self, offset: usize) {
        self.caret = Some(offset.min(self.len_chars()));
    }

    fn notify_changed(&mut self) {
        self.events.push(SurfaceEvent::ContentChanged);
    }

    fn take_events(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.events)
    }
}
