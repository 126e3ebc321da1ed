//! Rich structured text surface
//!
//! Models the contract builder's structured content area: multi-line
//! content in a rope, a platform-native selection range (anchor/head), and
//! a host-measured glyph advance table. The caret offset is resolved by
//! measuring the active range's head against the content from its start,
//! and coordinates come from per-glyph advances — exact, unlike the plain
//! surface's estimate.

use std::collections::HashMap;

use ropey::Rope;

use super::{Point, SurfaceEvent, TextSurface};

/// Host-measured glyph advance table
#[derive(Debug, Clone)]
pub struct GlyphMetrics {
    advances: HashMap<char, f32>,
    default_advance: f32,
    pub line_height: f32,
}

impl GlyphMetrics {
    /// Every glyph advances by the same width (monospace hosts, tests)
    pub fn uniform(advance: f32, line_height: f32) -> Self {
        Self {
            advances: HashMap::new(),
            default_advance: advance,
            line_height,
        }
    }

    /// Record a measured advance for one glyph
    pub fn with_advance(mut self, ch: char, advance: f32) -> Self {
        self.advances.insert(ch, advance);
        self
    }

    pub fn advance(&self, ch: char) -> f32 {
        self.advances.get(&ch).copied().unwrap_or(self.default_advance)
    }
}

impl Default for GlyphMetrics {
    fn default() -> Self {
        Self::uniform(8.0, 20.0)
    }
}

/// Native selection range: the anchor stays fixed, the head moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SelectionRange {
    anchor: usize,
    head: usize,
}

/// A structured multi-line content surface
#[derive(Debug, Clone)]
pub struct RichSurface {
    content: Rope,
    /// `None` while the surface is unfocused or has no active range
    selection: Option<SelectionRange>,
    /// On-screen position of the first line's first glyph
    origin: Point,
    metrics: GlyphMetrics,
    events: Vec<SurfaceEvent>,
}

impl RichSurface {
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Focused surface with a collapsed range at the end of `text`
    pub fn with_text(text: &str) -> Self {
        let content = Rope::from_str(text);
        let end = content.len_chars();
        Self {
            content,
            selection: Some(SelectionRange { anchor: end, head: end }),
            origin: Point::default(),
            metrics: GlyphMetrics::default(),
            events: Vec::new(),
        }
    }

    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_metrics(mut self, metrics: GlyphMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn len_chars(&self) -> usize {
        self.content.len_chars()
    }

    pub fn focus(&mut self) {
        if self.selection.is_none() {
            let end = self.content.len_chars();
            self.selection = Some(SelectionRange { anchor: end, head: end });
        }
    }

    pub fn blur(&mut self) {
        self.selection = None;
        self.events.push(SurfaceEvent::Blurred);
    }

    /// Extend the active range (mouse drag, Shift+Arrow)
    pub fn select_range(&mut self, anchor: usize, head: usize) {
        let len = self.content.len_chars();
        self.selection = Some(SelectionRange {
            anchor: anchor.min(len),
            head: head.min(len),
        });
        self.events.push(SurfaceEvent::CaretMoved);
    }

    /// Insert text at the range head, as if typed by the user.
    /// A non-collapsed range is replaced, matching native typing behavior.
    pub fn insert_at_caret(&mut self, text: &str) {
        let Some(sel) = self.selection else {
            return;
        };
        let start = sel.anchor.min(sel.head);
        let end = sel.anchor.max(sel.head);
        if start < end {
            self.content.remove(start..end);
        }
        self.content.insert(start, text);
        let caret = start + text.chars().count();
        self.selection = Some(SelectionRange {
            anchor: caret,
            head: caret,
        });
        self.events.push(SurfaceEvent::ContentChanged);
    }

    /// Move the collapsed range by keyboard navigation
    pub fn move_caret(&mut self, offset: usize) {
        if self.selection.is_none() {
            return;
        }
        let clamped = offset.min(self.content.len_chars());
        self.selection = Some(SelectionRange {
            anchor: clamped,
            head: clamped,
        });
        self.events.push(SurfaceEvent::CaretMoved);
    }

    /// Settle a pointer click at a character offset
    pub fn click_at(&mut self, offset: usize) {
        let clamped = offset.min(self.content.len_chars());
        self.selection = Some(SelectionRange {
            anchor: clamped,
            head: clamped,
        });
        self.events.push(SurfaceEvent::ClickSettled);
    }
}

impl Default for RichSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSurface for RichSurface {
    fn current_text(&self) -> String {
        self.content.to_string()
    }

    fn caret_offset(&self) -> Option<usize> {
        // The native primitive is a range; the linear offset is its head
        // measured against the content from the start.
        let sel = self.selection?;
        Some(sel.head.min(self.content.len_chars()))
    }

    fn coordinates_at_offset(&self, offset: usize) -> Option<Point> {
        self.selection?;

        let clamped = offset.min(self.content.len_chars());
        let line = self.content.char_to_line(clamped);
        let line_start = self.content.line_to_char(line);
        let x_advance: f32 = self
            .content
            .slice(line_start..clamped)
            .chars()
            .map(|ch| self.metrics.advance(ch))
            .sum();

        Some(Point::new(
            self.origin.x + x_advance,
            self.origin.y + line as f32 * self.metrics.line_height,
        ))
    }

    fn write_text(&mut self, text: &str) {
        self.content = Rope::from_str(text);
        // Reconstruct the native range against the new content
        if let Some(sel) = self.selection.as_mut() {
            let len = self.content.len_chars();
            sel.anchor = sel.anchor.min(len);
            sel.head = sel.head.min(len);
        }
    }

    fn set_caret(&mut self, offset: usize) {
        let clamped = offset.min(self.content.len_chars());
        self.selection = Some(SelectionRange {
            anchor: clamped,
            head: clamped,
        });
    }

    fn notify_changed(&mut self) {
        self.events.push(SurfaceEvent::ContentChanged);
    }

    fn take_events(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.events)
    }
}
