//! Autocomplete state machine
//!
//! One controller instance is owned by whichever builder component holds
//! focus; switching surfaces means closing this controller and activating
//! another. The controller never caches surface text or caret state between
//! notifications — every event re-reads the surface so a stale snapshot can
//! never drive the panel.

use tracing::debug;

use super::caret::{caret_position, CaretPosition};
use super::insert::insert_variable;
use super::placeholder;
use super::suggest;
use crate::registry::{Registry, Variable};
use crate::surface::{SurfaceEvent, TextSurface};

/// Snapshot exposed to the presentation layer.
///
/// `token_start`/`token_end` are the splice offsets captured when the panel
/// opened; selection uses these, not a re-derived match, so an insertion
/// racing further typing cannot land on a moved target.
#[derive(Debug, Clone, PartialEq)]
pub struct AutocompleteState {
    pub is_open: bool,
    pub search_term: String,
    pub position: Option<CaretPosition>,
    pub token_start: usize,
    pub token_end: usize,
}

impl AutocompleteState {
    fn closed() -> Self {
        Self {
            is_open: false,
            search_term: String::new(),
            position: None,
            token_start: 0,
            token_end: 0,
        }
    }
}

/// Drives the suggestion panel for one focused surface
#[derive(Debug, Default)]
pub struct AutocompleteController {
    /// `Some` while the panel is open
    state: Option<AutocompleteState>,
}

impl AutocompleteController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    /// Current state snapshot for rendering
    pub fn state(&self) -> AutocompleteState {
        self.state.clone().unwrap_or_else(AutocompleteState::closed)
    }

    /// Ranked suggestions for the current term; empty while closed
    pub fn suggestions<'r>(&self, registry: &'r Registry) -> Vec<&'r Variable> {
        match &self.state {
            Some(state) => suggest::rank_variables(registry, &state.search_term),
            None => Vec::new(),
        }
    }

    /// Feed one surface notification through the state machine
    pub fn handle(&mut self, surface: &dyn TextSurface, event: SurfaceEvent) {
        match event {
            SurfaceEvent::Blurred => self.close(),
            SurfaceEvent::ContentChanged
            | SurfaceEvent::CaretMoved
            | SurfaceEvent::ClickSettled => self.evaluate(surface),
        }
    }

    /// Close the panel (Escape, focus hand-off)
    pub fn close(&mut self) {
        if self.state.take().is_some() {
            debug!("autocomplete closed");
        }
    }

    /// Insert `variable` at the offsets captured when the panel opened,
    /// then return to idle. No-op while closed.
    pub fn select(&mut self, surface: &mut dyn TextSurface, variable: &Variable) {
        let Some(state) = self.state.take() else {
            return;
        };
        debug!(key = %variable.key, "inserting selected variable");
        insert_variable(
            surface,
            &variable.token(),
            state.token_start,
            state.token_end,
        );
    }

    /// Re-derive the match from the current surface text and caret
    fn evaluate(&mut self, surface: &dyn TextSurface) {
        let Some(position) = caret_position(surface) else {
            self.close();
            return;
        };
        let text = surface.current_text();

        match placeholder::match_at(&text, position.offset) {
            Some(m) => {
                debug!(term = %m.search_term, start = m.token_start, "autocomplete open");
                self.state = Some(AutocompleteState {
                    is_open: true,
                    search_term: m.search_term,
                    position: Some(position),
                    token_start: m.token_start,
                    token_end: m.token_end,
                });
            }
            None => self.close(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::PlainSurface;

    fn feed(controller: &mut AutocompleteController, surface: &mut PlainSurface) {
        for event in surface.take_events() {
            controller.handle(surface, event);
        }
    }

    #[test]
    fn test_idle_until_braces_typed() {
        let mut surface = PlainSurface::with_text("");
        let mut controller = AutocompleteController::new();

        surface.insert_at_caret("Hello ");
        feed(&mut controller, &mut surface);
        assert!(!controller.is_open());

        surface.insert_at_caret("{{");
        feed(&mut controller, &mut surface);
        assert!(controller.is_open());
        assert_eq!(controller.state().search_term, "");
    }

    #[test]
    fn test_term_tracks_typing() {
        let mut surface = PlainSurface::with_text("{{");
        let mut controller = AutocompleteController::new();

        for ch in ["b", "u", "y"] {
            surface.insert_at_caret(ch);
            feed(&mut controller, &mut surface);
        }
        assert_eq!(controller.state().search_term, "buy");
    }

    #[test]
    fn test_space_closes_panel() {
        let mut surface = PlainSurface::with_text("{{buy");
        let mut controller = AutocompleteController::new();
        feed_one(&mut controller, &mut surface);
        assert!(controller.is_open());

        surface.insert_at_caret(" ");
        feed(&mut controller, &mut surface);
        assert!(!controller.is_open());
    }

    #[test]
    fn test_blur_closes_panel() {
        let mut surface = PlainSurface::with_text("{{buy");
        let mut controller = AutocompleteController::new();
        feed_one(&mut controller, &mut surface);
        assert!(controller.is_open());

        surface.blur();
        feed(&mut controller, &mut surface);
        assert!(!controller.is_open());
        assert_eq!(controller.state(), AutocompleteState::closed());
    }

    #[test]
    fn test_select_while_closed_is_noop() {
        let mut surface = PlainSurface::with_text("text");
        let mut controller = AutocompleteController::new();
        let var = Variable::new("buyerName", "Buyer Name", "", "Contact");

        controller.select(&mut surface, &var);
        assert_eq!(surface.current_text(), "text");
    }

    /// Kick a fresh surface's current state into the controller
    fn feed_one(controller: &mut AutocompleteController, surface: &mut PlainSurface) {
        controller.handle(surface, SurfaceEvent::ContentChanged);
    }
}
