//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::collections::HashMap;

use stencil::registry::{Registry, Variable};
use stencil::surface::{FontMetrics, GlyphMetrics, PlainSurface, Point, RichSurface};
use stencil::AutocompleteController;
use stencil::TextSurface;

/// Plain surface with the caret at the end of `text`, 10px glyphs / 20px
/// lines at origin (0, 0) for predictable coordinate assertions
pub fn plain_surface(text: &str) -> PlainSurface {
    PlainSurface::with_text(text).with_metrics(FontMetrics {
        char_width: 10.0,
        line_height: 20.0,
    })
}

/// Rich surface with uniform 10px advances and 20px lines
pub fn rich_surface(text: &str) -> RichSurface {
    RichSurface::with_text(text).with_metrics(GlyphMetrics::uniform(10.0, 20.0))
}

/// Small fixed registry for predictable suggestion assertions
pub fn small_registry() -> Registry {
    Registry::from_variables(vec![
        Variable::new("firstName", "First Name", "Jordan", "Contact"),
        Variable::new("lastName", "Last Name", "Miles", "Contact"),
        Variable::new("propertyAddress", "Property Address", "114 Alder Ct", "Property"),
    ])
}

/// Build a values map from key/value pairs
pub fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Drain a surface's queued events into the controller, the way a host
/// event pump would
pub fn pump(controller: &mut AutocompleteController, surface: &mut dyn TextSurface) {
    for event in surface.take_events() {
        controller.handle(surface, event);
    }
}

pub fn origin(x: f32, y: f32) -> Point {
    Point::new(x, y)
}
