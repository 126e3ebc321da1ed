//! Caret position resolution

use crate::surface::{Point, TextSurface};

/// A resolved caret: linear offset plus on-screen coordinates.
/// Recomputed on every notification, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaretPosition {
    pub offset: usize,
    pub coordinates: Point,
}

/// Resolve the active caret on a surface.
///
/// `None` when the surface is unfocused or cannot place the offset; callers
/// treat that as "no match", never as an error.
pub fn caret_position(surface: &dyn TextSurface) -> Option<CaretPosition> {
    let offset = surface.caret_offset()?;
    let coordinates = surface.coordinates_at_offset(offset)?;
    Some(CaretPosition {
        offset,
        coordinates,
    })
}
