//! Transactional variable insertion

use tracing::warn;

use crate::surface::TextSurface;

/// Splice `token` over the character range `[token_start, token_end)` and
/// move the caret past the inserted text.
///
/// The caller passes the offsets captured when the suggestion panel opened;
/// if they no longer fit the current text (typing raced the selection), the
/// insertion is logged and dropped, leaving the surface untouched. As far
/// as the surface's observers are concerned the whole operation is a single
/// atomic splice, finished by the surface's native change notification so
/// bound host state never goes stale.
pub fn insert_variable(
    surface: &mut dyn TextSurface,
    token: &str,
    token_start: usize,
    token_end: usize,
) {
    let text = surface.current_text();
    let chars: Vec<char> = text.chars().collect();

    if token_start > token_end || token_end > chars.len() {
        warn!(
            token_start,
            token_end,
            len = chars.len(),
            "dropping insertion with stale offsets"
        );
        return;
    }

    let mut new_text = String::with_capacity(text.len() + token.len());
    new_text.extend(&chars[..token_start]);
    new_text.push_str(token);
    new_text.extend(&chars[token_end..]);

    surface.write_text(&new_text);
    surface.set_caret(token_start + token.chars().count());
    surface.notify_changed();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{PlainSurface, SurfaceEvent};

    #[test]
    fn test_splice_and_caret() {
        let mut surface = PlainSurface::with_text("Hi {{first");
        insert_variable(&mut surface, "{{firstName}}", 3, 10);
        assert_eq!(surface.current_text(), "Hi {{firstName}}");
        assert_eq!(surface.caret_offset(), Some(16));
    }

    #[test]
    fn test_splice_preserves_trailing_text() {
        let mut surface = PlainSurface::with_text("Hi {{fi and more");
        insert_variable(&mut surface, "{{firstName}}", 3, 7);
        assert_eq!(surface.current_text(), "Hi {{firstName}} and more");
    }

    #[test]
    fn test_change_notification_emitted() {
        let mut surface = PlainSurface::with_text("{{a");
        surface.take_events();
        insert_variable(&mut surface, "{{agentName}}", 0, 3);
        assert_eq!(surface.take_events(), [SurfaceEvent::ContentChanged]);
    }

    #[test]
    fn test_inverted_range_aborts() {
        let mut surface = PlainSurface::with_text("Hi {{first");
        insert_variable(&mut surface, "{{firstName}}", 8, 3);
        assert_eq!(surface.current_text(), "Hi {{first");
        assert!(surface.take_events().is_empty());
    }

    #[test]
    fn test_out_of_bounds_range_aborts() {
        let mut surface = PlainSurface::with_text("short");
        insert_variable(&mut surface, "{{x}}", 0, 99);
        assert_eq!(surface.current_text(), "short");
    }
}
