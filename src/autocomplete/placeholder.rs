//! Open-token detection at the caret
//!
//! Decides whether a caret offset sits inside an in-progress placeholder
//! token (`{{` typed, closing braces not necessarily there yet) and extracts
//! the partial search term typed so far.

/// A detected in-progress placeholder token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Index of the first `{` of the opening `{{`
    pub token_start: usize,
    /// End of the splice range; equals the caret offset
    pub token_end: usize,
    /// Partial term typed after the braces; empty right after `{{`
    pub search_term: String,
}

/// Characters that end the backward scan
fn is_boundary(ch: char) -> bool {
    ch == '{' || ch == ' ' || ch == '\n'
}

/// Detect an open `{{…` token ending at `caret`.
///
/// Walks backward from the caret collecting the candidate term until a
/// boundary character or the start of the text. A match exists when the two
/// characters immediately before the stopping point are `{{`. Greedy and
/// single-token: with several unmatched `{{` earlier in the text, only the
/// nearest one before a boundary is ever considered.
pub fn match_at(text: &str, caret: usize) -> Option<MatchResult> {
    let chars: Vec<char> = text.chars().collect();
    let caret = caret.min(chars.len());

    let mut i = caret;
    while i > 0 && !is_boundary(chars[i - 1]) {
        i -= 1;
    }

    if i < 2 || chars[i - 1] != '{' || chars[i - 2] != '{' {
        return None;
    }

    Some(MatchResult {
        token_start: i - 2,
        token_end: caret,
        search_term: chars[i..caret].iter().collect(),
    })
}
