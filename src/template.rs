//! Placeholder extraction and rendering
//!
//! The durable wire format of the engine is `{{identifier}}`, where the
//! identifier is any run of one or more characters excluding `}`. Malformed
//! tokens (single brace, unterminated `{{`) are plain text, never errors.
//!
//! All offsets here and everywhere else in the crate are character indices,
//! not byte indices.

use std::collections::HashMap;

/// A well-formed placeholder token found during a scan
#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    /// Index of the first `{`
    start: usize,
    /// Index one past the second `}`
    end: usize,
    key: String,
}

/// Single left-to-right scan for well-formed tokens.
///
/// At each position: an opening `{{` followed by one or more non-`}`
/// characters and a closing `}}` is a token; anything else advances the scan
/// by one character. Scanning resumes after a token's closing braces, so
/// tokens never overlap.
fn scan(chars: &[char]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let len = chars.len();
    let mut i = 0;

    while i < len {
        if chars[i] == '{' && i + 1 < len && chars[i + 1] == '{' {
            let mut j = i + 2;
            while j < len && chars[j] != '}' {
                j += 1;
            }
            if j > i + 2 && j + 1 < len && chars[j + 1] == '}' {
                tokens.push(Token {
                    start: i,
                    end: j + 2,
                    key: chars[i + 2..j].iter().collect(),
                });
                i = j + 2;
                continue;
            }
        }
        i += 1;
    }

    tokens
}

/// Extract all distinct placeholder keys from a template, in first-seen
/// order.
pub fn extract_variables(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut keys: Vec<String> = Vec::new();
    for token in scan(&chars) {
        if !keys.contains(&token.key) {
            keys.push(token.key);
        }
    }
    keys
}

/// Render a template against concrete values.
///
/// Every well-formed token whose key appears in `values` is replaced by its
/// value; keys missing from `values` stay as literal placeholder text.
/// Substituted values are opaque: they are spliced into the output without
/// being re-scanned, so a value containing `{{` is never expanded.
/// Re-rendering the output with the same values is a no-op.
pub fn render(text: &str, values: &HashMap<String, String>) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for token in scan(&chars) {
        out.extend(&chars[cursor..token.start]);
        match values.get(&token.key) {
            Some(value) => out.push_str(value),
            None => out.extend(&chars[token.start..token.end]),
        }
        cursor = token.end;
    }
    out.extend(&chars[cursor..]);
    out
}
