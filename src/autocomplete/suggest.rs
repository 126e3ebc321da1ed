//! Suggestion ranking for the autocomplete panel

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32String};

use crate::registry::{Registry, Variable};

/// Rank catalog variables against the in-progress search term.
///
/// An empty term (the author just typed `{{`) returns the whole catalog in
/// catalog order. Otherwise variables are fuzzy-scored on both key and
/// label; the better of the two counts, highest score first, catalog order
/// breaking ties. Variables matching neither are dropped.
pub fn rank_variables<'r>(registry: &'r Registry, term: &str) -> Vec<&'r Variable> {
    if term.is_empty() {
        return registry.all().iter().collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        term,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut scored: Vec<(u32, usize, &Variable)> = registry
        .all()
        .iter()
        .enumerate()
        .filter_map(|(index, var)| {
            let key = Utf32String::from(var.key.as_str());
            let label = Utf32String::from(var.label.as_str());
            let score = pattern
                .score(key.slice(..), &mut matcher)
                .max(pattern.score(label.slice(..), &mut matcher));
            score.map(|score| (score, index, var))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    scored.into_iter().map(|(_, _, var)| var).collect()
}
