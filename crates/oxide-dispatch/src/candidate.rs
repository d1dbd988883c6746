//! Ranking of match candidates.

use std::cmp::Ordering;

use crate::template::{CompiledTemplate, TemplateMatch};

/// A template owner paired with the outcome of matching its template.
///
/// The owner is opaque to ranking; selectors use routes and dispatchers.
#[derive(Debug, Clone)]
pub struct Candidate<T> {
    /// The route or dispatcher that declared the template.
    pub owner: T,
    /// The compiled expression, used to group identical patterns.
    pub expression: String,
    /// Capture groups reported by the match.
    pub matches_count: usize,
    /// Literal characters in the template.
    pub literal_count: usize,
    /// Variable segments in the template.
    pub var_count: usize,
    /// Unconsumed tail of the path.
    pub remainder: String,
}

impl<T> Candidate<T> {
    /// Creates a candidate from a compiled template and its match.
    pub fn new(owner: T, compiled: &CompiledTemplate, matched: TemplateMatch) -> Self {
        Self {
            owner,
            expression: compiled.expression().to_string(),
            matches_count: matched.matches_count,
            literal_count: compiled.literal_count(),
            var_count: compiled.var_count(),
            remainder: matched.remainder,
        }
    }

    /// Orders candidates best first: more capture groups, then more
    /// literal characters, then fewer variables.
    pub fn rank(&self, other: &Self) -> Ordering {
        other
            .matches_count
            .cmp(&self.matches_count)
            .then_with(|| other.literal_count.cmp(&self.literal_count))
            .then_with(|| self.var_count.cmp(&other.var_count))
    }
}

/// Sorts candidates so the best ranked one comes first.
///
/// Candidates equal on all three keys end up in no particular order.
pub fn rank_candidates<T>(candidates: &mut [Candidate<T>]) {
    candidates.sort_unstable_by(Candidate::rank);
}
