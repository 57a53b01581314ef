use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// One entry of the upstream top-scorers feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorerRow {
    pub name: String,
    pub team: String,
    pub goals: u16,
}

/// The `limit` leading scorers, goals descending. The feed arrives
/// pre-ranked but ties and stale payloads are re-ordered here; order among
/// equal tallies follows the input.
pub fn top_scorers(rows: &[ScorerRow], limit: usize) -> Vec<&ScorerRow> {
    rows.iter()
        .sorted_by_key(|r| Reverse(r.goals))
        .take(limit)
        .collect()
}
