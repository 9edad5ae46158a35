/// Rank-and-tiebreak policy
///
/// Orders candidates best first by fuzzy score, then times opened, then
/// recency. Adding another tie-break level means adding a field to `RankKey`.

use crate::core::searcher::Candidate;
use chrono::{DateTime, Utc};
use std::cmp::Reverse;

/// Composite sort key; fields compare in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RankKey {
    score: Reverse<i64>,
    times_opened: Reverse<i64>,
    // None (unparseable) sorts after every real timestamp
    last_opened: Reverse<Option<DateTime<Utc>>>,
}

impl RankKey {
    pub fn of(candidate: &Candidate) -> Self {
        Self {
            score: Reverse(candidate.score),
            times_opened: Reverse(candidate.record.times_opened),
            last_opened: Reverse(candidate.record.last_opened_at()),
        }
    }
}

/// Sort candidates best first
///
/// The sort is stable: candidates with identical keys keep their incoming
/// (store) order, so the same input always yields the same output.
pub fn rank(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| RankKey::of(a).cmp(&RankKey::of(b)));
    candidates
}
