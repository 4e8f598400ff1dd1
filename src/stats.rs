use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Candidate;

/// Label used in `userStats` for candidates with no assignee.
pub const UNASSIGNED: &str = "Unassigned";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssigneeStats {
    pub total: u64,
    pub called: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total: u64,
    pub called: u64,
    pub not_called: u64,
    pub user_stats: BTreeMap<String, AssigneeStats>,
}

/// Aggregate call counts overall and per assignee in one pass.
pub fn compute(candidates: &[Candidate]) -> Stats {
    let mut stats = Stats::default();

    for candidate in candidates {
        let key = if candidate.assigned_to.is_empty() {
            UNASSIGNED
        } else {
            candidate.assigned_to.as_str()
        };
        let entry = stats.user_stats.entry(key.to_string()).or_default();

        entry.total += 1;
        stats.total += 1;
        if candidate.called {
            entry.called += 1;
            stats.called += 1;
        }
    }

    stats.not_called = stats.total - stats.called;
    stats
}
