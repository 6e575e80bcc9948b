use crate::types::{Brief, FollowUp};
use serde::Serialize;

/// How many briefs the collapsed brief list shows.
pub const RECENT_BRIEFS_LIMIT: usize = 3;

/// Brief and follow-up views. The sources are constant for the lifetime
/// of a store, so this is computed once.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BriefsData {
    pub all_briefs: Vec<Brief>,
    /// Prefix of `all_briefs`, at most `RECENT_BRIEFS_LIMIT` long.
    pub recent_briefs: Vec<Brief>,
    pub upcoming_briefs: Vec<Brief>,
    pub follow_ups: Vec<FollowUp>,
}

pub fn compute_briefs_data(
    briefs: &[Brief],
    upcoming_briefs: &[Brief],
    follow_ups: &[FollowUp],
) -> BriefsData {
    BriefsData {
        all_briefs: briefs.to_vec(),
        recent_briefs: briefs.iter().take(RECENT_BRIEFS_LIMIT).cloned().collect(),
        upcoming_briefs: upcoming_briefs.to_vec(),
        follow_ups: follow_ups.to_vec(),
    }
}
