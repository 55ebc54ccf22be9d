//! Priority Ranker - Orders recommendations and bounds the result.

use super::synthesizer::RecommendationRecord;

/// Default number of recommendations presented to a caller.
pub const DEFAULT_MAX_RESULTS: usize = 5;

pub struct PriorityRanker;

impl PriorityRanker {
    /// Stable-sorts by ascending priority tier, then keeps the first `max_results`.
    ///
    /// Records of equal tier keep their synthesis (catalog) order. Truncation
    /// is hard: records past the bound are dropped even when they tie with
    /// an included record.
    pub fn rank_and_bound(
        mut records: Vec<RecommendationRecord>,
        max_results: usize,
    ) -> Vec<RecommendationRecord> {
        records.sort_by_key(|r| r.priority);
        records.truncate(max_results);
        records
    }
}
