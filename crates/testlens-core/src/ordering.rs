//! Deterministic ordering of aggregated results

use std::collections::HashMap;

use crate::types::{ResultSet, TestRecord};

/// Order records failures-first, then ascending by id within each group.
///
/// Ties are broken only by id, so the result never depends on map
/// iteration order.
pub fn order_results(records: HashMap<String, TestRecord>) -> ResultSet {
    let mut ordered: Vec<TestRecord> = records.into_values().collect();
    ordered.sort_by(|a, b| {
        b.status
            .is_failure()
            .cmp(&a.status.is_failure())
            .then_with(|| a.id.cmp(&b.id))
    });
    ResultSet::from_ordered(ordered)
}
