//! Deduplication, recency filtering, and snapshot ordering.

use std::collections::HashSet;
use std::hash::Hash;

use chrono::NaiveDate;

use crate::models::Opportunity;

/// Lifecycle buckets, in snapshot order.
///
/// ISO date strings compare correctly as strings, so ordering works on the
/// serialized fields directly.
fn bucket(record: &Opportunity, today: &str) -> u8 {
    if record.deadline.is_empty() {
        1
    } else if record.deadline.as_str() >= today {
        0
    } else {
        2
    }
}

/// Sort opportunities into the snapshot order.
///
/// Active records come first, ascending by deadline; then undated records,
/// most recently published first; then expired records, most recently
/// expired first. The sort is stable, so ties keep feed order.
pub fn sort_opportunities(records: &mut [Opportunity], today: &str) {
    records.sort_by(|a, b| {
        let (ra, rb) = (bucket(a, today), bucket(b, today));
        ra.cmp(&rb).then_with(|| match ra {
            0 => a.deadline.cmp(&b.deadline),
            2 => b.deadline.cmp(&a.deadline),
            _ => b.published.cmp(&a.published),
        })
    });
}

/// Drop records published before the trailing window, failing open.
///
/// Records with no parseable publication date are kept. If the filter
/// would empty the snapshot, it is discarded and a bounded prefix of the
/// sorted input is kept instead.
pub fn apply_recency_filter(
    records: Vec<Opportunity>,
    today: NaiveDate,
    window_days: i64,
    fallback_keep: usize,
) -> Vec<Opportunity> {
    let cutoff = today - chrono::Duration::days(window_days);
    let kept: Vec<Opportunity> = records
        .iter()
        .filter(|record| {
            if record.published.is_empty() {
                return true;
            }
            match NaiveDate::parse_from_str(&record.published, "%Y-%m-%d") {
                Ok(date) => date >= cutoff,
                Err(_) => true,
            }
        })
        .cloned()
        .collect();

    if kept.is_empty() {
        records.into_iter().take(fallback_keep).collect()
    } else {
        kept
    }
}

/// Collapse repeated records, first occurrence wins.
pub fn dedup_by_key<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(key(item))).collect()
}
