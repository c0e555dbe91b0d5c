//! Deterministic ordering of search results.
//!
//! Provides the three-level comparator used by the pipeline: rank tier
//! (ascending), title, then identifier.

use std::cmp::Ordering;

use crate::result::SearchResultRecord;

/// Three-level comparator for search results.
///
/// 1. **Lower rank tier wins** -- close matches come before far matches.
/// 2. **Title** -- byte-wise `str::cmp`, so `"Zoom"` sorts before `"alarm"`.
/// 3. **Identifier** -- breaks ties between identically titled apps.
///
/// Identifiers are unique per execution, so this is a total order and the
/// sorted output is reproducible for identical input.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::cmp::Ordering;
/// use appsearch::navigation::{Intent, NavigationPayload};
/// use appsearch::rank::RankTier;
/// use appsearch::result::SearchResultRecord;
/// use appsearch::sort::compare_records;
///
/// let make = |id: &str, title: &str, rank| {
///     let payload = NavigationPayload::new(id, Intent::new("open"));
///     SearchResultRecord::new(id, title, rank, Arc::from(Vec::new()), payload).unwrap()
/// };
///
/// let close = make("b", "Beta", RankTier::CLOSE);
/// let far = make("a", "Alpha", RankTier::FAR);
/// assert_eq!(compare_records(&close, &far), Ordering::Less);
/// ```
pub fn compare_records(a: &SearchResultRecord, b: &SearchResultRecord) -> Ordering {
    a.sort_key().cmp(&b.sort_key())
}

/// Sorts `records` in place with [`compare_records`].
pub fn sort_records(records: &mut [SearchResultRecord]) {
    records.sort_by(compare_records);
}
