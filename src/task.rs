//! The installed-app search task.
//!
//! One [`InstalledAppTask`] is one query execution: it owns the query, the
//! collaborators it reads from, and the breadcrumb cache shared by every
//! result it produces. [`InstalledAppTask::execute`] consumes the task, so
//! a cached breadcrumb never outlives its execution.

use tracing::{info, trace};

use crate::breadcrumb::{BreadcrumbCache, SiteMap};
use crate::error::Result;
use crate::filter::eligible_candidates;
use crate::inventory::{Inventory, ListFlags};
use crate::matching::{PrefixWordMatcher, WordMatcher};
use crate::navigation::{AppDetailsPayloadBuilder, PayloadBuilder};
use crate::options::SearchOptions;
use crate::result::SearchResultRecord;
use crate::sort::sort_records;

/// Telemetry identifier of the installed-apps query worker.
///
/// Mirrors `SEARCH_QUERY_INSTALLED_APPS` in the settings-intelligence event
/// enum, where the query workers are numbered in registration order.
pub const QUERY_WORKER_ID: i32 = 2;

/// Searches installed applications for one query.
///
/// The matcher and payload builder default to [`PrefixWordMatcher`] and
/// [`AppDetailsPayloadBuilder`] configured from the [`SearchOptions`]; both
/// can be swapped with [`with_matcher`](Self::with_matcher) and
/// [`with_payload_builder`](Self::with_payload_builder).
///
/// # Examples
///
/// ```
/// use appsearch::{InstalledAppTask, SearchOptions};
/// use appsearch::inventory::CandidateItem;
/// use appsearch::memory::{InMemoryInventory, StaticSiteMap};
///
/// let mut inventory = InMemoryInventory::new();
/// inventory.install(CandidateItem::new("com.example.clock", "Clock"));
/// inventory.install(CandidateItem::new("com.example.camera", "Camera"));
/// let site_map = StaticSiteMap::new(["Settings", "Apps"]);
///
/// let task = InstalledAppTask::new(&inventory, &site_map, SearchOptions::default(), "cam");
/// let results = task.execute().unwrap();
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].title(), "Camera");
/// ```
pub struct InstalledAppTask<I, S, M = PrefixWordMatcher, P = AppDetailsPayloadBuilder> {
    inventory: I,
    site_map: S,
    matcher: M,
    payloads: P,
    options: SearchOptions,
    query: String,
    breadcrumb: BreadcrumbCache,
}

impl<I, S> InstalledAppTask<I, S, PrefixWordMatcher, AppDetailsPayloadBuilder>
where
    I: Inventory,
    S: SiteMap,
{
    /// Creates a task for `query` with the default matcher and payload builder.
    pub fn new(
        inventory: I,
        site_map: S,
        options: SearchOptions,
        query: impl Into<String>,
    ) -> Self {
        let matcher = PrefixWordMatcher {
            strip_diacritics: options.strip_diacritics,
        };
        let payloads = AppDetailsPayloadBuilder {
            highlight_menu: options.highlight_menu,
        };
        let breadcrumb = BreadcrumbCache::new(options.anchor.clone(), options.root_label.clone());
        Self {
            inventory,
            site_map,
            matcher,
            payloads,
            options,
            query: query.into(),
            breadcrumb,
        }
    }
}

impl<I, S, M, P> InstalledAppTask<I, S, M, P>
where
    I: Inventory,
    S: SiteMap,
    M: WordMatcher,
    P: PayloadBuilder,
{
    /// Replaces the word matcher.
    pub fn with_matcher<M2: WordMatcher>(self, matcher: M2) -> InstalledAppTask<I, S, M2, P> {
        InstalledAppTask {
            inventory: self.inventory,
            site_map: self.site_map,
            matcher,
            payloads: self.payloads,
            options: self.options,
            query: self.query,
            breadcrumb: self.breadcrumb,
        }
    }

    /// Replaces the payload builder.
    pub fn with_payload_builder<P2: PayloadBuilder>(
        self,
        payloads: P2,
    ) -> InstalledAppTask<I, S, M, P2> {
        InstalledAppTask {
            inventory: self.inventory,
            site_map: self.site_map,
            matcher: self.matcher,
            payloads,
            options: self.options,
            query: self.query,
            breadcrumb: self.breadcrumb,
        }
    }

    /// The query this task searches for.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Telemetry identifier of this worker.
    pub fn worker_id(&self) -> i32 {
        QUERY_WORKER_ID
    }

    /// Runs the search: filter, match, rank, assemble, sort.
    ///
    /// The query is prepared once and scored against every eligible label.
    /// Per-candidate lookup failures only exclude that candidate. Failing to
    /// list the inventory or to resolve the breadcrumb aborts the whole
    /// execution; no partial list is returned.
    pub fn execute(self) -> Result<Vec<SearchResultRecord>> {
        let listed = self.inventory.list_candidates(ListFlags::SEARCH)?;
        let listed_count = listed.len();
        let eligible = eligible_candidates(&self.inventory, listed);
        let eligible_count = eligible.len();

        let mut score_label = self.matcher.prepare(&self.query);
        let mut results = Vec::new();
        for item in eligible {
            let score = score_label(&item.label);
            let Some(rank) = self.options.rank_policy.assign(score) else {
                continue;
            };
            trace!(id = %item.id, ?score, %rank, "Matched package.");

            let breadcrumb = self.breadcrumb.get_or_resolve(&self.site_map)?;
            let payload = self
                .payloads
                .build_payload(&item.id, &self.options.context_tag);
            results.push(SearchResultRecord::new(
                item.id, item.label, rank, breadcrumb, payload,
            )?);
        }

        sort_records(&mut results);
        info!(
            worker = QUERY_WORKER_ID,
            query_len = self.query.chars().count(),
            listed = listed_count,
            eligible = eligible_count,
            results = results.len(),
            "Installed app search finished."
        );

        Ok(results)
    }
}

/// Runs a single installed-app search with the default matcher and payloads.
pub fn search_installed_apps<I, S>(
    inventory: I,
    site_map: S,
    options: SearchOptions,
    query: &str,
) -> Result<Vec<SearchResultRecord>>
where
    I: Inventory,
    S: SiteMap,
{
    InstalledAppTask::new(inventory, site_map, options, query).execute()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::inventory::CandidateItem;
    use crate::matching::MatchScore;
    use crate::memory::{InMemoryInventory, StaticSiteMap};
    use crate::rank::RankTier;

    fn inventory(labels: &[(&str, &str)]) -> InMemoryInventory {
        let mut inv = InMemoryInventory::new();
        for (id, label) in labels {
            inv.install(CandidateItem::new(*id, *label));
        }
        inv
    }

    #[test]
    fn no_results_never_resolves_breadcrumb() {
        let inv = inventory(&[("a", "Maps")]);
        let site_map = StaticSiteMap::new(["Settings"]);
        let task = InstalledAppTask::new(&inv, &site_map, SearchOptions::default(), "zzz");
        assert!(task.execute().unwrap().is_empty());
        assert_eq!(site_map.calls(), 0);
    }

    #[test]
    fn worker_id_and_query() {
        let inv = InMemoryInventory::new();
        let site_map = StaticSiteMap::new(["Settings"]);
        let task = InstalledAppTask::new(&inv, &site_map, SearchOptions::default(), "maps");
        assert_eq!(task.worker_id(), QUERY_WORKER_ID);
        assert_eq!(QUERY_WORKER_ID, 2);
        assert_eq!(task.query(), "maps");
    }

    #[test]
    fn custom_matcher_is_used() {
        let inv = inventory(&[("a", "Anything"), ("b", "Else")]);
        let site_map = StaticSiteMap::new(["Settings"]);
        let task = InstalledAppTask::new(&inv, &site_map, SearchOptions::default(), "q")
            .with_matcher(|label: &str, _: &str| {
                if label == "Else" {
                    MatchScore::Difference(1)
                } else {
                    MatchScore::NoMatch
                }
            });
        let results = task.execute().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id(), "b");
        assert_eq!(results[0].rank(), RankTier::CLOSE);
    }

    #[test]
    fn highlight_option_wraps_payloads() {
        let inv = inventory(&[("a", "Maps")]);
        let site_map = StaticSiteMap::new(["Settings"]);
        let options = SearchOptions {
            highlight_menu: true,
            ..Default::default()
        };
        let results = InstalledAppTask::new(&inv, &site_map, options, "maps")
            .execute()
            .unwrap();
        assert_eq!(
            results[0].payload().launch_intent().action,
            crate::navigation::ACTION_SEARCH_TRAMPOLINE
        );
    }

    #[test]
    fn one_execution_resolves_breadcrumb_once() {
        let inv = inventory(&[("a", "Maps"), ("b", "Google Maps"), ("c", "Mail")]);
        let site_map = StaticSiteMap::new(["Settings"]);
        let results = InstalledAppTask::new(&inv, &site_map, SearchOptions::default(), "ma")
            .execute()
            .unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(site_map.calls(), 1);
    }

    #[test]
    fn new_task_resolves_breadcrumb_again() {
        let inv = inventory(&[("a", "Maps")]);
        let site_map = StaticSiteMap::new(["Settings"]);
        for _ in 0..2 {
            InstalledAppTask::new(&inv, &site_map, SearchOptions::default(), "maps")
                .execute()
                .unwrap();
        }
        assert_eq!(site_map.calls(), 2);
    }

    struct CountingMatcher {
        inner: PrefixWordMatcher,
        prepared: Rc<Cell<usize>>,
    }

    impl WordMatcher for CountingMatcher {
        fn word_difference(&self, label: &str, query: &str) -> MatchScore {
            self.inner.word_difference(label, query)
        }

        fn prepare<'a>(&'a self, query: &'a str) -> impl FnMut(&str) -> MatchScore + 'a {
            self.prepared.set(self.prepared.get() + 1);
            self.inner.prepare(query)
        }
    }

    #[test]
    fn query_is_prepared_once_per_execution() {
        let inv = inventory(&[("a", "Maps"), ("b", "Mail"), ("c", "Clock"), ("d", "Camera")]);
        let site_map = StaticSiteMap::new(["Settings"]);
        let prepared = Rc::new(Cell::new(0));
        let results = InstalledAppTask::new(&inv, &site_map, SearchOptions::default(), "ma")
            .with_matcher(CountingMatcher {
                inner: PrefixWordMatcher::default(),
                prepared: Rc::clone(&prepared),
            })
            .execute()
            .unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(prepared.get(), 1);
    }
}
