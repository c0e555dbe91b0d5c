#![warn(missing_docs)]

//! Installed-application search.
//!
//! `appsearch` answers a settings-search query with the installed apps whose
//! label contains a word starting with the query. Candidates are filtered by
//! enablement and module visibility, scored by word difference, bucketed into
//! rank tiers, and returned in a deterministic order with a shared breadcrumb
//! and a navigation payload each.

/// Execution-scoped breadcrumb resolution and caching.
pub mod breadcrumb;

/// Crate error type.
pub mod error;

/// Candidate eligibility policy.
pub mod filter;

/// Application inventory types and collaborator trait.
pub mod inventory;

/// Word-difference scoring of labels against a query.
pub mod matching;

/// In-memory collaborators.
pub mod memory;

/// Navigation payloads and their builders.
pub mod navigation;

/// Configuration options for the search pipeline.
pub mod options;

/// Score-to-tier rank policy.
pub mod rank;

/// Immutable search result records.
pub mod result;

/// Deterministic result ordering.
pub mod sort;

/// The per-query search task.
pub mod task;

// Re-export primary public API types and functions at the crate root.
pub use breadcrumb::{Breadcrumb, BreadcrumbCache, SiteMap};
pub use error::{Result, SearchError};
pub use inventory::{CandidateItem, EnabledSetting, Inventory, ListFlags, ModuleInfo};
pub use matching::{MatchScore, PrefixWordMatcher, WordMatcher, get_word_difference};
pub use navigation::{AppDetailsPayloadBuilder, NavigationPayload, PayloadBuilder};
pub use options::SearchOptions;
pub use rank::{RankPolicy, RankTier};
pub use result::SearchResultRecord;
pub use sort::{compare_records, sort_records};
pub use task::{InstalledAppTask, QUERY_WORKER_ID, search_installed_apps};
