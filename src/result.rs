//! Immutable search result records.

use crate::breadcrumb::Breadcrumb;
use crate::error::{Result, SearchError};
use crate::navigation::NavigationPayload;
use crate::rank::RankTier;

/// One installed-app search result.
///
/// Records are built once through [`SearchResultRecord::new`] and never
/// mutated. All records of one execution share the same breadcrumb `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultRecord {
    id: String,
    title: String,
    rank: RankTier,
    breadcrumb: Breadcrumb,
    payload: NavigationPayload,
}

impl SearchResultRecord {
    /// Builds a record, rejecting empty identifiers and titles and payloads
    /// that navigate somewhere other than `id`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use appsearch::navigation::{Intent, NavigationPayload};
    /// use appsearch::rank::RankTier;
    /// use appsearch::result::SearchResultRecord;
    ///
    /// let payload = NavigationPayload::new("com.example.maps", Intent::new("open"));
    /// let record = SearchResultRecord::new(
    ///     "com.example.maps",
    ///     "Maps",
    ///     RankTier::CLOSE,
    ///     Arc::from(vec!["Apps".to_owned()]),
    ///     payload,
    /// )
    /// .unwrap();
    /// assert_eq!(record.title(), "Maps");
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        rank: RankTier,
        breadcrumb: Breadcrumb,
        payload: NavigationPayload,
    ) -> Result<Self> {
        let id = id.into();
        let title = title.into();

        if id.is_empty() {
            return Err(SearchError::InvalidRecord {
                message: "id must be non-empty.".to_owned(),
            });
        }
        if title.is_empty() {
            return Err(SearchError::InvalidRecord {
                message: format!("title of {id} must be non-empty."),
            });
        }
        if payload.target_id() != id {
            return Err(SearchError::InvalidRecord {
                message: format!(
                    "payload of {id} navigates to {}.",
                    payload.target_id()
                ),
            });
        }

        Ok(Self {
            id,
            title,
            rank,
            breadcrumb,
            payload,
        })
    }

    /// Identifier of the matched candidate.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rank tier; lower sorts first.
    pub fn rank(&self) -> RankTier {
        self.rank
    }

    /// Shared breadcrumb path.
    pub fn breadcrumb(&self) -> &Breadcrumb {
        &self.breadcrumb
    }

    /// Navigation payload.
    pub fn payload(&self) -> &NavigationPayload {
        &self.payload
    }

    /// The total-order key used by [`sort_records`](crate::sort::sort_records).
    pub fn sort_key(&self) -> (RankTier, &str, &str) {
        (self.rank, &self.title, &self.id)
    }
}
