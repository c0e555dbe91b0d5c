//! Execution-scoped breadcrumb memoization.
//!
//! Every result of one search execution shares a single breadcrumb path,
//! resolved through the [`SiteMap`] the first time a result needs it.

use std::cell::OnceCell;
use std::sync::Arc;

use tracing::debug;

use crate::error::Result;

/// Navigation path shown under a result, root first.
pub type Breadcrumb = Arc<[String]>;

/// Screen every installed-app result navigates through.
pub const APPS_ANCHOR: &str = "com.android.settings.applications.ManageApplications";

/// Human readable label of [`APPS_ANCHOR`].
pub const APPS_ROOT_LABEL: &str = "Apps";

/// Resolves breadcrumb paths from the settings site map.
pub trait SiteMap {
    /// Builds the path of labels leading to `anchor`, whose own label is
    /// `root_label`. Failure aborts the search.
    fn build_breadcrumb(&self, anchor: &str, root_label: &str) -> Result<Vec<String>>;
}

impl<S: SiteMap + ?Sized> SiteMap for &S {
    fn build_breadcrumb(&self, anchor: &str, root_label: &str) -> Result<Vec<String>> {
        (**self).build_breadcrumb(anchor, root_label)
    }
}

/// Lazily resolved breadcrumb, owned by a single execution.
///
/// The site map is consulted at most once per cache; the resolved path
/// (even an empty one) is handed out by reference afterwards.
///
/// # Examples
///
/// ```
/// use appsearch::breadcrumb::BreadcrumbCache;
/// use appsearch::memory::StaticSiteMap;
///
/// let site_map = StaticSiteMap::new(["Settings", "Apps"]);
/// let cache = BreadcrumbCache::new("anchor", "Apps");
///
/// let first = cache.get_or_resolve(&site_map).unwrap();
/// let second = cache.get_or_resolve(&site_map).unwrap();
/// assert!(std::sync::Arc::ptr_eq(&first, &second));
/// assert_eq!(site_map.calls(), 1);
/// ```
#[derive(Debug)]
pub struct BreadcrumbCache {
    anchor: String,
    root_label: String,
    path: OnceCell<Breadcrumb>,
}

impl BreadcrumbCache {
    /// Creates an empty cache for the given anchor screen.
    pub fn new(anchor: impl Into<String>, root_label: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
            root_label: root_label.into(),
            path: OnceCell::new(),
        }
    }

    /// Returns the cached path, resolving it on first use.
    ///
    /// A site-map failure is returned as-is and leaves the cache empty.
    pub fn get_or_resolve<S: SiteMap + ?Sized>(&self, site_map: &S) -> Result<Breadcrumb> {
        if let Some(path) = self.path.get() {
            return Ok(Arc::clone(path));
        }

        let resolved: Breadcrumb = site_map
            .build_breadcrumb(&self.anchor, &self.root_label)?
            .into();
        debug!(anchor = %self.anchor, depth = resolved.len(), "Resolved breadcrumb.");

        Ok(Arc::clone(self.path.get_or_init(|| resolved)))
    }

    /// Returns the cached path without resolving it.
    pub fn cached(&self) -> Option<&Breadcrumb> {
        self.path.get()
    }
}
