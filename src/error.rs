//! Error types for the installed-app search pipeline.
//!
//! Only enumeration and site-map failures ever reach the caller of
//! [`InstalledAppTask::execute`](crate::task::InstalledAppTask::execute).
//! Per-candidate lookup failures are absorbed by the candidate filter.

/// Result alias used throughout the crate.
pub type Result<T, E = SearchError> = std::result::Result<T, E>;

/// Errors raised by the search pipeline and its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The inventory could not be enumerated or queried.
    #[error("Inventory error: {message}")]
    Inventory {
        /// Human readable cause reported by the inventory.
        message: String,
    },
    /// A per-package lookup did not find the package.
    #[error("Package not found: {id}")]
    NotFound {
        /// Identifier that was looked up.
        id: String,
    },
    /// The site map could not resolve a breadcrumb path.
    #[error("Site map error for anchor {anchor}: {message}")]
    SiteMap {
        /// Anchor screen the breadcrumb was requested for.
        anchor: String,
        /// Human readable cause reported by the site map.
        message: String,
    },
    /// A result record failed constructor validation.
    #[error("Invalid search result: {message}")]
    InvalidRecord {
        /// Which field was rejected and why.
        message: String,
    },
    /// A rank policy violates tier monotonicity.
    #[error("Invalid rank policy: {message}")]
    InvalidPolicy {
        /// Which constraint was violated.
        message: String,
    },
    /// Options could not be parsed from TOML.
    #[error("Failed to parse search options.")]
    ParseOptions {
        /// Underlying TOML error.
        #[from]
        source: toml::de::Error,
    },
}

impl SearchError {
    /// Returns whether this error reports a missing package.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SearchError::NotFound { .. })
    }
}
