//! Configuration options for the installed-app search.
//!
//! [`SearchOptions`] gathers every tunable of the pipeline. Options can be
//! built in code or parsed from TOML, where every field is optional.

use serde::Deserialize;

use crate::breadcrumb::{APPS_ANCHOR, APPS_ROOT_LABEL};
use crate::error::Result;
use crate::navigation::MENU_KEY_APPS;
use crate::rank::RankPolicy;

/// Options controlling matching, ranking and result assembly.
///
/// # Defaults
///
/// - `rank_policy`: [`RankPolicy::default`] (`threshold = 6`, tiers 2 and 3)
/// - `strip_diacritics`: `false` (labels are compared as written)
/// - `highlight_menu`: `false` (payloads open the details screen directly)
/// - `anchor` / `root_label`: the apps screen
/// - `context_tag`: the apps menu key
///
/// # Examples
///
/// ```
/// use appsearch::SearchOptions;
///
/// let opts = SearchOptions::from_toml_str(r#"
///     strip_diacritics = true
///
///     [rank_policy]
///     threshold = 4
/// "#).unwrap();
/// assert!(opts.strip_diacritics);
/// assert_eq!(opts.rank_policy.threshold, 4);
/// assert_eq!(opts.rank_policy.far_tier.0, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Score-to-tier policy.
    pub rank_policy: RankPolicy,
    /// Remove combining marks before comparing labels and queries.
    pub strip_diacritics: bool,
    /// Route navigation through the menu-highlighting trampoline.
    pub highlight_menu: bool,
    /// Site-map anchor the breadcrumb is resolved for.
    pub anchor: String,
    /// Human readable label of the anchor.
    pub root_label: String,
    /// Menu context passed to the payload builder.
    pub context_tag: String,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            rank_policy: RankPolicy::default(),
            strip_diacritics: false,
            highlight_menu: false,
            anchor: APPS_ANCHOR.to_owned(),
            root_label: APPS_ROOT_LABEL.to_owned(),
            context_tag: MENU_KEY_APPS.to_owned(),
        }
    }
}

impl SearchOptions {
    /// Parses options from TOML and validates them.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let opts: SearchOptions = toml::from_str(raw)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Checks cross-field constraints.
    pub fn validate(&self) -> Result<()> {
        self.rank_policy.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use crate::rank::RankTier;

    #[test]
    fn defaults() {
        let opts = SearchOptions::default();
        assert_eq!(opts.rank_policy, RankPolicy::default());
        assert!(!opts.strip_diacritics);
        assert!(!opts.highlight_menu);
        assert_eq!(opts.anchor, APPS_ANCHOR);
        assert_eq!(opts.root_label, "Apps");
        assert_eq!(opts.context_tag, "top_level_apps");
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(
            SearchOptions::from_toml_str("").unwrap(),
            SearchOptions::default()
        );
    }

    #[test]
    fn toml_overrides_tiers() {
        let opts = SearchOptions::from_toml_str(
            r#"
            root_label = "Applications"

            [rank_policy]
            close_tier = 1
            far_tier = 5
            "#,
        )
        .unwrap();
        assert_eq!(opts.root_label, "Applications");
        assert_eq!(opts.rank_policy.close_tier, RankTier(1));
        assert_eq!(opts.rank_policy.far_tier, RankTier(5));
        assert_eq!(opts.rank_policy.threshold, 6);
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let err = SearchOptions::from_toml_str("strip_diacritics = \"yes\"").unwrap_err();
        assert!(matches!(err, SearchError::ParseOptions { .. }));
    }

    #[test]
    fn inverted_policy_is_rejected() {
        let err = SearchOptions::from_toml_str(
            r#"
            [rank_policy]
            close_tier = 7
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, SearchError::InvalidPolicy { .. }));
    }
}
