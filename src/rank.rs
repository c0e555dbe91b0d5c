//! Mapping word differences onto coarse rank tiers.
//!
//! The policy is provisional; callers tune it through [`RankPolicy`] rather
//! than relying on the numeric tier values.

use std::fmt;

use serde::Deserialize;

use crate::error::{Result, SearchError};
use crate::matching::MatchScore;

/// A coarse priority bucket. Lower tiers sort first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct RankTier(pub u8);

impl RankTier {
    /// Tier for labels within the close-match threshold.
    pub const CLOSE: RankTier = RankTier(2);
    /// Tier for every other matching label.
    pub const FAR: RankTier = RankTier(3);
}

impl fmt::Display for RankTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Threshold policy turning a [`MatchScore`] into a [`RankTier`].
///
/// # Defaults
///
/// - `threshold`: `6`
/// - `close_tier`: [`RankTier::CLOSE`]
/// - `far_tier`: [`RankTier::FAR`]
///
/// # Examples
///
/// ```
/// use appsearch::matching::MatchScore;
/// use appsearch::rank::{RankPolicy, RankTier};
///
/// let policy = RankPolicy::default();
/// assert_eq!(policy.assign(MatchScore::Difference(5)), Some(RankTier(2)));
/// assert_eq!(policy.assign(MatchScore::Difference(6)), Some(RankTier(3)));
/// assert_eq!(policy.assign(MatchScore::NoMatch), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RankPolicy {
    /// Differences strictly below this value are close matches.
    pub threshold: usize,
    /// Tier assigned to close matches.
    pub close_tier: RankTier,
    /// Tier assigned to all other matches.
    pub far_tier: RankTier,
}

impl Default for RankPolicy {
    fn default() -> Self {
        Self {
            threshold: 6,
            close_tier: RankTier::CLOSE,
            far_tier: RankTier::FAR,
        }
    }
}

impl RankPolicy {
    /// Assigns a tier to `score`, or `None` for [`MatchScore::NoMatch`].
    pub fn assign(&self, score: MatchScore) -> Option<RankTier> {
        let difference = score.difference()?;
        if difference < self.threshold {
            Some(self.close_tier)
        } else {
            Some(self.far_tier)
        }
    }

    /// Checks that close matches never rank behind far matches.
    pub fn validate(&self) -> Result<()> {
        if self.close_tier > self.far_tier {
            return Err(SearchError::InvalidPolicy {
                message: format!(
                    "close_tier ({}) must not exceed far_tier ({}).",
                    self.close_tier, self.far_tier
                ),
            });
        }
        Ok(())
    }
}
