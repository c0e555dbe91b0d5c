//! Candidate eligibility policy.
//!
//! A candidate is searchable when it is enabled (or was disabled by the
//! user), and its module metadata exists and is not hidden.

use tracing::debug;

use crate::inventory::{CandidateItem, Inventory};

/// Returns whether `item` may be matched against the query.
///
/// Lookup failures never propagate: a candidate whose enablement setting or
/// module metadata cannot be read is excluded and the failure is logged.
/// Each lookup runs at most once, and the enablement setting is only read
/// for disabled candidates.
pub fn is_eligible<I: Inventory + ?Sized>(inventory: &I, item: &CandidateItem) -> bool {
    if !item.enabled {
        match inventory.enabled_setting(&item.id) {
            Ok(setting) if setting.is_user_initiated() => {}
            Ok(setting) => {
                debug!(id = %item.id, ?setting, "Skipping package disabled by the system.");
                return false;
            }
            Err(err) => {
                debug!(id = %item.id, error = %err, "Skipping package without enabled setting.");
                return false;
            }
        }
    }

    match inventory.module_info(&item.id) {
        Ok(module) if module.hidden => {
            debug!(id = %item.id, module = %module.name, "Skipping hidden module.");
            false
        }
        Ok(_) => true,
        Err(err) => {
            debug!(id = %item.id, error = %err, "Skipping package without module info.");
            false
        }
    }
}

/// Keeps the eligible candidates of `items`, preserving their order.
pub fn eligible_candidates<I: Inventory + ?Sized>(
    inventory: &I,
    items: Vec<CandidateItem>,
) -> Vec<CandidateItem> {
    items
        .into_iter()
        .filter(|item| is_eligible(inventory, item))
        .collect()
}
