//! Application inventory types and the [`Inventory`] collaborator trait.
//!
//! The inventory is owned by the platform; the search pipeline only reads
//! snapshots of it.

use bitflags::bitflags;

use crate::error::Result;

bitflags! {
    /// Which otherwise-hidden packages [`Inventory::list_candidates`] returns.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ListFlags: u32 {
        /// Include packages whose components are disabled.
        const MATCH_DISABLED_COMPONENTS = 0x0000_0200;
        /// Include packages disabled until first use.
        const MATCH_DISABLED_UNTIL_USED_COMPONENTS = 0x0000_8000;
        /// Include instant apps.
        const MATCH_INSTANT = 0x0080_0000;
    }
}

impl ListFlags {
    /// The flags the installed-app search always lists with.
    pub const SEARCH: ListFlags = ListFlags::MATCH_DISABLED_COMPONENTS
        .union(ListFlags::MATCH_DISABLED_UNTIL_USED_COMPONENTS)
        .union(ListFlags::MATCH_INSTANT);
}

/// Why a package is (or is not) enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnabledSetting {
    /// The package uses its manifest default.
    Default,
    /// Explicitly enabled.
    Enabled,
    /// Disabled by the system or a policy.
    Disabled,
    /// Disabled by the user from the settings screen.
    DisabledUser,
    /// Disabled until the user first launches it.
    DisabledUntilUsed,
}

impl EnabledSetting {
    /// Returns whether the user deliberately disabled the package.
    pub fn is_user_initiated(self) -> bool {
        matches!(self, EnabledSetting::DisabledUser)
    }
}

/// Module metadata for a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleInfo {
    /// Module name as reported by the platform.
    pub name: String,
    /// Hidden modules never surface in search.
    pub hidden: bool,
}

/// One installed application as listed by the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateItem {
    /// Package name. Unique within one listing.
    pub id: String,
    /// Human readable label.
    pub label: String,
    /// Current enabled flag.
    pub enabled: bool,
}

impl CandidateItem {
    /// Creates an enabled candidate.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            enabled: true,
        }
    }

    /// Builder-style setter for the enabled flag.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Source of installed applications and their metadata.
pub trait Inventory {
    /// Lists installed packages. Failure here aborts the search.
    fn list_candidates(&self, flags: ListFlags) -> Result<Vec<CandidateItem>>;

    /// Looks up module metadata. Fails with
    /// [`SearchError::NotFound`](crate::error::SearchError::NotFound) for
    /// unknown packages.
    fn module_info(&self, id: &str) -> Result<ModuleInfo>;

    /// Looks up why a package is enabled or disabled.
    fn enabled_setting(&self, id: &str) -> Result<EnabledSetting>;
}

impl<I: Inventory + ?Sized> Inventory for &I {
    fn list_candidates(&self, flags: ListFlags) -> Result<Vec<CandidateItem>> {
        (**self).list_candidates(flags)
    }

    fn module_info(&self, id: &str) -> Result<ModuleInfo> {
        (**self).module_info(id)
    }

    fn enabled_setting(&self, id: &str) -> Result<EnabledSetting> {
        (**self).enabled_setting(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_flags_include_everything() {
        assert!(ListFlags::SEARCH.contains(ListFlags::MATCH_DISABLED_COMPONENTS));
        assert!(ListFlags::SEARCH.contains(ListFlags::MATCH_DISABLED_UNTIL_USED_COMPONENTS));
        assert!(ListFlags::SEARCH.contains(ListFlags::MATCH_INSTANT));
    }

    #[test]
    fn only_disabled_user_is_user_initiated() {
        assert!(EnabledSetting::DisabledUser.is_user_initiated());
        assert!(!EnabledSetting::Disabled.is_user_initiated());
        assert!(!EnabledSetting::DisabledUntilUsed.is_user_initiated());
        assert!(!EnabledSetting::Default.is_user_initiated());
        assert!(!EnabledSetting::Enabled.is_user_initiated());
    }

    #[test]
    fn candidate_builder() {
        let item = CandidateItem::new("com.example.maps", "Maps").enabled(false);
        assert_eq!(item.id, "com.example.maps");
        assert_eq!(item.label, "Maps");
        assert!(!item.enabled);
    }
}
