//! In-memory collaborators for tests, benchmarks and embedding.
//!
//! [`InMemoryInventory`] and [`StaticSiteMap`] record how often they are
//! consulted so callers can assert on lookup counts.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::breadcrumb::SiteMap;
use crate::error::{Result, SearchError};
use crate::inventory::{CandidateItem, EnabledSetting, Inventory, ListFlags, ModuleInfo};

#[derive(Debug, Clone)]
struct Package {
    item: CandidateItem,
    setting: EnabledSetting,
    module: Option<ModuleInfo>,
}

#[derive(Debug, Default)]
struct CallCounts {
    module_info: HashMap<String, usize>,
    enabled_setting: HashMap<String, usize>,
}

/// An inventory backed by a `Vec`, listing packages in install order.
///
/// # Examples
///
/// ```
/// use appsearch::inventory::{CandidateItem, Inventory, ListFlags};
/// use appsearch::memory::InMemoryInventory;
///
/// let mut inventory = InMemoryInventory::new();
/// inventory.install(CandidateItem::new("com.example.maps", "Maps"));
/// let listed = inventory.list_candidates(ListFlags::SEARCH).unwrap();
/// assert_eq!(listed.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryInventory {
    packages: Vec<Package>,
    unavailable: Option<String>,
    calls: Mutex<CallCounts>,
}

impl InMemoryInventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a visible package with a default enabled setting.
    pub fn install(&mut self, item: CandidateItem) -> &mut Self {
        self.install_with(item, EnabledSetting::Default, false)
    }

    /// Installs a package with an explicit enabled setting and hidden flag.
    pub fn install_with(
        &mut self,
        item: CandidateItem,
        setting: EnabledSetting,
        hidden: bool,
    ) -> &mut Self {
        let module = ModuleInfo {
            name: item.label.clone(),
            hidden,
        };
        self.packages.push(Package {
            item,
            setting,
            module: Some(module),
        });
        self
    }

    /// Installs a package whose module lookup fails with `NotFound`.
    pub fn install_without_module(&mut self, item: CandidateItem) -> &mut Self {
        self.packages.push(Package {
            item,
            setting: EnabledSetting::Default,
            module: None,
        });
        self
    }

    /// Makes every subsequent listing fail with `message`.
    pub fn set_unavailable(&mut self, message: impl Into<String>) -> &mut Self {
        self.unavailable = Some(message.into());
        self
    }

    /// Returns all installed candidates in install order.
    pub fn snapshot(&self) -> Vec<CandidateItem> {
        self.packages.iter().map(|p| p.item.clone()).collect()
    }

    /// Number of module lookups made for `id`.
    pub fn module_info_calls(&self, id: &str) -> usize {
        self.counts(|c| c.module_info.get(id).copied())
    }

    /// Number of enabled-setting lookups made for `id`.
    pub fn enabled_setting_calls(&self, id: &str) -> usize {
        self.counts(|c| c.enabled_setting.get(id).copied())
    }

    fn counts(&self, read: impl FnOnce(&CallCounts) -> Option<usize>) -> usize {
        let calls = self.calls.lock().unwrap_or_else(|e| e.into_inner());
        read(&calls).unwrap_or(0)
    }

    fn record(&self, write: impl FnOnce(&mut CallCounts)) {
        let mut calls = self.calls.lock().unwrap_or_else(|e| e.into_inner());
        write(&mut calls);
    }

    fn find(&self, id: &str) -> Result<&Package> {
        self.packages
            .iter()
            .find(|p| p.item.id == id)
            .ok_or_else(|| SearchError::NotFound { id: id.to_owned() })
    }
}

impl Inventory for InMemoryInventory {
    fn list_candidates(&self, _flags: ListFlags) -> Result<Vec<CandidateItem>> {
        if let Some(message) = &self.unavailable {
            return Err(SearchError::Inventory {
                message: message.clone(),
            });
        }
        Ok(self.snapshot())
    }

    fn module_info(&self, id: &str) -> Result<ModuleInfo> {
        self.record(|c| *c.module_info.entry(id.to_owned()).or_default() += 1);
        self.find(id)?
            .module
            .clone()
            .ok_or_else(|| SearchError::NotFound { id: id.to_owned() })
    }

    fn enabled_setting(&self, id: &str) -> Result<EnabledSetting> {
        self.record(|c| *c.enabled_setting.entry(id.to_owned()).or_default() += 1);
        Ok(self.find(id)?.setting)
    }
}

/// A site map that always answers with the same path.
#[derive(Debug, Default)]
pub struct StaticSiteMap {
    path: Vec<String>,
    calls: AtomicUsize,
    last_request: Mutex<Option<(String, String)>>,
}

impl StaticSiteMap {
    /// Creates a site map answering with `path`.
    pub fn new<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Number of breadcrumb resolutions performed.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The `(anchor, root_label)` of the most recent resolution.
    pub fn last_request(&self) -> Option<(String, String)> {
        self.last_request
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl SiteMap for StaticSiteMap {
    fn build_breadcrumb(&self, anchor: &str, root_label: &str) -> Result<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap_or_else(|e| e.into_inner()) =
            Some((anchor.to_owned(), root_label.to_owned()));
        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_package_is_not_found() {
        let inv = InMemoryInventory::new();
        assert!(inv.module_info("nope").unwrap_err().is_not_found());
        assert!(inv.enabled_setting("nope").unwrap_err().is_not_found());
    }

    #[test]
    fn package_without_module_is_not_found() {
        let mut inv = InMemoryInventory::new();
        inv.install_without_module(CandidateItem::new("x", "X"));
        assert!(inv.module_info("x").unwrap_err().is_not_found());
        assert_eq!(inv.enabled_setting("x").unwrap(), EnabledSetting::Default);
    }

    #[test]
    fn unavailable_inventory_fails_listing() {
        let mut inv = InMemoryInventory::new();
        inv.set_unavailable("package service down");
        let err = inv.list_candidates(ListFlags::SEARCH).unwrap_err();
        assert!(matches!(err, SearchError::Inventory { .. }));
    }

    #[test]
    fn lookups_are_counted_per_id() {
        let mut inv = InMemoryInventory::new();
        inv.install(CandidateItem::new("a", "A"));
        inv.module_info("a").unwrap();
        inv.module_info("a").unwrap();
        assert_eq!(inv.module_info_calls("a"), 2);
        assert_eq!(inv.module_info_calls("b"), 0);
    }

    #[test]
    fn static_site_map_counts_calls() {
        let site_map = StaticSiteMap::new(["Settings"]);
        assert_eq!(site_map.calls(), 0);
        site_map.build_breadcrumb("a", "b").unwrap();
        assert_eq!(site_map.calls(), 1);
    }
}
