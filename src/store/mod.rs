//! Device store - the storage port used by every request handler.
//!
//! [`DeviceStore`] is the contract; [`InMemoryDeviceStore`] is the volatile,
//! process-lifetime implementation. All operations are safe to call from
//! many threads at once without external locking.
//!
//! ## Example
//!
//! ```ignore
//! use device_manager::{Device, DeviceStore, InMemoryDeviceStore, SearchCriteria};
//!
//! let store = InMemoryDeviceStore::empty();
//! let saved = store.add(Device::new("Galaxy", "Samsung", Utc::now()))?;
//! let page = store.search(&SearchCriteria::new().brand("Sam"), 0, 10)?;
//! assert_eq!(page.items[0].id, saved.id);
//! ```

mod in_memory;
mod seed;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::envelope::PagedResult;
use crate::error::DeviceResult;
use crate::model::{Device, DeviceId, SearchCriteria};
use crate::strategy::UpdateMode;

pub use in_memory::InMemoryDeviceStore;
pub use seed::{seed_devices, SEED_BRANDS};

/// Storage contract for device records.
///
/// Listing operations order by creation time, newest first, and page by
/// zero-based page number: page `start_index` skips
/// `start_index * page_size` records.
pub trait DeviceStore: Send + Sync {
    /// Insert `device` under a fresh id, ignoring any id it carries.
    fn add(&self, device: Device) -> DeviceResult<Device>;

    /// Look up a record. `None` is not an error.
    fn get_by_id(&self, id: DeviceId) -> DeviceResult<Option<Device>>;

    /// Remove and return a record, or `None` if nothing matched.
    fn delete(&self, id: DeviceId) -> DeviceResult<Option<Device>>;

    /// One page of all records plus the current record count.
    fn get_all(&self, start_index: usize, page_size: usize) -> DeviceResult<PagedResult<Device>>;

    /// One page of the records matching `criteria` plus the match count.
    fn search(
        &self,
        criteria: &SearchCriteria,
        start_index: usize,
        page_size: usize,
    ) -> DeviceResult<PagedResult<Device>>;

    /// Merge `device` onto the record with the same id.
    ///
    /// `Full` copies every field. `Partial` copies only fields that differ
    /// from their zero value. Returns the updated record, or `None` when
    /// the id is unknown.
    fn update(&self, device: &Device, mode: UpdateMode) -> DeviceResult<Option<Device>>;
}

/// Tunables for [`InMemoryDeviceStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreOptions {
    /// Synthetic records created on construction.
    pub seed_count: usize,
    /// Whether name/brand search is case-sensitive.
    pub case_sensitive_search: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            seed_count: 100,
            case_sensitive_search: true,
        }
    }
}

/// Listing order: newest first, ties broken by id so pages never overlap.
pub(crate) fn newest_first(a: &Device, b: &Device) -> Ordering {
    b.creation_time
        .cmp(&a.creation_time)
        .then_with(|| a.id.cmp(&b.id))
}
