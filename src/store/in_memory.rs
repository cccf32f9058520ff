//! InMemoryDeviceStore - HashMap-backed device store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use super::{newest_first, seed_devices, DeviceStore, StoreOptions};
use crate::envelope::PagedResult;
use crate::error::{DeviceError, DeviceResult};
use crate::model::{Device, DeviceChanges, DeviceId, SearchCriteria};
use crate::strategy::UpdateMode;

/// In-memory device store backed by a HashMap behind one `RwLock`.
///
/// Each single-record operation holds the lock for its whole
/// read-modify-write, so a delete and an update racing on the same id are
/// serialised. Listings clone what they need under one read guard, so the
/// page and the total count come from the same snapshot.
///
/// Clone-friendly via Arc: clones share storage.
#[derive(Clone)]
pub struct InMemoryDeviceStore {
    storage: Arc<RwLock<HashMap<DeviceId, Device>>>,
    options: StoreOptions,
}

impl Default for InMemoryDeviceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDeviceStore {
    /// A store seeded with the default number of synthetic devices.
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    /// A store with no records.
    pub fn empty() -> Self {
        Self::with_options(StoreOptions {
            seed_count: 0,
            ..StoreOptions::default()
        })
    }

    pub fn with_options(options: StoreOptions) -> Self {
        let storage: HashMap<DeviceId, Device> = seed_devices(options.seed_count)
            .into_iter()
            .map(|device| (device.id, device))
            .collect();
        debug!(seeded = storage.len(), "device store created");

        Self {
            storage: Arc::new(RwLock::new(storage)),
            options,
        }
    }

    /// Current number of records.
    pub fn len(&self) -> DeviceResult<usize> {
        let storage = self
            .storage
            .read()
            .map_err(|_| DeviceError::LockPoisoned("len"))?;
        Ok(storage.len())
    }

    pub fn is_empty(&self) -> DeviceResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Clone the records matching `predicate` under one read guard, order
    /// them and cut out the requested page.
    fn page_where(
        &self,
        predicate: impl Fn(&Device) -> bool,
        start_index: usize,
        page_size: usize,
        operation: &'static str,
    ) -> DeviceResult<PagedResult<Device>> {
        let mut matching: Vec<Device> = {
            let storage = self
                .storage
                .read()
                .map_err(|_| DeviceError::LockPoisoned(operation))?;
            storage.values().filter(|d| predicate(d)).cloned().collect()
        };

        matching.sort_by(newest_first);
        Ok(PagedResult::from_ordered(matching, start_index, page_size))
    }
}

impl DeviceStore for InMemoryDeviceStore {
    fn add(&self, mut device: Device) -> DeviceResult<Device> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| DeviceError::LockPoisoned("add"))?;

        // Ids are v4 UUIDs; retry on the astronomically unlikely collision.
        let mut id = DeviceId::new();
        while storage.contains_key(&id) {
            id = DeviceId::new();
        }
        device.id = id;
        storage.insert(id, device.clone());

        debug!(%id, "added device");
        Ok(device)
    }

    fn get_by_id(&self, id: DeviceId) -> DeviceResult<Option<Device>> {
        let storage = self
            .storage
            .read()
            .map_err(|_| DeviceError::LockPoisoned("get"))?;

        debug!(%id, "get device");
        Ok(storage.get(&id).cloned())
    }

    fn delete(&self, id: DeviceId) -> DeviceResult<Option<Device>> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| DeviceError::LockPoisoned("delete"))?;

        let removed = storage.remove(&id);
        debug!(%id, removed = removed.is_some(), "delete device");
        Ok(removed)
    }

    fn get_all(&self, start_index: usize, page_size: usize) -> DeviceResult<PagedResult<Device>> {
        let page = self.page_where(|_| true, start_index, page_size, "get_all")?;
        debug!(start_index, page_size, total = page.total_count, "listed devices");
        Ok(page)
    }

    fn search(
        &self,
        criteria: &SearchCriteria,
        start_index: usize,
        page_size: usize,
    ) -> DeviceResult<PagedResult<Device>> {
        debug!(
            id = ?criteria.id,
            name = ?criteria.name,
            brand = ?criteria.brand,
            creation_time = ?criteria.creation_time,
            "searching devices"
        );

        let case_sensitive = self.options.case_sensitive_search;
        let page = self.page_where(
            |device| criteria.matches(device, case_sensitive),
            start_index,
            page_size,
            "search",
        )?;

        debug!(start_index, page_size, total = page.total_count, "search complete");
        Ok(page)
    }

    fn update(&self, device: &Device, mode: UpdateMode) -> DeviceResult<Option<Device>> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| DeviceError::LockPoisoned("update"))?;

        debug!(id = %device.id, %mode, "updating device");
        let Some(stored) = storage.get_mut(&device.id) else {
            return Ok(None);
        };

        let changes = match mode {
            UpdateMode::Full => DeviceChanges::from_device(device),
            UpdateMode::Partial => DeviceChanges::from_non_default(device),
        };
        mode.apply(stored, &changes);

        Ok(Some(stored.clone()))
    }
}
