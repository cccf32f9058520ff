//! Store doubles for handler tests.

use std::sync::Arc;

use crate::envelope::PagedResult;
use crate::error::{DeviceError, DeviceResult};
use crate::model::{Device, DeviceId, SearchCriteria};
use crate::store::{DeviceStore, InMemoryDeviceStore};
use crate::strategy::UpdateMode;

/// Which store call misbehaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// `add` hands back a record with a nil id.
    NilIdOnAdd,
    /// `delete` finds nothing, as if another caller won the race.
    LostDelete,
    /// `update` finds nothing, as if the record was deleted meanwhile.
    LostUpdate,
    /// Every call fails like a poisoned lock.
    Poisoned,
}

/// Wraps an empty [`InMemoryDeviceStore`] and injects one [`Fault`].
pub struct FaultyStore {
    inner: InMemoryDeviceStore,
    fault: Fault,
}

impl FaultyStore {
    pub fn new(fault: Fault) -> Self {
        Self {
            inner: InMemoryDeviceStore::empty(),
            fault,
        }
    }

    pub fn inner(&self) -> &InMemoryDeviceStore {
        &self.inner
    }

    fn poisoned(&self, op: &'static str) -> DeviceResult<()> {
        if self.fault == Fault::Poisoned {
            return Err(DeviceError::LockPoisoned(op));
        }
        Ok(())
    }
}

impl DeviceStore for FaultyStore {
    fn add(&self, device: Device) -> DeviceResult<Device> {
        self.poisoned("add")?;
        let mut saved = self.inner.add(device)?;
        if self.fault == Fault::NilIdOnAdd {
            saved.id = DeviceId::nil();
        }
        Ok(saved)
    }

    fn get_by_id(&self, id: DeviceId) -> DeviceResult<Option<Device>> {
        self.poisoned("get")?;
        self.inner.get_by_id(id)
    }

    fn delete(&self, id: DeviceId) -> DeviceResult<Option<Device>> {
        self.poisoned("delete")?;
        if self.fault == Fault::LostDelete {
            return Ok(None);
        }
        self.inner.delete(id)
    }

    fn get_all(&self, start_index: usize, page_size: usize) -> DeviceResult<PagedResult<Device>> {
        self.poisoned("get_all")?;
        self.inner.get_all(start_index, page_size)
    }

    fn search(
        &self,
        criteria: &SearchCriteria,
        start_index: usize,
        page_size: usize,
    ) -> DeviceResult<PagedResult<Device>> {
        self.poisoned("search")?;
        self.inner.search(criteria, start_index, page_size)
    }

    fn update(&self, device: &Device, mode: UpdateMode) -> DeviceResult<Option<Device>> {
        self.poisoned("update")?;
        if self.fault == Fault::LostUpdate {
            return Ok(None);
        }
        self.inner.update(device, mode)
    }
}

/// An empty shared store.
pub fn empty_store() -> Arc<InMemoryDeviceStore> {
    Arc::new(InMemoryDeviceStore::empty())
}
