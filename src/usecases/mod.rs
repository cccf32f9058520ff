//! Use cases: one request type, rule set and handler per operation.
//!
//! Each module follows the same convention:
//! - a serde request struct implementing [`Request`](crate::pipeline::Request)
//! - `rules()`: the [`RuleSet`] checked before the handler runs
//! - a handler holding the shared [`DeviceStore`](crate::DeviceStore)
//!
//! Handlers turn not-found and lost-race conditions into failed envelopes.
//! Only store faults come back as `Err`.

mod add_device;
mod delete_device;
mod get_all_devices;
mod get_device_by_id;
mod search_devices;
mod update_device;

#[cfg(test)]
pub(crate) mod testing;

pub use add_device::{AddDeviceCommand, AddDeviceHandler};
pub use delete_device::{DeleteDeviceCommand, DeleteDeviceHandler};
pub use get_all_devices::{GetAllDevicesQuery, GetAllDevicesHandler};
pub use get_device_by_id::{GetDeviceByIdHandler, GetDeviceByIdQuery};
pub use search_devices::{SearchDevicesHandler, SearchDevicesQuery};
pub use update_device::{UpdateDeviceCommand, UpdateDeviceHandler};

use crate::error::{DeviceError, DeviceResult};
use crate::pipeline::RuleSet;

pub const DEFAULT_START_INDEX: i64 = 0;
pub const DEFAULT_PAGE_SIZE: i64 = 20;

pub(crate) const ID_MISSING: &str = "Id is missing.";
pub(crate) const NAME_MISSING: &str = "Name is missing.";
pub(crate) const BRAND_MISSING: &str = "Brand is missing.";
pub(crate) const CREATION_TIME_MISSING: &str = "CreationTime is missing.";
pub(crate) const NO_FIELDS: &str = "At least one field should be defined.";
pub(crate) const NEGATIVE_START_INDEX: &str = "Start Index cannot be a negative number.";
pub(crate) const PAGE_SIZE_TOO_SMALL: &str = "Page Size must be 1 or higher.";

/// Requests that carry a zero-based page number and a page size.
pub trait Paging {
    fn start_index(&self) -> i64;
    fn page_size(&self) -> i64;

    /// Both values as store arguments.
    ///
    /// Validation rejects negative values before a handler runs, so this
    /// only fails when a handler is called directly.
    fn paging(&self) -> DeviceResult<(usize, usize)> {
        let start = usize::try_from(self.start_index()).map_err(|_| {
            DeviceError::InvalidArgument(format!("start index {}", self.start_index()))
        })?;
        let size = usize::try_from(self.page_size()).map_err(|_| {
            DeviceError::InvalidArgument(format!("page size {}", self.page_size()))
        })?;
        Ok((start, size))
    }
}

/// Append the paging rules to `rules`.
pub(crate) fn paging_rules<R: Paging + 'static>(rules: RuleSet<R>) -> RuleSet<R> {
    rules
        .rule(|r: &R| r.start_index() >= 0, NEGATIVE_START_INDEX)
        .rule(|r: &R| r.page_size() >= 1, PAGE_SIZE_TOO_SMALL)
}

/// `Some` only for text with something other than whitespace in it.
pub(crate) fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
}

pub(crate) fn default_start_index() -> i64 {
    DEFAULT_START_INDEX
}

pub(crate) fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}
