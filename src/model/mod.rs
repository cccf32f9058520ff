//! Models - the device record and the shapes used to query and change it.
//!
//! A [`Device`] is owned by the store once added. Callers receive clones.
//! Changes travel as [`DeviceChanges`] and filters as [`SearchCriteria`],
//! both of which use `Option` per field so "not provided" is never confused
//! with a legitimately empty value.
//!
//! ## Example
//!
//! ```ignore
//! use device_manager::{Device, DeviceChanges, SearchCriteria, UpdateMode};
//!
//! let mut device = Device::new("Galaxy", "Samsung", Utc::now());
//! UpdateMode::Partial.apply(&mut device, &DeviceChanges::new().brand("Nokia"));
//!
//! let criteria = SearchCriteria::new().brand("Nokia");
//! assert!(criteria.matches(&device, true));
//! ```

mod device;
mod id;
mod search;

pub use device::{Device, DeviceChanges};
pub use id::DeviceId;
pub use search::SearchCriteria;
