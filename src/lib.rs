//! Device inventory core: a request pipeline with validation and logging
//! behaviors in front of use-case handlers over a concurrent in-memory
//! device store.

pub mod config;
mod envelope;
mod error;
mod model;
pub mod pipeline;
mod service;
mod store;
mod strategy;
pub mod telemetry;
pub mod usecases;

pub use config::DeviceManagerConfig;
pub use envelope::{ApiResult, PagedResult};
pub use error::{DeviceError, DeviceResult};
pub use model::{Device, DeviceChanges, DeviceId, SearchCriteria};
pub use service::{DeviceService, Routed};
pub use store::{seed_devices, DeviceStore, InMemoryDeviceStore, StoreOptions, SEED_BRANDS};
pub use strategy::UpdateMode;
