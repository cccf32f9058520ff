//! Shared fixtures: services over empty or seeded stores.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use device_manager::{DeviceService, InMemoryDeviceStore, StoreOptions};

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap()
}

pub fn empty_service() -> DeviceService {
    DeviceService::new(Arc::new(InMemoryDeviceStore::empty()))
}

pub fn seeded_service(count: usize) -> DeviceService {
    DeviceService::new(Arc::new(InMemoryDeviceStore::with_options(StoreOptions {
        seed_count: count,
        ..StoreOptions::default()
    })))
}

pub fn total(service: &DeviceService) -> usize {
    service
        .get_all_devices(0, 1)
        .unwrap()
        .into_data()
        .unwrap()
        .total_count
}
