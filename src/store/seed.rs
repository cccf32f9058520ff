//! Synthetic records for a freshly constructed store.

use chrono::{Duration, Utc};
use rand::Rng;

use crate::model::{Device, DeviceId};

pub const SEED_BRANDS: [&str; 3] = ["Iphone", "Samsung", "Nokia"];

const NAME_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// `count` devices with random brand and name, record `i` dated `i + 1`
/// days before now, so listing order equals generation order.
pub fn seed_devices(count: usize) -> Vec<Device> {
    let mut rng = rand::rng();
    let now = Utc::now();

    (0..count)
        .map(|i| {
            let brand = SEED_BRANDS[rng.random_range(0..SEED_BRANDS.len())];
            let suffix: String = (0..4)
                .map(|_| NAME_CHARS[rng.random_range(0..NAME_CHARS.len())] as char)
                .collect();
            Device {
                id: DeviceId::new(),
                name: format!("{}_{}", brand, suffix),
                brand: brand.to_string(),
                creation_time: now - Duration::days(i as i64 + 1),
            }
        })
        .collect()
}
