//! End-to-end walk through the device service.
//!
//! Run with `RUST_LOG=device_manager=info cargo run --example inventory`.

use std::error::Error;

use chrono::{TimeZone, Utc};
use serde::Serialize;

use device_manager::usecases::{SearchDevicesQuery, UpdateDeviceCommand};
use device_manager::{telemetry, DeviceManagerConfig, DeviceService};

fn show<T: Serialize>(step: &str, value: &T) -> Result<(), Box<dyn Error>> {
    println!("== {}\n{}\n", step, serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = DeviceManagerConfig::from_env()?;
    telemetry::init_tracing(&config);

    let service = DeviceService::from_config(&config);
    let t0 = Utc
        .with_ymd_and_hms(2024, 5, 17, 9, 0, 0)
        .single()
        .ok_or("invalid timestamp")?;

    let added = service.add_device("X", "Y", t0)?;
    show("add", &added)?;
    let id = added.data.ok_or("add returned no device")?.id;

    show("get", &service.get_device(id)?)?;

    let partial = UpdateDeviceCommand::partial(id).brand("Z");
    show("partial update", &service.update_device(&partial)?)?;
    show("get after update", &service.get_device(id)?)?;

    show("first page", &service.get_all_devices(0, 3)?)?;
    show(
        "search Samsung",
        &service.search_devices(&SearchDevicesQuery::new().brand("Samsung").page(0, 3))?,
    )?;
    show("invalid search", &service.search_devices(&SearchDevicesQuery::new())?)?;

    show("delete", &service.delete_device(id)?)?;
    show("get after delete", &service.get_device(id)?)?;
    show("delete again", &service.delete_device(id)?)?;

    Ok(())
}
