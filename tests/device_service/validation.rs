//! Requests rejected before they reach a handler.

use device_manager::usecases::{
    AddDeviceCommand, GetAllDevicesQuery, SearchDevicesQuery, UpdateDeviceCommand,
};
use device_manager::DeviceId;

use crate::support::{empty_service, t0, total};

#[test]
fn add_without_name_mentions_name() {
    let service = empty_service();
    let command = AddDeviceCommand {
        name: String::new(),
        ..AddDeviceCommand::new("", "Y", t0())
    };

    let result = service.send(&command).unwrap();
    assert!(!result.success());
    assert!(result.errors.iter().any(|e| e.contains("Name")));
    assert_eq!(total(&service), 0);
}

#[test]
fn add_from_json_without_fields_reports_each() {
    let service = empty_service();
    let command: AddDeviceCommand = serde_json::from_str("{}").unwrap();
    let result = service.send(&command).unwrap();
    assert_eq!(
        result.errors,
        vec!["Name is missing.", "Brand is missing.", "CreationTime is missing."]
    );
}

#[test]
fn search_without_criteria_needs_one_field() {
    let service = empty_service();
    let result = service
        .search_devices(&SearchDevicesQuery::new().name("  "))
        .unwrap();
    assert_eq!(result.errors, vec!["At least one field should be defined."]);
}

#[test]
fn negative_start_index_and_empty_pages_are_rejected() {
    let service = empty_service();

    let result = service.send(&GetAllDevicesQuery::new(-1, 10)).unwrap();
    assert_eq!(result.errors, vec!["Start Index cannot be a negative number."]);

    let result = service.send(&GetAllDevicesQuery::new(0, 0)).unwrap();
    assert_eq!(result.errors, vec!["Page Size must be 1 or higher."]);

    let result = service
        .search_devices(&SearchDevicesQuery::new().brand("Nokia").page(-3, -3))
        .unwrap();
    assert_eq!(
        result.errors,
        vec!["Start Index cannot be a negative number.", "Page Size must be 1 or higher."]
    );
}

#[test]
fn nil_ids_are_missing() {
    let service = empty_service();
    assert_eq!(
        service.get_device(DeviceId::nil()).unwrap().errors,
        vec!["Id is missing."]
    );
    assert_eq!(
        service.delete_device(DeviceId::nil()).unwrap().errors,
        vec!["Id is missing."]
    );
}

#[test]
fn update_modes_validate_differently() {
    let service = empty_service();
    let id = service.add_device("A", "B", t0()).unwrap().into_data().unwrap().id;

    let empty_partial = service
        .update_device(&UpdateDeviceCommand::partial(id))
        .unwrap();
    assert_eq!(empty_partial.errors, vec!["At least one field should be defined."]);

    let thin_full = service
        .update_device(&UpdateDeviceCommand::full(id).brand("C"))
        .unwrap();
    assert_eq!(thin_full.errors, vec!["Name is missing.", "CreationTime is missing."]);

    let stored = service.get_device(id).unwrap().into_data().unwrap();
    assert_eq!((stored.name.as_str(), stored.brand.as_str()), ("A", "B"));
}
