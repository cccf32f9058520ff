//! Add, read, update and delete one device end to end.

use device_manager::usecases::UpdateDeviceCommand;
use device_manager::{Device, DeviceId};

use crate::support::{empty_service, seeded_service, t0, total};

#[test]
fn add_get_update_delete() {
    let service = empty_service();

    let added = service.add_device("X", "Y", t0()).unwrap();
    assert!(added.success());
    let id1 = added.data.unwrap().id;
    assert!(!id1.is_nil());

    let fetched = service.get_device(id1).unwrap().into_data().unwrap();
    assert_eq!(
        (fetched.name.as_str(), fetched.brand.as_str(), fetched.creation_time),
        ("X", "Y", t0())
    );

    let updated = service
        .update_device(&UpdateDeviceCommand::partial(id1).brand("Z"))
        .unwrap();
    assert!(updated.success());

    let fetched = service.get_device(id1).unwrap().into_data().unwrap();
    assert_eq!(
        fetched,
        Device {
            id: id1,
            name: "X".into(),
            brand: "Z".into(),
            creation_time: t0(),
        }
    );

    let deleted = service.delete_device(id1).unwrap();
    assert_eq!(deleted.data.map(|d| d.id), Some(id1));

    let gone = service.get_device(id1).unwrap();
    assert!(gone.success());
    assert!(gone.data.is_none());
}

#[test]
fn adding_n_devices_grows_the_total_by_n_with_distinct_ids() {
    let service = seeded_service(10);
    let before = total(&service);

    let ids: Vec<DeviceId> = (0..25)
        .map(|i| {
            service
                .add_device(format!("name-{}", i), "Brand", t0())
                .unwrap()
                .into_data()
                .unwrap()
                .id
        })
        .collect();

    assert_eq!(total(&service), before + 25);
    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
    assert!(ids.iter().all(|id| !id.is_nil()));
}

#[test]
fn deleting_changes_the_total_only_when_something_was_removed() {
    let service = seeded_service(5);
    let victim = service.get_all_devices(0, 1).unwrap().into_data().unwrap().items[0].id;

    let deleted = service.delete_device(victim).unwrap();
    assert_eq!(deleted.data.map(|d| d.id), Some(victim));
    assert_eq!(total(&service), 4);

    let missing = DeviceId::new();
    let result = service.delete_device(missing).unwrap();
    assert!(!result.success());
    assert_eq!(result.errors, vec![format!("Device with id {} doesn't exist.", missing)]);
    assert_eq!(total(&service), 4);
}

#[test]
fn full_update_overwrites_unset_fields() {
    let service = empty_service();
    let id = service.add_device("A", "B", t0()).unwrap().into_data().unwrap().id;

    let replaced = service
        .update_device(
            &UpdateDeviceCommand::full(id)
                .name("N")
                .brand("C")
                .creation_time(t0() + chrono::Duration::hours(1)),
        )
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(replaced.id, id);
    assert_eq!((replaced.name.as_str(), replaced.brand.as_str()), ("N", "C"));
    assert_eq!(replaced.creation_time, t0() + chrono::Duration::hours(1));
}

#[test]
fn updating_a_missing_device_is_not_found() {
    let service = empty_service();
    let id = DeviceId::new();
    let result = service
        .update_device(&UpdateDeviceCommand::partial(id).name("N"))
        .unwrap();
    assert!(!result.success());
    assert_eq!(result.errors, vec![format!("Device with id {} doesn't exist.", id)]);
}

#[test]
fn full_update_with_an_empty_name_clears_it() {
    let service = empty_service();
    let id = service.add_device("A", "B", t0()).unwrap().into_data().unwrap().id;

    let result = service
        .update_device(&UpdateDeviceCommand::full(id).name("").brand("C").creation_time(t0()))
        .unwrap();
    assert!(result.success(), "{:?}", result.errors);

    let stored = service.get_device(id).unwrap().into_data().unwrap();
    assert_eq!((stored.name.as_str(), stored.brand.as_str()), ("", "C"));
}
