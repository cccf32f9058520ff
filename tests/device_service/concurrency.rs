//! Many callers sharing one service.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use device_manager::usecases::UpdateDeviceCommand;
use device_manager::{DeviceId, UpdateMode};

use crate::support::{empty_service, seeded_service, t0, total};

#[test]
fn parallel_adds_all_land_with_unique_ids() {
    let service = empty_service();

    let ids: Vec<DeviceId> = thread::scope(|s| {
        let workers: Vec<_> = (0..8)
            .map(|w| {
                let service = &service;
                s.spawn(move || {
                    (0..50)
                        .map(|i| {
                            service
                                .add_device(format!("w{}-{}", w, i), "Brand", t0())
                                .unwrap()
                                .into_data()
                                .unwrap()
                                .id
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        workers
            .into_iter()
            .flat_map(|worker| worker.join().unwrap())
            .collect()
    });

    assert_eq!(total(&service), 400);
    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 400);
}

#[test]
fn only_one_of_many_deletes_wins() {
    let service = seeded_service(3);
    let id = service.get_all_devices(0, 1).unwrap().into_data().unwrap().items[0].id;
    let wins = AtomicUsize::new(0);

    thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                if service.delete_device(id).unwrap().success() {
                    wins.fetch_add(1, Ordering::SeqCst);
                }
            });
        }
    });

    assert_eq!(wins.load(Ordering::SeqCst), 1);
    assert_eq!(total(&service), 2);
}

#[test]
fn store_update_racing_delete_never_resurrects() {
    for _ in 0..50 {
        let service = empty_service();
        let device = service.add_device("A", "B", t0()).unwrap().into_data().unwrap();
        let store = service.store();

        let (updated, deleted) = thread::scope(|s| {
            let update = s.spawn(|| {
                let mut changed = device.clone();
                changed.brand = "C".into();
                store.update(&changed, UpdateMode::Partial).unwrap()
            });
            let delete = s.spawn(|| store.delete(device.id).unwrap());
            (update.join().unwrap(), delete.join().unwrap())
        });

        let deleted = deleted.expect("the only delete always finds the record");
        match updated {
            // Update ran first: the delete removed the updated record.
            Some(record) => assert_eq!(deleted, record),
            // Delete ran first: the update saw nothing.
            None => assert_eq!(deleted.brand, "B"),
        }
        assert_eq!(store.get_by_id(device.id).unwrap(), None);
    }
}

#[test]
fn handler_update_racing_delete_reports_a_failure_or_lands_first() {
    for _ in 0..50 {
        let service = empty_service();
        let id = service.add_device("A", "B", t0()).unwrap().into_data().unwrap().id;

        let (update, delete) = thread::scope(|s| {
            let update = s.spawn(|| {
                service
                    .update_device(&UpdateDeviceCommand::partial(id).brand("C"))
                    .unwrap()
            });
            let delete = s.spawn(|| service.delete_device(id).unwrap());
            (update.join().unwrap(), delete.join().unwrap())
        });

        assert!(delete.success());
        if !update.success() {
            let message = &update.errors[0];
            assert!(
                message == "Error updating device."
                    || message == &format!("Device with id {} doesn't exist.", id)
            );
        }
        assert!(service.get_device(id).unwrap().data.is_none());
    }
}

#[test]
fn listings_stay_consistent_under_writes() {
    let service = seeded_service(50);

    thread::scope(|s| {
        s.spawn(|| {
            for i in 0..100 {
                service.add_device(format!("late-{}", i), "Nokia", t0()).unwrap();
            }
        });
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..50 {
                    let page = service.get_all_devices(0, 10).unwrap().into_data().unwrap();
                    assert!(page.total_count >= 50);
                    assert_eq!(page.items.len(), 10);
                }
            });
        }
    });

    assert_eq!(total(&service), 150);
}
