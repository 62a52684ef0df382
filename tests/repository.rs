use fleet_admin::domain::service_event::ServiceStatus;
use fleet_admin::domain::vehicle::{FuelType, NewVehicle, UpdateVehicle, VehicleStatus,
    VehicleType};
use fleet_admin::repository::errors::RepositoryError;
use fleet_admin::repository::memory::InMemoryRepository;
use fleet_admin::repository::{
    DriverListQuery, DriverReader, FuelRecordListQuery, FuelReader, InsuranceReader,
    PolicyListQuery, ServiceLogQuery, ServiceLogReader, VehicleListQuery, VehicleReader,
    VehicleWriter,
};
use fleet_admin::services::calendar;

mod common;

use common::date;

fn new_vehicle(plate: &str) -> NewVehicle {
    NewVehicle::new(
        plate,
        "Peugeot",
        "Partner",
        2022,
        VehicleType::Van,
        FuelType::Diesel,
        12_000,
    )
    .expect("valid vehicle")
}

#[test]
fn vehicle_crud_round_trips() {
    let repo = InMemoryRepository::new();

    let created = repo
        .create_vehicle(&new_vehicle("100 tu 200"))
        .expect("create failed");
    assert_eq!(created.id, 1);
    // Plates are normalized on the way in.
    assert_eq!(created.plate.as_str(), "100 TU 200");

    let fetched = repo
        .get_vehicle_by_id(created.id)
        .expect("get failed")
        .expect("vehicle missing");
    assert_eq!(fetched, created);

    let updates = UpdateVehicle {
        plate: created.plate.clone(),
        brand: created.brand.clone(),
        model: created.model.clone(),
        year: created.year,
        vehicle_type: created.vehicle_type.clone(),
        status: VehicleStatus::Inactive,
        mileage: 15_500,
        fuel_type: created.fuel_type.clone(),
    };
    let updated = repo
        .update_vehicle(created.id, &updates)
        .expect("update failed");
    assert_eq!(updated.status, VehicleStatus::Inactive);
    assert_eq!(updated.mileage, 15_500);

    repo.delete_vehicle(created.id).expect("delete failed");
    assert!(
        repo.get_vehicle_by_id(created.id)
            .expect("get failed")
            .is_none()
    );
    assert!(matches!(
        repo.delete_vehicle(created.id),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn duplicate_plates_violate_the_uniqueness_constraint() {
    let repo = InMemoryRepository::new();
    repo.create_vehicle(&new_vehicle("111 TU 222"))
        .expect("create failed");

    // Normalization makes these the same plate.
    assert!(matches!(
        repo.create_vehicle(&new_vehicle("  111 tu 222 ")),
        Err(RepositoryError::ConstraintViolation(_))
    ));
}

#[test]
fn vehicle_list_filters_and_searches() {
    let repo = common::seeded_repo();

    let (total, _) = repo
        .list_vehicles(VehicleListQuery::new())
        .expect("list failed");
    assert_eq!(total, 4);

    let (vans, items) = repo
        .list_vehicles(VehicleListQuery::new().vehicle_type(VehicleType::Van))
        .expect("list failed");
    assert_eq!(vans, 2);
    assert!(items.iter().all(|v| v.vehicle_type == VehicleType::Van));

    let (_, items) = repo
        .list_vehicles(VehicleListQuery::new().status(VehicleStatus::Maintenance))
        .expect("list failed");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].model, "Berlingo");

    let (found, items) = repo
        .list_vehicles(VehicleListQuery::new().search("renault"))
        .expect("search failed");
    assert_eq!(found, 2);
    assert!(items.iter().all(|v| v.brand == "Renault"));
}

#[test]
fn pagination_slices_but_reports_the_full_total() {
    let repo = InMemoryRepository::new();
    for n in 0..25 {
        repo.create_vehicle(&new_vehicle(&format!("{n:03} TU 900")))
            .expect("create failed");
    }

    let (total, items) = repo
        .list_vehicles(VehicleListQuery::new().paginate(2, 10))
        .expect("list failed");
    assert_eq!(total, 25);
    assert_eq!(items.len(), 10);
    assert_eq!(items[0].id, 11);

    let (total, items) = repo
        .list_vehicles(VehicleListQuery::new().paginate(3, 10))
        .expect("list failed");
    assert_eq!(total, 25);
    assert_eq!(items.len(), 5);
}

#[test]
fn deleting_a_vehicle_leaves_dependents_dangling_but_readable() {
    let repo = common::seeded_repo();
    let (_, vehicles) = repo
        .list_vehicles(VehicleListQuery::new().search("Berlingo"))
        .expect("list failed");
    let berlingo = &vehicles[0];

    let (before, _) = repo
        .list_maintenances(ServiceLogQuery::new().vehicle(berlingo.id))
        .expect("list failed");
    assert_eq!(before, 1);

    repo.delete_vehicle(berlingo.id).expect("delete failed");

    let (after, _) = repo
        .list_maintenances(ServiceLogQuery::new().vehicle(berlingo.id))
        .expect("list failed");
    assert_eq!(after, before);

    // The projector tolerates the dangling reference with a placeholder.
    let events = calendar::load_calendar_events(&repo).expect("projection failed");
    assert!(
        events
            .iter()
            .any(|e| e.vehicle_id == berlingo.id && e.title.contains("Unknown vehicle"))
    );
}

#[test]
fn service_log_queries_filter_by_status() {
    let repo = common::seeded_repo();

    let (scheduled, _) = repo
        .list_maintenances(ServiceLogQuery::new().status(ServiceStatus::Scheduled))
        .expect("list failed");
    assert_eq!(scheduled, 1);

    let (in_progress, _) = repo
        .list_maintenances(ServiceLogQuery::new().status(ServiceStatus::InProgress))
        .expect("list failed");
    assert_eq!(in_progress, 1);

    let (oil_scheduled, _) = repo
        .list_oil_changes(ServiceLogQuery::new().status(ServiceStatus::Scheduled))
        .expect("list failed");
    assert_eq!(oil_scheduled, 1);
}

#[test]
fn fuel_record_queries_filter_by_period_and_vehicle() {
    let repo = common::seeded_repo();

    let (total, _) = repo
        .list_fuel_records(FuelRecordListQuery::new())
        .expect("list failed");
    assert_eq!(total, 3);

    let (in_window, _) = repo
        .list_fuel_records(FuelRecordListQuery::new().period(date(2025, 7, 1), date(2025, 7, 15)))
        .expect("list failed");
    assert_eq!(in_window, 2);

    let (_, vehicles) = repo
        .list_vehicles(VehicleListQuery::new().search("Actros"))
        .expect("list failed");
    let (for_truck, records) = repo
        .list_fuel_records(FuelRecordListQuery::new().vehicle(vehicles[0].id))
        .expect("list failed");
    assert_eq!(for_truck, 1);
    assert_eq!(records[0].quantity_liters, 240.0);
}

#[test]
fn driver_listing_searches_by_name_and_license() {
    let repo = common::seeded_repo();

    let (_, by_name) = repo
        .list_drivers(DriverListQuery::new().search("leila"))
        .expect("search failed");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Leila Haddad");

    let (_, by_license) = repo
        .list_drivers(DriverListQuery::new().search("TN-623"))
        .expect("search failed");
    assert_eq!(by_license.len(), 1);
    assert_eq!(by_license[0].name, "Karim Jlassi");
}

#[test]
fn policy_queries_scope_to_cover_dates() {
    let repo = common::seeded_repo();

    let (active_in_june, _) = repo
        .list_policies(PolicyListQuery::new().active_on(date(2025, 6, 1)))
        .expect("list failed");
    assert_eq!(active_in_june, 2);

    let (active_in_february, policies) = repo
        .list_policies(PolicyListQuery::new().active_on(date(2025, 2, 1)))
        .expect("list failed");
    assert_eq!(active_in_february, 1);
    assert_eq!(policies[0].policy_number, "POL-2025-0117");
}
