use fleet_admin::domain::driver::DriverStatus;
use fleet_admin::domain::service_event::{MaintenanceType, ServiceStatus};
use fleet_admin::domain::stats::{
    DashboardStats, FuelPeriod, approximate_consumption_per_100km, expiring_driver_licenses,
    expiring_fuel_cards,
};
use fleet_admin::domain::vehicle::{VehicleStatus, VehicleType};
use fleet_admin::services::dashboard;

mod common;

use common::{date, datetime, driver, fuel_card, fuel_record, inspection, maintenance, oil_change,
    vehicle};

#[test]
fn three_way_type_split_never_exceeds_total() {
    let vehicles = vec![
        vehicle(1, VehicleType::Car, VehicleStatus::Active, 10_000),
        vehicle(2, VehicleType::Truck, VehicleStatus::Active, 20_000),
        vehicle(3, VehicleType::Van, VehicleStatus::Inactive, 30_000),
        vehicle(4, VehicleType::Bus, VehicleStatus::Active, 40_000),
    ];

    let stats = DashboardStats::compute(&vehicles, &[], &[], &[], &[], &[], None);
    let split = stats.vehicles_by_type;
    assert_eq!(split.truck + split.car + split.van, 3);
    assert!(split.truck + split.car + split.van < stats.total_vehicles);

    // Without exotic types the split accounts for every vehicle.
    let stats = DashboardStats::compute(&vehicles[..3], &[], &[], &[], &[], &[], None);
    let split = stats.vehicles_by_type;
    assert_eq!(split.truck + split.car + split.van, stats.total_vehicles);
}

#[test]
fn status_counts_cover_vehicles_and_drivers() {
    let vehicles = vec![
        vehicle(1, VehicleType::Car, VehicleStatus::Active, 0),
        vehicle(2, VehicleType::Car, VehicleStatus::Maintenance, 0),
        vehicle(3, VehicleType::Car, VehicleStatus::Inactive, 0),
    ];
    let drivers = vec![
        driver(1, DriverStatus::Active, date(2027, 1, 1)),
        driver(2, DriverStatus::Suspended, date(2027, 1, 1)),
        driver(3, DriverStatus::Active, date(2027, 1, 1)),
    ];

    let stats = DashboardStats::compute(&vehicles, &drivers, &[], &[], &[], &[], None);
    assert_eq!(stats.total_vehicles, 3);
    assert_eq!(stats.active_vehicles, 1);
    assert_eq!(stats.maintenance_vehicles, 1);
    assert_eq!(stats.total_drivers, 3);
    assert_eq!(stats.active_drivers, 2);
}

#[test]
fn upcoming_counts_the_union_of_maintenances_and_oil_changes() {
    let maintenances = vec![
        maintenance(1, 1, MaintenanceType::Preventive, ServiceStatus::Scheduled, datetime(2025, 8, 1, 9)),
        maintenance(2, 1, MaintenanceType::Corrective, ServiceStatus::InProgress, datetime(2025, 8, 2, 9)),
        maintenance(3, 1, MaintenanceType::Revision, ServiceStatus::Completed, datetime(2025, 5, 1, 9)),
    ];
    let oil_changes = vec![
        oil_change(1, 1, ServiceStatus::Scheduled, datetime(2025, 8, 3, 9)),
        oil_change(2, 1, ServiceStatus::Cancelled, datetime(2025, 8, 4, 9)),
    ];

    let stats = DashboardStats::compute(&[], &[], &maintenances, &oil_changes, &[], &[], None);
    assert_eq!(stats.upcoming_service_events, 3);
}

#[test]
fn service_counts_by_type_take_inspections_from_their_own_collection() {
    let maintenances = vec![
        maintenance(1, 1, MaintenanceType::Preventive, ServiceStatus::Scheduled, datetime(2025, 8, 1, 9)),
        maintenance(2, 1, MaintenanceType::Preventive, ServiceStatus::Completed, datetime(2025, 8, 2, 9)),
        maintenance(3, 1, MaintenanceType::Corrective, ServiceStatus::Scheduled, datetime(2025, 8, 3, 9)),
        maintenance(4, 1, MaintenanceType::Other("bodywork".to_string()), ServiceStatus::Scheduled, datetime(2025, 8, 4, 9)),
    ];
    let inspections = vec![
        inspection(1, 1, datetime(2025, 1, 15, 9), None),
        inspection(2, 2, datetime(2025, 2, 15, 9), None),
    ];

    let stats = DashboardStats::compute(&[], &[], &maintenances, &[], &inspections, &[], None);
    assert_eq!(stats.service_by_type.preventive, 2);
    assert_eq!(stats.service_by_type.corrective, 1);
    assert_eq!(stats.service_by_type.revision, 0);
    assert_eq!(stats.service_by_type.other, 1);
    assert_eq!(stats.service_by_type.inspections, 2);
}

#[test]
fn fuel_cost_sums_everything_unless_a_period_is_given() {
    let records = vec![
        fuel_record(1, 1, date(2025, 6, 10), 30.0, 70.10),
        fuel_record(2, 1, date(2025, 7, 5), 40.0, 95.55),
        fuel_record(3, 1, date(2025, 7, 28), 20.0, 48.40),
    ];

    let stats = DashboardStats::compute(&[], &[], &[], &[], &[], &records, None);
    assert!((stats.total_fuel_cost - 214.05).abs() < 0.005);

    let july = FuelPeriod {
        from: date(2025, 7, 1),
        to: date(2025, 7, 31),
    };
    let stats = DashboardStats::compute(&[], &[], &[], &[], &[], &records, Some(july));
    assert!((stats.total_fuel_cost - 143.95).abs() < 0.005);
}

#[test]
fn consumption_is_zero_safe() {
    assert_eq!(approximate_consumption_per_100km(100.0, 0), 0.0);

    let stats = DashboardStats::compute(&[], &[], &[], &[], &[], &[], None);
    assert_eq!(stats.average_fuel_consumption, 0.0);

    let vehicles = vec![vehicle(1, VehicleType::Car, VehicleStatus::Active, 0)];
    let records = vec![fuel_record(1, 1, date(2025, 7, 1), 50.0, 120.0)];
    let stats = DashboardStats::compute(&vehicles, &[], &[], &[], &[], &records, None);
    assert_eq!(stats.average_fuel_consumption, 0.0);
}

#[test]
fn consumption_uses_the_odometer_sum_denominator() {
    let vehicles = vec![
        vehicle(1, VehicleType::Car, VehicleStatus::Active, 600),
        vehicle(2, VehicleType::Van, VehicleStatus::Active, 400),
    ];
    let records = vec![
        fuel_record(1, 1, date(2025, 7, 1), 50.0, 120.0),
        fuel_record(2, 2, date(2025, 7, 2), 30.0, 70.0),
    ];

    // 80 liters over 1000 km of cumulative odometer reads as 8.0 L/100km.
    let stats = DashboardStats::compute(&vehicles, &[], &[], &[], &[], &records, None);
    assert_eq!(stats.average_fuel_consumption, 8.0);
}

#[test]
fn recomputation_is_idempotent() {
    let vehicles = vec![
        vehicle(1, VehicleType::Car, VehicleStatus::Active, 45_000),
        vehicle(2, VehicleType::Truck, VehicleStatus::Maintenance, 120_000),
    ];
    let drivers = vec![driver(1, DriverStatus::Active, date(2026, 6, 1))];
    let maintenances = vec![maintenance(
        1,
        1,
        MaintenanceType::Preventive,
        ServiceStatus::Scheduled,
        datetime(2025, 8, 1, 9),
    )];
    let records = vec![fuel_record(1, 1, date(2025, 7, 1), 38.5, 96.25)];

    let first = DashboardStats::compute(&vehicles, &drivers, &maintenances, &[], &[], &records, None);
    let second = DashboardStats::compute(&vehicles, &drivers, &maintenances, &[], &[], &records, None);
    assert_eq!(first, second);
}

#[test]
fn expiry_checks_are_relative_to_the_supplied_today() {
    let today = date(2025, 8, 1);
    let drivers = vec![
        driver(1, DriverStatus::Active, date(2025, 8, 20)),
        driver(2, DriverStatus::Active, date(2025, 7, 15)),
        driver(3, DriverStatus::Active, date(2026, 8, 1)),
    ];
    let expiring = expiring_driver_licenses(&drivers, today, 30);
    let ids: Vec<i32> = expiring.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![1, 2]);

    let cards = vec![
        fuel_card(1, true, date(2025, 8, 10)),
        fuel_card(2, false, date(2025, 8, 10)),
        fuel_card(3, true, date(2026, 1, 1)),
    ];
    let expiring = expiring_fuel_cards(&cards, today, 30);
    assert_eq!(expiring.len(), 1);
    assert_eq!(expiring[0].id, 1);
}

#[test]
fn dashboard_service_aggregates_the_seeded_fleet() {
    let repo = common::seeded_repo();
    let stats = dashboard::load_dashboard_stats(&repo, None).expect("stats failed");

    assert_eq!(stats.total_vehicles, 4);
    assert_eq!(stats.active_vehicles, 3);
    assert_eq!(stats.maintenance_vehicles, 1);
    assert_eq!(stats.total_drivers, 3);
    assert_eq!(stats.active_drivers, 3);
    // Scheduled + in-progress maintenances plus the scheduled oil change.
    assert_eq!(stats.upcoming_service_events, 3);
    assert!((stats.total_fuel_cost - 753.25).abs() < 0.005);
    assert_eq!(stats.vehicles_by_type.car, 1);
    assert_eq!(stats.vehicles_by_type.van, 2);
    assert_eq!(stats.vehicles_by_type.truck, 1);
    assert_eq!(stats.service_by_type.inspections, 2);

    let again = dashboard::load_dashboard_stats(&repo, None).expect("stats failed");
    assert_eq!(stats, again);
}

#[test]
fn dashboard_page_carries_expiry_warnings() {
    let repo = common::seeded_repo();
    // Leila's license expires 2025-11-02; the Shell card expires 2025-09-30.
    let page = dashboard::load_dashboard_page(&repo, date(2025, 10, 20), 30, None)
        .expect("dashboard failed");
    assert_eq!(page.expiring_licenses.len(), 1);
    assert_eq!(page.expiring_licenses[0].name, "Leila Haddad");
    assert_eq!(page.expiring_cards.len(), 1);
    assert_eq!(page.expiring_cards[0].provider, "Shell");
}
