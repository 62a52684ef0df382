#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};

use fleet_admin::domain::driver::{Driver, DriverStatus};
use fleet_admin::domain::fuel::{FuelCard, FuelRecord};
use fleet_admin::domain::inspection::{InspectionResult, TechnicalInspection};
use fleet_admin::domain::service_event::{
    Maintenance, MaintenanceType, OilChange, ServiceStatus,
};
use fleet_admin::domain::types::PlateNumber;
use fleet_admin::domain::vehicle::{FuelType, Vehicle, VehicleStatus, VehicleType};
use fleet_admin::repository::memory::InMemoryRepository;
use fleet_admin::repository::seed;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn datetime(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, 0, 0).expect("valid time")
}

pub fn seeded_repo() -> InMemoryRepository {
    seed::demo_fleet().expect("demo seed failed")
}

pub fn vehicle(id: i32, vehicle_type: VehicleType, status: VehicleStatus, mileage: u32) -> Vehicle {
    Vehicle {
        id,
        plate: PlateNumber::new(format!("{id} TU 7{id:03}")).expect("valid plate"),
        brand: "Renault".to_string(),
        model: "Clio".to_string(),
        year: 2020,
        vehicle_type,
        status,
        mileage,
        fuel_type: FuelType::Diesel,
        created_at: datetime(2024, 1, 1, 8),
        updated_at: datetime(2024, 1, 1, 8),
    }
}

pub fn driver(id: i32, status: DriverStatus, license_expiry: NaiveDate) -> Driver {
    Driver {
        id,
        name: format!("Driver #{id}"),
        phone: None,
        status,
        license_number: format!("TN-{id:03}-0001"),
        license_expiry,
        vehicle_id: None,
        created_at: datetime(2024, 1, 1, 8),
        updated_at: datetime(2024, 1, 1, 8),
    }
}

pub fn maintenance(
    id: i32,
    vehicle_id: i32,
    maintenance_type: MaintenanceType,
    status: ServiceStatus,
    scheduled_at: NaiveDateTime,
) -> Maintenance {
    Maintenance {
        id,
        vehicle_id,
        maintenance_type,
        status,
        scheduled_at,
        completed_at: None,
        garage: "Garage Central".to_string(),
        cost: None,
        notes: None,
        created_at: datetime(2024, 1, 1, 8),
        updated_at: datetime(2024, 1, 1, 8),
    }
}

pub fn oil_change(
    id: i32,
    vehicle_id: i32,
    status: ServiceStatus,
    scheduled_at: NaiveDateTime,
) -> OilChange {
    OilChange {
        id,
        vehicle_id,
        status,
        scheduled_at,
        completed_at: None,
        mileage_at_change: None,
        oil_type: None,
        notes: None,
        created_at: datetime(2024, 1, 1, 8),
        updated_at: datetime(2024, 1, 1, 8),
    }
}

pub fn inspection(
    id: i32,
    vehicle_id: i32,
    inspected_at: NaiveDateTime,
    next_due: Option<NaiveDateTime>,
) -> TechnicalInspection {
    TechnicalInspection {
        id,
        vehicle_id,
        inspected_at,
        next_due,
        center: "Centre de visite technique Tunis".to_string(),
        result: InspectionResult::Passed,
        notes: None,
        created_at: datetime(2024, 1, 1, 8),
    }
}

pub fn fuel_record(
    id: i32,
    vehicle_id: i32,
    filled_at: NaiveDate,
    quantity_liters: f64,
    cost: f64,
) -> FuelRecord {
    FuelRecord {
        id,
        vehicle_id,
        filled_at,
        quantity_liters,
        cost,
        odometer: None,
        station: None,
        created_at: datetime(2024, 1, 1, 8),
    }
}

pub fn fuel_card(id: i32, active: bool, expires_at: NaiveDate) -> FuelCard {
    FuelCard {
        id,
        number: format!("7007 0000 0000 9{id:03}"),
        provider: "Agil".to_string(),
        vehicle_id: None,
        monthly_limit: 500.0,
        active,
        expires_at,
        created_at: datetime(2024, 1, 1, 8),
    }
}
