//! Demo fleet dataset.
//!
//! Loads a small but representative set of records through the writer
//! traits, so the binary and test fixtures exercise the same code paths the
//! forms do. Dates are fixed so derived values stay reproducible.

use chrono::NaiveDate;

use crate::domain::driver::NewDriver;
use crate::domain::fuel::{NewFuelCard, NewFuelRecord};
use crate::domain::inspection::{InspectionResult, NewInspection};
use crate::domain::insurance::{InsuranceType, NewPolicy, TaxInputs, VatRate, default_end_date};
use crate::domain::service_event::{
    MaintenanceType, NewMaintenance, NewOilChange, ServiceStatus,
};
use crate::domain::vehicle::{FuelType, NewVehicle, VehicleType};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::memory::InMemoryRepository;
use crate::repository::{DriverWriter, FuelWriter, InspectionWriter, InsuranceWriter,
    ServiceLogWriter, VehicleWriter};

fn date(y: i32, m: u32, d: u32) -> RepositoryResult<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| RepositoryError::Unexpected(format!("invalid seed date {y}-{m}-{d}")))
}

fn datetime(y: i32, m: u32, d: u32, h: u32) -> RepositoryResult<chrono::NaiveDateTime> {
    date(y, m, d)?
        .and_hms_opt(h, 0, 0)
        .ok_or_else(|| RepositoryError::Unexpected(format!("invalid seed hour {h}")))
}

/// Builds a repository pre-loaded with the demo fleet.
pub fn demo_fleet() -> RepositoryResult<InMemoryRepository> {
    let repo = InMemoryRepository::new();
    load_demo(&repo)?;
    Ok(repo)
}

/// Seeds the demo dataset into an existing repository.
pub fn load_demo(repo: &InMemoryRepository) -> RepositoryResult<()> {
    let clio = repo.create_vehicle(
        &NewVehicle::new(
            "205 TU 1437",
            "Renault",
            "Clio",
            2021,
            VehicleType::Car,
            FuelType::Gasoline,
            45_200,
        )
        .map_err(RepositoryError::from)?,
    )?;
    let kangoo = repo.create_vehicle(
        &NewVehicle::new(
            "198 TU 2210",
            "Renault",
            "Kangoo",
            2019,
            VehicleType::Van,
            FuelType::Diesel,
            112_640,
        )
        .map_err(RepositoryError::from)?,
    )?;
    let actros = repo.create_vehicle(
        &NewVehicle::new(
            "230 TU 880",
            "Mercedes",
            "Actros",
            2017,
            VehicleType::Truck,
            FuelType::Diesel,
            287_310,
        )
        .map_err(RepositoryError::from)?,
    )?;
    let berlingo = {
        let mut new_vehicle = NewVehicle::new(
            "212 TU 509",
            "Citroen",
            "Berlingo",
            2020,
            VehicleType::Van,
            FuelType::Diesel,
            88_450,
        )
        .map_err(RepositoryError::from)?;
        new_vehicle.status = crate::domain::vehicle::VehicleStatus::Maintenance;
        repo.create_vehicle(&new_vehicle)?
    };

    repo.create_driver(
        &NewDriver::new(
            "Sami Ben Romdhane",
            Some("+216 98 123 456"),
            "TN-441-2207",
            date(2026, 9, 14)?,
        )
        .map_err(RepositoryError::from)?
        .assigned_to(clio.id),
    )?;
    repo.create_driver(
        &NewDriver::new(
            "Leila Haddad",
            Some("+216 22 807 914"),
            "TN-512-0189",
            date(2025, 11, 2)?,
        )
        .map_err(RepositoryError::from)?
        .assigned_to(kangoo.id),
    )?;
    repo.create_driver(
        &NewDriver::new("Karim Jlassi", None, "TN-623-4471", date(2027, 3, 30)?)
            .map_err(RepositoryError::from)?
            .assigned_to(actros.id),
    )?;

    repo.create_maintenance(&NewMaintenance {
        vehicle_id: berlingo.id,
        maintenance_type: MaintenanceType::Corrective,
        status: ServiceStatus::InProgress,
        scheduled_at: datetime(2025, 7, 28, 9)?,
        garage: "Garage Central".to_string(),
        cost: Some(640.0),
        notes: Some("Brake pads and front discs".to_string()),
    })?;
    repo.create_maintenance(&NewMaintenance {
        vehicle_id: actros.id,
        maintenance_type: MaintenanceType::Preventive,
        status: ServiceStatus::Scheduled,
        scheduled_at: datetime(2025, 8, 18, 14)?,
        garage: "Atelier Nord".to_string(),
        cost: None,
        notes: None,
    })?;
    repo.create_maintenance(&NewMaintenance {
        vehicle_id: clio.id,
        maintenance_type: MaintenanceType::Revision,
        status: ServiceStatus::Completed,
        scheduled_at: datetime(2025, 5, 6, 10)?,
        garage: "Garage Central".to_string(),
        cost: Some(210.0),
        notes: None,
    })?;

    repo.create_oil_change(&NewOilChange {
        vehicle_id: kangoo.id,
        status: ServiceStatus::Scheduled,
        scheduled_at: datetime(2025, 8, 9, 8)?,
        mileage_at_change: None,
        oil_type: Some("5W-30".to_string()),
        notes: None,
    })?;
    repo.create_oil_change(&NewOilChange {
        vehicle_id: clio.id,
        status: ServiceStatus::Completed,
        scheduled_at: datetime(2025, 4, 12, 11)?,
        mileage_at_change: Some(43_900),
        oil_type: Some("5W-40".to_string()),
        notes: None,
    })?;

    repo.create_inspection(&NewInspection {
        vehicle_id: actros.id,
        inspected_at: datetime(2025, 1, 15, 9)?,
        next_due: Some(datetime(2026, 1, 15, 9)?),
        center: "Centre de visite technique Tunis".to_string(),
        result: InspectionResult::Passed,
        notes: None,
    })?;
    repo.create_inspection(&NewInspection {
        vehicle_id: kangoo.id,
        inspected_at: datetime(2025, 3, 2, 10)?,
        next_due: Some(datetime(2026, 3, 2, 10)?),
        center: "Centre de visite technique Ariana".to_string(),
        result: InspectionResult::PassedWithDefects,
        notes: Some("Worn rear tires".to_string()),
    })?;

    repo.create_fuel_record(
        &NewFuelRecord::new(clio.id, date(2025, 7, 3)?, 38.5, 96.25)
            .map_err(RepositoryError::from)?
            .at_station("Agil Lac 2")
            .odometer(45_020),
    )?;
    repo.create_fuel_record(
        &NewFuelRecord::new(kangoo.id, date(2025, 7, 11)?, 52.0, 117.0)
            .map_err(RepositoryError::from)?
            .at_station("Shell Charguia")
            .odometer(112_300),
    )?;
    repo.create_fuel_record(
        &NewFuelRecord::new(actros.id, date(2025, 7, 19)?, 240.0, 540.0)
            .map_err(RepositoryError::from)?
            .at_station("Total Rades"),
    )?;

    repo.create_fuel_card(&NewFuelCard {
        number: "7007 1234 5678 9010".to_string(),
        provider: "Agil".to_string(),
        vehicle_id: Some(clio.id),
        monthly_limit: 400.0,
        expires_at: date(2026, 2, 28)?,
    })?;
    repo.create_fuel_card(&NewFuelCard {
        number: "7007 9876 5432 1099".to_string(),
        provider: "Shell".to_string(),
        vehicle_id: Some(actros.id),
        monthly_limit: 1_500.0,
        expires_at: date(2025, 9, 30)?,
    })?;

    let policy_start = date(2025, 1, 1)?;
    repo.create_policy(&NewPolicy {
        vehicle_id: clio.id,
        policy_number: "POL-2025-0117".to_string(),
        insurance_type: InsuranceType::Comprehensive,
        company: "STAR Assurances".to_string(),
        agent_name: Some("Bureau Lafayette".to_string()),
        agent_phone: None,
        start_date: policy_start,
        end_date: default_end_date(policy_start),
        coverage: 60_000.0,
        deductible: 300.0,
        taxes: TaxInputs {
            premium_excl_tax: 2016.0,
            vat_rate: VatRate::Nineteen,
            ..TaxInputs::default()
        },
    })?;
    let truck_start = date(2025, 4, 1)?;
    repo.create_policy(&NewPolicy {
        vehicle_id: actros.id,
        policy_number: "POL-2025-0452".to_string(),
        insurance_type: InsuranceType::ThirdParty,
        company: "GAT Assurances".to_string(),
        agent_name: None,
        agent_phone: None,
        start_date: truck_start,
        end_date: default_end_date(truck_start),
        coverage: 120_000.0,
        deductible: 1_000.0,
        taxes: TaxInputs {
            premium_excl_tax: 3480.0,
            vat_rate: VatRate::Thirteen,
            other_taxes: 25.0,
            ..TaxInputs::default()
        },
    })?;

    Ok(())
}
