//! Fleet-wide derived statistics.
//!
//! [`DashboardStats::compute`] is a pure function of the entity collections
//! passed in: no caching, no incremental state, identical inputs always
//! produce identical output. Checks that depend on "today" take the date as
//! an explicit argument.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::driver::{Driver, DriverStatus};
use crate::domain::fuel::{FuelCard, FuelRecord};
use crate::domain::insurance::round2;
use crate::domain::inspection::TechnicalInspection;
use crate::domain::service_event::{Maintenance, MaintenanceType, OilChange, service_events};
use crate::domain::vehicle::{Vehicle, VehicleStatus, VehicleType};

/// Inclusive date range used to scope the fuel-cost sum.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FuelPeriod {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl FuelPeriod {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

/// Fixed three-way split; vehicles of other types are not counted here.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VehiclesByType {
    pub truck: usize,
    pub car: usize,
    pub van: usize,
}

/// Service-event counts per maintenance type. The `inspections` bucket is
/// sourced from the technical-inspections collection, not from maintenance
/// records.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceByType {
    pub preventive: usize,
    pub corrective: usize,
    pub revision: usize,
    pub other: usize,
    pub inspections: usize,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub total_vehicles: usize,
    pub active_vehicles: usize,
    pub maintenance_vehicles: usize,
    pub total_drivers: usize,
    pub active_drivers: usize,
    /// Scheduled or in-progress records across the maintenance and
    /// oil-change union.
    pub upcoming_service_events: usize,
    /// Sum of fuel costs over the requested period, or over the whole
    /// history when no period is given.
    pub total_fuel_cost: f64,
    /// Liters per 100 km, see [`approximate_consumption_per_100km`].
    pub average_fuel_consumption: f64,
    pub vehicles_by_type: VehiclesByType,
    pub service_by_type: ServiceByType,
}

impl DashboardStats {
    pub fn compute(
        vehicles: &[Vehicle],
        drivers: &[Driver],
        maintenances: &[Maintenance],
        oil_changes: &[OilChange],
        inspections: &[TechnicalInspection],
        fuel_records: &[FuelRecord],
        fuel_period: Option<FuelPeriod>,
    ) -> Self {
        let active_vehicles = vehicles
            .iter()
            .filter(|v| v.status == VehicleStatus::Active)
            .count();
        let maintenance_vehicles = vehicles
            .iter()
            .filter(|v| v.status == VehicleStatus::Maintenance)
            .count();

        let active_drivers = drivers
            .iter()
            .filter(|d| d.status == DriverStatus::Active)
            .count();

        let upcoming_service_events = service_events(maintenances, oil_changes)
            .filter(|event| event.status().is_upcoming())
            .count();

        let total_fuel_cost = round2(
            fuel_records
                .iter()
                .filter(|r| fuel_period.is_none_or(|p| p.contains(r.filled_at)))
                .map(|r| r.cost)
                .sum(),
        );

        let total_liters: f64 = fuel_records.iter().map(|r| r.quantity_liters).sum();
        let total_odometer_km: u64 = vehicles.iter().map(|v| u64::from(v.mileage)).sum();
        let average_fuel_consumption =
            approximate_consumption_per_100km(total_liters, total_odometer_km);

        let mut vehicles_by_type = VehiclesByType::default();
        for vehicle in vehicles {
            match vehicle.vehicle_type {
                VehicleType::Truck => vehicles_by_type.truck += 1,
                VehicleType::Car => vehicles_by_type.car += 1,
                VehicleType::Van => vehicles_by_type.van += 1,
                _ => {}
            }
        }

        let mut service_by_type = ServiceByType {
            inspections: inspections.len(),
            ..ServiceByType::default()
        };
        for maintenance in maintenances {
            match maintenance.maintenance_type {
                MaintenanceType::Preventive => service_by_type.preventive += 1,
                MaintenanceType::Corrective => service_by_type.corrective += 1,
                MaintenanceType::Revision => service_by_type.revision += 1,
                MaintenanceType::Other(_) => service_by_type.other += 1,
            }
        }

        Self {
            total_vehicles: vehicles.len(),
            active_vehicles,
            maintenance_vehicles,
            total_drivers: drivers.len(),
            active_drivers,
            upcoming_service_events,
            total_fuel_cost,
            average_fuel_consumption,
            vehicles_by_type,
            service_by_type,
        }
    }
}

/// Fleet-wide L/100km approximation: total liters filled over the sum of
/// current odometer readings, not distance driven between fills. Kept in one
/// place so a per-vehicle delta computation can replace it later.
pub fn approximate_consumption_per_100km(total_liters: f64, total_odometer_km: u64) -> f64 {
    if total_odometer_km == 0 {
        return 0.0;
    }
    let per_100 = total_liters / total_odometer_km as f64 * 100.0;
    (per_100 * 10.0).round() / 10.0
}

/// Drivers whose license expires within the window, relative to `today`.
pub fn expiring_driver_licenses<'a>(
    drivers: &'a [Driver],
    today: NaiveDate,
    window_days: i64,
) -> Vec<&'a Driver> {
    drivers
        .iter()
        .filter(|d| d.license_expires_within(today, window_days))
        .collect()
}

/// Active fuel cards that expire within the window, relative to `today`.
pub fn expiring_fuel_cards<'a>(
    cards: &'a [FuelCard],
    today: NaiveDate,
    window_days: i64,
) -> Vec<&'a FuelCard> {
    cards
        .iter()
        .filter(|c| c.active && c.expires_within(today, window_days))
        .collect()
}
