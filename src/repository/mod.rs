//! Repository abstraction over the fleet data store.
//!
//! Readers and writers are split per entity so services can declare exactly
//! the access they need. List queries use small builder structs; readers
//! return `(total, items)` pairs so callers can paginate.

use chrono::NaiveDate;

use crate::domain::driver::{Driver, DriverStatus, NewDriver, UpdateDriver};
use crate::domain::fuel::{FuelCard, FuelRecord, NewFuelCard, NewFuelRecord, UpdateFuelCard};
use crate::domain::inspection::{NewInspection, TechnicalInspection};
use crate::domain::insurance::{InsurancePolicy, NewPolicy, UpdatePolicy};
use crate::domain::service_event::{
    Maintenance, NewMaintenance, NewOilChange, OilChange, ServiceStatus, UpdateMaintenance,
    UpdateOilChange,
};
use crate::domain::stats::FuelPeriod;
use crate::domain::vehicle::{NewVehicle, UpdateVehicle, Vehicle, VehicleStatus, VehicleType};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod seed;

#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

#[derive(Debug, Clone, Default)]
pub struct VehicleListQuery {
    pub status: Option<VehicleStatus>,
    pub vehicle_type: Option<VehicleType>,
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl VehicleListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: VehicleStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn vehicle_type(mut self, vehicle_type: VehicleType) -> Self {
        self.vehicle_type = Some(vehicle_type);
        self
    }

    /// Case-insensitive match against plate, brand, and model.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct DriverListQuery {
    pub status: Option<DriverStatus>,
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl DriverListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: DriverStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Shared query shape for maintenance and oil-change listings.
#[derive(Debug, Clone, Default)]
pub struct ServiceLogQuery {
    pub vehicle_id: Option<i32>,
    pub status: Option<ServiceStatus>,
    pub pagination: Option<Pagination>,
}

impl ServiceLogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vehicle(mut self, vehicle_id: i32) -> Self {
        self.vehicle_id = Some(vehicle_id);
        self
    }

    pub fn status(mut self, status: ServiceStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct InspectionListQuery {
    pub vehicle_id: Option<i32>,
    pub pagination: Option<Pagination>,
}

impl InspectionListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vehicle(mut self, vehicle_id: i32) -> Self {
        self.vehicle_id = Some(vehicle_id);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct FuelRecordListQuery {
    pub vehicle_id: Option<i32>,
    pub period: Option<FuelPeriod>,
    pub pagination: Option<Pagination>,
}

impl FuelRecordListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vehicle(mut self, vehicle_id: i32) -> Self {
        self.vehicle_id = Some(vehicle_id);
        self
    }

    pub fn period(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.period = Some(FuelPeriod { from, to });
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct FuelCardListQuery {
    pub active_only: bool,
    pub pagination: Option<Pagination>,
}

impl FuelCardListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_only(mut self) -> Self {
        self.active_only = true;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct PolicyListQuery {
    pub vehicle_id: Option<i32>,
    /// Only policies whose cover includes this date.
    pub active_on: Option<NaiveDate>,
    pub pagination: Option<Pagination>,
}

impl PolicyListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vehicle(mut self, vehicle_id: i32) -> Self {
        self.vehicle_id = Some(vehicle_id);
        self
    }

    pub fn active_on(mut self, date: NaiveDate) -> Self {
        self.active_on = Some(date);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait VehicleReader {
    fn get_vehicle_by_id(&self, id: i32) -> RepositoryResult<Option<Vehicle>>;
    fn list_vehicles(&self, query: VehicleListQuery) -> RepositoryResult<(usize, Vec<Vehicle>)>;
}

pub trait VehicleWriter {
    fn create_vehicle(&self, new_vehicle: &NewVehicle) -> RepositoryResult<Vehicle>;
    fn update_vehicle(&self, vehicle_id: i32, updates: &UpdateVehicle)
    -> RepositoryResult<Vehicle>;
    fn delete_vehicle(&self, vehicle_id: i32) -> RepositoryResult<()>;
}

pub trait DriverReader {
    fn get_driver_by_id(&self, id: i32) -> RepositoryResult<Option<Driver>>;
    fn list_drivers(&self, query: DriverListQuery) -> RepositoryResult<(usize, Vec<Driver>)>;
}

pub trait DriverWriter {
    fn create_driver(&self, new_driver: &NewDriver) -> RepositoryResult<Driver>;
    fn update_driver(&self, driver_id: i32, updates: &UpdateDriver) -> RepositoryResult<Driver>;
    fn delete_driver(&self, driver_id: i32) -> RepositoryResult<()>;
}

pub trait ServiceLogReader {
    fn get_maintenance_by_id(&self, id: i32) -> RepositoryResult<Option<Maintenance>>;
    fn list_maintenances(
        &self,
        query: ServiceLogQuery,
    ) -> RepositoryResult<(usize, Vec<Maintenance>)>;
    fn get_oil_change_by_id(&self, id: i32) -> RepositoryResult<Option<OilChange>>;
    fn list_oil_changes(&self, query: ServiceLogQuery)
    -> RepositoryResult<(usize, Vec<OilChange>)>;
}

pub trait ServiceLogWriter {
    fn create_maintenance(&self, new_maintenance: &NewMaintenance) -> RepositoryResult<Maintenance>;
    fn update_maintenance(
        &self,
        maintenance_id: i32,
        updates: &UpdateMaintenance,
    ) -> RepositoryResult<Maintenance>;
    fn delete_maintenance(&self, maintenance_id: i32) -> RepositoryResult<()>;
    fn create_oil_change(&self, new_oil_change: &NewOilChange) -> RepositoryResult<OilChange>;
    fn update_oil_change(
        &self,
        oil_change_id: i32,
        updates: &UpdateOilChange,
    ) -> RepositoryResult<OilChange>;
    fn delete_oil_change(&self, oil_change_id: i32) -> RepositoryResult<()>;
}

pub trait InspectionReader {
    fn get_inspection_by_id(&self, id: i32) -> RepositoryResult<Option<TechnicalInspection>>;
    fn list_inspections(
        &self,
        query: InspectionListQuery,
    ) -> RepositoryResult<(usize, Vec<TechnicalInspection>)>;
}

pub trait InspectionWriter {
    fn create_inspection(
        &self,
        new_inspection: &NewInspection,
    ) -> RepositoryResult<TechnicalInspection>;
    fn delete_inspection(&self, inspection_id: i32) -> RepositoryResult<()>;
}

pub trait FuelReader {
    fn list_fuel_records(
        &self,
        query: FuelRecordListQuery,
    ) -> RepositoryResult<(usize, Vec<FuelRecord>)>;
    fn list_fuel_cards(&self, query: FuelCardListQuery)
    -> RepositoryResult<(usize, Vec<FuelCard>)>;
}

pub trait FuelWriter {
    fn create_fuel_record(&self, new_record: &NewFuelRecord) -> RepositoryResult<FuelRecord>;
    fn delete_fuel_record(&self, record_id: i32) -> RepositoryResult<()>;
    fn create_fuel_card(&self, new_card: &NewFuelCard) -> RepositoryResult<FuelCard>;
    fn update_fuel_card(&self, card_id: i32, updates: &UpdateFuelCard)
    -> RepositoryResult<FuelCard>;
}

pub trait InsuranceReader {
    fn get_policy_by_id(&self, id: i32) -> RepositoryResult<Option<InsurancePolicy>>;
    fn list_policies(
        &self,
        query: PolicyListQuery,
    ) -> RepositoryResult<(usize, Vec<InsurancePolicy>)>;
}

pub trait InsuranceWriter {
    fn create_policy(&self, new_policy: &NewPolicy) -> RepositoryResult<InsurancePolicy>;
    fn update_policy(
        &self,
        policy_id: i32,
        updates: &UpdatePolicy,
    ) -> RepositoryResult<InsurancePolicy>;
    fn delete_policy(&self, policy_id: i32) -> RepositoryResult<()>;
}
