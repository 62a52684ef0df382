//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::driver::{Driver, NewDriver, UpdateDriver};
use crate::domain::fuel::{FuelCard, FuelRecord, NewFuelCard, NewFuelRecord, UpdateFuelCard};
use crate::domain::inspection::{NewInspection, TechnicalInspection};
use crate::domain::insurance::{InsurancePolicy, NewPolicy, UpdatePolicy};
use crate::domain::service_event::{
    Maintenance, NewMaintenance, NewOilChange, OilChange, UpdateMaintenance, UpdateOilChange,
};
use crate::domain::vehicle::{NewVehicle, UpdateVehicle, Vehicle};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    DriverListQuery, DriverReader, DriverWriter, FuelCardListQuery, FuelReader,
    FuelRecordListQuery, FuelWriter, InspectionListQuery, InspectionReader, InspectionWriter,
    InsuranceReader, InsuranceWriter, PolicyListQuery, ServiceLogQuery, ServiceLogReader,
    ServiceLogWriter, VehicleListQuery, VehicleReader, VehicleWriter,
};

mock! {
    pub Repository {}

    impl VehicleReader for Repository {
        fn get_vehicle_by_id(&self, id: i32) -> RepositoryResult<Option<Vehicle>>;
        fn list_vehicles(&self, query: VehicleListQuery) -> RepositoryResult<(usize, Vec<Vehicle>)>;
    }

    impl VehicleWriter for Repository {
        fn create_vehicle(&self, new_vehicle: &NewVehicle) -> RepositoryResult<Vehicle>;
        fn update_vehicle(
            &self,
            vehicle_id: i32,
            updates: &UpdateVehicle,
        ) -> RepositoryResult<Vehicle>;
        fn delete_vehicle(&self, vehicle_id: i32) -> RepositoryResult<()>;
    }

    impl DriverReader for Repository {
        fn get_driver_by_id(&self, id: i32) -> RepositoryResult<Option<Driver>>;
        fn list_drivers(&self, query: DriverListQuery) -> RepositoryResult<(usize, Vec<Driver>)>;
    }

    impl DriverWriter for Repository {
        fn create_driver(&self, new_driver: &NewDriver) -> RepositoryResult<Driver>;
        fn update_driver(&self, driver_id: i32, updates: &UpdateDriver) -> RepositoryResult<Driver>;
        fn delete_driver(&self, driver_id: i32) -> RepositoryResult<()>;
    }

    impl ServiceLogReader for Repository {
        fn get_maintenance_by_id(&self, id: i32) -> RepositoryResult<Option<Maintenance>>;
        fn list_maintenances(
            &self,
            query: ServiceLogQuery,
        ) -> RepositoryResult<(usize, Vec<Maintenance>)>;
        fn get_oil_change_by_id(&self, id: i32) -> RepositoryResult<Option<OilChange>>;
        fn list_oil_changes(
            &self,
            query: ServiceLogQuery,
        ) -> RepositoryResult<(usize, Vec<OilChange>)>;
    }

    impl ServiceLogWriter for Repository {
        fn create_maintenance(
            &self,
            new_maintenance: &NewMaintenance,
        ) -> RepositoryResult<Maintenance>;
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

    impl InspectionReader for Repository {
        fn get_inspection_by_id(&self, id: i32) -> RepositoryResult<Option<TechnicalInspection>>;
        fn list_inspections(
            &self,
            query: InspectionListQuery,
        ) -> RepositoryResult<(usize, Vec<TechnicalInspection>)>;
    }

    impl InspectionWriter for Repository {
        fn create_inspection(
            &self,
            new_inspection: &NewInspection,
        ) -> RepositoryResult<TechnicalInspection>;
        fn delete_inspection(&self, inspection_id: i32) -> RepositoryResult<()>;
    }

    impl FuelReader for Repository {
        fn list_fuel_records(
            &self,
            query: FuelRecordListQuery,
        ) -> RepositoryResult<(usize, Vec<FuelRecord>)>;
        fn list_fuel_cards(
            &self,
            query: FuelCardListQuery,
        ) -> RepositoryResult<(usize, Vec<FuelCard>)>;
    }

    impl FuelWriter for Repository {
        fn create_fuel_record(&self, new_record: &NewFuelRecord) -> RepositoryResult<FuelRecord>;
        fn delete_fuel_record(&self, record_id: i32) -> RepositoryResult<()>;
        fn create_fuel_card(&self, new_card: &NewFuelCard) -> RepositoryResult<FuelCard>;
        fn update_fuel_card(
            &self,
            card_id: i32,
            updates: &UpdateFuelCard,
        ) -> RepositoryResult<FuelCard>;
    }

    impl InsuranceReader for Repository {
        fn get_policy_by_id(&self, id: i32) -> RepositoryResult<Option<InsurancePolicy>>;
        fn list_policies(
            &self,
            query: PolicyListQuery,
        ) -> RepositoryResult<(usize, Vec<InsurancePolicy>)>;
    }

    impl InsuranceWriter for Repository {
        fn create_policy(&self, new_policy: &NewPolicy) -> RepositoryResult<InsurancePolicy>;
        fn update_policy(
            &self,
            policy_id: i32,
            updates: &UpdatePolicy,
        ) -> RepositoryResult<InsurancePolicy>;
        fn delete_policy(&self, policy_id: i32) -> RepositoryResult<()>;
    }
}
