//! In-memory data store standing in for a real backend.
//!
//! All collections live behind one `RwLock`; readers clone out of the store
//! so callers never observe partial mutations. Ids are sequential per
//! collection. An optional fixed latency simulates the slow service calls of
//! the real deployment; it is disabled by default and in tests.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use chrono::Utc;

use crate::domain::driver::{Driver, NewDriver, UpdateDriver};
use crate::domain::fuel::{FuelCard, FuelRecord, NewFuelCard, NewFuelRecord, UpdateFuelCard};
use crate::domain::inspection::{NewInspection, TechnicalInspection};
use crate::domain::insurance::{InsurancePolicy, NewPolicy, TaxBreakdown, UpdatePolicy};
use crate::domain::service_event::{
    Maintenance, NewMaintenance, NewOilChange, OilChange, UpdateMaintenance, UpdateOilChange,
};
use crate::domain::vehicle::{NewVehicle, UpdateVehicle, Vehicle};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    DriverListQuery, DriverReader, DriverWriter, FuelCardListQuery, FuelReader,
    FuelRecordListQuery, FuelWriter, InspectionListQuery, InspectionReader, InspectionWriter,
    InsuranceReader, InsuranceWriter, Pagination, PolicyListQuery, ServiceLogQuery,
    ServiceLogReader, ServiceLogWriter, VehicleListQuery, VehicleReader, VehicleWriter,
};

#[derive(Debug, Default)]
struct Store {
    vehicles: Vec<Vehicle>,
    drivers: Vec<Driver>,
    maintenances: Vec<Maintenance>,
    oil_changes: Vec<OilChange>,
    inspections: Vec<TechnicalInspection>,
    fuel_records: Vec<FuelRecord>,
    fuel_cards: Vec<FuelCard>,
    policies: Vec<InsurancePolicy>,
    next_id: NextId,
}

#[derive(Debug, Default)]
struct NextId {
    vehicle: i32,
    driver: i32,
    maintenance: i32,
    oil_change: i32,
    inspection: i32,
    fuel_record: i32,
    fuel_card: i32,
    policy: i32,
}

fn allocate(counter: &mut i32) -> i32 {
    *counter += 1;
    *counter
}

fn paginate<T>(items: Vec<T>, pagination: Option<Pagination>) -> (usize, Vec<T>) {
    let total = items.len();
    match pagination {
        Some(p) => {
            let page = p.page.max(1);
            let items = items
                .into_iter()
                .skip((page - 1) * p.per_page)
                .take(p.per_page)
                .collect();
            (total, items)
        }
        None => (total, items),
    }
}

#[derive(Clone)]
pub struct InMemoryRepository {
    store: Arc<RwLock<Store>>,
    latency: Option<Duration>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(Store::default())),
            latency: None,
        }
    }

    /// Sleep this long before answering, imitating the slow service calls of
    /// a remote backend.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, Store>> {
        self.simulate_latency();
        self.store
            .read()
            .map_err(|_| RepositoryError::Unexpected("store lock poisoned".to_string()))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, Store>> {
        self.simulate_latency();
        self.store
            .write()
            .map_err(|_| RepositoryError::Unexpected("store lock poisoned".to_string()))
    }

    fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            std::thread::sleep(latency);
        }
    }
}

impl VehicleReader for InMemoryRepository {
    fn get_vehicle_by_id(&self, id: i32) -> RepositoryResult<Option<Vehicle>> {
        let store = self.read()?;
        Ok(store.vehicles.iter().find(|v| v.id == id).cloned())
    }

    fn list_vehicles(&self, query: VehicleListQuery) -> RepositoryResult<(usize, Vec<Vehicle>)> {
        let store = self.read()?;
        let search = query.search.as_ref().map(|s| s.to_lowercase());
        let matches: Vec<Vehicle> = store
            .vehicles
            .iter()
            .filter(|v| query.status.as_ref().is_none_or(|s| &v.status == s))
            .filter(|v| {
                query
                    .vehicle_type
                    .as_ref()
                    .is_none_or(|t| &v.vehicle_type == t)
            })
            .filter(|v| {
                search.as_ref().is_none_or(|term| {
                    v.plate.as_str().to_lowercase().contains(term)
                        || v.brand.to_lowercase().contains(term)
                        || v.model.to_lowercase().contains(term)
                })
            })
            .cloned()
            .collect();
        Ok(paginate(matches, query.pagination))
    }
}

impl VehicleWriter for InMemoryRepository {
    fn create_vehicle(&self, new_vehicle: &NewVehicle) -> RepositoryResult<Vehicle> {
        let mut store = self.write()?;
        if store.vehicles.iter().any(|v| v.plate == new_vehicle.plate) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "plate {} already registered",
                new_vehicle.plate
            )));
        }
        let now = Utc::now().naive_utc();
        let vehicle = Vehicle {
            id: allocate(&mut store.next_id.vehicle),
            plate: new_vehicle.plate.clone(),
            brand: new_vehicle.brand.clone(),
            model: new_vehicle.model.clone(),
            year: new_vehicle.year,
            vehicle_type: new_vehicle.vehicle_type.clone(),
            status: new_vehicle.status.clone(),
            mileage: new_vehicle.mileage,
            fuel_type: new_vehicle.fuel_type.clone(),
            created_at: now,
            updated_at: now,
        };
        store.vehicles.push(vehicle.clone());
        Ok(vehicle)
    }

    fn update_vehicle(
        &self,
        vehicle_id: i32,
        updates: &UpdateVehicle,
    ) -> RepositoryResult<Vehicle> {
        let mut store = self.write()?;
        if store
            .vehicles
            .iter()
            .any(|v| v.id != vehicle_id && v.plate == updates.plate)
        {
            return Err(RepositoryError::ConstraintViolation(format!(
                "plate {} already registered",
                updates.plate
            )));
        }
        let vehicle = store
            .vehicles
            .iter_mut()
            .find(|v| v.id == vehicle_id)
            .ok_or(RepositoryError::NotFound)?;
        vehicle.plate = updates.plate.clone();
        vehicle.brand = updates.brand.clone();
        vehicle.model = updates.model.clone();
        vehicle.year = updates.year;
        vehicle.vehicle_type = updates.vehicle_type.clone();
        vehicle.status = updates.status.clone();
        vehicle.mileage = updates.mileage;
        vehicle.fuel_type = updates.fuel_type.clone();
        vehicle.updated_at = Utc::now().naive_utc();
        Ok(vehicle.clone())
    }

    fn delete_vehicle(&self, vehicle_id: i32) -> RepositoryResult<()> {
        let mut store = self.write()?;
        let before = store.vehicles.len();
        store.vehicles.retain(|v| v.id != vehicle_id);
        if store.vehicles.len() == before {
            return Err(RepositoryError::NotFound);
        }
        // Dependent records keep their vehicle_id; dangling references are
        // tolerated by every consumer.
        Ok(())
    }
}

impl DriverReader for InMemoryRepository {
    fn get_driver_by_id(&self, id: i32) -> RepositoryResult<Option<Driver>> {
        let store = self.read()?;
        Ok(store.drivers.iter().find(|d| d.id == id).cloned())
    }

    fn list_drivers(&self, query: DriverListQuery) -> RepositoryResult<(usize, Vec<Driver>)> {
        let store = self.read()?;
        let search = query.search.as_ref().map(|s| s.to_lowercase());
        let matches: Vec<Driver> = store
            .drivers
            .iter()
            .filter(|d| query.status.as_ref().is_none_or(|s| &d.status == s))
            .filter(|d| {
                search.as_ref().is_none_or(|term| {
                    d.name.to_lowercase().contains(term)
                        || d.license_number.to_lowercase().contains(term)
                })
            })
            .cloned()
            .collect();
        Ok(paginate(matches, query.pagination))
    }
}

impl DriverWriter for InMemoryRepository {
    fn create_driver(&self, new_driver: &NewDriver) -> RepositoryResult<Driver> {
        let mut store = self.write()?;
        let now = Utc::now().naive_utc();
        let driver = Driver {
            id: allocate(&mut store.next_id.driver),
            name: new_driver.name.clone(),
            phone: new_driver.phone.clone(),
            status: new_driver.status.clone(),
            license_number: new_driver.license_number.clone(),
            license_expiry: new_driver.license_expiry,
            vehicle_id: new_driver.vehicle_id,
            created_at: now,
            updated_at: now,
        };
        store.drivers.push(driver.clone());
        Ok(driver)
    }

    fn update_driver(&self, driver_id: i32, updates: &UpdateDriver) -> RepositoryResult<Driver> {
        let mut store = self.write()?;
        let driver = store
            .drivers
            .iter_mut()
            .find(|d| d.id == driver_id)
            .ok_or(RepositoryError::NotFound)?;
        driver.name = updates.name.clone();
        driver.phone = updates.phone.clone();
        driver.status = updates.status.clone();
        driver.license_number = updates.license_number.clone();
        driver.license_expiry = updates.license_expiry;
        driver.vehicle_id = updates.vehicle_id;
        driver.updated_at = Utc::now().naive_utc();
        Ok(driver.clone())
    }

    fn delete_driver(&self, driver_id: i32) -> RepositoryResult<()> {
        let mut store = self.write()?;
        let before = store.drivers.len();
        store.drivers.retain(|d| d.id != driver_id);
        if store.drivers.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

impl ServiceLogReader for InMemoryRepository {
    fn get_maintenance_by_id(&self, id: i32) -> RepositoryResult<Option<Maintenance>> {
        let store = self.read()?;
        Ok(store.maintenances.iter().find(|m| m.id == id).cloned())
    }

    fn list_maintenances(
        &self,
        query: ServiceLogQuery,
    ) -> RepositoryResult<(usize, Vec<Maintenance>)> {
        let store = self.read()?;
        let matches: Vec<Maintenance> = store
            .maintenances
            .iter()
            .filter(|m| query.vehicle_id.is_none_or(|id| m.vehicle_id == id))
            .filter(|m| query.status.as_ref().is_none_or(|s| &m.status == s))
            .cloned()
            .collect();
        Ok(paginate(matches, query.pagination))
    }

    fn get_oil_change_by_id(&self, id: i32) -> RepositoryResult<Option<OilChange>> {
        let store = self.read()?;
        Ok(store.oil_changes.iter().find(|o| o.id == id).cloned())
    }

    fn list_oil_changes(
        &self,
        query: ServiceLogQuery,
    ) -> RepositoryResult<(usize, Vec<OilChange>)> {
        let store = self.read()?;
        let matches: Vec<OilChange> = store
            .oil_changes
            .iter()
            .filter(|o| query.vehicle_id.is_none_or(|id| o.vehicle_id == id))
            .filter(|o| query.status.as_ref().is_none_or(|s| &o.status == s))
            .cloned()
            .collect();
        Ok(paginate(matches, query.pagination))
    }
}

impl ServiceLogWriter for InMemoryRepository {
    fn create_maintenance(
        &self,
        new_maintenance: &NewMaintenance,
    ) -> RepositoryResult<Maintenance> {
        let mut store = self.write()?;
        let now = Utc::now().naive_utc();
        let maintenance = Maintenance {
            id: allocate(&mut store.next_id.maintenance),
            vehicle_id: new_maintenance.vehicle_id,
            maintenance_type: new_maintenance.maintenance_type.clone(),
            status: new_maintenance.status.clone(),
            scheduled_at: new_maintenance.scheduled_at,
            completed_at: None,
            garage: new_maintenance.garage.clone(),
            cost: new_maintenance.cost,
            notes: new_maintenance.notes.clone(),
            created_at: now,
            updated_at: now,
        };
        store.maintenances.push(maintenance.clone());
        Ok(maintenance)
    }

    fn update_maintenance(
        &self,
        maintenance_id: i32,
        updates: &UpdateMaintenance,
    ) -> RepositoryResult<Maintenance> {
        let mut store = self.write()?;
        let maintenance = store
            .maintenances
            .iter_mut()
            .find(|m| m.id == maintenance_id)
            .ok_or(RepositoryError::NotFound)?;
        maintenance.maintenance_type = updates.maintenance_type.clone();
        maintenance.status = updates.status.clone();
        maintenance.scheduled_at = updates.scheduled_at;
        maintenance.completed_at = updates.completed_at;
        maintenance.garage = updates.garage.clone();
        maintenance.cost = updates.cost;
        maintenance.notes = updates.notes.clone();
        maintenance.updated_at = Utc::now().naive_utc();
        Ok(maintenance.clone())
    }

    fn delete_maintenance(&self, maintenance_id: i32) -> RepositoryResult<()> {
        let mut store = self.write()?;
        let before = store.maintenances.len();
        store.maintenances.retain(|m| m.id != maintenance_id);
        if store.maintenances.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    fn create_oil_change(&self, new_oil_change: &NewOilChange) -> RepositoryResult<OilChange> {
        let mut store = self.write()?;
        let now = Utc::now().naive_utc();
        let oil_change = OilChange {
            id: allocate(&mut store.next_id.oil_change),
            vehicle_id: new_oil_change.vehicle_id,
            status: new_oil_change.status.clone(),
            scheduled_at: new_oil_change.scheduled_at,
            completed_at: None,
            mileage_at_change: new_oil_change.mileage_at_change,
            oil_type: new_oil_change.oil_type.clone(),
            notes: new_oil_change.notes.clone(),
            created_at: now,
            updated_at: now,
        };
        store.oil_changes.push(oil_change.clone());
        Ok(oil_change)
    }

    fn update_oil_change(
        &self,
        oil_change_id: i32,
        updates: &UpdateOilChange,
    ) -> RepositoryResult<OilChange> {
        let mut store = self.write()?;
        let oil_change = store
            .oil_changes
            .iter_mut()
            .find(|o| o.id == oil_change_id)
            .ok_or(RepositoryError::NotFound)?;
        oil_change.status = updates.status.clone();
        oil_change.scheduled_at = updates.scheduled_at;
        oil_change.completed_at = updates.completed_at;
        oil_change.mileage_at_change = updates.mileage_at_change;
        oil_change.oil_type = updates.oil_type.clone();
        oil_change.notes = updates.notes.clone();
        oil_change.updated_at = Utc::now().naive_utc();
        Ok(oil_change.clone())
    }

    fn delete_oil_change(&self, oil_change_id: i32) -> RepositoryResult<()> {
        let mut store = self.write()?;
        let before = store.oil_changes.len();
        store.oil_changes.retain(|o| o.id != oil_change_id);
        if store.oil_changes.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

impl InspectionReader for InMemoryRepository {
    fn get_inspection_by_id(&self, id: i32) -> RepositoryResult<Option<TechnicalInspection>> {
        let store = self.read()?;
        Ok(store.inspections.iter().find(|i| i.id == id).cloned())
    }

    fn list_inspections(
        &self,
        query: InspectionListQuery,
    ) -> RepositoryResult<(usize, Vec<TechnicalInspection>)> {
        let store = self.read()?;
        let matches: Vec<TechnicalInspection> = store
            .inspections
            .iter()
            .filter(|i| query.vehicle_id.is_none_or(|id| i.vehicle_id == id))
            .cloned()
            .collect();
        Ok(paginate(matches, query.pagination))
    }
}

impl InspectionWriter for InMemoryRepository {
    fn create_inspection(
        &self,
        new_inspection: &NewInspection,
    ) -> RepositoryResult<TechnicalInspection> {
        let mut store = self.write()?;
        let inspection = TechnicalInspection {
            id: allocate(&mut store.next_id.inspection),
            vehicle_id: new_inspection.vehicle_id,
            inspected_at: new_inspection.inspected_at,
            next_due: new_inspection.next_due,
            center: new_inspection.center.clone(),
            result: new_inspection.result.clone(),
            notes: new_inspection.notes.clone(),
            created_at: Utc::now().naive_utc(),
        };
        store.inspections.push(inspection.clone());
        Ok(inspection)
    }

    fn delete_inspection(&self, inspection_id: i32) -> RepositoryResult<()> {
        let mut store = self.write()?;
        let before = store.inspections.len();
        store.inspections.retain(|i| i.id != inspection_id);
        if store.inspections.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

impl FuelReader for InMemoryRepository {
    fn list_fuel_records(
        &self,
        query: FuelRecordListQuery,
    ) -> RepositoryResult<(usize, Vec<FuelRecord>)> {
        let store = self.read()?;
        let matches: Vec<FuelRecord> = store
            .fuel_records
            .iter()
            .filter(|r| query.vehicle_id.is_none_or(|id| r.vehicle_id == id))
            .filter(|r| query.period.is_none_or(|p| p.contains(r.filled_at)))
            .cloned()
            .collect();
        Ok(paginate(matches, query.pagination))
    }

    fn list_fuel_cards(
        &self,
        query: FuelCardListQuery,
    ) -> RepositoryResult<(usize, Vec<FuelCard>)> {
        let store = self.read()?;
        let matches: Vec<FuelCard> = store
            .fuel_cards
            .iter()
            .filter(|c| !query.active_only || c.active)
            .cloned()
            .collect();
        Ok(paginate(matches, query.pagination))
    }
}

impl FuelWriter for InMemoryRepository {
    fn create_fuel_record(&self, new_record: &NewFuelRecord) -> RepositoryResult<FuelRecord> {
        let mut store = self.write()?;
        let record = FuelRecord {
            id: allocate(&mut store.next_id.fuel_record),
            vehicle_id: new_record.vehicle_id,
            filled_at: new_record.filled_at,
            quantity_liters: new_record.quantity_liters,
            cost: new_record.cost,
            odometer: new_record.odometer,
            station: new_record.station.clone(),
            created_at: Utc::now().naive_utc(),
        };
        store.fuel_records.push(record.clone());
        Ok(record)
    }

    fn delete_fuel_record(&self, record_id: i32) -> RepositoryResult<()> {
        let mut store = self.write()?;
        let before = store.fuel_records.len();
        store.fuel_records.retain(|r| r.id != record_id);
        if store.fuel_records.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    fn create_fuel_card(&self, new_card: &NewFuelCard) -> RepositoryResult<FuelCard> {
        let mut store = self.write()?;
        if store.fuel_cards.iter().any(|c| c.number == new_card.number) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "card {} already registered",
                new_card.number
            )));
        }
        let card = FuelCard {
            id: allocate(&mut store.next_id.fuel_card),
            number: new_card.number.clone(),
            provider: new_card.provider.clone(),
            vehicle_id: new_card.vehicle_id,
            monthly_limit: new_card.monthly_limit,
            active: true,
            expires_at: new_card.expires_at,
            created_at: Utc::now().naive_utc(),
        };
        store.fuel_cards.push(card.clone());
        Ok(card)
    }

    fn update_fuel_card(
        &self,
        card_id: i32,
        updates: &UpdateFuelCard,
    ) -> RepositoryResult<FuelCard> {
        let mut store = self.write()?;
        let card = store
            .fuel_cards
            .iter_mut()
            .find(|c| c.id == card_id)
            .ok_or(RepositoryError::NotFound)?;
        card.vehicle_id = updates.vehicle_id;
        card.monthly_limit = updates.monthly_limit;
        card.active = updates.active;
        card.expires_at = updates.expires_at;
        Ok(card.clone())
    }
}

impl InsuranceReader for InMemoryRepository {
    fn get_policy_by_id(&self, id: i32) -> RepositoryResult<Option<InsurancePolicy>> {
        let store = self.read()?;
        Ok(store.policies.iter().find(|p| p.id == id).cloned())
    }

    fn list_policies(
        &self,
        query: PolicyListQuery,
    ) -> RepositoryResult<(usize, Vec<InsurancePolicy>)> {
        let store = self.read()?;
        let matches: Vec<InsurancePolicy> = store
            .policies
            .iter()
            .filter(|p| query.vehicle_id.is_none_or(|id| p.vehicle_id == id))
            .filter(|p| query.active_on.is_none_or(|date| p.is_active_on(date)))
            .cloned()
            .collect();
        Ok(paginate(matches, query.pagination))
    }
}

impl InsuranceWriter for InMemoryRepository {
    fn create_policy(&self, new_policy: &NewPolicy) -> RepositoryResult<InsurancePolicy> {
        let mut store = self.write()?;
        if store
            .policies
            .iter()
            .any(|p| p.policy_number == new_policy.policy_number)
        {
            return Err(RepositoryError::ConstraintViolation(format!(
                "policy number {} already registered",
                new_policy.policy_number
            )));
        }
        // Derived tax fields are always recomputed here so that every write
        // path stays consistent with the tax inputs.
        let taxes = TaxBreakdown::compute(&new_policy.taxes);
        let now = Utc::now().naive_utc();
        let policy = InsurancePolicy {
            id: allocate(&mut store.next_id.policy),
            vehicle_id: new_policy.vehicle_id,
            policy_number: new_policy.policy_number.clone(),
            insurance_type: new_policy.insurance_type.clone(),
            company: new_policy.company.clone(),
            agent_name: new_policy.agent_name.clone(),
            agent_phone: new_policy.agent_phone.clone(),
            start_date: new_policy.start_date,
            end_date: new_policy.end_date,
            coverage: new_policy.coverage,
            deductible: new_policy.deductible,
            premium_excl_tax: new_policy.taxes.premium_excl_tax,
            vat_rate: new_policy.taxes.vat_rate,
            vat_amount: taxes.vat_amount,
            fiscal_stamp: new_policy.taxes.fiscal_stamp,
            other_taxes: new_policy.taxes.other_taxes,
            total_tax: taxes.total_tax,
            premium_incl_tax: taxes.premium_incl_tax,
            premium: taxes.premium_incl_tax,
            created_at: now,
            updated_at: now,
        };
        store.policies.push(policy.clone());
        Ok(policy)
    }

    fn update_policy(
        &self,
        policy_id: i32,
        updates: &UpdatePolicy,
    ) -> RepositoryResult<InsurancePolicy> {
        let mut store = self.write()?;
        let taxes = TaxBreakdown::compute(&updates.taxes);
        let policy = store
            .policies
            .iter_mut()
            .find(|p| p.id == policy_id)
            .ok_or(RepositoryError::NotFound)?;
        policy.policy_number = updates.policy_number.clone();
        policy.insurance_type = updates.insurance_type.clone();
        policy.company = updates.company.clone();
        policy.agent_name = updates.agent_name.clone();
        policy.agent_phone = updates.agent_phone.clone();
        policy.start_date = updates.start_date;
        policy.end_date = updates.end_date;
        policy.coverage = updates.coverage;
        policy.deductible = updates.deductible;
        policy.premium_excl_tax = updates.taxes.premium_excl_tax;
        policy.vat_rate = updates.taxes.vat_rate;
        policy.vat_amount = taxes.vat_amount;
        policy.fiscal_stamp = updates.taxes.fiscal_stamp;
        policy.other_taxes = updates.taxes.other_taxes;
        policy.total_tax = taxes.total_tax;
        policy.premium_incl_tax = taxes.premium_incl_tax;
        policy.premium = taxes.premium_incl_tax;
        policy.updated_at = Utc::now().naive_utc();
        Ok(policy.clone())
    }

    fn delete_policy(&self, policy_id: i32) -> RepositoryResult<()> {
        let mut store = self.write()?;
        let before = store.policies.len();
        store.policies.retain(|p| p.id != policy_id);
        if store.policies.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
