//! Vehicle listing and CRUD pass-throughs.

use validator::Validate;

use crate::domain::vehicle::{Vehicle, VehicleStatus};
use crate::forms::field_errors;
use crate::forms::vehicle::{AddVehicleForm, EditVehicleForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::errors::RepositoryError;
use crate::repository::{VehicleListQuery, VehicleReader, VehicleWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn get_vehicle<R>(repo: &R, vehicle_id: i32) -> ServiceResult<Option<Vehicle>>
where
    R: VehicleReader + ?Sized,
{
    repo.get_vehicle_by_id(vehicle_id)
        .map_err(ServiceError::from)
}

/// Loads one page of the vehicle list, optionally filtered by status or a
/// free-text search over plate, brand, and model.
pub fn load_vehicle_list<R>(
    repo: &R,
    page: usize,
    search: Option<String>,
    status: Option<VehicleStatus>,
) -> ServiceResult<Paginated<Vehicle>>
where
    R: VehicleReader + ?Sized,
{
    let mut query = VehicleListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(term) = search.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) {
        query = query.search(term);
    }
    if let Some(status) = status {
        query = query.status(status);
    }

    let (total, vehicles) = repo.list_vehicles(query).map_err(ServiceError::from)?;
    Ok(Paginated::new(
        vehicles,
        page,
        total.div_ceil(DEFAULT_ITEMS_PER_PAGE),
    ))
}

/// Validates the add-vehicle form and registers the vehicle.
pub fn add_vehicle<R>(repo: &R, form: &AddVehicleForm) -> ServiceResult<Vehicle>
where
    R: VehicleWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate vehicle form: {err}");
        return Err(ServiceError::Form(field_errors(&err)));
    }
    let new_vehicle = form.to_new_vehicle()?;
    repo.create_vehicle(&new_vehicle).map_err(|err| {
        log::error!("Failed to create vehicle: {err}");
        ServiceError::from(err)
    })
}

/// Validates the edit form and applies it to the stored vehicle.
pub fn save_vehicle<R>(repo: &R, form: &EditVehicleForm) -> ServiceResult<Vehicle>
where
    R: VehicleWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate vehicle form: {err}");
        return Err(ServiceError::Form(field_errors(&err)));
    }
    let updates = form.to_updates()?;
    repo.update_vehicle(form.id, &updates).map_err(|err| {
        log::error!("Failed to update vehicle {}: {err}", form.id);
        ServiceError::from(err)
    })
}

pub fn delete_vehicle<R>(repo: &R, vehicle_id: i32) -> ServiceResult<()>
where
    R: VehicleWriter + ?Sized,
{
    match repo.delete_vehicle(vehicle_id) {
        Ok(()) => Ok(()),
        Err(RepositoryError::NotFound) => Err(ServiceError::NotFound),
        Err(err) => Err(ServiceError::from(err)),
    }
}
