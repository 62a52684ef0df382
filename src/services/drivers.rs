//! Driver listing and CRUD pass-throughs.

use validator::Validate;

use crate::domain::driver::{Driver, DriverStatus};
use crate::forms::driver::{AddDriverForm, EditDriverForm};
use crate::forms::field_errors;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::errors::RepositoryError;
use crate::repository::{DriverListQuery, DriverReader, DriverWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn get_driver<R>(repo: &R, driver_id: i32) -> ServiceResult<Option<Driver>>
where
    R: DriverReader + ?Sized,
{
    repo.get_driver_by_id(driver_id).map_err(ServiceError::from)
}

pub fn load_driver_list<R>(
    repo: &R,
    page: usize,
    search: Option<String>,
    status: Option<DriverStatus>,
) -> ServiceResult<Paginated<Driver>>
where
    R: DriverReader + ?Sized,
{
    let mut query = DriverListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(term) = search.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) {
        query = query.search(term);
    }
    if let Some(status) = status {
        query = query.status(status);
    }

    let (total, drivers) = repo.list_drivers(query).map_err(ServiceError::from)?;
    Ok(Paginated::new(
        drivers,
        page,
        total.div_ceil(DEFAULT_ITEMS_PER_PAGE),
    ))
}

pub fn add_driver<R>(repo: &R, form: &AddDriverForm) -> ServiceResult<Driver>
where
    R: DriverWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate driver form: {err}");
        return Err(ServiceError::Form(field_errors(&err)));
    }
    let new_driver = form.to_new_driver()?;
    repo.create_driver(&new_driver).map_err(|err| {
        log::error!("Failed to create driver: {err}");
        ServiceError::from(err)
    })
}

pub fn save_driver<R>(repo: &R, form: &EditDriverForm) -> ServiceResult<Driver>
where
    R: DriverWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate driver form: {err}");
        return Err(ServiceError::Form(field_errors(&err)));
    }
    let updates = form.to_updates()?;
    repo.update_driver(form.id, &updates).map_err(|err| {
        log::error!("Failed to update driver {}: {err}", form.id);
        ServiceError::from(err)
    })
}

pub fn delete_driver<R>(repo: &R, driver_id: i32) -> ServiceResult<()>
where
    R: DriverWriter + ?Sized,
{
    match repo.delete_driver(driver_id) {
        Ok(()) => Ok(()),
        Err(RepositoryError::NotFound) => Err(ServiceError::NotFound),
        Err(err) => Err(ServiceError::from(err)),
    }
}
