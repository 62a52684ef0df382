use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::driver::{DriverStatus, NewDriver, UpdateDriver};
use crate::domain::types::{ContactPhone, TypeConstraintError};

#[derive(Clone, Debug, Deserialize, Validate)]
/// Form data for adding a driver.
pub struct AddDriverForm {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "license number is required"))]
    pub license_number: String,
    pub license_expiry: NaiveDate,
    pub vehicle_id: Option<i32>,
}

impl AddDriverForm {
    pub fn to_new_driver(&self) -> Result<NewDriver, TypeConstraintError> {
        let mut new_driver = NewDriver::new(
            &self.name,
            self.phone.as_deref().filter(|p| !p.trim().is_empty()),
            &self.license_number,
            self.license_expiry,
        )?;
        new_driver.vehicle_id = self.vehicle_id;
        Ok(new_driver)
    }
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Form data for editing a driver.
pub struct EditDriverForm {
    pub id: i32,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub phone: Option<String>,
    pub status: String,
    #[validate(length(min = 1, message = "license number is required"))]
    pub license_number: String,
    pub license_expiry: NaiveDate,
    pub vehicle_id: Option<i32>,
}

impl EditDriverForm {
    pub fn to_updates(&self) -> Result<UpdateDriver, TypeConstraintError> {
        let phone = match self.phone.as_deref().filter(|p| !p.trim().is_empty()) {
            Some(raw) => Some(ContactPhone::new(raw)?),
            None => None,
        };
        Ok(UpdateDriver {
            name: self.name.trim().to_string(),
            phone,
            status: DriverStatus::from(self.status.as_str()),
            license_number: self.license_number.trim().to_string(),
            license_expiry: self.license_expiry,
            vehicle_id: self.vehicle_id,
        })
    }
}
