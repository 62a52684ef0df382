use serde::Deserialize;
use validator::Validate;

use crate::domain::types::TypeConstraintError;
use crate::domain::vehicle::{FuelType, NewVehicle, UpdateVehicle, VehicleStatus, VehicleType};

#[derive(Clone, Debug, Deserialize, Validate)]
/// Form data for registering a new vehicle.
pub struct AddVehicleForm {
    #[validate(length(min = 1, message = "plate number is required"))]
    pub plate: String,
    #[validate(length(min = 1, message = "brand is required"))]
    pub brand: String,
    #[validate(length(min = 1, message = "model is required"))]
    pub model: String,
    #[validate(range(min = 1950, max = 2035, message = "year is out of range"))]
    pub year: i32,
    pub vehicle_type: String,
    pub fuel_type: String,
    #[serde(default)]
    pub mileage: u32,
}

impl AddVehicleForm {
    pub fn to_new_vehicle(&self) -> Result<NewVehicle, TypeConstraintError> {
        NewVehicle::new(
            &self.plate,
            &self.brand,
            &self.model,
            self.year,
            VehicleType::from(self.vehicle_type.as_str()),
            FuelType::from(self.fuel_type.as_str()),
            self.mileage,
        )
    }
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Form data for editing an existing vehicle.
pub struct EditVehicleForm {
    pub id: i32,
    #[validate(length(min = 1, message = "plate number is required"))]
    pub plate: String,
    #[validate(length(min = 1, message = "brand is required"))]
    pub brand: String,
    #[validate(length(min = 1, message = "model is required"))]
    pub model: String,
    #[validate(range(min = 1950, max = 2035, message = "year is out of range"))]
    pub year: i32,
    pub vehicle_type: String,
    pub status: String,
    pub fuel_type: String,
    pub mileage: u32,
}

impl EditVehicleForm {
    pub fn to_updates(&self) -> Result<UpdateVehicle, TypeConstraintError> {
        Ok(UpdateVehicle {
            plate: crate::domain::types::PlateNumber::new(&self.plate)?,
            brand: self.brand.trim().to_string(),
            model: self.model.trim().to_string(),
            year: self.year,
            vehicle_type: VehicleType::from(self.vehicle_type.as_str()),
            status: VehicleStatus::from(self.status.as_str()),
            mileage: self.mileage,
            fuel_type: FuelType::from(self.fuel_type.as_str()),
        })
    }
}
