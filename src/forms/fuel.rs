use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::fuel::{NewFuelCard, NewFuelRecord, UpdateFuelCard};
use crate::domain::types::{TypeConstraintError, checked_amount};

#[derive(Clone, Debug, Deserialize, Validate)]
/// Form data for logging a refuelling.
pub struct FuelRecordForm {
    pub vehicle_id: i32,
    pub filled_at: NaiveDate,
    #[validate(range(min = 0.1, message = "quantity must be positive"))]
    pub quantity_liters: f64,
    #[validate(range(min = 0.0, message = "cost cannot be negative"))]
    pub cost: f64,
    pub odometer: Option<u32>,
    pub station: Option<String>,
}

impl FuelRecordForm {
    pub fn to_new_record(&self) -> Result<NewFuelRecord, TypeConstraintError> {
        let mut record =
            NewFuelRecord::new(self.vehicle_id, self.filled_at, self.quantity_liters, self.cost)?;
        record.odometer = self.odometer;
        record.station = self
            .station
            .as_ref()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Ok(record)
    }
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Form data for issuing a fuel card.
pub struct FuelCardForm {
    #[validate(length(min = 1, message = "card number is required"))]
    pub number: String,
    #[validate(length(min = 1, message = "provider is required"))]
    pub provider: String,
    pub vehicle_id: Option<i32>,
    #[validate(range(min = 0.0, message = "limit cannot be negative"))]
    pub monthly_limit: f64,
    pub expires_at: NaiveDate,
}

impl FuelCardForm {
    pub fn to_new_card(&self) -> Result<NewFuelCard, TypeConstraintError> {
        Ok(NewFuelCard {
            number: self.number.trim().to_string(),
            provider: self.provider.trim().to_string(),
            vehicle_id: self.vehicle_id,
            monthly_limit: checked_amount(self.monthly_limit)?,
            expires_at: self.expires_at,
        })
    }
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Form data for updating a fuel card assignment.
pub struct EditFuelCardForm {
    pub id: i32,
    pub vehicle_id: Option<i32>,
    #[validate(range(min = 0.0, message = "limit cannot be negative"))]
    pub monthly_limit: f64,
    pub active: bool,
    pub expires_at: NaiveDate,
}

impl EditFuelCardForm {
    pub fn to_updates(&self) -> Result<UpdateFuelCard, TypeConstraintError> {
        Ok(UpdateFuelCard {
            vehicle_id: self.vehicle_id,
            monthly_limit: checked_amount(self.monthly_limit)?,
            active: self.active,
            expires_at: self.expires_at,
        })
    }
}
