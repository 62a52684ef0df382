use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{TypeConstraintError, checked_amount};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FuelRecord {
    pub id: i32,
    pub vehicle_id: i32,
    pub filled_at: NaiveDate,
    pub quantity_liters: f64,
    pub cost: f64,
    /// Odometer reading at fill time, when the driver recorded it.
    pub odometer: Option<u32>,
    pub station: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewFuelRecord {
    pub vehicle_id: i32,
    pub filled_at: NaiveDate,
    pub quantity_liters: f64,
    pub cost: f64,
    pub odometer: Option<u32>,
    pub station: Option<String>,
}

impl NewFuelRecord {
    pub fn new(
        vehicle_id: i32,
        filled_at: NaiveDate,
        quantity_liters: f64,
        cost: f64,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            vehicle_id,
            filled_at,
            quantity_liters: checked_amount(quantity_liters)?,
            cost: checked_amount(cost)?,
            odometer: None,
            station: None,
        })
    }

    pub fn at_station(mut self, station: impl Into<String>) -> Self {
        self.station = Some(station.into());
        self
    }

    pub fn odometer(mut self, reading: u32) -> Self {
        self.odometer = Some(reading);
        self
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FuelCard {
    pub id: i32,
    pub number: String,
    pub provider: String,
    pub vehicle_id: Option<i32>,
    pub monthly_limit: f64,
    pub active: bool,
    pub expires_at: NaiveDate,
    pub created_at: NaiveDateTime,
}

impl FuelCard {
    /// Card number with everything but the last four digits masked.
    pub fn masked_number(&self) -> String {
        let digits: String = self.number.chars().filter(char::is_ascii_digit).collect();
        if digits.len() <= 4 {
            return digits;
        }
        format!("**** {}", &digits[digits.len() - 4..])
    }

    pub fn expires_within(&self, today: NaiveDate, window_days: i64) -> bool {
        self.expires_at <= today + Duration::days(window_days)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewFuelCard {
    pub number: String,
    pub provider: String,
    pub vehicle_id: Option<i32>,
    pub monthly_limit: f64,
    pub expires_at: NaiveDate,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateFuelCard {
    pub vehicle_id: Option<i32>,
    pub monthly_limit: f64,
    pub active: bool,
    pub expires_at: NaiveDate,
}
