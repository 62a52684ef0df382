use std::fmt::Display;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{ContactPhone, TypeConstraintError};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Driver {
    pub id: i32,
    pub name: String,
    pub phone: Option<ContactPhone>,
    pub status: DriverStatus,
    pub license_number: String,
    pub license_expiry: NaiveDate,
    /// Currently assigned vehicle, if any. Not enforced against the vehicle
    /// collection; dangling references are tolerated.
    pub vehicle_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Driver {
    /// Whether the license expires within `window_days` of `today`. Already
    /// expired licenses also count.
    pub fn license_expires_within(&self, today: NaiveDate, window_days: i64) -> bool {
        self.license_expiry <= today + Duration::days(window_days)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DriverStatus {
    Active,
    Suspended,
    Inactive,
}

impl Display for DriverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DriverStatus::Active => write!(f, "active"),
            DriverStatus::Suspended => write!(f, "suspended"),
            DriverStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl From<&str> for DriverStatus {
    fn from(s: &str) -> Self {
        match s {
            "suspended" => DriverStatus::Suspended,
            "inactive" => DriverStatus::Inactive,
            _ => DriverStatus::Active,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewDriver {
    pub name: String,
    pub phone: Option<ContactPhone>,
    pub status: DriverStatus,
    pub license_number: String,
    pub license_expiry: NaiveDate,
    pub vehicle_id: Option<i32>,
}

impl NewDriver {
    pub fn new(
        name: &str,
        phone: Option<&str>,
        license_number: &str,
        license_expiry: NaiveDate,
    ) -> Result<Self, TypeConstraintError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self {
            name,
            phone: match phone {
                Some(raw) => Some(ContactPhone::new(raw)?),
                None => None,
            },
            status: DriverStatus::Active,
            license_number: license_number.trim().to_string(),
            license_expiry,
            vehicle_id: None,
        })
    }

    pub fn assigned_to(mut self, vehicle_id: i32) -> Self {
        self.vehicle_id = Some(vehicle_id);
        self
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateDriver {
    pub name: String,
    pub phone: Option<ContactPhone>,
    pub status: DriverStatus,
    pub license_number: String,
    pub license_expiry: NaiveDate,
    pub vehicle_id: Option<i32>,
}
