use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{PlateNumber, TypeConstraintError};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub id: i32,
    pub plate: PlateNumber,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub vehicle_type: VehicleType,
    pub status: VehicleStatus,
    /// Current odometer reading in kilometers.
    pub mileage: u32,
    pub fuel_type: FuelType,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Vehicle {
    /// Human-readable label used in calendars and exports.
    pub fn display_name(&self) -> String {
        format!("{} {} ({})", self.brand, self.model, self.plate)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum VehicleStatus {
    Active,
    Maintenance,
    Inactive,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum VehicleType {
    Car,
    Truck,
    Van,
    Bus,
    Other(String),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum FuelType {
    Diesel,
    Gasoline,
    Electric,
    Hybrid,
    Lpg,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewVehicle {
    pub plate: PlateNumber,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub vehicle_type: VehicleType,
    pub status: VehicleStatus,
    pub mileage: u32,
    pub fuel_type: FuelType,
}

impl NewVehicle {
    pub fn new(
        plate: &str,
        brand: &str,
        model: &str,
        year: i32,
        vehicle_type: VehicleType,
        fuel_type: FuelType,
        mileage: u32,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            plate: PlateNumber::new(plate)?,
            brand: brand.trim().to_string(),
            model: model.trim().to_string(),
            year,
            vehicle_type,
            status: VehicleStatus::Active,
            mileage,
            fuel_type,
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateVehicle {
    pub plate: PlateNumber,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub vehicle_type: VehicleType,
    pub status: VehicleStatus,
    pub mileage: u32,
    pub fuel_type: FuelType,
}

impl Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleStatus::Active => write!(f, "active"),
            VehicleStatus::Maintenance => write!(f, "maintenance"),
            VehicleStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl From<&str> for VehicleStatus {
    fn from(s: &str) -> Self {
        match s {
            "maintenance" => VehicleStatus::Maintenance,
            "inactive" => VehicleStatus::Inactive,
            _ => VehicleStatus::Active,
        }
    }
}

impl Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleType::Car => write!(f, "car"),
            VehicleType::Truck => write!(f, "truck"),
            VehicleType::Van => write!(f, "van"),
            VehicleType::Bus => write!(f, "bus"),
            VehicleType::Other(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for VehicleType {
    fn from(s: &str) -> Self {
        match s {
            "car" => VehicleType::Car,
            "truck" => VehicleType::Truck,
            "van" => VehicleType::Van,
            "bus" => VehicleType::Bus,
            _ => VehicleType::Other(s.to_string()),
        }
    }
}

impl Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FuelType::Diesel => write!(f, "diesel"),
            FuelType::Gasoline => write!(f, "gasoline"),
            FuelType::Electric => write!(f, "electric"),
            FuelType::Hybrid => write!(f, "hybrid"),
            FuelType::Lpg => write!(f, "lpg"),
        }
    }
}

impl From<&str> for FuelType {
    fn from(s: &str) -> Self {
        match s {
            "gasoline" => FuelType::Gasoline,
            "electric" => FuelType::Electric,
            "hybrid" => FuelType::Hybrid,
            "lpg" => FuelType::Lpg,
            _ => FuelType::Diesel,
        }
    }
}
