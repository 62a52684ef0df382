//! Maintenance and oil-change records, plus the origin-tagged union that
//! merges both kinds into one logical service-event stream.

use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ServiceStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl ServiceStatus {
    /// Scheduled and in-progress records both count as upcoming work.
    pub fn is_upcoming(&self) -> bool {
        matches!(self, ServiceStatus::Scheduled | ServiceStatus::InProgress)
    }
}

impl Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceStatus::Scheduled => write!(f, "scheduled"),
            ServiceStatus::InProgress => write!(f, "in_progress"),
            ServiceStatus::Completed => write!(f, "completed"),
            ServiceStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl From<&str> for ServiceStatus {
    fn from(s: &str) -> Self {
        match s {
            "in_progress" => ServiceStatus::InProgress,
            "completed" => ServiceStatus::Completed,
            "cancelled" => ServiceStatus::Cancelled,
            _ => ServiceStatus::Scheduled,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MaintenanceType {
    Preventive,
    Corrective,
    Revision,
    Other(String),
}

impl Display for MaintenanceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaintenanceType::Preventive => write!(f, "Preventive"),
            MaintenanceType::Corrective => write!(f, "Corrective"),
            MaintenanceType::Revision => write!(f, "Revision"),
            MaintenanceType::Other(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for MaintenanceType {
    fn from(s: &str) -> Self {
        match s {
            "preventive" => MaintenanceType::Preventive,
            "corrective" => MaintenanceType::Corrective,
            "revision" => MaintenanceType::Revision,
            _ => MaintenanceType::Other(s.to_string()),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Maintenance {
    pub id: i32,
    pub vehicle_id: i32,
    pub maintenance_type: MaintenanceType,
    pub status: ServiceStatus,
    pub scheduled_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
    pub garage: String,
    pub cost: Option<f64>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OilChange {
    pub id: i32,
    pub vehicle_id: i32,
    pub status: ServiceStatus,
    pub scheduled_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
    /// Odometer reading recorded when the change was performed.
    pub mileage_at_change: Option<u32>,
    pub oil_type: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewMaintenance {
    pub vehicle_id: i32,
    pub maintenance_type: MaintenanceType,
    pub status: ServiceStatus,
    pub scheduled_at: NaiveDateTime,
    pub garage: String,
    pub cost: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateMaintenance {
    pub maintenance_type: MaintenanceType,
    pub status: ServiceStatus,
    pub scheduled_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
    pub garage: String,
    pub cost: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewOilChange {
    pub vehicle_id: i32,
    pub status: ServiceStatus,
    pub scheduled_at: NaiveDateTime,
    pub mileage_at_change: Option<u32>,
    pub oil_type: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateOilChange {
    pub status: ServiceStatus,
    pub scheduled_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
    pub mileage_at_change: Option<u32>,
    pub oil_type: Option<String>,
    pub notes: Option<String>,
}

/// A maintenance or oil-change record viewed as one logical stream, tagged
/// with its origin kind.
#[derive(Clone, Copy, Debug)]
pub enum ServiceEvent<'a> {
    Maintenance(&'a Maintenance),
    OilChange(&'a OilChange),
}

impl ServiceEvent<'_> {
    pub fn status(&self) -> &ServiceStatus {
        match self {
            ServiceEvent::Maintenance(m) => &m.status,
            ServiceEvent::OilChange(o) => &o.status,
        }
    }

    pub fn vehicle_id(&self) -> i32 {
        match self {
            ServiceEvent::Maintenance(m) => m.vehicle_id,
            ServiceEvent::OilChange(o) => o.vehicle_id,
        }
    }

    pub fn scheduled_at(&self) -> NaiveDateTime {
        match self {
            ServiceEvent::Maintenance(m) => m.scheduled_at,
            ServiceEvent::OilChange(o) => o.scheduled_at,
        }
    }
}

/// Merges both record kinds into one iterator, maintenances first.
pub fn service_events<'a>(
    maintenances: &'a [Maintenance],
    oil_changes: &'a [OilChange],
) -> impl Iterator<Item = ServiceEvent<'a>> {
    maintenances
        .iter()
        .map(ServiceEvent::Maintenance)
        .chain(oil_changes.iter().map(ServiceEvent::OilChange))
}
