use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::domain::inspection::{InspectionResult, NewInspection};
use crate::domain::service_event::{
    MaintenanceType, NewMaintenance, NewOilChange, ServiceStatus, UpdateMaintenance,
    UpdateOilChange,
};
use crate::domain::types::{TypeConstraintError, checked_amount, clean_notes};

#[derive(Clone, Debug, Deserialize, Validate)]
/// Form data for scheduling a maintenance.
pub struct MaintenanceForm {
    pub vehicle_id: i32,
    pub maintenance_type: String,
    #[serde(default = "scheduled_status")]
    pub status: String,
    pub scheduled_at: NaiveDateTime,
    #[validate(length(min = 1, message = "garage is required"))]
    pub garage: String,
    pub cost: Option<f64>,
    pub notes: Option<String>,
}

fn scheduled_status() -> String {
    "scheduled".to_string()
}

impl MaintenanceForm {
    pub fn to_new_maintenance(&self) -> Result<NewMaintenance, TypeConstraintError> {
        Ok(NewMaintenance {
            vehicle_id: self.vehicle_id,
            maintenance_type: MaintenanceType::from(self.maintenance_type.as_str()),
            status: ServiceStatus::from(self.status.as_str()),
            scheduled_at: self.scheduled_at,
            garage: self.garage.trim().to_string(),
            cost: self.cost.map(checked_amount).transpose()?,
            notes: self.notes.as_deref().and_then(clean_notes),
        })
    }
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Form data for editing a maintenance record.
pub struct EditMaintenanceForm {
    pub id: i32,
    pub maintenance_type: String,
    pub status: String,
    pub scheduled_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
    #[validate(length(min = 1, message = "garage is required"))]
    pub garage: String,
    pub cost: Option<f64>,
    pub notes: Option<String>,
}

impl EditMaintenanceForm {
    pub fn to_updates(&self) -> Result<UpdateMaintenance, TypeConstraintError> {
        Ok(UpdateMaintenance {
            maintenance_type: MaintenanceType::from(self.maintenance_type.as_str()),
            status: ServiceStatus::from(self.status.as_str()),
            scheduled_at: self.scheduled_at,
            completed_at: self.completed_at,
            garage: self.garage.trim().to_string(),
            cost: self.cost.map(checked_amount).transpose()?,
            notes: self.notes.as_deref().and_then(clean_notes),
        })
    }
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Form data for scheduling an oil change.
pub struct OilChangeForm {
    pub vehicle_id: i32,
    #[serde(default = "scheduled_status")]
    pub status: String,
    pub scheduled_at: NaiveDateTime,
    pub mileage_at_change: Option<u32>,
    pub oil_type: Option<String>,
    pub notes: Option<String>,
}

impl OilChangeForm {
    pub fn to_new_oil_change(&self) -> NewOilChange {
        NewOilChange {
            vehicle_id: self.vehicle_id,
            status: ServiceStatus::from(self.status.as_str()),
            scheduled_at: self.scheduled_at,
            mileage_at_change: self.mileage_at_change,
            oil_type: self
                .oil_type
                .as_ref()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            notes: self.notes.as_deref().and_then(clean_notes),
        }
    }

    pub fn to_updates(&self, completed_at: Option<NaiveDateTime>) -> UpdateOilChange {
        let new = self.to_new_oil_change();
        UpdateOilChange {
            status: new.status,
            scheduled_at: new.scheduled_at,
            completed_at,
            mileage_at_change: new.mileage_at_change,
            oil_type: new.oil_type,
            notes: new.notes,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Form data for recording a technical inspection.
pub struct InspectionForm {
    pub vehicle_id: i32,
    pub inspected_at: NaiveDateTime,
    pub next_due: Option<NaiveDateTime>,
    #[validate(length(min = 1, message = "inspection center is required"))]
    pub center: String,
    pub result: String,
    pub notes: Option<String>,
}

impl InspectionForm {
    pub fn to_new_inspection(&self) -> NewInspection {
        NewInspection {
            vehicle_id: self.vehicle_id,
            inspected_at: self.inspected_at,
            next_due: self.next_due,
            center: self.center.trim().to_string(),
            result: InspectionResult::from(self.result.as_str()),
            notes: self.notes.as_deref().and_then(clean_notes),
        }
    }
}
