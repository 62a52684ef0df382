use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TechnicalInspection {
    pub id: i32,
    pub vehicle_id: i32,
    /// When the inspection took place.
    pub inspected_at: NaiveDateTime,
    /// Next statutory due date, when the center issued one.
    pub next_due: Option<NaiveDateTime>,
    pub center: String,
    pub result: InspectionResult,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum InspectionResult {
    Passed,
    PassedWithDefects,
    Failed,
}

impl Display for InspectionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InspectionResult::Passed => write!(f, "passed"),
            InspectionResult::PassedWithDefects => write!(f, "passed_with_defects"),
            InspectionResult::Failed => write!(f, "failed"),
        }
    }
}

impl From<&str> for InspectionResult {
    fn from(s: &str) -> Self {
        match s {
            "passed_with_defects" => InspectionResult::PassedWithDefects,
            "failed" => InspectionResult::Failed,
            _ => InspectionResult::Passed,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewInspection {
    pub vehicle_id: i32,
    pub inspected_at: NaiveDateTime,
    pub next_due: Option<NaiveDateTime>,
    pub center: String,
    pub result: InspectionResult,
    pub notes: Option<String>,
}
