//! Calendar projection over maintenance, oil-change, and inspection records.
//!
//! Events are derived values: kind-prefixed composite ids, computed end
//! windows, and a normalized display status. The projector concatenates the
//! three source kinds in order and performs no sorting of its own; callers
//! that need chronological order use [`sort_chronological`].

use std::fmt::Display;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::inspection::TechnicalInspection;
use crate::domain::service_event::{Maintenance, OilChange, ServiceStatus};
use crate::domain::vehicle::Vehicle;

/// Label used when an event references a vehicle that no longer exists.
pub const UNKNOWN_VEHICLE_LABEL: &str = "Unknown vehicle";

const MAINTENANCE_WINDOW_HOURS: i64 = 2;
const OIL_CHANGE_WINDOW_HOURS: i64 = 1;
const INSPECTION_WINDOW_HOURS: i64 = 1;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarEventKind {
    Maintenance,
    Inspection,
}

/// Display status: `InProgress` source records collapse to `Scheduled`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum EventStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl From<&ServiceStatus> for EventStatus {
    fn from(status: &ServiceStatus) -> Self {
        match status {
            ServiceStatus::Scheduled | ServiceStatus::InProgress => EventStatus::Scheduled,
            ServiceStatus::Completed => EventStatus::Completed,
            ServiceStatus::Cancelled => EventStatus::Cancelled,
        }
    }
}

impl Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventStatus::Scheduled => write!(f, "scheduled"),
            EventStatus::Completed => write!(f, "completed"),
            EventStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CalendarEvent {
    /// Composite id, prefixed by the source kind (`maintenance-3`,
    /// `oilchange-7`, `inspection-2`, `inspection-next-2`).
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub kind: CalendarEventKind,
    pub vehicle_id: i32,
    pub description: String,
    pub status: EventStatus,
}

/// Flattens the three record kinds into one event sequence, in source-kind
/// order: maintenances, oil changes, then inspection pairs.
pub fn project_calendar(
    vehicles: &[Vehicle],
    maintenances: &[Maintenance],
    oil_changes: &[OilChange],
    inspections: &[TechnicalInspection],
) -> Vec<CalendarEvent> {
    let mut events = Vec::with_capacity(maintenances.len() + oil_changes.len() + inspections.len());

    for record in maintenances {
        let label = vehicle_label(vehicles, record.vehicle_id);
        events.push(CalendarEvent {
            id: format!("maintenance-{}", record.id),
            title: format!("{} - {label}", record.maintenance_type),
            start: record.scheduled_at,
            end: record.scheduled_at + Duration::hours(MAINTENANCE_WINDOW_HOURS),
            kind: CalendarEventKind::Maintenance,
            vehicle_id: record.vehicle_id,
            description: record.notes.clone().unwrap_or_default(),
            status: EventStatus::from(&record.status),
        });
    }

    for record in oil_changes {
        let label = vehicle_label(vehicles, record.vehicle_id);
        events.push(CalendarEvent {
            id: format!("oilchange-{}", record.id),
            title: format!("Oil change - {label}"),
            start: record.scheduled_at,
            end: record.scheduled_at + Duration::hours(OIL_CHANGE_WINDOW_HOURS),
            kind: CalendarEventKind::Maintenance,
            vehicle_id: record.vehicle_id,
            description: record.notes.clone().unwrap_or_default(),
            status: EventStatus::from(&record.status),
        });
    }

    for record in inspections {
        let label = vehicle_label(vehicles, record.vehicle_id);
        // The inspection itself already happened, whatever the source says.
        events.push(CalendarEvent {
            id: format!("inspection-{}", record.id),
            title: format!("Inspection - {label}"),
            start: record.inspected_at,
            end: record.inspected_at + Duration::hours(INSPECTION_WINDOW_HOURS),
            kind: CalendarEventKind::Inspection,
            vehicle_id: record.vehicle_id,
            description: record.center.clone(),
            status: EventStatus::Completed,
        });

        if let Some(next_due) = record.next_due {
            events.push(CalendarEvent {
                id: format!("inspection-next-{}", record.id),
                title: format!("Inspection due - {label}"),
                start: next_due,
                end: next_due + Duration::hours(INSPECTION_WINDOW_HOURS),
                kind: CalendarEventKind::Inspection,
                vehicle_id: record.vehicle_id,
                description: record.center.clone(),
                status: EventStatus::Scheduled,
            });
        }
    }

    events
}

/// Stable sort by start time, for callers that need chronological order.
pub fn sort_chronological(events: &mut [CalendarEvent]) {
    events.sort_by_key(|event| event.start);
}

fn vehicle_label(vehicles: &[Vehicle], vehicle_id: i32) -> String {
    vehicles
        .iter()
        .find(|v| v.id == vehicle_id)
        .map(Vehicle::display_name)
        .unwrap_or_else(|| UNKNOWN_VEHICLE_LABEL.to_string())
}
