//! Data shaped for the calendar view.

use serde::Serialize;

use crate::domain::calendar::CalendarEvent;

/// Events for the calendar page, sorted chronologically for display.
#[derive(Debug, Serialize)]
pub struct CalendarPageData {
    pub events: Vec<CalendarEvent>,
}
