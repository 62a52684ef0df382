//! Calendar projection assembly.

use crate::domain::calendar::{CalendarEvent, project_calendar, sort_chronological};
use crate::dto::calendar::CalendarPageData;
use crate::repository::{
    InspectionListQuery, InspectionReader, ServiceLogQuery, ServiceLogReader, VehicleListQuery,
    VehicleReader,
};
use crate::services::{ServiceError, ServiceResult};

/// Projects the service records into calendar events, in source-kind order.
pub fn load_calendar_events<R>(repo: &R) -> ServiceResult<Vec<CalendarEvent>>
where
    R: VehicleReader + ServiceLogReader + InspectionReader + ?Sized,
{
    let (_, vehicles) = repo
        .list_vehicles(VehicleListQuery::new())
        .map_err(ServiceError::from)?;
    let (_, maintenances) = repo
        .list_maintenances(ServiceLogQuery::new())
        .map_err(ServiceError::from)?;
    let (_, oil_changes) = repo
        .list_oil_changes(ServiceLogQuery::new())
        .map_err(ServiceError::from)?;
    let (_, inspections) = repo
        .list_inspections(InspectionListQuery::new())
        .map_err(ServiceError::from)?;

    Ok(project_calendar(
        &vehicles,
        &maintenances,
        &oil_changes,
        &inspections,
    ))
}

/// Same events, sorted chronologically the way the calendar page wants them.
pub fn load_calendar_page<R>(repo: &R) -> ServiceResult<CalendarPageData>
where
    R: VehicleReader + ServiceLogReader + InspectionReader + ?Sized,
{
    let mut events = load_calendar_events(repo)?;
    sort_chronological(&mut events);
    Ok(CalendarPageData { events })
}
