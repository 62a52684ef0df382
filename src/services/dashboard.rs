//! Dashboard statistics assembly.

use chrono::NaiveDate;

use crate::domain::stats::{
    DashboardStats, FuelPeriod, expiring_driver_licenses, expiring_fuel_cards,
};
use crate::dto::dashboard::DashboardPageData;
use crate::repository::{
    DriverListQuery, DriverReader, FuelCardListQuery, FuelReader, FuelRecordListQuery,
    InspectionListQuery, InspectionReader, ServiceLogQuery, ServiceLogReader, VehicleListQuery,
    VehicleReader,
};
use crate::services::{ServiceError, ServiceResult};

/// Recomputes the fleet statistics from the full collections. Pass a
/// `fuel_period` to scope the fuel-cost sum; `None` sums the whole history.
pub fn load_dashboard_stats<R>(
    repo: &R,
    fuel_period: Option<FuelPeriod>,
) -> ServiceResult<DashboardStats>
where
    R: VehicleReader + DriverReader + ServiceLogReader + InspectionReader + FuelReader + ?Sized,
{
    let (_, vehicles) = repo
        .list_vehicles(VehicleListQuery::new())
        .map_err(ServiceError::from)?;
    let (_, drivers) = repo
        .list_drivers(DriverListQuery::new())
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
    let (_, fuel_records) = repo
        .list_fuel_records(FuelRecordListQuery::new())
        .map_err(ServiceError::from)?;

    Ok(DashboardStats::compute(
        &vehicles,
        &drivers,
        &maintenances,
        &oil_changes,
        &inspections,
        &fuel_records,
        fuel_period,
    ))
}

/// Loads everything the dashboard page renders: the statistics plus the
/// expiring-document warnings, both relative to the supplied `today`.
pub fn load_dashboard_page<R>(
    repo: &R,
    today: NaiveDate,
    expiry_window_days: i64,
    fuel_period: Option<FuelPeriod>,
) -> ServiceResult<DashboardPageData>
where
    R: VehicleReader + DriverReader + ServiceLogReader + InspectionReader + FuelReader + ?Sized,
{
    let stats = load_dashboard_stats(repo, fuel_period).map_err(|err| {
        log::error!("Failed to compute dashboard stats: {err}");
        err
    })?;

    let (_, drivers) = repo
        .list_drivers(DriverListQuery::new())
        .map_err(ServiceError::from)?;
    let (_, cards) = repo
        .list_fuel_cards(FuelCardListQuery::new())
        .map_err(ServiceError::from)?;

    let expiring_licenses = expiring_driver_licenses(&drivers, today, expiry_window_days)
        .into_iter()
        .cloned()
        .collect();
    let expiring_cards = expiring_fuel_cards(&cards, today, expiry_window_days)
        .into_iter()
        .cloned()
        .collect();

    Ok(DashboardPageData {
        stats,
        expiring_licenses,
        expiring_cards,
    })
}
