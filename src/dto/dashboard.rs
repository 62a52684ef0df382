//! Data shaped for the dashboard view.

use serde::Serialize;

use crate::domain::driver::Driver;
use crate::domain::fuel::FuelCard;
use crate::domain::stats::DashboardStats;

/// Aggregated data required to render the dashboard page.
#[derive(Debug, Serialize)]
pub struct DashboardPageData {
    pub stats: DashboardStats,
    /// Drivers whose license expires within the configured window.
    pub expiring_licenses: Vec<Driver>,
    /// Active fuel cards expiring within the configured window.
    pub expiring_cards: Vec<FuelCard>,
}
