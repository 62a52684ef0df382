//! Offline reporting tool: seeds the demo fleet, prints the dashboard
//! summary, and writes the vehicle and fuel CSV exports.

use std::env;
use std::path::Path;
use std::time::Duration;

use chrono::Utc;
use config::Config;
use dotenvy::dotenv;

use fleet_admin::models::config::AppConfig;
use fleet_admin::repository::memory::InMemoryRepository;
use fleet_admin::repository::seed;
use fleet_admin::repository::{FuelReader, FuelRecordListQuery, VehicleListQuery, VehicleReader};
use fleet_admin::services::export::{Column, rows_to_values, write_export};
use fleet_admin::services::{calendar, dashboard};

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(config::File::with_name("config/default").required(false))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let app_config = match settings.try_deserialize::<AppConfig>() {
        Ok(app_config) => app_config,
        Err(err) => {
            log::error!("Error loading app config: {err}");
            std::process::exit(1);
        }
    };

    let repo = if app_config.simulated_latency_ms > 0 {
        InMemoryRepository::new()
            .with_latency(Duration::from_millis(app_config.simulated_latency_ms))
    } else {
        InMemoryRepository::new()
    };

    if let Err(err) = seed::load_demo(&repo) {
        log::error!("Failed to seed the demo fleet: {err}");
        std::process::exit(1);
    }

    let today = Utc::now().date_naive();

    let page = match dashboard::load_dashboard_page(&repo, today, app_config.expiry_window_days, None)
    {
        Ok(page) => page,
        Err(err) => {
            log::error!("Failed to load dashboard: {err}");
            std::process::exit(1);
        }
    };

    let stats = &page.stats;
    log::info!(
        "Fleet: {} vehicles ({} active, {} in maintenance), {} drivers ({} active)",
        stats.total_vehicles,
        stats.active_vehicles,
        stats.maintenance_vehicles,
        stats.total_drivers,
        stats.active_drivers
    );
    log::info!(
        "Service: {} upcoming events, fuel spend {:.2}, approx consumption {:.1} L/100km",
        stats.upcoming_service_events,
        stats.total_fuel_cost,
        stats.average_fuel_consumption
    );
    for driver in &page.expiring_licenses {
        log::warn!(
            "License {} of {} expires on {}",
            driver.license_number,
            driver.name,
            driver.license_expiry
        );
    }
    for card in &page.expiring_cards {
        log::warn!("Fuel card {} expires on {}", card.masked_number(), card.expires_at);
    }

    match calendar::load_calendar_page(&repo) {
        Ok(calendar_page) => {
            log::info!("Calendar: {} events", calendar_page.events.len());
            for event in &calendar_page.events {
                log::info!("  {} [{}] {}", event.start, event.status, event.title);
            }
        }
        Err(err) => {
            log::error!("Failed to project calendar: {err}");
            std::process::exit(1);
        }
    }

    let export_dir = Path::new(&app_config.export_dir);

    let vehicles = match repo.list_vehicles(VehicleListQuery::new()) {
        Ok((_, vehicles)) => vehicles,
        Err(err) => {
            log::error!("Failed to list vehicles: {err}");
            std::process::exit(1);
        }
    };
    let vehicle_columns = vec![
        Column::new("plate", "Plate"),
        Column::new("brand", "Brand"),
        Column::new("model", "Model"),
        Column::new("year", "Year"),
        Column::new("status", "Status"),
        Column::new("mileage", "Mileage (km)"),
    ];
    let fuel_records = match repo.list_fuel_records(FuelRecordListQuery::new()) {
        Ok((_, records)) => records,
        Err(err) => {
            log::error!("Failed to list fuel records: {err}");
            std::process::exit(1);
        }
    };
    let fuel_columns = vec![
        Column::new("vehicle_id", "Vehicle"),
        Column::new("filled_at", "Date"),
        Column::new("quantity_liters", "Liters"),
        Column::new("cost", "Cost"),
        Column::new("station", "Station"),
    ];

    match rows_to_values(&vehicles)
        .and_then(|rows| write_export(export_dir, "vehicles", today, &rows, &vehicle_columns))
    {
        Ok(path) => log::info!("Wrote {}", path.display()),
        Err(err) => {
            log::error!("Failed to export vehicles: {err}");
            std::process::exit(1);
        }
    }

    match rows_to_values(&fuel_records)
        .and_then(|rows| write_export(export_dir, "fuel_records", today, &rows, &fuel_columns))
    {
        Ok(path) => log::info!("Wrote {}", path.display()),
        Err(err) => {
            log::error!("Failed to export fuel records: {err}");
            std::process::exit(1);
        }
    }
}
