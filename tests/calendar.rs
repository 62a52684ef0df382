use chrono::Duration;

use fleet_admin::domain::calendar::{
    CalendarEventKind, EventStatus, UNKNOWN_VEHICLE_LABEL, project_calendar, sort_chronological,
};
use fleet_admin::domain::service_event::{MaintenanceType, ServiceStatus};
use fleet_admin::domain::vehicle::{VehicleStatus, VehicleType};
use fleet_admin::services::calendar;

mod common;

use common::{datetime, inspection, maintenance, oil_change, vehicle};

#[test]
fn inspection_with_next_due_yields_a_completed_and_a_scheduled_event() {
    let vehicles = vec![vehicle(1, VehicleType::Car, VehicleStatus::Active, 10_000)];
    let inspections = vec![inspection(
        1,
        1,
        datetime(2024, 1, 15, 9),
        Some(datetime(2026, 1, 15, 9)),
    )];

    let events = project_calendar(&vehicles, &[], &[], &inspections);
    assert_eq!(events.len(), 2);

    assert_eq!(events[0].id, "inspection-1");
    assert_eq!(events[0].status, EventStatus::Completed);
    assert_eq!(events[0].start, datetime(2024, 1, 15, 9));

    assert_eq!(events[1].id, "inspection-next-1");
    assert_eq!(events[1].status, EventStatus::Scheduled);
    assert_eq!(events[1].start, datetime(2026, 1, 15, 9));
}

#[test]
fn inspection_status_is_forced_completed_whatever_the_source_says() {
    let inspections = vec![inspection(7, 99, datetime(2025, 3, 2, 10), None)];
    let events = project_calendar(&[], &[], &[], &inspections);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].status, EventStatus::Completed);
    assert_eq!(events[0].kind, CalendarEventKind::Inspection);
}

#[test]
fn event_windows_follow_the_source_kind() {
    let vehicles = vec![vehicle(1, VehicleType::Van, VehicleStatus::Active, 50_000)];
    let maintenances = vec![maintenance(
        3,
        1,
        MaintenanceType::Preventive,
        ServiceStatus::Scheduled,
        datetime(2025, 8, 18, 14),
    )];
    let oil_changes = vec![oil_change(5, 1, ServiceStatus::Scheduled, datetime(2025, 8, 9, 8))];

    let events = project_calendar(&vehicles, &maintenances, &oil_changes, &[]);
    assert_eq!(events.len(), 2);

    assert_eq!(events[0].id, "maintenance-3");
    assert_eq!(events[0].end - events[0].start, Duration::hours(2));
    assert_eq!(events[0].kind, CalendarEventKind::Maintenance);

    assert_eq!(events[1].id, "oilchange-5");
    assert_eq!(events[1].end - events[1].start, Duration::hours(1));
    assert_eq!(events[1].kind, CalendarEventKind::Maintenance);
}

#[test]
fn in_progress_collapses_to_scheduled_for_display() {
    let maintenances = vec![maintenance(
        1,
        1,
        MaintenanceType::Corrective,
        ServiceStatus::InProgress,
        datetime(2025, 7, 28, 9),
    )];
    let oil_changes = vec![oil_change(2, 1, ServiceStatus::Cancelled, datetime(2025, 7, 29, 9))];

    let events = project_calendar(&[], &maintenances, &oil_changes, &[]);
    assert_eq!(events[0].status, EventStatus::Scheduled);
    assert_eq!(events[1].status, EventStatus::Cancelled);
}

#[test]
fn dangling_vehicle_reference_falls_back_to_a_placeholder_title() {
    let vehicles = vec![vehicle(1, VehicleType::Car, VehicleStatus::Active, 10_000)];
    let maintenances = vec![maintenance(
        1,
        999,
        MaintenanceType::Preventive,
        ServiceStatus::Scheduled,
        datetime(2025, 8, 1, 9),
    )];

    let events = project_calendar(&vehicles, &maintenances, &[], &[]);
    assert!(events[0].title.contains(UNKNOWN_VEHICLE_LABEL));
}

#[test]
fn titles_resolve_the_vehicle_display_name() {
    let vehicles = vec![vehicle(4, VehicleType::Car, VehicleStatus::Active, 10_000)];
    let oil_changes = vec![oil_change(1, 4, ServiceStatus::Scheduled, datetime(2025, 8, 9, 8))];

    let events = project_calendar(&vehicles, &[], &oil_changes, &[]);
    assert_eq!(events[0].title, format!("Oil change - {}", vehicles[0].display_name()));
}

#[test]
fn projection_keeps_source_kind_order_until_sorted() {
    let maintenances = vec![maintenance(
        1,
        1,
        MaintenanceType::Preventive,
        ServiceStatus::Scheduled,
        datetime(2025, 12, 1, 9),
    )];
    let oil_changes = vec![oil_change(1, 1, ServiceStatus::Scheduled, datetime(2025, 2, 1, 9))];

    let mut events = project_calendar(&[], &maintenances, &oil_changes, &[]);
    // Concatenation order: the later maintenance still comes first.
    assert_eq!(events[0].id, "maintenance-1");
    assert_eq!(events[1].id, "oilchange-1");

    sort_chronological(&mut events);
    assert_eq!(events[0].id, "oilchange-1");
    assert_eq!(events[1].id, "maintenance-1");
}

#[test]
fn calendar_service_projects_the_seeded_fleet() {
    let repo = common::seeded_repo();
    let events = calendar::load_calendar_events(&repo).expect("projection failed");
    // 3 maintenances + 2 oil changes + 2 inspections with next-due pairs.
    assert_eq!(events.len(), 9);

    let page = calendar::load_calendar_page(&repo).expect("page failed");
    assert_eq!(page.events.len(), 9);
    assert!(
        page.events
            .windows(2)
            .all(|pair| pair[0].start <= pair[1].start)
    );
}
