//! Fleet administration data layer.
//!
//! Domain entities for vehicles, drivers, service events, inspections, fuel
//! and insurance records; repository traits with an in-memory store standing
//! in for a real backend; derived-statistics, calendar-projection and
//! premium-tax computation units; validated forms; and CSV export.

pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod services;
