//! Reporting module - windowed and categorical aggregate queries.

mod reporting_model;
mod reporting_service;

#[cfg(test)]
mod reporting_model_tests;

#[cfg(test)]
mod reporting_service_tests;

pub use reporting_model::{DailyTotal, DashboardSummary, GroupBy, Window};
pub use reporting_service::{ReportingService, ReportingServiceTrait};
