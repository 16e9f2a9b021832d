pub mod schedule_service;
pub mod status_service;
