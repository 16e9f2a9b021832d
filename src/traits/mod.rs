pub mod repository;
pub mod schedule_trait;
pub mod service;
