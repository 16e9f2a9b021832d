pub mod startup_error;
pub mod status_error;
