pub mod configs;
pub mod metrics_record;
