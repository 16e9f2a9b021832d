pub mod status_service_trait;
