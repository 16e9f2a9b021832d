pub mod cli_args;
pub mod exporter_config;
