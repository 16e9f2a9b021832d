use crate::common::*;

use crate::enums::startup_error::*;

use crate::model::configs::{cli_args::*, exporter_config::*};

pub const HOSTNAME_ENV: &str = "COLLECTD_HOSTNAME";
pub const INTERVAL_ENV: &str = "COLLECTD_INTERVAL";

pub const DEFAULT_HOSTNAME: &str = "localhost";
pub const DEFAULT_INTERVAL_SECS: u64 = 20;

#[doc = "env 헬퍼함수 정의: unset and non-unicode values both read as None"]
fn get_env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[doc = "Function that resolves the reporting hostname. Empty or unset falls back to `localhost`."]
pub fn resolve_hostname(raw: Option<String>) -> String {
    match raw {
        Some(host) if !host.is_empty() => host,
        _ => DEFAULT_HOSTNAME.to_string(),
    }
}

#[doc = "Function that resolves the poll interval in seconds."]
/// # Arguments
/// * `raw` - value of `COLLECTD_INTERVAL`, if any
///
/// # Returns
/// * u64 - 20 when unset or not a base-10 32-bit integer, at least 1 otherwise
pub fn resolve_interval(raw: Option<&str>) -> u64 {
    match raw.map(str::parse::<i32>) {
        Some(Ok(secs)) if secs >= 1 => secs as u64,
        Some(Ok(secs)) => {
            warn!(
                "[resolve_interval] {}={} is not a usable interval. Using 1 second.",
                INTERVAL_ENV, secs
            );
            1
        }
        _ => DEFAULT_INTERVAL_SECS,
    }
}

#[doc = "Function that builds the immutable exporter configuration from flags and env values."]
/// # Arguments
/// * `args`     - parsed command line flags
/// * `hostname` - raw `COLLECTD_HOSTNAME`
/// * `interval` - raw `COLLECTD_INTERVAL`
///
/// # Returns
/// * Result<ExporterConfig, StartupConfigError>
pub fn build_exporter_config(
    args: &CliArgs,
    hostname: Option<String>,
    interval: Option<String>,
) -> Result<ExporterConfig, StartupConfigError> {
    let server: String = match args.server.as_deref() {
        Some(server) if !server.is_empty() => server.to_string(),
        _ => return Err(StartupConfigError::MissingServer),
    };

    let core: String = match args.core.as_deref() {
        Some(core) if !core.is_empty() => core.to_string(),
        _ => return Err(StartupConfigError::MissingCore),
    };

    Ok(ExporterConfig::new(
        server,
        core,
        args.https,
        resolve_interval(interval.as_deref()),
        resolve_hostname(hostname),
    ))
}

#[doc = "Function that reads the process environment and builds the exporter configuration."]
pub fn load_exporter_config(args: &CliArgs) -> Result<ExporterConfig, StartupConfigError> {
    build_exporter_config(args, get_env_opt(HOSTNAME_ENV), get_env_opt(INTERVAL_ENV))
}
