use crate::common::*;

use crate::utils_modules::time_utils::*;

#[doc = "Log line format: `[time] LEVEL [module:line] message`"]
fn stderr_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] {:<5} [{}:{}] {}",
        convert_date_to_str_human(now.now().with_timezone(&Local)),
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
        record.args()
    )
}

#[doc = "전역 로거설정: everything goes to stderr so stdout carries only PUTVAL lines."]
/// Level comes from `RUST_LOG`, `info` when unset.
/// The returned handle has to stay alive for the whole process.
pub fn set_global_logger() -> Result<LoggerHandle, anyhow::Error> {
    let handle: LoggerHandle = Logger::try_with_env_or_str("info")
        .map_err(|e| anyhow!("[set_global_logger] invalid log spec: {:?}", e))?
        .log_to_stderr()
        .format(stderr_format)
        .start()
        .map_err(|e| anyhow!("[set_global_logger] failed to start logger: {:?}", e))?;

    Ok(handle)
}
