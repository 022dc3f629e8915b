//! Writes statistics as `{PREFIX} {NAME}={VALUE}` lines once logging has been configured.

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io::stdout;
use std::io::Write;
use std::sync::Mutex;
use std::sync::OnceLock;

use convert_case::Case;
use convert_case::Casing;

struct StatisticOptions {
    statistic_prefix: &'static str,
    after_statistics: Option<&'static str>,
    statistics_casing: Option<Case>,
    statistics_writer: Box<dyn Write + Send + Sync>,
}

impl Debug for StatisticOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticOptions")
            .field("statistic_prefix", &self.statistic_prefix)
            .field("after_statistics", &self.after_statistics)
            .field("statistics_casing", &self.statistics_casing)
            .field("statistics_writer", &"<Writer>")
            .finish()
    }
}

static STATISTIC_OPTIONS: OnceLock<Mutex<StatisticOptions>> = OnceLock::new();

/// Configures the logging of the statistics.
///
/// Only the first call has an effect. If no writer is given, stdout is used. Until this is called,
/// [`log_statistic`] is a no-op.
pub fn configure_statistic_logging(
    prefix: &'static str,
    after: Option<&'static str>,
    casing: Option<Case>,
    writer: Option<Box<dyn Write + Send + Sync>>,
) {
    let _ = STATISTIC_OPTIONS.get_or_init(|| {
        Mutex::new(StatisticOptions {
            statistic_prefix: prefix,
            after_statistics: after,
            statistics_casing: casing,
            statistics_writer: writer.unwrap_or(Box::new(stdout())),
        })
    });
}

/// Logs the statistic `name` with value `value`.
pub fn log_statistic(name: impl Display, value: impl Display) {
    if let Some(lock) = STATISTIC_OPTIONS.get() {
        if let Ok(mut options) = lock.lock() {
            let name = match options.statistics_casing {
                Some(casing) => name.to_string().to_case(casing),
                None => name.to_string(),
            };
            let prefix = options.statistic_prefix;
            let _ = writeln!(options.statistics_writer, "{prefix} {name}={value}");
        }
    }
}

/// Logs the closing line of a block of statistics, if one is configured.
pub fn log_statistic_postfix() {
    if let Some(lock) = STATISTIC_OPTIONS.get() {
        if let Ok(mut options) = lock.lock() {
            if let Some(postfix) = options.after_statistics {
                let _ = writeln!(options.statistics_writer, "{postfix}");
            }
        }
    }
}

pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS.get().is_some()
}
