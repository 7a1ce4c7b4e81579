//! Prints solver statistics in a `name=value` format on standard out. Output is disabled until
//! [`configure`] is called.
use std::fmt::Display;

use once_cell::sync::OnceCell;

#[derive(Debug)]
struct StatisticOptions {
    log_statistics: bool,
    prefix: &'static str,
}

static STATISTIC_OPTIONS: OnceCell<StatisticOptions> = OnceCell::new();

/// Set the process-wide statistic output options. Only the first call has an effect; the options
/// cannot be changed once statistics have been configured.
pub fn configure(log_statistics: bool, prefix: &'static str) {
    let _ = STATISTIC_OPTIONS.set(StatisticOptions {
        log_statistics,
        prefix,
    });
}

pub(crate) fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS
        .get()
        .is_some_and(|options| options.log_statistics)
}

pub(crate) fn log_statistic(name: impl Display, value: impl Display) {
    if let Some(options) = STATISTIC_OPTIONS.get() {
        if options.log_statistics {
            println!("{}{name}={value}", options.prefix);
        }
    }
}
