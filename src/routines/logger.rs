use std::time::Instant;

use crate::routines::settings::Settings;
use eyre::{Result, WrapErr};
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::{self};
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;
use tracing_subscriber::registry::Registry;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Setup logging for the library
///
/// This function sets up logging using the `tracing` crate, and the `tracing-subscriber` crate for formatting.
///
/// The log level is defined by `log.level` in the settings, and defaults to `INFO`.
///
/// If `log.file` is set, the log messages are also written to that file, which is truncated first.
///
/// A global subscriber can only be installed once, later calls leave the first one in place.
pub fn setup_log(settings: &Settings) -> Result<()> {
    let log_level = settings.log.level.to_lowercase();
    let env_filter = EnvFilter::new(&log_level);

    let timestamper = CompactTimestamp {
        start: Instant::now(),
    };

    // Define a registry with that level as an environment filter
    let subscriber = Registry::default().with(env_filter);

    // Define layer for file
    let file_layer = if settings.log.file.is_empty() {
        None
    } else {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&settings.log.file)
            .wrap_err_with(|| format!("Failed to open log file {}", settings.log.file))?;
        let layer = fmt::layer()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_timer(timestamper.clone());
        Some(layer)
    };

    // Define layer for stdout
    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(false)
        .with_timer(timestamper.clone());

    // Combine layers with subscriber
    if subscriber
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .is_ok()
    {
        tracing::debug!("Logging is configured with level: {}", log_level);
    }

    Ok(())
}

#[derive(Clone)]
struct CompactTimestamp {
    start: Instant,
}

impl FormatTime for CompactTimestamp {
    fn format_time(
        &self,
        w: &mut tracing_subscriber::fmt::format::Writer<'_>,
    ) -> Result<(), std::fmt::Error> {
        let elapsed = self.start.elapsed();
        let hours = elapsed.as_secs() / 3600;
        let minutes = (elapsed.as_secs() % 3600) / 60;
        let seconds = elapsed.as_secs() % 60;

        write!(w, "{:02}h {:02}m {:02}s", hours, minutes, seconds)
    }
}
