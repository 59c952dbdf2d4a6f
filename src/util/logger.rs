use crate::error::SccError;
use chrono::Local;
use log::{Level, Log, Metadata, Record};

/// Writes timestamped records to stdout. Records from other crates are only shown at `Debug` and
/// below, so dependencies stay quiet at the default `Info` level.
struct BenchLogger {
    level: Level,
}

const CRATE_TARGET: &str = "sccbench";

impl Log for BenchLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
            && (self.level >= Level::Debug || metadata.target().starts_with(CRATE_TARGET))
    }

    #[allow(clippy::print_stdout)]
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!(
                "{} {:<5} {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.6f"),
                record.level().to_string(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

pub fn init_logger_with_level(level: Level) -> Result<(), SccError> {
    let logger = BenchLogger { level };
    log::set_boxed_logger(Box::new(logger))
        .map_err(|e| SccError::Generic(format!("Could not set logger: {}", e)))?;
    log::set_max_level(level.to_level_filter());
    Ok(())
}
