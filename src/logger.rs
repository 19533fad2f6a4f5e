use chrono::Local;
use log::{Level, Log, Metadata, Record, SetLoggerError};

/// Minimal stdout logger behind the `log` facade.
pub struct Logger {
    label: String,
    level: Level,
}

impl Logger {
    pub fn new() -> Logger {
        Logger {
            label: env!("CARGO_PKG_NAME").to_string(),
            level: Level::Info,
        }
    }

    pub fn label(mut self, label: &str) -> Logger {
        self.label = label.to_string();
        self
    }

    pub fn level(mut self, level: Level) -> Logger {
        self.level = level;
        self
    }

    pub fn init(self) -> Result<(), SetLoggerError> {
        log::set_max_level(self.level.to_level_filter());
        log::set_boxed_logger(Box::new(self))
    }
}

impl Default for Logger {
    fn default() -> Logger {
        Logger::new()
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!(
                "{} {:<5} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                self.label,
                record.args()
            );
        }
    }

    fn flush(&self) {}
}
