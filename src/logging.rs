// src/logging.rs
//! File sink for the `log` facade.
//!
//! Lines look like `[00:00:01.234][WARN] message` (time since install).
//! Only this crate's records are written; dependency chatter is dropped.
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

use crate::error::Error;

pub struct FileLogger {
    path: PathBuf,
    level: LevelFilter,
    start: Instant,
    lock: Mutex<()>,
}

impl FileLogger {
    pub fn new(path: impl Into<PathBuf>, level: LevelFilter) -> Self {
        Self { path: path.into(), level, start: Instant::now(), lock: Mutex::new(()) }
    }

    pub fn format_line(&self, record: &Record) -> String {
        let elapsed = fmt_elapsed(self.start.elapsed().as_millis());
        format!("[{elapsed}][{}] {}\n", record.level(), record.args())
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format_line(record);

        if let Ok(_guard) = self.lock.lock() {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {}
}

/// Install the file logger globally. Fails if the log file cannot be opened
/// or a logger is already installed.
pub fn init(path: &Path, level: LevelFilter) -> Result<(), Error> {
    // Surface a bad path now rather than silently dropping every line later.
    if level != LevelFilter::Off {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| Error::Log { path: path.to_path_buf(), source })?;
    }
    log::set_boxed_logger(Box::new(FileLogger::new(path, level)))
        .map(|()| log::set_max_level(level))
        .map_err(|_| Error::LoggerInstalled)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}
