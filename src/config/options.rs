// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use log::LevelFilter;

use super::consts::*;

/// Everything one invocation needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub scrape: ScrapeOptions,
    pub log: LogOptions,
    pub quiet: bool,
}

impl AppOptions {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            scrape: ScrapeOptions::default(),
            log: LogOptions::default(),
            quiet: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub workers: usize,
    pub timeout_secs: u64,
    pub pause_ms: u64,
    pub user_agent: String,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            workers: WORKERS,
            timeout_secs: REQUEST_TIMEOUT_SECS,
            pause_ms: REQUEST_PAUSE_MS,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ScrapeOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogOptions {
    pub file: PathBuf,
    pub level: LevelFilter,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_LOG_FILE),
            level: LevelFilter::Error,
        }
    }
}

impl LogOptions {
    /// `-v` raises the level one step per occurrence, capped at debug.
    pub fn raise(&mut self) {
        self.level = match self.level {
            LevelFilter::Off | LevelFilter::Error => LevelFilter::Warn,
            LevelFilter::Warn => LevelFilter::Info,
            _ => LevelFilter::Debug,
        };
    }
}
