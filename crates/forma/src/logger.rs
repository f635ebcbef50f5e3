//! File-based logging that writes to ~/.forma/logs/{run_id}/log, one
//! directory per run.

use anyhow::{Context, Result};
use chrono::Local;
use dirs::home_dir;
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use uuid::Uuid;

static CURRENT_RUN: OnceLock<(String, PathBuf)> = OnceLock::new();

/// Writes timestamped records to the run's log file and mirrors them to
/// stderr.
pub struct FormaLogger {
    level: LevelFilter,
    file: Mutex<File>,
    run_id: String,
    log_path: PathBuf,
}

impl FormaLogger {
    /// Creates the logger and its log file. The run id combines a local
    /// timestamp with a short uuid so concurrent runs never collide.
    pub fn new(level: LevelFilter) -> Result<Self> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let uuid_string = Uuid::new_v4().to_string();
        let uuid = uuid_string.split('-').next().unwrap_or("unknown");
        let run_id = format!("{timestamp}_{uuid}");

        let log_dir = Self::log_dir(&run_id)?;
        create_dir_all(&log_dir)
            .with_context(|| format!("failed to create log directory: {}", log_dir.display()))?;

        let log_path = log_dir.join("log");
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("failed to open log file: {}", log_path.display()))?;

        Ok(Self {
            level,
            file: Mutex::new(file),
            run_id,
            log_path,
        })
    }

    /// The log directory for a run.
    pub fn log_dir(run_id: &str) -> Result<PathBuf> {
        let home = home_dir().ok_or_else(|| anyhow::anyhow!("could not find home directory"))?;
        Ok(home.join(".forma").join("logs").join(run_id))
    }

    /// Installs the logger as the global `log` backend.
    pub fn init(level: LevelFilter) -> Result<()> {
        let logger = Self::new(level)?;
        let run_id = logger.run_id.clone();
        let log_path = logger.log_path.clone();
        let _ = CURRENT_RUN.set((run_id.clone(), log_path.clone()));

        log::set_boxed_logger(Box::new(logger))
            .map(|()| log::set_max_level(level))
            .map_err(|e| anyhow::anyhow!("failed to set logger: {}", e))?;

        log::info!("logger initialized, run id: {}", run_id);
        log::info!("log file: {}", log_path.display());
        Ok(())
    }

    /// The run id of the installed logger, if any.
    pub fn current_run_id() -> Option<&'static str> {
        CURRENT_RUN.get().map(|(run_id, _)| run_id.as_str())
    }

    /// The log file path of the installed logger, if any.
    pub fn current_log_path() -> Option<&'static PathBuf> {
        CURRENT_RUN.get().map(|(_, path)| path)
    }
}

impl Log for FormaLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            let message = format!(
                "{} {} [{}] {}",
                timestamp,
                record.level(),
                record.target(),
                record.args()
            );

            if let Ok(mut file) = self.file.lock() {
                let _ = writeln!(file, "{}", message);
                let _ = file.flush();
            }

            eprintln!("{}", message);
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}
