//! Size-capped log file with numbered backups (`debug.log`, `debug.log.1`, ...).
//!
//! The primary file is rolled over before a write that would take it to `max_bytes`. Backups
//! shift up by one and the oldest falls off, so at most `backup_count` of them ever exist.

use super::{Handler, LogRecord};
use crate::fmt::Formatter;
use crate::level::Level;
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct FileState {
    file: Option<File>,
    /// Bytes in the primary file, tracked so rollover checks need no `stat` per record.
    size: u64,
    /// `mode: w` truncates on the first open only.
    truncate_pending: bool,
}

/// File handler with optional size-based rotation. With `max_bytes` or `backup_count` at 0
/// it is a plain appending file handler.
#[derive(Debug)]
pub struct RotatingFileHandler {
    name: String,
    level: Option<Level>,
    formatter: Formatter,
    path: PathBuf,
    max_bytes: u64,
    backup_count: u32,
    state: Mutex<FileState>,
}

impl RotatingFileHandler {
    /// Rotation is off until `max_bytes` and `backup_count` are set.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            level: None,
            formatter: Formatter::default(),
            path: path.into(),
            max_bytes: 0,
            backup_count: 0,
            state: Mutex::new(FileState::default()),
        }
    }

    #[must_use]
    pub const fn level(mut self, level: Option<Level>) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    #[must_use]
    pub const fn max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    #[must_use]
    pub const fn backup_count(mut self, backup_count: u32) -> Self {
        self.backup_count = backup_count;
        self
    }

    /// Start from an empty file instead of appending.
    #[must_use]
    pub fn truncate(self, truncate: bool) -> Self {
        self.lock().truncate_pending = truncate;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<path>.<index>`
    #[must_use]
    pub fn backup_path(&self, index: u32) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    /// Opens the primary file now instead of on the first record.
    ///
    /// # Errors
    /// The parent directory cannot be created or the file cannot be opened.
    pub fn open(&self) -> Result<(), crate::Error> {
        let mut state = self.lock();
        if state.file.is_none() {
            self.open_locked(&mut state)?;
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, FileState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn open_locked(&self, state: &mut FileState) -> Result<(), crate::Error> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let mut options = OpenOptions::new();
        options.create(true);
        if state.truncate_pending {
            options.write(true).truncate(true);
        } else {
            options.append(true);
        }
        let file = options.open(&self.path)?;
        state.size = file.metadata()?.len();
        state.file = Some(file);
        state.truncate_pending = false;
        Ok(())
    }

    const fn rotation_enabled(&self) -> bool {
        self.max_bytes > 0 && self.backup_count > 0
    }

    /// An empty file is never rolled, so a single oversized record cannot cause churn.
    const fn should_rollover(&self, state: &FileState, incoming: u64) -> bool {
        self.rotation_enabled()
            && state.size > 0
            && state.size.saturating_add(incoming) >= self.max_bytes
    }

    fn rollover(&self, state: &mut FileState) -> Result<(), crate::Error> {
        if let Some(mut file) = state.file.take() {
            file.flush()?;
        }

        for index in (1..self.backup_count).rev() {
            let src = self.backup_path(index);
            if src.exists() {
                let dst = self.backup_path(index + 1);
                if dst.exists() {
                    fs::remove_file(&dst)?;
                }
                fs::rename(&src, &dst)?;
            }
        }

        let first = self.backup_path(1);
        if first.exists() {
            fs::remove_file(&first)?;
        }
        if self.path.exists() {
            fs::rename(&self.path, &first)?;
        }

        self.open_locked(state)
    }
}

impl Handler for RotatingFileHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn level(&self) -> Option<Level> {
        self.level
    }

    fn emit(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let mut line = self.formatter.format(record);
        line.push('\n');
        let incoming = line.len() as u64;

        let mut state = self.lock();
        if state.file.is_none() {
            self.open_locked(&mut state)?;
        }
        if self.should_rollover(&state, incoming) {
            self.rollover(&mut state)?;
        }

        if let Some(file) = state.file.as_mut() {
            file.write_all(line.as_bytes())?;
            state.size += incoming;
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        if let Some(file) = self.lock().file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }

    fn close(&self) -> Result<(), crate::Error> {
        let mut state = self.lock();
        if let Some(mut file) = state.file.take() {
            file.flush()?;
        }
        Ok(())
    }
}
