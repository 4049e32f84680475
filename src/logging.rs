use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use log::{LevelFilter, Log, Metadata, Record};

/// Writes log records to a file. The terminal is in raw mode while the game runs,
/// so nothing can go to stderr.
struct FileLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

pub fn init_file_logger(path: &Path, level: LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?;

    log::set_boxed_logger(Box::new(FileLogger {
        level,
        file: Mutex::new(file),
    }))?;
    log::set_max_level(level);
    Ok(())
}
