//! In-memory logger for the `log` facade.
//!
//! A TUI owns the terminal, so log lines are kept in a bounded ring buffer
//! that the UI renders in its log overlay instead of being written to stderr.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Shared handle to the most recent log lines.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
}

impl LogBuffer {
    pub const CAPACITY: usize = 200;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            if lines.len() == Self::CAPACITY {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|l| l.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove and return every buffered line, oldest first.
    pub fn drain(&self) -> Vec<String> {
        self.lines.lock().map(|mut l| Vec::from(std::mem::take(&mut *l))).unwrap_or_default()
    }

    /// Up to `n` lines, skipping the newest `offset`, oldest first.
    pub fn recent(&self, n: usize, offset: usize) -> Vec<String> {
        let Ok(lines) = self.lines.lock() else {
            return Vec::new();
        };
        let end = lines.len().saturating_sub(offset);
        let start = end.saturating_sub(n);
        lines.range(start..end).cloned().collect()
    }
}

/// `log::Log` implementation that appends to a [`LogBuffer`].
#[derive(Debug)]
pub struct BufferLogger {
    buffer: LogBuffer,
    level: LevelFilter,
}

impl BufferLogger {
    pub fn new(buffer: LogBuffer, level: LevelFilter) -> Self {
        Self { buffer, level }
    }
}

impl Log for BufferLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let tag = match record.level() {
            Level::Error => "ERR",
            Level::Warn => "WRN",
            Level::Info => "INF",
            Level::Debug => "DBG",
            Level::Trace => "TRC",
        };
        self.buffer.push(format!("[{tag}] {}", record.args()));
    }

    fn flush(&self) {}
}

/// Install a global [`BufferLogger`] and return the buffer it writes to.
pub fn install(level: LevelFilter) -> Result<LogBuffer, SetLoggerError> {
    let buffer = LogBuffer::new();
    log::set_boxed_logger(Box::new(BufferLogger::new(buffer.clone(), level)))?;
    log::set_max_level(level);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_is_bounded() {
        let buf = LogBuffer::new();
        for i in 0..LogBuffer::CAPACITY + 5 {
            buf.push(format!("line {i}"));
        }
        assert_eq!(buf.len(), LogBuffer::CAPACITY);
        assert_eq!(buf.recent(1, 0), vec![format!("line {}", LogBuffer::CAPACITY + 4)]);
        assert_eq!(buf.recent(2, 1).len(), 2);
    }

    #[test]
    fn drain_empties_the_buffer() {
        let buf = LogBuffer::new();
        buf.push("[WRN] first".into());
        buf.push("[WRN] second".into());
        assert_eq!(buf.drain(), vec!["[WRN] first".to_string(), "[WRN] second".to_string()]);
        assert!(buf.is_empty());
        assert!(buf.drain().is_empty());
    }

    #[test]
    fn logger_filters_by_level() {
        let buf = LogBuffer::new();
        let logger = BufferLogger::new(buf.clone(), LevelFilter::Info);
        logger.log(&Record::builder().level(Level::Debug).args(format_args!("hidden")).build());
        logger.log(&Record::builder().level(Level::Info).args(format_args!("shown")).build());
        assert_eq!(buf.recent(10, 0), vec!["[INF] shown".to_string()]);
    }
}
