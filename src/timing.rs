//! Timing sinks for catalog sort measurements
//!
//! The catalog reports how long a name sort took by writing one text line to a
//! [`TimingSink`]. The sink is injected when the catalog is built; the default
//! is [`NoopSink`], which discards everything.
//!
//! Sinks never surface errors. A [`FileSink`] that cannot open or write its
//! file drops the line and emits a `tracing` warning instead.

use std::cell::RefCell;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::warn;

/// Append-only destination for timing lines
pub trait TimingSink {
    /// Append one line; failures are swallowed
    fn record(&mut self, line: &str);
}

/// Sink that discards every line
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl TimingSink for NoopSink {
    fn record(&mut self, _line: &str) {}
}

/// Sink that appends each line to a text file, creating it on first use
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSink { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TimingSink for FileSink {
    fn record(&mut self, line: &str) {
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "{}", line));

        if let Err(e) = result {
            warn!(path = %self.path.display(), error = %e, "dropping timing line");
        }
    }
}

/// Sink that keeps lines in memory
///
/// Clones share the same buffer, so a caller can hand one clone to a catalog
/// and read the recorded lines through another.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines recorded so far, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl TimingSink for MemorySink {
    fn record(&mut self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_clones_share_lines() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();
        writer.record("first");
        writer.record("second");
        assert_eq!(sink.lines(), vec!["first", "second"]);
    }

    #[test]
    fn file_sink_appends_lines() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("log.txt");

        let mut sink = FileSink::new(&path);
        assert_eq!(sink.path(), path.as_path());
        sink.record("one");
        sink.record("two");

        let contents = std::fs::read_to_string(&path).expect("log file written");
        assert_eq!(contents, "one\ntwo\n");
    }

    #[test]
    fn file_sink_ignores_unwritable_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        // A directory cannot be opened for appending
        let mut sink = FileSink::new(dir.path());
        sink.record("lost");
    }
}
