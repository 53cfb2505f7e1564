//! Persistence sinks.
//!
//! A sink accepts a session's raw text and either stores it durably or
//! fails. File paths, encodings, and atomic-write behavior all live behind
//! the trait; the session only ever sees `io::Result`.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::debug;

/// Destination for a session's raw text.
pub trait PersistenceSink {
    /// Stores `text` durably under the session's `name`, or fails.
    ///
    /// `name` is pass-through metadata from the session; how (or whether) a
    /// sink uses it is its own business.
    fn persist(&mut self, name: Option<&str>, text: &str) -> io::Result<()>;
}

/// Sink that writes each session to a file under a root directory.
///
/// The target file is `<dir>/<name>`, with a fallback name for anonymous
/// sessions. Content goes to a temporary file first and is renamed into
/// place, so a crashed write never leaves a truncated target.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
    fallback_name: String,
}

impl FileSink {
    /// Creates a sink rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            fallback_name: "untitled".to_string(),
        }
    }

    /// Sets the file name used for sessions without a name.
    pub fn with_fallback_name(mut self, name: impl Into<String>) -> Self {
        self.fallback_name = name.into();
        self
    }

    fn target(&self, name: Option<&str>) -> PathBuf {
        self.dir.join(name.unwrap_or(&self.fallback_name))
    }
}

impl PersistenceSink for FileSink {
    fn persist(&mut self, name: Option<&str>, text: &str) -> io::Result<()> {
        let path = self.target(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write to a temporary file first, then rename (atomic write)
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, text.as_bytes())?;
        fs::rename(&temp_path, &path)?;

        debug!(path = %path.display(), bytes = text.len(), "persisted text");
        Ok(())
    }
}

/// In-memory sink for tests and dry runs.
///
/// Records every `persist` call in order.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Vec<(Option<String>, String)>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every recorded (name, text) pair, oldest first.
    pub fn entries(&self) -> &[(Option<String>, String)] {
        &self.entries
    }

    /// Returns the most recent (name, text) pair.
    pub fn last(&self) -> Option<&(Option<String>, String)> {
        self.entries.last()
    }
}

impl PersistenceSink for MemorySink {
    fn persist(&mut self, name: Option<&str>, text: &str) -> io::Result<()> {
        self.entries.push((name.map(String::from), text.to_string()));
        Ok(())
    }
}
