use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A health log written to a private temporary directory.
pub struct LogFixture {
    dir: TempDir,
    lines: Vec<String>,
}

impl LogFixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create fixture dir"),
            lines: Vec::new(),
        }
    }

    /// Append `timestamp,endpoint,outcome` as-is.
    pub fn line(mut self, timestamp: &str, endpoint: &str, outcome: &str) -> Self {
        self.lines.push(format!("{timestamp},{endpoint},{outcome}"));
        self
    }

    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Write the log and return its path. The file lives as long as the fixture.
    pub fn write(&self) -> PathBuf {
        let path = self.dir.path().join("monitoring.log");
        let text: String = self.lines.iter().map(|l| format!("{l}\n")).collect();
        fs::write(&path, text).expect("failed to write fixture log");
        path
    }

    pub fn missing_path(&self) -> PathBuf {
        self.dir.path().join("not_exist_monitoring.log")
    }
}

impl Default for LogFixture {
    fn default() -> Self {
        Self::new()
    }
}
