use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use visitstat_core::test_helpers::SAMPLE_LOGS;

/// An access log written to a temporary directory that lives as long as the fixture.
pub struct LogFixture {
    _dir: TempDir,
    path: PathBuf,
}

impl LogFixture {
    pub fn new(lines: &[&str]) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("access.log");
        fs::write(&path, lines.join("\n")).expect("failed to write log fixture");

        Self { _dir: dir, path }
    }

    pub fn sample() -> Self {
        Self::new(&SAMPLE_LOGS)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
