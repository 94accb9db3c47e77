use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("failed to read log file {path}: {source}")]
pub struct InputError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Read the whole log file up front, one entry per line.
pub fn load_log_lines(path: &Path) -> Result<Vec<String>, InputError> {
    let contents = fs::read_to_string(path).map_err(|source| InputError {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(contents.lines().map(str::to_string).collect())
}
