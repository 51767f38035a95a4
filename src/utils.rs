//! Small filesystem helpers

use crate::Result;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Build a timestamped filename such as `printcost_20260807_123000.log`
pub fn date_time_filename(prefix: &str, postfix: &str) -> String {
    let now = chrono::Local::now();
    format!("{}{}{}", prefix, now.format("%Y%m%d_%H%M%S"), postfix)
}

/// Self-deleting temporary folder for tests and demos
pub struct TempFolder {
    path: PathBuf,
}

impl TempFolder {
    pub fn new() -> Result<Self> {
        let mut path = env::temp_dir();
        let unique = format!(
            "printcost_{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos())
                .unwrap_or(0)
        );
        path.push(unique);
        fs::create_dir_all(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempFolder {
    fn drop(&mut self) {
        if let Ok(entries) = fs::read_dir(&self.path) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_file() {
                    let _ = fs::remove_file(path);
                }
            }
        }
        let _ = fs::remove_dir(&self.path);
    }
}
