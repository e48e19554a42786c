use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "shiftlog";

/// Resolves the platform-specific application data directory where monthly
/// log files and the diagnostic log live.
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new() -> Self {
        let base = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        DataDir {
            root: Path::new(&base).join(APP_NAME),
        }
    }

    /// Creates the directory if needed and returns its path.
    pub fn ensure(&self) -> Result<&Path> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(&self.root)
    }

    /// Resolves a file name inside the data directory, creating the
    /// directory on first use.
    pub fn resolve(&self, file_name: &str) -> Result<PathBuf> {
        Ok(self.ensure()?.join(file_name))
    }
}

impl Default for DataDir {
    fn default() -> Self {
        Self::new()
    }
}
