/// Runtime configuration
///
/// Resolves where scratch folders live and where the history database sits.

use crate::error::{Result, TryError};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Overrides the base directory when set
pub const BASE_DIR_ENV: &str = "TRY_PATH";

/// Default base directory, relative to the home directory
const DEFAULT_BASE_DIR: &str = "try";

/// History database file name inside the base directory
pub const DB_FILE_NAME: &str = "try.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_dir: PathBuf,
    pub db_path: PathBuf,
    pub color: bool,
}

impl Config {
    /// Resolve configuration from the environment
    pub fn from_env() -> Result<Self> {
        let base_dir = resolve_base_dir(std::env::var(BASE_DIR_ENV).ok().as_deref())?;
        // Paths are recorded and printed, so they must not depend on the cwd
        let base_dir = std::path::absolute(&base_dir).map_err(|e| {
            TryError::Config(format!("Could not resolve {}: {}", base_dir.display(), e))
        })?;
        Ok(Self::with_base_dir(base_dir))
    }

    /// Build a config rooted at an explicit directory
    pub fn with_base_dir<P: AsRef<Path>>(base_dir: P) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let db_path = base_dir.join(DB_FILE_NAME);
        let color = std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();

        Self {
            base_dir,
            db_path,
            color,
        }
    }

    /// Create the base directory if it doesn't exist yet
    pub fn ensure_base_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.base_dir).map_err(|source| TryError::Filesystem {
            path: self.base_dir.clone(),
            source,
        })
    }
}

/// Pick the base directory: explicit override first, then `~/try`
fn resolve_base_dir(override_path: Option<&str>) -> Result<PathBuf> {
    match override_path.map(str::trim) {
        Some(path) if !path.is_empty() => expand_home(path),
        _ => Ok(home_dir()?.join(DEFAULT_BASE_DIR)),
    }
}

fn expand_home(path: &str) -> Result<PathBuf> {
    if path == "~" {
        return home_dir();
    }
    match path.strip_prefix("~/") {
        Some(rest) => Ok(home_dir()?.join(rest)),
        None => Ok(PathBuf::from(path)),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| TryError::Config("Could not determine home directory".to_string()))
}
