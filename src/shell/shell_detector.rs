/// Shell detection logic
///
/// Figures out which integration snippet `try init` should print.

use crate::error::{Result, TryError};
use std::env;

/// Supported shells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

impl Shell {
    /// Get the shell name as a string
    pub fn name(&self) -> &str {
        match self {
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
            Shell::Fish => "fish",
        }
    }

    /// Parse a shell name, or the last component of a shell path
    pub fn from_name(name: &str) -> Option<Shell> {
        let name = name.rsplit('/').next().unwrap_or(name).to_lowercase();

        match name.as_str() {
            "bash" => Some(Shell::Bash),
            "zsh" => Some(Shell::Zsh),
            "fish" => Some(Shell::Fish),
            _ => None,
        }
    }
}

impl std::fmt::Display for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Shell detector
pub struct ShellDetector;

impl ShellDetector {
    /// Detect the current shell from `$SHELL`
    ///
    /// # Returns
    /// * `Ok(Shell)` - The detected shell
    /// * `Err(TryError)` - If `$SHELL` is unset or names an unsupported shell
    pub fn detect() -> Result<Shell> {
        let shell_path = env::var("SHELL").map_err(|_| {
            TryError::Config("Could not detect shell. $SHELL is not set.".to_string())
        })?;

        Self::from_path(&shell_path)
    }

    fn from_path(shell_path: &str) -> Result<Shell> {
        Shell::from_name(shell_path)
            .ok_or_else(|| TryError::Config(format!("Unsupported shell: {}", shell_path)))
    }
}
