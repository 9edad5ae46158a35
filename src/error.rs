/// Error types for try
///
/// Every failure is terminal for the invocation. Nothing here is retried;
/// `main` prints `user_message()` to stderr and exits with `exit_code()`.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for try operations
#[derive(Error, Debug)]
pub enum TryError {
    /// The base directory could not be resolved
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database-related errors (open, query, insert, update)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Insert rejected because a record already owns this path
    #[error("A folder is already recorded at {0}")]
    DuplicatePath(String),

    /// Usage update targeted a record that no longer exists
    #[error("Folder record {0} not found")]
    FolderNotFound(i64),

    /// Directory creation failed (includes two invocations racing on one path)
    #[error("Could not create {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O errors on the terminal or output streams
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The user backed out of the interactive picker
    #[error("Selection cancelled")]
    UserCancelled,
}

/// Result type alias for try operations
pub type Result<T> = std::result::Result<T, TryError>;

impl TryError {
    /// Convert a sqlx error from an insert, mapping the unique-path constraint
    pub fn from_insert(err: sqlx::Error, path: &str) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                TryError::DuplicatePath(path.to_string())
            }
            _ => TryError::Database(err),
        }
    }

    /// Process exit code. Every failure, cancellation included, is 1.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Convert TryError to a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            TryError::Config(msg) => format!("Configuration issue: {}", msg),
            TryError::Database(e) => {
                format!("Database error occurred. Please try again. Details: {}", e)
            }
            TryError::DuplicatePath(path) => {
                format!("'{}' is already tracked (another try may have just created it)", path)
            }
            TryError::FolderNotFound(id) => {
                format!("Folder #{} disappeared from the database before it could be opened", id)
            }
            TryError::Filesystem { path, source } => {
                format!("Could not create {}. Details: {}", path.display(), source)
            }
            TryError::Io(e) => format!("Terminal I/O failed. Details: {}", e),
            TryError::UserCancelled => "Cancelled".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_user_messages() {
        let err = TryError::DuplicatePath("/home/me/try/2026-10-19-demo".to_string());
        assert!(err.user_message().contains("2026-10-19-demo"));

        let err = TryError::UserCancelled;
        assert_eq!(err.user_message(), "Cancelled");
    }

    #[test]
    fn test_error_display() {
        let err = TryError::Filesystem {
            path: PathBuf::from("/tmp/x"),
            source: std::io::Error::from(std::io::ErrorKind::AlreadyExists),
        };
        let display = format!("{}", err);
        assert!(display.contains("/tmp/x"));
    }

    #[test]
    fn test_every_error_exits_with_one() {
        assert_eq!(TryError::UserCancelled.exit_code(), 1);
        assert_eq!(TryError::FolderNotFound(7).exit_code(), 1);
    }

    #[test]
    fn test_filesystem_message_names_path() {
        let err = TryError::Filesystem {
            path: PathBuf::from("/home/me/try"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.user_message().starts_with("Could not create /home/me/try"));
    }
}
