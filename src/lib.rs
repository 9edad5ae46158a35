/// try library
///
/// Fuzzy-finds dated scratch folders and creates new ones when nothing fits.

pub mod config;
pub mod core;
pub mod db;
pub mod error;
pub mod shell;
pub mod ui;

// Re-exports for convenience
pub use config::Config;
pub use db::Database;
pub use error::{Result, TryError};
