/// Database module for try
///
/// Folder history lives in a single SQLite table accessed through sqlx.

pub mod connection;
pub mod models;
pub mod queries;

pub use connection::{Database, DatabaseStats};
pub use models::*;
