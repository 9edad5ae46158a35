//! Terminal output for try.
//!
//! Everything here writes to stderr; stdout is reserved for the `cd` line.

pub mod picker;

use crate::db::FolderRecord;

const GRAY: &str = "\x1b[90m";
const RESET: &str = "\x1b[0m";

/// One-line note shown when a single folder matched
pub fn folder_notice(folder: &FolderRecord, color: bool) -> String {
    let text = format!(
        "✓ {} ({}, opened {} times)",
        folder.name, folder.date, folder.times_opened
    );

    if color {
        format!("{}{}{}", GRAY, text, RESET)
    } else {
        text
    }
}
