//! Utility modules for browser and formatting operations.
//!
//! Provides:
//! - [`BrowserFile`], [`ObjectUrls`], [`read_data_url`] - Browser file access for previews
//! - [`dom`] - Window access, class joining, JS error messages
//! - [`format`] - Display formatting for file sizes

pub mod dom;
mod file;
pub mod format;

pub use file::{BrowserFile, ObjectUrls, read_data_url};
