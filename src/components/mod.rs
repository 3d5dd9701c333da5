//! UI components built with Leptos.
//!
//! - [`upload`] - Single-file upload widget (drop zone, preview, lightbox)
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod upload;
