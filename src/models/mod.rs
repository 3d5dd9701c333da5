//! View-facing data types for the upload widget.
//!
//! - [`PreviewSource`] - What the preview and lightbox render

mod preview;

pub use preview::PreviewSource;
