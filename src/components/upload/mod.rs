//! Single-file upload widget.
//!
//! Composable pieces, all driven by one [`UploadHandle`] from
//! [`use_file_upload`]:
//! - [`FileUpload`] - Root; owns the hidden file input and the lightbox
//! - [`FileUploadDropzone`] - Drag-and-drop / click-to-browse surface
//! - [`FileUploadContent`] - Shown only while no file is selected
//! - [`FileUploadPreview`] - Image/PDF preview or filename fallback
//! - [`FileUploadClear`] - Standalone clear button
//! - [`FileUploadLightbox`] - Full-screen overlay viewer

mod clear;
mod content;
mod dropzone;
mod hook;
mod lightbox;
mod preview;
mod root;

pub use clear::FileUploadClear;
pub use content::FileUploadContent;
pub use dropzone::FileUploadDropzone;
pub use hook::{OnChange, UploadHandle, use_file_upload};
pub use lightbox::FileUploadLightbox;
pub use preview::FileUploadPreview;
pub use root::FileUpload;
