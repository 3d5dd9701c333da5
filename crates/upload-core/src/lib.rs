//! Platform-independent state machine for a single-file upload widget.
//!
//! This crate provides:
//! - [`SelectionController`] - selected file ownership and preview lifecycle
//! - [`PreviewKind`], [`Preview`], [`PreviewBackend`] - preview derivation and transient handles
//! - [`DragState`] - drop surface drag transitions
//! - [`Lightbox`] - full-screen overlay open/close logic
//! - [`FileUpload`] - the aggregate driven by [`UploadEvent`]s, producing [`Effects`]
//!
//! Nothing here touches the browser. The web layer implements [`FileLike`] and
//! [`PreviewBackend`] for its own file and object-URL types.

pub mod error;
pub mod file;
mod lightbox;
mod options;
pub mod preview;
mod selection;
mod surface;
mod upload;

pub use error::PreviewError;
pub use file::{FileInfo, FileLike, MemoryFile};
pub use lightbox::Lightbox;
pub use options::UploadOptions;
pub use preview::{Preview, PreviewBackend, PreviewKind, encode_data_url};
pub use selection::{ReadOutcome, ReadTicket, SelectionController, SelectionId};
pub use surface::DragState;
pub use upload::{Change, Effects, FileUpload, Snapshot, UploadEvent};
