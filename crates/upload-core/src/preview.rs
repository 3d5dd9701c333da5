//! Preview derivation.
//!
//! A preview is either an inline data URL (images) or a transient resource
//! handle (PDF documents). Handles come from a [`PreviewBackend`] and must be
//! given back to it exactly once.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::PreviewError;

/// Media type prefix rendered as an inline image.
pub const IMAGE_PREFIX: &str = "image/";

/// Media type rendered through a transient handle.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Media type used in data URLs when the platform reports none.
const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// How a file of a given media type is previewed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewKind {
    /// Inline data URL, produced by an asynchronous read
    Inline,
    /// Transient handle, produced synchronously
    Transient,
    /// Filename/icon fallback
    None,
}

impl PreviewKind {
    /// Decide the preview mode from a media type.
    pub fn classify(media_type: &str) -> Self {
        if media_type.starts_with(IMAGE_PREFIX) {
            Self::Inline
        } else if media_type == PDF_MEDIA_TYPE {
            Self::Transient
        } else {
            Self::None
        }
    }
}

/// The preview slot for the current selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Preview<H> {
    /// No preview (no selection, unsupported type, or failure)
    None,
    /// Inline read in flight
    Pending,
    /// Inline data URL
    Inline(String),
    /// Transient resource handle
    Transient(H),
}

impl<H> Default for Preview<H> {
    fn default() -> Self {
        Self::None
    }
}

impl<H> Preview<H> {
    /// Whether there is something to render (and to show in the lightbox).
    pub fn is_displayable(&self) -> bool {
        matches!(self, Self::Inline(_) | Self::Transient(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The inline data URL, if any.
    pub fn inline(&self) -> Option<&str> {
        match self {
            Self::Inline(url) => Some(url),
            _ => None,
        }
    }

    /// The transient handle, if any.
    pub fn handle(&self) -> Option<&H> {
        match self {
            Self::Transient(handle) => Some(handle),
            _ => None,
        }
    }
}

/// Creates and releases transient preview handles.
///
/// Implementations may assume `release` is called exactly once for every
/// handle returned by `acquire`.
pub trait PreviewBackend<F> {
    /// The handle type, e.g. an object URL.
    type Handle;

    /// Create a handle for rendering `file`.
    fn acquire(&mut self, file: &F) -> Result<Self::Handle, PreviewError>;

    /// Release a handle previously returned by `acquire`.
    fn release(&mut self, handle: Self::Handle);
}

/// Encode bytes as a base64 data URL.
///
/// Produces the same output as the browser's `FileReader.readAsDataURL`.
pub fn encode_data_url(media_type: &str, bytes: &[u8]) -> String {
    let media_type = if media_type.is_empty() {
        FALLBACK_MEDIA_TYPE
    } else {
        media_type
    };
    format!("data:{};base64,{}", media_type, STANDARD.encode(bytes))
}
