//! File abstractions shared by the controller and the platform layer.

use std::sync::Arc;

/// A file reference as seen by the upload widget.
///
/// The browser layer implements this for `web_sys::File`; tests and native
/// callers use [`MemoryFile`].
pub trait FileLike {
    /// File name without any path component.
    fn name(&self) -> String;

    /// Media type reported by the platform (may be empty).
    fn media_type(&self) -> String;

    /// Size in bytes.
    fn size(&self) -> u64;

    /// Snapshot of the displayable attributes.
    fn info(&self) -> FileInfo {
        FileInfo {
            name: self.name(),
            media_type: self.media_type(),
            size: self.size(),
        }
    }
}

/// Displayable attributes of a selected file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileInfo {
    /// File name
    pub name: String,
    /// Media type, e.g. "image/png"
    pub media_type: String,
    /// Size in bytes
    pub size: u64,
}

/// An in-memory file with its contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryFile {
    name: String,
    media_type: String,
    bytes: Arc<[u8]>,
}

impl MemoryFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes: Arc::from(bytes.into()),
        }
    }

    /// Raw file contents.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl FileLike for MemoryFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn media_type(&self) -> String {
        self.media_type.clone()
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}
