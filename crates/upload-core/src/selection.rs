//! Selection controller and preview lifecycle.
//!
//! The controller owns the selected file and its preview slot. Every new
//! selection gets a fresh [`SelectionId`]; asynchronous inline reads are
//! issued as [`ReadTicket`]s carrying that id, and their results are applied
//! only while the id is still current.

use std::fmt;
use std::mem;

use tracing::{debug, warn};

use crate::error::PreviewError;
use crate::file::FileLike;
use crate::preview::{Preview, PreviewBackend, PreviewKind};

/// Identity of one selection. Strictly increasing per controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectionId(u64);

impl fmt::Display for SelectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An inline read the platform layer must perform.
///
/// Hand the result back through [`SelectionController::complete_read`]
/// together with `id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadTicket<F> {
    pub id: SelectionId,
    pub file: F,
}

/// What happened to a completed inline read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The data URL became the preview.
    Applied,
    /// The read failed; the preview fell back to none.
    Failed,
    /// The selection changed since the read was issued; result dropped.
    Stale,
}

struct Current<F> {
    id: SelectionId,
    file: F,
}

/// Owns the current selection and its preview.
pub struct SelectionController<F, B: PreviewBackend<F>> {
    backend: B,
    current: Option<Current<F>>,
    preview: Preview<B::Handle>,
    next_id: u64,
}

impl<F, B: PreviewBackend<F>> SelectionController<F, B> {
    /// Release the transient handle, if one is held, leaving the slot empty.
    fn release_preview(&mut self) {
        if let Preview::Transient(handle) = mem::take(&mut self.preview) {
            self.backend.release(handle);
        }
    }
}

impl<F: FileLike + Clone, B: PreviewBackend<F>> SelectionController<F, B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            current: None,
            preview: Preview::None,
            next_id: 0,
        }
    }

    /// The selected file, if any.
    pub fn file(&self) -> Option<&F> {
        self.current.as_ref().map(|c| &c.file)
    }

    /// Identity of the current selection.
    pub fn selection_id(&self) -> Option<SelectionId> {
        self.current.as_ref().map(|c| c.id)
    }

    pub fn preview(&self) -> &Preview<B::Handle> {
        &self.preview
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Replace the selection.
    ///
    /// Any held transient handle is released before anything else happens.
    /// Returns a ticket when the new file needs an asynchronous inline read.
    pub fn select(&mut self, file: Option<F>) -> Option<ReadTicket<F>> {
        self.release_preview();

        let Some(file) = file else {
            if let Some(previous) = self.current.take() {
                debug!(id = %previous.id, "selection cleared");
            }
            return None;
        };

        let id = SelectionId(self.next_id);
        self.next_id += 1;

        let media_type = file.media_type();
        debug!(%id, name = %file.name(), %media_type, "file selected");

        let ticket = match PreviewKind::classify(&media_type) {
            PreviewKind::Inline => {
                self.preview = Preview::Pending;
                Some(ReadTicket {
                    id,
                    file: file.clone(),
                })
            }
            PreviewKind::Transient => {
                match self.backend.acquire(&file) {
                    Ok(handle) => self.preview = Preview::Transient(handle),
                    Err(e) => warn!(%id, error = %e, "preview handle unavailable"),
                }
                None
            }
            PreviewKind::None => None,
        };

        self.current = Some(Current { id, file });
        ticket
    }

    /// Drop the selection. Same as `select(None)`.
    pub fn clear(&mut self) {
        self.select(None);
    }

    /// Apply the result of an inline read issued for `id`.
    pub fn complete_read(
        &mut self,
        id: SelectionId,
        result: Result<String, PreviewError>,
    ) -> ReadOutcome {
        if self.selection_id() != Some(id) || !self.preview.is_pending() {
            debug!(%id, "discarding stale preview read");
            return ReadOutcome::Stale;
        }

        match result {
            Ok(data_url) => {
                self.preview = Preview::Inline(data_url);
                ReadOutcome::Applied
            }
            Err(e) => {
                warn!(%id, error = %e, "preview read failed");
                self.preview = Preview::None;
                ReadOutcome::Failed
            }
        }
    }

    /// Tear down: release any handle and forget the selection.
    ///
    /// Safe to call more than once.
    pub fn dispose(&mut self) {
        self.release_preview();
        self.current = None;
    }
}

impl<F, B: PreviewBackend<F>> Drop for SelectionController<F, B> {
    fn drop(&mut self) {
        self.release_preview();
    }
}
