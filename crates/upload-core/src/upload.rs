//! The upload widget as one event-driven state machine.
//!
//! [`FileUpload`] combines the selection controller, the drop surface drag
//! state and the lightbox. The platform layer feeds it [`UploadEvent`]s and
//! carries out the returned [`Effects`] (suppress the default action, open
//! the picker, notify the host, start a read, ...).

use crate::error::PreviewError;
use crate::file::{FileInfo, FileLike};
use crate::lightbox::Lightbox;
use crate::options::UploadOptions;
use crate::preview::{Preview, PreviewBackend};
use crate::selection::{ReadOutcome, ReadTicket, SelectionController, SelectionId};
use crate::surface::DragState;

/// Input events the widget reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadEvent<F> {
    /// Drag entered the drop surface
    DragEnter,
    /// Drag moved over the drop surface
    DragOver,
    /// Drag left the drop surface (or crossed a nested element boundary)
    DragLeave,
    /// Payload dropped; first file if any
    Drop(Option<F>),
    /// Click that reached the drop surface itself
    SurfaceClick,
    /// Hidden file input changed; first file if any
    PickerChange(Option<F>),
    /// Clear control activated
    ClearPressed,
    /// Preview thumbnail clicked
    PreviewClick,
    /// Overlay backdrop clicked
    BackdropClick,
    /// Overlay close control clicked
    CloseClick,
    /// Key pressed while the overlay is mounted
    KeyDown(String),
}

/// Host notification: the selection is now this file (or none).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Change<F>(pub Option<F>);

/// Side effects the platform layer must perform after an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Effects<F> {
    /// Suppress the platform default (e.g. navigating to a dropped file)
    pub prevent_default: bool,
    /// Keep the event from reaching enclosing handlers
    pub stop_propagation: bool,
    /// Activate the hidden file picker
    pub open_picker: bool,
    /// Reset the file picker's remembered value
    pub reset_picker: bool,
    /// Notify the host's change callback
    pub change: Option<Change<F>>,
    /// Start an inline read
    pub read: Option<ReadTicket<F>>,
}

impl<F> Default for Effects<F> {
    fn default() -> Self {
        Self {
            prevent_default: false,
            stop_propagation: false,
            open_picker: false,
            reset_picker: false,
            change: None,
            read: None,
        }
    }
}

impl<F> Effects<F> {
    /// True when nothing needs doing.
    pub fn is_empty(&self) -> bool {
        !self.prevent_default
            && !self.stop_propagation
            && !self.open_picker
            && !self.reset_picker
            && self.change.is_none()
            && self.read.is_none()
    }

    fn prevent_default(mut self) -> Self {
        self.prevent_default = true;
        self
    }

    fn stop_propagation(mut self) -> Self {
        self.stop_propagation = true;
        self
    }
}

/// Everything a view can observe about the widget.
///
/// Equal snapshots render identically. Within one selection the preview
/// only moves from pending to ready or to none, so its phase is enough.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub selection: Option<SelectionId>,
    pub pending: bool,
    pub displayable: bool,
    pub dragging: bool,
    pub lightbox_open: bool,
}

/// Single-file upload widget state.
pub struct FileUpload<F, B: PreviewBackend<F>> {
    options: UploadOptions,
    selection: SelectionController<F, B>,
    drag: DragState,
    lightbox: Lightbox,
}

impl<F: FileLike + Clone, B: PreviewBackend<F>> FileUpload<F, B> {
    pub fn new(options: UploadOptions, backend: B) -> Self {
        Self {
            options,
            selection: SelectionController::new(backend),
            drag: DragState::default(),
            lightbox: Lightbox::default(),
        }
    }

    pub fn options(&self) -> &UploadOptions {
        &self.options
    }

    /// The selected file, if any.
    pub fn file(&self) -> Option<&F> {
        self.selection.file()
    }

    /// Displayable attributes of the selected file.
    pub fn file_info(&self) -> Option<FileInfo> {
        self.selection.file().map(FileLike::info)
    }

    pub fn selection_id(&self) -> Option<SelectionId> {
        self.selection.selection_id()
    }

    pub fn preview(&self) -> &Preview<B::Handle> {
        self.selection.preview()
    }

    pub fn backend(&self) -> &B {
        self.selection.backend()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Whether the overlay is rendered.
    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox.is_visible(self.selection.preview())
    }

    pub fn snapshot(&self) -> Snapshot {
        let preview = self.selection.preview();
        Snapshot {
            selection: self.selection.selection_id(),
            pending: preview.is_pending(),
            displayable: preview.is_displayable(),
            dragging: self.drag.is_dragging(),
            lightbox_open: self.is_lightbox_open(),
        }
    }

    /// Replace the selection and notify the host.
    ///
    /// The overlay closes so a new preview never appears full-screen
    /// without an explicit click.
    pub fn select(&mut self, file: Option<F>) -> Effects<F> {
        self.lightbox.close();
        let read = self.selection.select(file.clone());
        Effects {
            change: Some(Change(file)),
            read,
            ..Effects::default()
        }
    }

    /// Drop the selection and ask for the picker value to be reset, so
    /// picking the same file again still registers as a change.
    pub fn clear(&mut self) -> Effects<F> {
        let mut effects = self.select(None);
        effects.reset_picker = true;
        effects
    }

    /// Open the overlay on the current preview, if the host enabled it.
    pub fn open_lightbox(&mut self) -> bool {
        self.options.lightbox && self.lightbox.open(self.selection.preview())
    }

    pub fn close_lightbox(&mut self) -> bool {
        self.lightbox.close()
    }

    /// Apply an inline read result. See [`SelectionController::complete_read`].
    pub fn complete_read(
        &mut self,
        id: SelectionId,
        result: Result<String, PreviewError>,
    ) -> ReadOutcome {
        self.selection.complete_read(id, result)
    }

    /// Release everything held. Called on unmount.
    pub fn dispose(&mut self) {
        self.lightbox.close();
        self.drag = DragState::Idle;
        self.selection.dispose();
    }

    /// Run one event through the state machine.
    pub fn dispatch(&mut self, event: UploadEvent<F>) -> Effects<F> {
        match event {
            UploadEvent::DragEnter | UploadEvent::DragOver => {
                self.drag.enter();
                Effects::default().prevent_default()
            }
            UploadEvent::DragLeave => {
                self.drag.leave();
                Effects::default()
            }
            UploadEvent::Drop(file) => {
                self.drag.drop_payload();
                match file {
                    Some(file) => self.select(Some(file)).prevent_default(),
                    None => Effects::default().prevent_default(),
                }
            }
            UploadEvent::SurfaceClick => Effects {
                open_picker: true,
                ..Effects::default()
            },
            UploadEvent::PickerChange(file) => match file {
                Some(file) => self.select(Some(file)),
                None => Effects::default(),
            },
            UploadEvent::ClearPressed => self.clear().stop_propagation(),
            UploadEvent::PreviewClick => {
                if self.open_lightbox() {
                    Effects::default().stop_propagation()
                } else {
                    // Falls through to the surface, which opens the picker
                    Effects::default()
                }
            }
            UploadEvent::BackdropClick | UploadEvent::CloseClick => {
                self.lightbox.close();
                Effects::default().stop_propagation()
            }
            UploadEvent::KeyDown(key) => {
                if self.options.close_on_escape && self.lightbox.handle_key(&key) {
                    Effects::default().prevent_default()
                } else {
                    Effects::default()
                }
            }
        }
    }
}
