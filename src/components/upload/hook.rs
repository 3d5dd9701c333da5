//! Upload state hook.
//!
//! Owns the upload state machine for one widget and exposes it to the
//! sub-components as an [`UploadHandle`]: derived read-only signals plus
//! action methods. The host creates the handle and passes it down
//! explicitly; there is no context lookup.
//!
//! The state signal only notifies when an update changes what a view can
//! observe (see [`Snapshot`]), and every exposed value is a [`Memo`], so a
//! stream of `dragover` or key events never re-renders the preview.

use leptos::html;
use leptos::prelude::*;
use upload_core::{
    Effects, FileInfo, ReadOutcome, ReadTicket, Snapshot, UploadEvent, UploadOptions,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, File};

use crate::models::PreviewSource;
use crate::utils::{BrowserFile, ObjectUrls, read_data_url};

/// The state machine specialised for the browser.
pub type UploadState = upload_core::FileUpload<BrowserFile, ObjectUrls>;

/// Host callback receiving the new selection (or `None` on clear).
pub type OnChange = Callback<Option<File>>;

/// Everything the upload sub-components need.
///
/// This struct is `Copy`: all fields are signals, node refs or callbacks.
/// The exposed signals are memoised and only fire on real changes.
#[derive(Clone, Copy)]
pub struct UploadHandle {
    state: RwSignal<UploadState, LocalStorage>,
    on_change: Option<OnChange>,
    /// The hidden `<input type="file">`
    pub input_ref: NodeRef<html::Input>,
    /// Media-type filter for the file picker
    pub accept: Signal<String>,
    /// Selected file attributes
    pub file: Signal<Option<FileInfo>>,
    /// Preview to render, once available
    pub preview: Signal<Option<PreviewSource>>,
    /// Whether an inline read is in flight
    pub is_loading: Signal<bool>,
    /// Whether a drag is over the drop surface
    pub is_dragging: Signal<bool>,
    /// Whether the overlay viewer is shown
    pub lightbox_open: Signal<bool>,
}

impl UploadHandle {
    /// Feed a DOM event through the state machine and carry out the effects.
    pub fn handle(&self, event: UploadEvent<BrowserFile>, dom_event: &Event) {
        if let Some(effects) = self.update(|s| s.dispatch(event)) {
            self.apply(effects, Some(dom_event));
        }
    }

    /// Replace the selection programmatically.
    #[allow(dead_code)]
    pub fn select(&self, file: Option<File>) {
        let file = file.map(BrowserFile::from);
        if let Some(effects) = self.update(|s| s.select(file)) {
            self.apply(effects, None);
        }
    }

    /// Clear the selection and reset the picker.
    #[allow(dead_code)]
    pub fn clear(&self) {
        if let Some(effects) = self.update(|s| s.clear()) {
            self.apply(effects, None);
        }
    }

    #[allow(dead_code)]
    pub fn open_lightbox(&self) -> bool {
        self.update(|s| s.open_lightbox()).unwrap_or(false)
    }

    #[allow(dead_code)]
    pub fn close_lightbox(&self) {
        self.update(|s| s.close_lightbox());
    }

    /// Activate the hidden file picker.
    pub fn open_picker(&self) {
        if let Some(input) = self.input_ref.get_untracked() {
            input.click();
        }
    }

    /// Mutate the state, notifying subscribers only if the snapshot moved.
    ///
    /// Returns `None` once the widget has been disposed.
    fn update<R>(&self, f: impl FnOnce(&mut UploadState) -> R) -> Option<R> {
        self.state.try_maybe_update(|s| {
            let before: Snapshot = s.snapshot();
            let result = f(s);
            (s.snapshot() != before, result)
        })
    }

    fn apply(&self, effects: Effects<BrowserFile>, dom_event: Option<&Event>) {
        if let Some(ev) = dom_event {
            if effects.prevent_default {
                ev.prevent_default();
            }
            if effects.stop_propagation {
                ev.stop_propagation();
            }
        }

        if effects.reset_picker
            && let Some(input) = self.input_ref.get_untracked()
        {
            input.set_value("");
        }

        if let Some(ticket) = effects.read {
            self.start_read(ticket);
        }

        // State is committed before the host hears about it
        if let (Some(change), Some(on_change)) = (effects.change, self.on_change) {
            on_change.run(change.0.map(BrowserFile::into_inner));
        }

        if effects.open_picker {
            self.open_picker();
        }
    }

    fn start_read(&self, ticket: ReadTicket<BrowserFile>) {
        let this = *self;
        spawn_local(async move {
            let result = read_data_url(&ticket.file).await;
            if let Err(_e) = &result {
                #[cfg(target_arch = "wasm32")]
                web_sys::console::warn_1(
                    &format!("Preview read failed for selection {}: {}", ticket.id, _e).into(),
                );
            }

            // The widget may have been unmounted while reading
            let outcome = this.update(|s| s.complete_read(ticket.id, result));
            if outcome == Some(ReadOutcome::Stale) {
                #[cfg(target_arch = "wasm32")]
                web_sys::console::log_1(
                    &format!("Discarded stale preview for selection {}", ticket.id).into(),
                );
            }
        });
    }
}

/// Create the upload state for one widget.
///
/// Call this once in the host component and pass the handle to
/// [`FileUpload`](super::FileUpload) and its children. Any outstanding
/// object URL is revoked when the owning component unmounts.
pub fn use_file_upload(options: UploadOptions, on_change: Option<OnChange>) -> UploadHandle {
    let state = RwSignal::new_local(UploadState::new(options, ObjectUrls::default()));

    // Untracked: nothing re-renders during teardown
    on_cleanup(move || {
        state.try_update_untracked(|s| s.dispose());
    });

    let accept = Memo::new(move |_| state.with(|s| s.options().accept.clone()));
    let file = Memo::new(move |_| state.with(|s| s.file_info()));
    let preview = Memo::new(move |_| state.with(|s| PreviewSource::from_preview(s.preview())));
    let is_loading = Memo::new(move |_| state.with(|s| s.preview().is_pending()));
    let is_dragging = Memo::new(move |_| state.with(|s| s.is_dragging()));
    let lightbox_open = Memo::new(move |_| state.with(|s| s.is_lightbox_open()));

    UploadHandle {
        state,
        on_change,
        input_ref: NodeRef::new(),
        accept: accept.into(),
        file: file.into(),
        preview: preview.into(),
        is_loading: is_loading.into(),
        is_dragging: is_dragging.into(),
        lightbox_open: lightbox_open.into(),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use js_sys::{Array, Uint8Array};
    use leptos::reactive::effect::ImmediateEffect;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::{EventInit, FilePropertyBag};

    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    fn text_file(name: &str) -> File {
        let parts = Array::new();
        parts.push(&Uint8Array::from(&b"hello"[..]));
        let options = FilePropertyBag::new();
        options.set_type("text/plain");
        File::new_with_u8_array_sequence_and_options(&parts, name, &options)
            .expect("File constructor")
    }

    fn cancelable(kind: &str) -> Event {
        let init = EventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        Event::new_with_event_init_dict(kind, &init).expect("Event constructor")
    }

    #[wasm_bindgen_test]
    fn test_dragover_stream_does_not_wake_views() {
        let owner = Owner::new();
        owner.set();
        let upload = use_file_upload(UploadOptions::default(), None);

        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let _effect = ImmediateEffect::new(move || {
            upload.preview.track();
            upload.file.track();
            counter.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(runs.load(Ordering::Relaxed), 1);

        for _ in 0..10 {
            upload.handle(UploadEvent::DragOver, &cancelable("dragover"));
        }
        assert!(upload.is_dragging.get_untracked());
        assert_eq!(runs.load(Ordering::Relaxed), 1);

        upload.select(Some(text_file("notes.txt")));
        assert_eq!(runs.load(Ordering::Relaxed), 2);
    }

    #[wasm_bindgen_test]
    fn test_drag_events_prevent_default() {
        let owner = Owner::new();
        owner.set();
        let upload = use_file_upload(UploadOptions::default(), None);

        let over = cancelable("dragover");
        upload.handle(UploadEvent::DragOver, &over);
        assert!(over.default_prevented());

        let drop = cancelable("drop");
        upload.handle(UploadEvent::Drop(None), &drop);
        assert!(drop.default_prevented());
        assert!(!upload.is_dragging.get_untracked());
    }

    #[wasm_bindgen_test]
    fn test_clear_stops_propagation_after_commit() {
        let owner = Owner::new();
        owner.set();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        let on_change: OnChange = Callback::new(move |file: Option<File>| {
            log.lock().unwrap().push(file.map(|f| f.name()));
        });
        let upload = use_file_upload(UploadOptions::default(), Some(on_change));

        upload.select(Some(text_file("notes.txt")));
        assert_eq!(
            upload.file.get_untracked().map(|f| f.name),
            Some("notes.txt".to_string())
        );

        let click = cancelable("click");
        upload.handle(UploadEvent::ClearPressed, &click);
        assert!(click.cancel_bubble());
        assert!(!click.default_prevented());
        assert!(upload.file.get_untracked().is_none());
        assert_eq!(
            *seen.lock().unwrap(),
            vec![Some("notes.txt".to_string()), None]
        );
    }
}
