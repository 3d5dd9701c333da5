//! Drop surface component.

use leptos::ev::{DragEvent, KeyboardEvent, MouseEvent};
use leptos::prelude::*;
use upload_core::UploadEvent;

use super::UploadHandle;
use crate::utils::BrowserFile;
use crate::utils::dom::classes;

stylance::import_crate_style!(css, "src/components/upload/upload.module.css");

/// First file in a drag payload, if any.
fn dropped_file(ev: &DragEvent) -> Option<BrowserFile> {
    ev.data_transfer()
        .and_then(|transfer| transfer.files())
        .and_then(|files| files.get(0))
        .map(BrowserFile::from)
}

/// Drag-and-drop / click-to-browse surface.
///
/// Inner controls (clear button, clickable preview) stop their clicks from
/// reaching this surface, so only clicks on the surface itself open the
/// file picker.
#[component]
pub fn FileUploadDropzone(
    upload: UploadHandle,
    children: Children,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let surface_class = move || {
        let dragging = if upload.is_dragging.get() {
            css::dragging
        } else {
            ""
        };
        classes(&[css::dropzone, dragging, &class])
    };

    // Keyboard activation mirrors a click on the surface itself
    let on_keydown = move |ev: KeyboardEvent| {
        if ev.target() != ev.current_target() {
            return;
        }
        if matches!(ev.key().as_str(), "Enter" | " ") {
            ev.prevent_default();
            upload.handle(UploadEvent::SurfaceClick, &ev);
        }
    };

    view! {
        <div
            class=surface_class
            role="button"
            tabindex="0"
            aria-label="Choose a file or drop it here"
            on:click=move |ev: MouseEvent| upload.handle(UploadEvent::SurfaceClick, &ev)
            on:keydown=on_keydown
            on:dragenter=move |ev: DragEvent| upload.handle(UploadEvent::DragEnter, &ev)
            on:dragover=move |ev: DragEvent| upload.handle(UploadEvent::DragOver, &ev)
            on:dragleave=move |ev: DragEvent| upload.handle(UploadEvent::DragLeave, &ev)
            on:drop=move |ev: DragEvent| {
                let file = dropped_file(&ev);
                upload.handle(UploadEvent::Drop(file), &ev);
            }
        >
            {children()}
        </div>
    }
}
