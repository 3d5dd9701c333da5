//! Root upload component.

use leptos::prelude::*;
use upload_core::UploadEvent;
use web_sys::HtmlInputElement;

use super::{FileUploadLightbox, UploadHandle};
use crate::utils::BrowserFile;
use crate::utils::dom::classes;

stylance::import_crate_style!(css, "src/components/upload/upload.module.css");

/// Root of the widget.
///
/// Renders the hidden file input every other piece drives, the children,
/// and the lightbox (when enabled in the options).
#[component]
pub fn FileUpload(
    upload: UploadHandle,
    children: Children,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        let file = event_target::<HtmlInputElement>(&ev)
            .files()
            .and_then(|files| files.get(0))
            .map(BrowserFile::from);
        upload.handle(UploadEvent::PickerChange(file), &ev);
    };

    view! {
        <div class=classes(&[css::root, &class])>
            <input
                node_ref=upload.input_ref
                type="file"
                accept=move || upload.accept.get()
                class=css::hiddenInput
                tabindex="-1"
                aria-hidden="true"
                on:change=on_change
            />
            {children()}
            <FileUploadLightbox upload=upload />
        </div>
    }
}
