//! Full-screen preview overlay.

use leptos::ev::{self, KeyboardEvent, MouseEvent};
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::{use_document, use_event_listener};
use upload_core::UploadEvent;

use super::UploadHandle;
use crate::components::icons as ic;
use crate::config::PREVIEW_ALT;
use crate::models::PreviewSource;

stylance::import_crate_style!(css, "src/components/upload/lightbox.module.css");

/// Overlay viewer for the current preview.
///
/// Mounted only while open, so the Escape listener lives exactly as long
/// as the overlay does.
#[component]
pub fn FileUploadLightbox(upload: UploadHandle) -> impl IntoView {
    view! {
        <Show when=move || upload.lightbox_open.get()>
            <LightboxOverlay upload=upload />
        </Show>
    }
}

#[component]
fn LightboxOverlay(upload: UploadHandle) -> impl IntoView {
    // Removed automatically when this component is cleaned up
    let _ = use_event_listener(use_document(), ev::keydown, move |ev: KeyboardEvent| {
        upload.handle(UploadEvent::KeyDown(ev.key()), &ev);
    });

    let title = move || upload.file.with(|f| f.as_ref().map(|f| f.name.clone()).unwrap_or_default());

    view! {
        <div
            class=css::backdrop
            role="dialog"
            aria-modal="true"
            aria-label="File preview"
            on:click=move |ev: MouseEvent| upload.handle(UploadEvent::BackdropClick, &ev)
        >
            <button
                type="button"
                class=css::closeButton
                title="Close (Esc)"
                aria-label="Close preview"
                on:click=move |ev: MouseEvent| upload.handle(UploadEvent::CloseClick, &ev)
            >
                <Icon icon=ic::CLOSE />
            </button>

            // Clicks on the content itself must not reach the backdrop
            <div class=css::stage on:click=|ev: MouseEvent| ev.stop_propagation()>
                {move || match upload.preview.get() {
                    Some(PreviewSource::Image(url)) => view! {
                        <img src=url alt=PREVIEW_ALT class=css::image />
                    }.into_any(),
                    Some(PreviewSource::Pdf(url)) => view! {
                        <iframe src=url title=title class=css::document />
                    }.into_any(),
                    None => ().into_any(),
                }}
            </div>
            <p class=css::caption>{title}</p>
        </div>
    }
}
