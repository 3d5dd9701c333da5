//! Selected file preview.

use icondata::Icon as IconData;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;
use upload_core::{FileInfo, PreviewKind, UploadEvent};

use super::UploadHandle;
use crate::components::icons as ic;
use crate::config::{LOADING_LABEL, PREVIEW_ALT};
use crate::models::PreviewSource;
use crate::utils::dom::classes;
use crate::utils::format::format_size;

stylance::import_crate_style!(css, "src/components/upload/upload.module.css");

/// Fallback icon for a media type.
fn file_icon(media_type: &str) -> IconData {
    match PreviewKind::classify(media_type) {
        PreviewKind::Inline => ic::FILE_IMAGE,
        PreviewKind::Transient => ic::FILE_PDF,
        PreviewKind::None => ic::FILE,
    }
}

/// Preview of the selected file, with an inline clear button.
///
/// Images and PDFs render as clickable thumbnails that open the lightbox;
/// anything else (or a failed read) shows the file name and size.
#[component]
pub fn FileUploadPreview(
    upload: UploadHandle,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let class = classes(&[css::preview, &class]);

    view! {
        <Show when=move || upload.file.with(Option::is_some)>
            <div class=class.clone()>
                {move || {
                    let Some(info) = upload.file.get() else {
                        return ().into_any();
                    };
                    if upload.is_loading.get() {
                        return view! { <span class=css::loading>{LOADING_LABEL}</span> }.into_any();
                    }
                    match upload.preview.get() {
                        Some(PreviewSource::Image(url)) => view! {
                            <img
                                src=url
                                alt=PREVIEW_ALT
                                class=css::thumbnail
                                on:click=move |ev: MouseEvent| {
                                    upload.handle(UploadEvent::PreviewClick, &ev)
                                }
                            />
                        }.into_any(),
                        Some(PreviewSource::Pdf(url)) => view! {
                            <PdfThumbnail url=url title=info.name upload=upload />
                        }.into_any(),
                        None => view! { <FileFallback info=info /> }.into_any(),
                    }
                }}
                <button
                    type="button"
                    class=css::clearButton
                    title="Remove file"
                    aria-label="Remove file"
                    on:click=move |ev: MouseEvent| upload.handle(UploadEvent::ClearPressed, &ev)
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </div>
        </Show>
    }
}

/// Embedded first page of a PDF.
///
/// The frame swallows pointer events, so a transparent shield on top
/// receives the click that opens the lightbox.
#[component]
fn PdfThumbnail(url: String, title: String, upload: UploadHandle) -> impl IntoView {
    view! {
        <div class=css::pdfThumb>
            <iframe src=url title=title class=css::pdfFrame tabindex="-1" />
            <div
                class=css::pdfShield
                on:click=move |ev: MouseEvent| upload.handle(UploadEvent::PreviewClick, &ev)
            />
        </div>
    }
}

/// File name and size when there is nothing to preview.
#[component]
fn FileFallback(info: FileInfo) -> impl IntoView {
    view! {
        <div class=css::fallback>
            <span class=css::fileIcon><Icon icon=file_icon(&info.media_type) /></span>
            <span class=css::fileName>{info.name}</span>
            <span class=css::fileSize>{format_size(info.size)}</span>
        </div>
    }
}

