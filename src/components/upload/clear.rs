//! Standalone clear button.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use upload_core::UploadEvent;

use super::UploadHandle;
use crate::config::DEFAULT_CLEAR_LABEL;
use crate::utils::dom::classes;

stylance::import_crate_style!(css, "src/components/upload/upload.module.css");

/// Clear button, rendered only while a file is selected.
///
/// Children replace the default label.
#[component]
pub fn FileUploadClear(
    upload: UploadHandle,
    #[prop(optional)] children: Option<ChildrenFn>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let class = classes(&[css::clear, &class]);

    view! {
        <Show when=move || upload.file.with(Option::is_some)>
            <button
                type="button"
                class=class.clone()
                on:click=move |ev: MouseEvent| upload.handle(UploadEvent::ClearPressed, &ev)
            >
                {match children.as_ref() {
                    Some(label) => label(),
                    None => view! { {DEFAULT_CLEAR_LABEL} }.into_any(),
                }}
            </button>
        </Show>
    }
}
