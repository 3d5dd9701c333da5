//! Empty-state content.

use leptos::prelude::*;

use super::UploadHandle;
use crate::utils::dom::classes;

stylance::import_crate_style!(css, "src/components/upload/upload.module.css");

/// Content shown only while no file is selected (prompt, icon, hint).
#[component]
pub fn FileUploadContent(
    upload: UploadHandle,
    children: ChildrenFn,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let class = classes(&[css::content, &class]);

    view! {
        <Show when=move || upload.file.with(Option::is_none)>
            <div class=class.clone()>{children()}</div>
        </Show>
    }
}
