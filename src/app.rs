//! Root application module.
//!
//! Hosts the demo page for the upload widget inside an error boundary.

use leptos::prelude::*;
use leptos_icons::Icon;
use upload_core::UploadOptions;

use crate::components::icons as ic;
use crate::components::upload::{
    FileUpload, FileUploadClear, FileUploadContent, FileUploadDropzone, FileUploadPreview,
    OnChange, use_file_upload,
};
use crate::config::{APP_DESCRIPTION, APP_NAME, DEMO_ACCEPT};
use crate::utils::dom::window;

stylance::import_crate_style!(css, "src/app.module.css");

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::errorPage>
                    <h1 class=css::errorTitle>"Something went wrong"</h1>
                    <ul class=css::errorList>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        class=css::reloadButton
                        on:click=move |_| {
                            if let Some(window) = window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Demo />
        </ErrorBoundary>
    }
}

/// Demo page: one drop zone accepting images and PDFs.
#[component]
fn Demo() -> impl IntoView {
    let on_change: OnChange = Callback::new(|file: Option<web_sys::File>| {
        #[cfg(target_arch = "wasm32")]
        {
            let message = match &file {
                Some(f) => format!("Selected {} ({} bytes, {})", f.name(), f.size(), f.type_()),
                None => "Selection cleared".to_string(),
            };
            web_sys::console::log_1(&message.into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = file;
    });

    let upload = use_file_upload(UploadOptions::accept(DEMO_ACCEPT), Some(on_change));

    view! {
        <main class=css::page>
            <header class=css::header>
                <h1 class=css::title>{APP_NAME}</h1>
                <p class=css::description>{APP_DESCRIPTION}</p>
            </header>

            <FileUpload upload=upload class=css::widget>
                <FileUploadDropzone upload=upload>
                    <FileUploadPreview upload=upload />
                    <FileUploadContent upload=upload>
                        <span class=css::uploadIcon><Icon icon=ic::UPLOAD /></span>
                        <p class=css::hint>
                            "Drop file here or " <span class=css::browse>"browse"</span>
                        </p>
                        <p class=css::accepts>"Images and PDF documents"</p>
                    </FileUploadContent>
                </FileUploadDropzone>
                <FileUploadClear upload=upload class=css::remove />
            </FileUpload>
        </main>
    }
}
