//! Browser file access for previews.
//!
//! Bridges `web_sys::File` into the upload state machine: the [`FileLike`]
//! wrapper, the async inline read, and object URLs as transient handles.

use js_sys::Uint8Array;
use upload_core::{FileLike, PreviewBackend, PreviewError, encode_data_url};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, Url};

use super::dom::js_error_message;

/// A file picked or dropped in the browser.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserFile(File);

impl BrowserFile {
    /// The underlying DOM file, as handed to the host.
    pub fn into_inner(self) -> File {
        self.0
    }
}

impl From<File> for BrowserFile {
    fn from(file: File) -> Self {
        Self(file)
    }
}

impl FileLike for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn media_type(&self) -> String {
        self.0.type_()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }
}

/// Read a file and encode it as a data URL.
pub async fn read_data_url(file: &BrowserFile) -> Result<String, PreviewError> {
    let buffer = JsFuture::from(file.0.array_buffer())
        .await
        .map_err(|e| PreviewError::read(js_error_message(&e)))?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    Ok(encode_data_url(&file.0.type_(), &bytes))
}

/// Object URLs as transient preview handles.
///
/// Counts outstanding URLs and logs the count to the console on every
/// release, so a leak shows up as a number that never returns to zero.
#[derive(Debug, Default)]
pub struct ObjectUrls {
    live: usize,
}

impl ObjectUrls {
    /// Number of URLs created and not yet revoked.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn live(&self) -> usize {
        self.live
    }
}

impl PreviewBackend<BrowserFile> for ObjectUrls {
    type Handle = String;

    fn acquire(&mut self, file: &BrowserFile) -> Result<String, PreviewError> {
        let url = Url::create_object_url_with_blob(&file.0).map_err(|e| {
            let error = PreviewError::handle(js_error_message(&e));
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(&format!("{}: {}", file.0.name(), error).into());
            error
        })?;
        self.live += 1;
        Ok(url)
    }

    fn release(&mut self, url: String) {
        if let Err(_e) = Url::revoke_object_url(&url) {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(
                &format!("Failed to revoke {}: {}", url, js_error_message(&_e)).into(),
            );
        }
        self.live = self.live.saturating_sub(1);

        #[cfg(target_arch = "wasm32")]
        web_sys::console::debug_1(&format!("Object URLs outstanding: {}", self.live()).into());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use js_sys::Array;
    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::FilePropertyBag;

    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    fn file(name: &str, media_type: &str, bytes: &[u8]) -> BrowserFile {
        let parts = Array::new();
        parts.push(&Uint8Array::from(bytes));
        let options = FilePropertyBag::new();
        options.set_type(media_type);
        File::new_with_u8_array_sequence_and_options(&parts, name, &options)
            .expect("File constructor")
            .into()
    }

    #[wasm_bindgen_test]
    async fn test_read_matches_encoding() {
        let png = file("a.png", "image/png", b"\x89PNG");
        assert_eq!(png.name(), "a.png");
        assert_eq!(png.size(), 4);

        let url = read_data_url(&png).await.unwrap();
        assert_eq!(url, encode_data_url("image/png", b"\x89PNG"));
    }

    #[wasm_bindgen_test]
    fn test_object_urls_balance() {
        let pdf = file("doc.pdf", "application/pdf", b"%PDF");
        let mut urls = ObjectUrls::default();

        let url = urls.acquire(&pdf).unwrap();
        assert!(url.starts_with("blob:"));
        assert_eq!(urls.live(), 1);

        urls.release(url);
        assert_eq!(urls.live(), 0);
    }
}
