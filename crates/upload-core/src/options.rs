//! Host-facing widget options.

use serde::Deserialize;

/// Accept-everything filter.
pub const ACCEPT_ANY: &str = "*";

/// Configuration supplied by the host.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UploadOptions {
    /// Media-type filter passed through to the file picker. Never enforced.
    #[serde(default = "default_accept")]
    pub accept: String,

    /// Whether clicking a preview opens the overlay viewer.
    #[serde(default = "default_true")]
    pub lightbox: bool,

    /// Whether Escape closes the overlay viewer.
    #[serde(default = "default_true")]
    pub close_on_escape: bool,
}

fn default_accept() -> String {
    ACCEPT_ANY.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            accept: default_accept(),
            lightbox: true,
            close_on_escape: true,
        }
    }
}

impl UploadOptions {
    /// Options with the given picker filter.
    pub fn accept(accept: impl Into<String>) -> Self {
        Self {
            accept: accept.into(),
            ..Default::default()
        }
    }

    pub fn with_lightbox(mut self, enabled: bool) -> Self {
        self.lightbox = enabled;
        self
    }

    pub fn with_close_on_escape(mut self, enabled: bool) -> Self {
        self.close_on_escape = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = UploadOptions::default();
        assert_eq!(options.accept, "*");
        assert!(options.lightbox);
        assert!(options.close_on_escape);
    }

    #[test]
    fn test_deserialize_partial() {
        let options: UploadOptions =
            serde_json::from_str(r#"{ "accept": "image/*", "close_on_escape": false }"#).unwrap();
        assert_eq!(options.accept, "image/*");
        assert!(options.lightbox);
        assert!(!options.close_on_escape);
    }

    #[test]
    fn test_deserialize_empty() {
        let options: UploadOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, UploadOptions::default());
    }

    #[test]
    fn test_builder_methods() {
        let options = UploadOptions::accept("application/pdf").with_lightbox(false);
        assert_eq!(options.accept, "application/pdf");
        assert!(!options.lightbox);
        assert!(options.close_on_escape);
    }
}
