//! Renderable preview sources.

use upload_core::Preview;

/// A preview ready to be put in the DOM.
///
/// Both variants carry a URL usable as `src`; the object URL of a PDF is
/// shared between the thumbnail and the lightbox, never duplicated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewSource {
    /// Inline data URL of an image
    Image(String),
    /// Object URL of a PDF document
    Pdf(String),
}

impl PreviewSource {
    /// Derive from the preview slot. Pending and empty slots render nothing.
    pub fn from_preview(preview: &Preview<String>) -> Option<Self> {
        match preview {
            Preview::Inline(url) => Some(Self::Image(url.clone())),
            Preview::Transient(url) => Some(Self::Pdf(url.clone())),
            Preview::Pending | Preview::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_preview() {
        assert_eq!(
            PreviewSource::from_preview(&Preview::Inline("data:image/png;base64,".into())),
            Some(PreviewSource::Image("data:image/png;base64,".into()))
        );
        assert_eq!(
            PreviewSource::from_preview(&Preview::Transient("blob:x".into())),
            Some(PreviewSource::Pdf("blob:x".into()))
        );
        assert_eq!(PreviewSource::from_preview(&Preview::Pending), None);
        assert_eq!(PreviewSource::from_preview(&Preview::None), None);
    }
}
