//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed on the demo page.
pub const APP_NAME: &str = "FileUpload";

/// One-line description displayed under the title.
pub const APP_DESCRIPTION: &str =
    "Composable file upload component with drag-and-drop, preview and lightbox";

// =============================================================================
// Demo Configuration
// =============================================================================

/// Picker filter used by the demo page.
pub const DEMO_ACCEPT: &str = "image/*,application/pdf";

// =============================================================================
// Upload Widget Labels
// =============================================================================

/// Default label of the standalone clear button.
pub const DEFAULT_CLEAR_LABEL: &str = "Remove";

/// Alt text for image previews.
pub const PREVIEW_ALT: &str = "Preview";

/// Shown while an image preview is being read.
pub const LOADING_LABEL: &str = "Loading preview...";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
