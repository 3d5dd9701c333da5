//! Full-screen preview overlay state.

use crate::preview::Preview;

/// Key that closes the overlay.
pub const ESCAPE_KEY: &str = "Escape";

/// Open/closed flag for the overlay viewer.
///
/// The overlay never mutates the selection. It only opens on explicit
/// activation and only when there is a displayable preview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    open: bool,
}

impl Lightbox {
    /// Try to open on `preview`. Returns whether the overlay is now open.
    pub fn open<H>(&mut self, preview: &Preview<H>) -> bool {
        if preview.is_displayable() {
            self.open = true;
        }
        self.open
    }

    /// Close the overlay. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Handle a key press while mounted. Returns whether it closed the overlay.
    pub fn handle_key(&mut self, key: &str) -> bool {
        key == ESCAPE_KEY && self.close()
    }

    /// Raw open flag.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the overlay renders: open and something to show.
    pub fn is_visible<H>(&self, preview: &Preview<H>) -> bool {
        self.open && preview.is_displayable()
    }
}
