//! Drop surface drag state.

/// Whether a drag gesture is currently over the drop surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress (default)
    #[default]
    Idle,
    /// A drag is hovering the surface
    DragOver,
}

impl DragState {
    pub fn is_dragging(self) -> bool {
        self == Self::DragOver
    }

    /// Drag entered or moved over the surface.
    pub fn enter(&mut self) {
        *self = Self::DragOver;
    }

    /// Drag left the surface or one of its children.
    ///
    /// Nested elements fire a leave on the parent before the child's
    /// dragover; the following dragover restores `DragOver`.
    pub fn leave(&mut self) {
        *self = Self::Idle;
    }

    /// Something was dropped. Always ends the drag, payload or not.
    pub fn drop_payload(&mut self) {
        *self = Self::Idle;
    }
}
