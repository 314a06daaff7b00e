//! Window handles attached to a document.

use sketchkit_core::handles::WindowId;

/// Handle for a window showing a document.
///
/// The document tracks membership and the active selection only; window
/// lifetime is owned by the window-management layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowHandle {
    id: WindowId,
    label: String,
}

impl WindowHandle {
    /// Creates a handle with a display label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: WindowId::new(),
            label: label.into(),
        }
    }

    /// The window's identity.
    pub fn id(&self) -> WindowId {
        self.id
    }

    /// The window's display label.
    pub fn label(&self) -> &str {
        &self.label
    }
}
