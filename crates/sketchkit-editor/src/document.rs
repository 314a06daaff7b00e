//! An instance of an opened document.

use parking_lot::RwLock;
use std::sync::Arc;

use sketchkit_core::blob::Blob;
use sketchkit_core::error::{DocumentError, DocumentResult};
use sketchkit_core::event_bus::{DocumentEvent, EventBus};
use sketchkit_core::handles::WindowId;
use sketchkit_core::scene::Scene;

use crate::editor::SceneEditor;
use crate::window::WindowHandle;

/// An opened document: one scene, one editor bound to it, an optional
/// persistence blob, and the windows currently showing it.
///
/// The blob is compared by instance identity: assigning the blob the
/// document already holds is a no-op and publishes nothing. While no
/// blob is assigned the temporary title is the displayed title.
pub struct Document {
    scene: Arc<RwLock<Scene>>,
    editor: SceneEditor,
    blob: Option<Arc<dyn Blob>>,
    windows: Vec<WindowHandle>,
    active_window: Option<WindowId>,
    temporary_title: String,
    events: EventBus,
}

impl Document {
    /// Opens a document over a scene. The editor is created here and
    /// never replaced for the document's lifetime.
    pub fn new(
        scene: Scene,
        blob: Option<Arc<dyn Blob>>,
        temporary_title: impl Into<String>,
    ) -> Self {
        let scene = Arc::new(RwLock::new(scene));
        let editor = SceneEditor::new(scene.clone());
        Self {
            scene,
            editor,
            blob,
            windows: Vec::new(),
            active_window: None,
            temporary_title: temporary_title.into(),
            events: EventBus::new(),
        }
    }

    /// The scene this document is working on.
    pub fn scene(&self) -> &Arc<RwLock<Scene>> {
        &self.scene
    }

    /// The underlying editor.
    pub fn editor(&self) -> &SceneEditor {
        &self.editor
    }

    /// The underlying editor, mutably.
    pub fn editor_mut(&mut self) -> &mut SceneEditor {
        &mut self.editor
    }

    /// The document's event bus. The window-management layer subscribes
    /// here for title and saveability refreshes.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// The blob this document is working on, if any.
    pub fn blob(&self) -> Option<&Arc<dyn Blob>> {
        self.blob.as_ref()
    }

    /// Assigns the blob this document is working on. Assigning the
    /// instance already held changes nothing and publishes nothing.
    pub fn set_blob(&mut self, blob: Arc<dyn Blob>) {
        if let Some(current) = &self.blob {
            if Arc::ptr_eq(current, &blob) {
                return;
            }
        }
        self.blob = Some(blob);
        tracing::info!(title = %self.title(), "document blob assigned");
        self.events.publish(&DocumentEvent::TitleChanged {
            title: self.title(),
        });
        self.events.publish(&DocumentEvent::SaveabilityChanged {
            saveable: self.is_saveable(),
        });
    }

    /// The title to display: the blob's name when one is assigned,
    /// otherwise the temporary title.
    pub fn title(&self) -> String {
        match &self.blob {
            Some(blob) => blob.name().to_string(),
            None => self.temporary_title.clone(),
        }
    }

    /// Whether the document can be saved: it has a blob and the undo
    /// history holds unsaved modifications.
    pub fn is_saveable(&self) -> bool {
        self.blob.is_some() && self.editor.has_pending_modification()
    }

    /// Saves the document if it has an underlying blob.
    ///
    /// Without a blob this is a silent no-op; callers resolve a target
    /// through the save-as flow first. On a successful write the undo
    /// save point is reset so the document stops reporting unsaved
    /// work. A failed write leaves the save point untouched.
    pub fn save(&mut self) -> DocumentResult<()> {
        let Some(blob) = self.blob.clone() else {
            tracing::debug!("save requested without a target blob; ignoring");
            return Ok(());
        };

        let bytes = self.editor.serialize_scene()?;
        blob.store(&bytes)
            .map_err(|source| DocumentError::PersistenceWriteFailed {
                name: blob.name().to_string(),
                source,
            })?;

        self.editor.mark_save_point();
        tracing::info!(name = blob.name(), bytes = bytes.len(), "document saved");
        self.events.publish(&DocumentEvent::Saved {
            blob_name: blob.name().to_string(),
            bytes: bytes.len(),
        });
        self.events
            .publish(&DocumentEvent::SaveabilityChanged { saveable: false });
        Ok(())
    }

    /// Windows attached to this document.
    pub fn windows(&self) -> &[WindowHandle] {
        &self.windows
    }

    /// The currently active window of this document.
    pub fn active_window(&self) -> Option<WindowId> {
        self.active_window
    }

    /// Attaches a window. Called by the window-management layer.
    pub fn attach_window(&mut self, window: WindowHandle) {
        if self.windows.iter().any(|w| w.id() == window.id()) {
            return;
        }
        let id = window.id();
        self.windows.push(window);
        self.events
            .publish(&DocumentEvent::WindowAttached { window: id });
    }

    /// Detaches a window. Detaching the active window clears the active
    /// selection. Returns whether the window was attached.
    pub fn detach_window(&mut self, id: WindowId) -> bool {
        let Some(index) = self.windows.iter().position(|w| w.id() == id) else {
            return false;
        };
        self.windows.remove(index);
        if self.active_window == Some(id) {
            self.active_window = None;
            self.events
                .publish(&DocumentEvent::ActiveWindowChanged { window: None });
        }
        self.events
            .publish(&DocumentEvent::WindowDetached { window: id });
        true
    }

    /// Marks a window as active, or clears the selection with `None`.
    /// The window must be attached; returns whether the change applied.
    pub fn set_active_window(&mut self, id: Option<WindowId>) -> bool {
        if let Some(id) = id {
            if !self.windows.iter().any(|w| w.id() == id) {
                tracing::warn!(window = %id, "cannot activate a window that is not attached");
                return false;
            }
        }
        if self.active_window == id {
            return true;
        }
        self.active_window = id;
        self.events
            .publish(&DocumentEvent::ActiveWindowChanged { window: id });
        true
    }
}
