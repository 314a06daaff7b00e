//! Undo-tracking scene editor.

use parking_lot::RwLock;
use std::sync::Arc;

use sketchkit_core::error::ToolProtocolViolation;
use sketchkit_core::handles::ToolId;
use sketchkit_core::scene::{Scene, SceneChange, SceneFile};
use sketchkit_core::undo::{UndoHistory, UndoList};

/// Editor working on a document's scene.
///
/// Owns the undo history and the transient editing modes. Mode flags
/// are a single-writer resource: only the tool holding the session slot
/// may write them, for the span between its activation and its
/// deactivation.
pub struct SceneEditor {
    scene: Arc<RwLock<Scene>>,
    undo: UndoList,
    selection_detail: bool,
    current_tool: Option<ToolId>,
}

impl SceneEditor {
    /// Creates an editor bound to a scene.
    pub fn new(scene: Arc<RwLock<Scene>>) -> Self {
        Self {
            scene,
            undo: UndoList::new(),
            selection_detail: false,
            current_tool: None,
        }
    }

    /// The scene this editor works on.
    pub fn scene(&self) -> &Arc<RwLock<Scene>> {
        &self.scene
    }

    /// Whether fine-grained (sub-element) selection is enabled.
    pub fn selection_detail(&self) -> bool {
        self.selection_detail
    }

    /// The tool currently holding the editor, if any.
    pub fn current_tool(&self) -> Option<ToolId> {
        self.current_tool
    }

    /// Hands the session slot to `tool`. Rejected while another tool
    /// holds it: the protocol requires deactivation to run before a
    /// different tool activates on the same surface.
    pub fn begin_tool_session(&mut self, tool: ToolId) -> Result<(), ToolProtocolViolation> {
        if let Some(current) = self.current_tool {
            tracing::error!(%current, requested = %tool, "tool session slot already held");
            return Err(ToolProtocolViolation::SessionOccupied {
                current,
                requested: tool,
            });
        }
        tracing::debug!(%tool, "tool session started");
        self.current_tool = Some(tool);
        Ok(())
    }

    /// Releases the session slot. Any mode flag the tool failed to
    /// clear is reset here so a skipped teardown cannot strand it.
    pub fn end_tool_session(&mut self, tool: ToolId) -> Result<(), ToolProtocolViolation> {
        if self.current_tool != Some(tool) {
            tracing::error!(%tool, "session end from tool that does not hold the slot");
            return Err(ToolProtocolViolation::NotCurrentTool { tool });
        }
        if self.selection_detail {
            tracing::warn!(%tool, "selection detail left set at session end; clearing");
            self.selection_detail = false;
        }
        tracing::debug!(%tool, "tool session ended");
        self.current_tool = None;
        Ok(())
    }

    /// Sets the selection detail mode. Only the tool holding the
    /// session slot may write it.
    pub fn set_selection_detail(
        &mut self,
        tool: ToolId,
        enabled: bool,
    ) -> Result<(), ToolProtocolViolation> {
        if self.current_tool != Some(tool) {
            tracing::error!(%tool, "selection detail write without holding the session slot");
            return Err(ToolProtocolViolation::NotCurrentTool { tool });
        }
        self.selection_detail = enabled;
        Ok(())
    }

    /// Applies an edit to the scene and records it for undo.
    pub fn apply_edit(&mut self, change: SceneChange) {
        change.apply(&mut self.scene.write());
        self.undo.record(change);
    }

    /// Undoes the most recent edit. Returns whether anything changed.
    pub fn undo(&mut self) -> bool {
        match self.undo.undo() {
            Some(inverse) => {
                inverse.apply(&mut self.scene.write());
                true
            }
            None => false,
        }
    }

    /// Re-applies the most recently undone edit.
    pub fn redo(&mut self) -> bool {
        match self.undo.redo() {
            Some(change) => {
                change.apply(&mut self.scene.write());
                true
            }
            None => false,
        }
    }

    /// Whether unsaved modifications exist.
    pub fn has_pending_modification(&self) -> bool {
        self.undo.has_pending_modification()
    }

    /// Marks the current state as saved.
    pub fn mark_save_point(&mut self) {
        self.undo.mark_save_point();
    }

    /// Canonical serialization entry point for the scene.
    pub fn serialize_scene(&self) -> Result<Vec<u8>, serde_json::Error> {
        let scene = self.scene.read();
        SceneFile::from_scene(&scene).to_bytes()
    }
}
