//! The selection tool.

use sketchkit_core::cursor::Cursor;
use sketchkit_core::error::ToolProtocolViolation;
use sketchkit_core::handles::{LayerId, ToolId, ViewId};
use sketchkit_editor::SceneEditor;

use crate::tool::{PointerContext, Tool, ToolHint};

const ACTIVATION_CHARACTERS: [char; 2] = ['V', '0'];

/// Whole-element selection tool.
///
/// Also the baseline behavior that specialized selection tools wrap:
/// activation takes the editor's session slot, deactivation releases
/// it. The tool itself carries no mode state beyond the active latch.
pub struct SelectTool {
    id: ToolId,
    active: bool,
}

impl SelectTool {
    /// Creates an inactive selection tool.
    pub fn new() -> Self {
        Self {
            id: ToolId::new(),
            active: false,
        }
    }
}

impl Default for SelectTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for SelectTool {
    fn id(&self) -> ToolId {
        self.id
    }

    fn group(&self) -> &str {
        "select"
    }

    fn image_class(&self) -> &str {
        "sk-tool-select"
    }

    fn hint(&self) -> ToolHint {
        ToolHint::new("Pointer").with_shortcut("V")
    }

    fn activation_characters(&self) -> &[char] {
        &ACTIVATION_CHARACTERS
    }

    fn cursor(&self, ctx: &PointerContext) -> Cursor {
        if ctx.over_selection {
            Cursor::SelectDot
        } else {
            Cursor::Select
        }
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn activate(
        &mut self,
        view: ViewId,
        layer: LayerId,
        editor: &mut SceneEditor,
    ) -> Result<(), ToolProtocolViolation> {
        if self.active {
            tracing::error!(tool = %self.id, "activate on already-active tool");
            return Err(ToolProtocolViolation::AlreadyActive { tool: self.id });
        }
        editor.begin_tool_session(self.id)?;
        self.active = true;
        tracing::debug!(tool = %self.id, %view, %layer, "select tool activated");
        Ok(())
    }

    fn deactivate(
        &mut self,
        view: ViewId,
        layer: LayerId,
        editor: &mut SceneEditor,
    ) -> Result<(), ToolProtocolViolation> {
        if !self.active {
            tracing::error!(tool = %self.id, "deactivate on inactive tool");
            return Err(ToolProtocolViolation::NotActive { tool: self.id });
        }
        editor.end_tool_session(self.id)?;
        self.active = false;
        tracing::debug!(tool = %self.id, %view, %layer, "select tool deactivated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::RwLock;
    use sketchkit_core::scene::Scene;
    use std::sync::Arc;

    fn editor() -> SceneEditor {
        SceneEditor::new(Arc::new(RwLock::new(Scene::new())))
    }

    #[test]
    fn test_activation_takes_and_releases_the_session_slot() {
        let mut ed = editor();
        let mut tool = SelectTool::new();
        let view = ViewId::new();
        let layer = LayerId::new();

        tool.activate(view, layer, &mut ed).unwrap();
        assert!(tool.is_active());
        assert_eq!(ed.current_tool(), Some(tool.id()));

        tool.deactivate(view, layer, &mut ed).unwrap();
        assert!(!tool.is_active());
        assert_eq!(ed.current_tool(), None);
    }

    #[test]
    fn test_double_activate_is_rejected() {
        let mut ed = editor();
        let mut tool = SelectTool::new();
        let view = ViewId::new();
        let layer = LayerId::new();

        tool.activate(view, layer, &mut ed).unwrap();
        let err = tool.activate(view, layer, &mut ed).unwrap_err();
        assert!(matches!(err, ToolProtocolViolation::AlreadyActive { .. }));
        // Still active and still holding the slot.
        assert!(tool.is_active());
        assert_eq!(ed.current_tool(), Some(tool.id()));
    }

    #[test]
    fn test_deactivate_when_inactive_is_rejected() {
        let mut ed = editor();
        let mut tool = SelectTool::new();
        let err = tool
            .deactivate(ViewId::new(), LayerId::new(), &mut ed)
            .unwrap_err();
        assert!(matches!(err, ToolProtocolViolation::NotActive { .. }));
    }

    #[test]
    fn test_cursor_follows_pointer_context() {
        let tool = SelectTool::new();
        let plain = PointerContext {
            over_selection: false,
        };
        let over = PointerContext {
            over_selection: true,
        };
        assert_eq!(tool.cursor(&plain), Cursor::Select);
        assert_eq!(tool.cursor(&over), Cursor::SelectDot);
    }
}
