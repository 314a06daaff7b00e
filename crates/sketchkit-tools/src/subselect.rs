//! The sub-selection tool.

use sketchkit_core::cursor::Cursor;
use sketchkit_core::error::ToolProtocolViolation;
use sketchkit_core::handles::{LayerId, ToolId, ViewId};
use sketchkit_editor::SceneEditor;

use crate::select::SelectTool;
use crate::tool::{PointerContext, Tool, ToolHint};

const ACTIVATION_CHARACTERS: [char; 2] = ['A', '1'];

/// Sub-element selection tool.
///
/// Wraps a [`SelectTool`] and layers one effect on top: while active,
/// the editor's selection detail mode is enabled. Setup runs after the
/// base activation and teardown runs before the base deactivation, so
/// the detail flag is cleared whatever the base teardown does. The same
/// ordering applies to any specialized tool layered over a base tool.
pub struct SubSelectTool {
    base: SelectTool,
}

impl SubSelectTool {
    /// Creates an inactive sub-selection tool.
    pub fn new() -> Self {
        Self {
            base: SelectTool::new(),
        }
    }
}

impl Default for SubSelectTool {
    fn default() -> Self {
        Self::new()
    }
}

/// Remaps the base selection cursor to its sub-selection rendition.
///
/// Pure function of the base cursor value; unrecognized cursors pass
/// through unchanged.
fn remap_cursor(base: Cursor) -> Cursor {
    match base {
        Cursor::Select => Cursor::SelectInverse,
        Cursor::SelectDot => Cursor::SelectDotInverse,
        other => other,
    }
}

impl Tool for SubSelectTool {
    fn id(&self) -> ToolId {
        self.base.id()
    }

    fn group(&self) -> &str {
        "select"
    }

    fn image_class(&self) -> &str {
        "sk-tool-subselect"
    }

    fn hint(&self) -> ToolHint {
        self.base.hint().with_title("Subselect").with_shortcut("A")
    }

    fn activation_characters(&self) -> &[char] {
        &ACTIVATION_CHARACTERS
    }

    fn cursor(&self, ctx: &PointerContext) -> Cursor {
        remap_cursor(self.base.cursor(ctx))
    }

    fn is_active(&self) -> bool {
        self.base.is_active()
    }

    fn activate(
        &mut self,
        view: ViewId,
        layer: LayerId,
        editor: &mut SceneEditor,
    ) -> Result<(), ToolProtocolViolation> {
        self.base.activate(view, layer, editor)?;
        // Detail mode for sub-element selection, for the span of this
        // activation.
        editor.set_selection_detail(self.id(), true)?;
        Ok(())
    }

    fn deactivate(
        &mut self,
        view: ViewId,
        layer: LayerId,
        editor: &mut SceneEditor,
    ) -> Result<(), ToolProtocolViolation> {
        if !self.base.is_active() {
            tracing::error!(tool = %self.id(), "deactivate on inactive tool");
            return Err(ToolProtocolViolation::NotActive { tool: self.id() });
        }
        // Own teardown first, then the base's.
        editor.set_selection_detail(self.id(), false)?;
        self.base.deactivate(view, layer, editor)
    }
}
