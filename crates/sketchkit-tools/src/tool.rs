//! The tool capability trait and its context types.

use sketchkit_core::cursor::Cursor;
use sketchkit_core::error::ToolProtocolViolation;
use sketchkit_core::handles::{LayerId, ToolId, ViewId};
use sketchkit_editor::SceneEditor;

/// Pointer context a tool resolves its cursor from.
///
/// Filled in by the view layer from hit-testing; opaque to the tools
/// beyond the flags they consult.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerContext {
    /// The pointer is over the current selection.
    pub over_selection: bool,
}

/// Display metadata for a tool (toolbox tooltip).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolHint {
    pub title: String,
    pub shortcut: Option<String>,
}

impl ToolHint {
    /// Creates a hint with a title and no shortcut text.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            shortcut: None,
        }
    }

    /// Replaces the hint's title, keeping the rest.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the shortcut text.
    pub fn with_shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }
}

/// Capability set every interactive tool implements.
///
/// Tools move through `Inactive -> Active -> Inactive`. `activate` is
/// only valid from the inactive state and `deactivate` from the active
/// state; anything else is a [`ToolProtocolViolation`] and leaves both
/// the tool and the editor unchanged.
pub trait Tool {
    /// Identity used for the editor's session slot.
    fn id(&self) -> ToolId;

    /// Logical toolbox grouping.
    fn group(&self) -> &str;

    /// Icon resource key.
    fn image_class(&self) -> &str;

    /// Display metadata.
    fn hint(&self) -> ToolHint;

    /// Keyboard shortcuts that activate this tool.
    fn activation_characters(&self) -> &[char];

    /// Resolves the cursor for the current pointer context. Total:
    /// every context maps to some cursor.
    fn cursor(&self, ctx: &PointerContext) -> Cursor;

    /// Whether the tool is currently attached.
    fn is_active(&self) -> bool;

    /// Attaches the tool to a (view, layer) pair.
    fn activate(
        &mut self,
        view: ViewId,
        layer: LayerId,
        editor: &mut SceneEditor,
    ) -> Result<(), ToolProtocolViolation>;

    /// Detaches the tool, restoring any editor state it borrowed.
    fn deactivate(
        &mut self,
        view: ViewId,
        layer: LayerId,
        editor: &mut SceneEditor,
    ) -> Result<(), ToolProtocolViolation>;
}
