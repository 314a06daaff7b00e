//! Interactive editing tools.
//!
//! A tool is a strategy object the window layer attaches to a
//! (view, layer) pair. Between `activate` and `deactivate` the tool may
//! borrow editor mode flags through the editor's session slot; any
//! mode-specific state lives on the shared editor, never on the tool.
//!
//! Specialized tools are built by composition: [`SubSelectTool`] wraps
//! a [`SelectTool`], applying its own effects after base activation and
//! clearing them before base deactivation, so its state is cleaned up
//! regardless of what the base teardown does.

mod select;
mod subselect;
mod tool;

pub use select::SelectTool;
pub use subselect::SubSelectTool;
pub use tool::{PointerContext, Tool, ToolHint};
