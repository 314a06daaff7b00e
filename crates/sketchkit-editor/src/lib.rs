//! Document lifecycle and undo-tracking scene editor.
//!
//! A [`Document`] owns one scene, one [`SceneEditor`] bound to that
//! scene, an optional persistence blob, and the registry of attached
//! windows. The editor owns the undo history and the transient editing
//! modes that interactive tools borrow while they are active.

mod document;
mod editor;
mod window;

pub use document::Document;
pub use editor::SceneEditor;
pub use window::WindowHandle;
