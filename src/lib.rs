//! # SketchKit
//!
//! Core of an interactive vector-drawing application: documents, the
//! undo-tracking scene editor, and the interactive tool protocol.
//!
//! ## Architecture
//!
//! SketchKit is organized as a workspace with multiple crates:
//!
//! 1. **sketchkit-core** - Scene model, undo history, persistence
//!    blobs, cursors, document events
//! 2. **sketchkit-editor** - Document lifecycle and the undo-tracking
//!    scene editor
//! 3. **sketchkit-tools** - Tool capability trait, selection tools,
//!    cursor resolution
//! 4. **sketchkit** - Facade crate re-exporting the public API
//!
//! ## Key contracts
//!
//! - A document's title comes from its persistence blob when one is
//!   assigned, otherwise from its temporary title.
//! - A document is saveable iff it has a blob and the editor's undo
//!   history holds unsaved modifications; a successful save resets the
//!   save point.
//! - Tools borrow editor mode flags only between `activate` and
//!   `deactivate`, through the editor's exclusive session slot.

pub use sketchkit_core::{
    Blob, BlobError, Cursor, DocumentError, DocumentEvent, DocumentResult, EventBus,
    EventCategory, EventFilter, FileBlob, LayerId, MemoryBlob, Scene, SceneChange, SceneFile,
    Shape, SubscriptionId, ToolId, ToolProtocolViolation, UndoHistory, UndoList, ViewId, WindowId,
    FILE_FORMAT_VERSION,
};
pub use sketchkit_editor::{Document, SceneEditor, WindowHandle};
pub use sketchkit_tools::{PointerContext, SelectTool, SubSelectTool, Tool, ToolHint};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
