//! Core types, traits, and utilities for SketchKit.
//!
//! This crate carries everything the document and tool layers share:
//!
//! - the scene model and its JSON file format ([`scene`])
//! - the undo-history capability and its stack implementation ([`undo`])
//! - persistence blobs ([`blob`])
//! - the cursor registry ([`cursor`])
//! - opaque identity handles ([`handles`])
//! - the synchronous document event bus ([`event_bus`])
//! - the error taxonomy ([`error`])

pub mod blob;
pub mod cursor;
pub mod error;
pub mod event_bus;
pub mod handles;
pub mod scene;
pub mod undo;

pub use blob::{Blob, FileBlob, MemoryBlob};
pub use cursor::Cursor;
pub use error::{BlobError, DocumentError, DocumentResult, ToolProtocolViolation};
pub use event_bus::{DocumentEvent, EventBus, EventCategory, EventFilter, SubscriptionId};
pub use handles::{LayerId, ToolId, ViewId, WindowId};
pub use scene::{Scene, SceneChange, SceneFile, Shape, FILE_FORMAT_VERSION};
pub use undo::{UndoHistory, UndoList};
