//! Opaque identity handles.
//!
//! Windows, views, layers, and tools are identified by uuid-backed
//! newtypes. The core only ever uses them for set membership and
//! equality; their display form is a short prefix for log readability.

use uuid::Uuid;

macro_rules! identity_handle {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new unique handle.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "({})"), &self.0.to_string()[..8])
            }
        }
    };
}

identity_handle!(
    /// Identity of an attached document window.
    WindowId,
    "Win"
);

identity_handle!(
    /// Identity of a drawing view (the surface a tool attaches to).
    ViewId,
    "View"
);

identity_handle!(
    /// Identity of an editing layer within a view.
    LayerId,
    "Layer"
);

identity_handle!(
    /// Identity of a tool instance, used for the editor's session slot.
    ToolId,
    "Tool"
);
