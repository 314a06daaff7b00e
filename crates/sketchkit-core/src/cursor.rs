//! Pointer cursor registry.

/// Cursor appearances resolvable by interactive tools.
///
/// Values are opaque to the core; the rendering layer maps them to
/// platform cursors. The `Inverse` variants are the sub-selection
/// renditions of the plain selection cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cursor {
    Default,
    Select,
    SelectDot,
    SelectInverse,
    SelectDotInverse,
    Cross,
    Move,
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Cursor::Default => "default",
            Cursor::Select => "select",
            Cursor::SelectDot => "select-dot",
            Cursor::SelectInverse => "select-inverse",
            Cursor::SelectDotInverse => "select-dot-inverse",
            Cursor::Cross => "cross",
            Cursor::Move => "move",
        };
        write!(f, "{}", name)
    }
}
