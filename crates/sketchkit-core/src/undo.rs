//! Undo history for scene edits.
//!
//! The document layer only ever asks two things of the history: does it
//! hold unsaved modifications, and mark the current state as saved. That
//! capability is the [`UndoHistory`] trait; [`UndoList`] is the stack
//! implementation the editor uses.

use crate::scene::SceneChange;

/// Minimal capability the document core needs from an undo history.
///
/// Kept as a trait so the document can be tested against a stub without
/// depending on stack internals.
pub trait UndoHistory {
    /// Whether edits exist that have not been saved.
    fn has_pending_modification(&self) -> bool;

    /// Marks the current state as the save point. Immediately after,
    /// `has_pending_modification` reports false until the next edit.
    fn mark_save_point(&mut self);
}

/// Sentinel for a save point that can no longer be reached by redo.
const SAVE_POINT_LOST: usize = usize::MAX;

/// Manages undo/redo stacks for scene editing.
pub struct UndoList {
    undo_stack: Vec<SceneChange>,
    redo_stack: Vec<SceneChange>,
    max_depth: usize,
    /// Undo stack depth at the last save point.
    save_depth: usize,
}

impl UndoList {
    /// Create a new undo list with default depth (100).
    pub fn new() -> Self {
        Self::with_depth(100)
    }

    /// Create with custom maximum undo depth.
    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
            save_depth: 0,
        }
    }

    /// Record a change to the undo stack.
    pub fn record(&mut self, change: SceneChange) {
        // A new edit invalidates the redo stack. If the save point sat
        // above the current depth it is now unreachable.
        self.redo_stack.clear();
        if self.undo_stack.len() < self.save_depth {
            self.save_depth = SAVE_POINT_LOST;
        }

        self.undo_stack.push(change);

        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
            if self.save_depth != SAVE_POINT_LOST {
                self.save_depth = self.save_depth.saturating_sub(1);
            }
        }
    }

    /// Undo last change, returning the inverse change to apply.
    pub fn undo(&mut self) -> Option<SceneChange> {
        self.undo_stack.pop().map(|change| {
            let inverse = change.inverse();
            self.redo_stack.push(change);
            inverse
        })
    }

    /// Redo last undone change, returning the change to re-apply.
    pub fn redo(&mut self) -> Option<SceneChange> {
        self.redo_stack.pop().inspect(|change| {
            self.undo_stack.push(change.clone());
        })
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clear all history and reset the save point.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.save_depth = 0;
    }

    /// Number of undo operations available.
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }
}

impl UndoHistory for UndoList {
    fn has_pending_modification(&self) -> bool {
        self.undo_stack.len() != self.save_depth
    }

    fn mark_save_point(&mut self) {
        self.save_depth = self.undo_stack.len();
    }
}

impl Default for UndoList {
    fn default() -> Self {
        Self::new()
    }
}
