//! # Linear undo/redo history
//!
//! A stack of full-state snapshots with a cursor. The externally observed
//! state is always `snapshots[cursor]`; [`History::set`] truncates any
//! redo branch before pushing (standard linear-history behavior).
//!
//! Granularity is the caller's concern: the editor pushes one snapshot per
//! committed user action (drag-end, resize-end, paste, align, delete,
//! duplicate, property edit, nudge), never per intermediate pointer-move.

/// A linear snapshot history over any cloneable state.
#[derive(Clone, Debug)]
pub struct History<T> {
    snapshots: Vec<T>,
    cursor: usize,
}

impl<T: Clone> History<T> {
    /// Creates a history whose only snapshot is `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    /// Replaces the whole stack with a single snapshot. Used once per
    /// screen-load.
    pub fn reset(&mut self, initial: T) {
        self.snapshots = vec![initial];
        self.cursor = 0;
    }

    /// Pushes a new snapshot, discarding anything past the cursor first.
    pub fn set(&mut self, state: T) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(state);
        self.cursor += 1;
    }

    /// Steps the cursor back one snapshot. No-op at the bottom.
    pub fn undo(&mut self) -> Option<&T> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Steps the cursor forward one snapshot. No-op at the top.
    pub fn redo(&mut self) -> Option<&T> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.snapshots[self.cursor])
    }

    /// The snapshot at the cursor.
    pub fn current(&self) -> &T {
        &self.snapshots[self.cursor]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Number of snapshots currently held.
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }
}
