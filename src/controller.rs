//! Drag-and-drop event handling.
//!
//! The UI host owns gesture detection. It reports a finished drag as a
//! [`DragEvent`] and row-shift clicks as a row name plus [`Direction`];
//! the controller turns those into board mutations and swaps in the new
//! snapshot. Stale or malformed events leave the board as it was.

use crate::{
    domain::{relocate::check_index, Board, Direction, RowControls},
    error::{Result, TierError},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A row and rank reported by the drag-gesture source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraggableLocation {
    /// Name of the row the location refers to
    pub droppable_id: String,
    pub index: usize,
}

impl DraggableLocation {
    /// Creates a location from a row name and rank
    pub fn new(row: impl Into<String>, index: usize) -> Self {
        Self {
            droppable_id: row.into(),
            index,
        }
    }
}

/// Why a drag gesture ended
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DropReason {
    #[default]
    Drop,
    Cancel,
}

/// A completed drag gesture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragEvent {
    pub source: DraggableLocation,
    /// `None` when the item was released outside every row
    #[serde(default)]
    pub destination: Option<DraggableLocation>,
    /// Name of the dragged item, when the source reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draggable_id: Option<String>,
    #[serde(default)]
    pub reason: DropReason,
}

impl DragEvent {
    /// Creates a dropped gesture without a reported item name
    pub fn new(source: DraggableLocation, destination: Option<DraggableLocation>) -> Self {
        Self {
            source,
            destination,
            draggable_id: None,
            reason: DropReason::Drop,
        }
    }

    /// Attaches the name of the dragged item
    pub fn with_draggable_id(mut self, item_name: impl Into<String>) -> Self {
        self.draggable_id = Some(item_name.into());
        self
    }
}

/// Result of handling one UI event
#[derive(Debug)]
pub enum DragOutcome {
    /// A new snapshot was installed
    Moved,
    /// Nothing to do: no destination, cancelled, or a move onto itself
    Unchanged,
    /// The event did not fit the current snapshot and was dropped
    Rejected(TierError),
}

impl DragOutcome {
    /// Checks if a new snapshot was installed
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved)
    }
}

/// Computes the board a drag event leads to without applying it.
///
/// Returns `Ok(None)` when the event asks for no change.
pub fn plan_drag(board: &Board, event: &DragEvent) -> Result<Option<Board>> {
    let destination = match (&event.destination, event.reason) {
        (Some(destination), DropReason::Drop) => destination,
        _ => return Ok(None),
    };
    let source = &event.source;

    if let Some(item_name) = &event.draggable_id {
        let at_source = board
            .row(&source.droppable_id)
            .ok_or_else(|| TierError::UnknownRow(source.droppable_id.clone()))?
            .item_at(source.index);
        if at_source.map(|item| &item.name) != Some(item_name) {
            return Err(TierError::UnknownItem(item_name.clone()));
        }
    }

    let next = if source.droppable_id == destination.droppable_id {
        if source.index == destination.index {
            // Dropped back where it started; still reject a stale position
            let row = board
                .row(&source.droppable_id)
                .ok_or_else(|| TierError::UnknownRow(source.droppable_id.clone()))?;
            check_index(source.index, row.len())?;
            return Ok(None);
        }
        board.move_item_within_row(&source.droppable_id, source.index, destination.index)?
    } else {
        board.move_item_across_rows(
            &source.droppable_id,
            source.index,
            &destination.droppable_id,
            destination.index,
        )?
    };

    Ok(Some(next))
}

/// Owns the current board snapshot and applies UI events to it.
///
/// The snapshot itself is immutable; each successful mutation installs a
/// fresh `Arc`, so hosts can detect a change with [`Arc::ptr_eq`].
#[derive(Debug)]
pub struct DragController {
    board: Arc<Board>,
    revision: u64,
    last_changed: Option<DateTime<Utc>>,
}

impl DragController {
    /// Creates a controller owning the given board
    pub fn new(board: Board) -> Self {
        Self {
            board: Arc::new(board),
            revision: 0,
            last_changed: None,
        }
    }

    /// Current board snapshot
    pub fn snapshot(&self) -> Arc<Board> {
        Arc::clone(&self.board)
    }

    /// Borrows the current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of mutations applied since construction
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// When the last mutation was applied
    pub fn last_changed(&self) -> Option<DateTime<Utc>> {
        self.last_changed
    }

    /// Shift affordances for a row
    pub fn row_controls(&self, row_name: &str) -> Option<RowControls> {
        self.board.row_controls(row_name)
    }

    /// Handles a finished drag gesture
    pub fn on_drag_complete(&mut self, event: &DragEvent) -> DragOutcome {
        match plan_drag(&self.board, event) {
            Ok(Some(next)) => {
                tracing::debug!(
                    from_row = %event.source.droppable_id,
                    from_index = event.source.index,
                    to_row = ?event.destination.as_ref().map(|d| &d.droppable_id),
                    to_index = ?event.destination.as_ref().map(|d| d.index),
                    "moved item"
                );
                self.install(next)
            }
            Ok(None) => {
                tracing::trace!(row = %event.source.droppable_id, index = event.source.index, "ignored drag");
                DragOutcome::Unchanged
            }
            Err(error) => {
                tracing::warn!(
                    row = %event.source.droppable_id,
                    index = event.source.index,
                    %error,
                    "rejected drag"
                );
                DragOutcome::Rejected(error)
            }
        }
    }

    /// Handles a request to shift a row one tier up or down.
    ///
    /// Shifting past the first or last tier is a no-op, even when the host
    /// exposes the control despite [`RowControls`].
    pub fn on_row_shift_requested(&mut self, row_name: &str, direction: Direction) -> DragOutcome {
        let controls = self.board.row_controls(row_name);
        let actionable = controls.map(|c| match direction {
            Direction::Up => c.can_move_up,
            Direction::Down => c.can_move_down,
        });

        match self.board.move_row(row_name, direction) {
            Ok(next) if actionable == Some(true) => {
                tracing::debug!(row = %row_name, %direction, "shifted row");
                self.install(next)
            }
            Ok(_) => {
                tracing::trace!(row = %row_name, %direction, "row already at boundary");
                DragOutcome::Unchanged
            }
            Err(error) => {
                tracing::warn!(row = %row_name, %direction, %error, "rejected row shift");
                DragOutcome::Rejected(error)
            }
        }
    }

    fn install(&mut self, next: Board) -> DragOutcome {
        self.board = Arc::new(next);
        self.revision += 1;
        self.last_changed = Some(Utc::now());
        DragOutcome::Moved
    }
}
