//! # Tiermaker Core
//!
//! Ranking model and drag-and-drop reordering logic for tier list editors.
//!
//! A [`Board`] is an ordered list of rows (tiers), each holding an ordered
//! list of items. Every mutation returns a fresh snapshot and leaves the
//! previous one untouched. The [`DragController`] adapts completed drag
//! gestures and row-shift requests from a UI host into board mutations,
//! without any dependency on a specific UI toolkit.

pub mod controller;
pub mod domain;
pub mod error;
pub mod seed;

// Re-export commonly used types
pub use controller::{
    plan_drag, DragController, DragEvent, DragOutcome, DraggableLocation, DropReason,
};
pub use domain::{
    board::{Board, ItemLocation, RowControls},
    item::Item,
    relocate::{relocate, Direction},
    row::Row,
};
pub use error::{Result, TierError};
pub use seed::{BoardSeed, FileSeedLoader, SeedLoader, StaticSeedLoader};
