pub mod board;
pub mod item;
pub mod relocate;
pub mod row;

pub use board::{Board, ItemLocation, RowControls};
pub use item::Item;
pub use relocate::{relocate, Direction};
pub use row::Row;
