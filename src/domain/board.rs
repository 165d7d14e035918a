use crate::domain::item::Item;
use crate::domain::relocate::{check_index, relocate, Direction};
use crate::domain::row::Row;
use crate::error::{Result, TierError};
use crate::seed::BoardSeed;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Where an item currently sits on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemLocation {
    pub row: String,
    pub index: usize,
}

/// Which shift affordances a row should expose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowControls {
    pub can_move_up: bool,
    pub can_move_down: bool,
}

/// Tier list board snapshot.
///
/// Rows are ordered from the highest tier to the lowest. A board is never
/// mutated in place: every operation returns a new snapshot, so the caller
/// can keep the previous one for change detection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Board {
    rows: Vec<Row>,
}

impl Board {
    /// Builds a board from a seed, rejecting duplicate row or item names
    pub fn from_seed(seed: BoardSeed) -> Result<Self> {
        let rows = seed.into_rows();
        check_unique(&rows)?;
        Ok(Self { rows })
    }

    /// Gets the rows from the highest tier to the lowest
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows on the board
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Checks if the board has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Gets a row by name
    pub fn row(&self, name: &str) -> Option<&Row> {
        self.rows.iter().find(|row| row.name == name)
    }

    /// Gets the tier position of a row
    pub fn row_index(&self, name: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.name == name)
    }

    fn require_row(&self, name: &str) -> Result<usize> {
        self.row_index(name)
            .ok_or_else(|| TierError::UnknownRow(name.to_string()))
    }

    /// Finds the row and rank of an item
    pub fn locate_item(&self, item_name: &str) -> Option<ItemLocation> {
        self.item_position(item_name)
            .map(|(row_index, index)| ItemLocation {
                row: self.rows[row_index].name.clone(),
                index,
            })
    }

    fn item_position(&self, item_name: &str) -> Option<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .find_map(|(row_index, row)| row.position_of(item_name).map(|index| (row_index, index)))
    }

    /// Total number of items across all rows
    pub fn item_count(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }

    /// Reports whether a row can shift up or down, `None` for an unknown row
    pub fn row_controls(&self, row_name: &str) -> Option<RowControls> {
        self.row_index(row_name).map(|index| RowControls {
            can_move_up: Direction::Up.step(index, self.rows.len()).is_some(),
            can_move_down: Direction::Down.step(index, self.rows.len()).is_some(),
        })
    }

    /// Moves an item to another rank within the same row
    pub fn move_item_within_row(
        &self,
        row_name: &str,
        from_index: usize,
        to_index: usize,
    ) -> Result<Board> {
        let row_index = self.require_row(row_name)?;
        let items = relocate(&self.rows[row_index].items, from_index, to_index)?;

        let mut next = self.clone();
        next.rows[row_index].items = items;
        Ok(next)
    }

    /// Moves an item out of one row and inserts it into another.
    ///
    /// `to_index` may equal the destination length, which appends the item.
    /// Equal row names are handled as a move within that row.
    pub fn move_item_across_rows(
        &self,
        from_row: &str,
        from_index: usize,
        to_row: &str,
        to_index: usize,
    ) -> Result<Board> {
        if from_row == to_row {
            return self.move_item_within_row(from_row, from_index, to_index);
        }

        let source = self.require_row(from_row)?;
        let destination = self.require_row(to_row)?;
        check_index(from_index, self.rows[source].len())?;
        check_index(to_index, self.rows[destination].len() + 1)?;

        // Both rows are validated before either is touched
        let mut next = self.clone();
        let item = next.rows[source].items.remove(from_index);
        next.rows[destination].items.insert(to_index, item);
        Ok(next)
    }

    /// Shifts a row one tier up or down.
    ///
    /// A row already at the boundary in that direction stays put.
    pub fn move_row(&self, row_name: &str, direction: Direction) -> Result<Board> {
        let index = self.require_row(row_name)?;
        match direction.step(index, self.rows.len()) {
            Some(target) => Ok(Self {
                rows: relocate(&self.rows, index, target)?,
            }),
            None => Ok(self.clone()),
        }
    }

    /// Inserts a new row at `index` (`index == len` appends)
    pub fn add_row(&self, row: Row, index: usize) -> Result<Board> {
        check_index(index, self.rows.len() + 1)?;

        let mut next = self.clone();
        next.rows.insert(index, row);
        check_unique(&next.rows)?;
        Ok(next)
    }

    /// Removes a row together with its items
    pub fn remove_row(&self, row_name: &str) -> Result<(Board, Row)> {
        let index = self.require_row(row_name)?;

        let mut next = self.clone();
        let row = next.rows.remove(index);
        Ok((next, row))
    }

    /// Inserts a new item into a row at `index` (`index == len` appends)
    pub fn add_item(&self, row_name: &str, item: Item, index: usize) -> Result<Board> {
        if self.item_position(&item.name).is_some() {
            return Err(TierError::DuplicateItem(item.name));
        }
        let row_index = self.require_row(row_name)?;
        check_index(index, self.rows[row_index].len() + 1)?;

        let mut next = self.clone();
        next.rows[row_index].items.insert(index, item);
        Ok(next)
    }

    /// Removes an item wherever it is on the board
    pub fn remove_item(&self, item_name: &str) -> Result<(Board, Item)> {
        let (row_index, index) = self
            .item_position(item_name)
            .ok_or_else(|| TierError::UnknownItem(item_name.to_string()))?;

        let mut next = self.clone();
        let item = next.rows[row_index].items.remove(index);
        Ok((next, item))
    }
}

fn check_unique(rows: &[Row]) -> Result<()> {
    let mut row_names = HashSet::new();
    let mut item_names = HashSet::new();

    for row in rows {
        if !row_names.insert(row.name.as_str()) {
            return Err(TierError::DuplicateRow(row.name.clone()));
        }
        for item in &row.items {
            if !item_names.insert(item.name.as_str()) {
                return Err(TierError::DuplicateItem(item.name.clone()));
            }
        }
    }
    Ok(())
}
