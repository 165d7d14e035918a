use crate::error::{Result, TierError};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Direction a row is shifted on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward the start of the board (higher tier)
    Up,
    /// Toward the end of the board (lower tier)
    Down,
}

impl Direction {
    /// Returns the position one step from `index` in this direction, or
    /// `None` when `index` already sits on the boundary of a sequence of
    /// length `len`.
    pub fn step(&self, index: usize, len: usize) -> Option<usize> {
        match self {
            Self::Up => index.checked_sub(1),
            Self::Down => {
                let next = index + 1;
                (next < len).then_some(next)
            }
        }
    }
}

impl FromStr for Direction {
    type Err = TierError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            _ => Err(TierError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// Fails with [`TierError::InvalidIndex`] unless `index < len`
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(TierError::InvalidIndex { index, len })
    }
}

/// Moves the element at `from` to position `to`, returning a new sequence.
///
/// Moving toward the front re-inserts the element before the one currently
/// at `to`; moving toward the back re-inserts it after the one currently
/// at `to`. Every other element keeps its relative order and shifts by at
/// most one slot. The input slice is never modified.
///
/// # Examples
/// ```
/// use tiermaker_core::relocate;
///
/// let moved = relocate(&["x", "y", "z"], 0, 2).unwrap();
/// assert_eq!(moved, vec!["y", "z", "x"]);
///
/// let moved = relocate(&["x", "y", "z"], 2, 0).unwrap();
/// assert_eq!(moved, vec!["z", "x", "y"]);
/// ```
pub fn relocate<T: Clone>(seq: &[T], from: usize, to: usize) -> Result<Vec<T>> {
    check_index(from, seq.len())?;
    check_index(to, seq.len())?;

    let mut moved = seq.to_vec();
    if from != to {
        let element = moved.remove(from);
        moved.insert(to, element);
    }
    Ok(moved)
}
