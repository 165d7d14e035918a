use crate::domain::item::Item;
use serde::{Deserialize, Serialize};

/// One tier of the board: a named, colored, ordered bucket of items.
///
/// Item order is the rank within the tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub name: String,
    /// Display attribute, passed through untouched
    pub color: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Row {
    /// Creates an empty row
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            items: Vec::new(),
        }
    }

    /// Replaces the row's items
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Gets the rank of an item within this row
    pub fn position_of(&self, item_name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == item_name)
    }

    /// Gets the item at a rank
    pub fn item_at(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_lookup() {
        let row = Row::new("S", "#ff7f7f")
            .with_items(vec![Item::new("x", "x.png"), Item::new("y", "y.png")]);

        assert_eq!(row.len(), 2);
        assert_eq!(row.position_of("y"), Some(1));
        assert_eq!(row.position_of("z"), None);
        assert_eq!(row.item_at(0).map(|i| i.name.as_str()), Some("x"));
        assert!(row.item_at(2).is_none());
    }

    #[test]
    fn test_row_items_default_to_empty() {
        let row: Row = serde_json::from_str(r##"{"name": "F", "color": "#7fff7f"}"##).unwrap();
        assert!(row.is_empty());
    }
}
