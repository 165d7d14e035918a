use serde::{Deserialize, Serialize};
use std::fmt;

/// A single ranked entry on the board.
///
/// The name doubles as the drag handle key and the display label, so it
/// must be unique across the whole board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub image: String,
}

impl Item {
    /// Creates an item from its name and image reference
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_seed_shape() {
        let item: Item =
            serde_json::from_str(r#"{"name": "Pikachu", "image": "https://img/25.png"}"#).unwrap();

        assert_eq!(item, Item::new("Pikachu", "https://img/25.png"));
        assert_eq!(item.to_string(), "Pikachu");
    }
}
