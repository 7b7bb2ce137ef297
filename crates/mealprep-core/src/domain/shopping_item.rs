//! Shopping Item Entity
//!
//! One line of the weekly shopping list.

use serde::{Deserialize, Serialize};

use super::entity::{Checkable, Entity};

/// Grocery section an item is shopped from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Produce,
    Pantry,
    Dairy,
    Broth,
    Meat,
    Seafood,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Produce => "Produce",
            Category::Pantry => "Pantry",
            Category::Dairy => "Dairy",
            Category::Broth => "Broth",
            Category::Meat => "Meat",
            Category::Seafood => "Seafood",
        }
    }
}

/// A shopping list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    /// Free-form amount or usage hint, may be empty
    pub quantity: String,
    pub category: Category,
    pub checked: bool,
}

impl ShoppingItem {
    /// Create an unchecked item
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        quantity: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity: quantity.into(),
            category,
            checked: false,
        }
    }
}

impl Entity for ShoppingItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Checkable for ShoppingItem {
    fn is_done(&self) -> bool {
        self.checked
    }

    fn set_done(&mut self, done: bool) {
        self.checked = done;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_record_field_names() {
        let item = ShoppingItem::new("prod-1", "Garlic", "6 cloves", Category::Produce);
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["id"], "prod-1");
        assert_eq!(json["category"], "Produce");
        assert_eq!(json["checked"], false);
    }
}
