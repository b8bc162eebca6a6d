//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

label_enum! {
    /// Menu section
    pub enum MenuCategory("category") {
        Appetizers => "Appetizers",
        MainCourse => "Main Course",
        Desserts => "Desserts",
        Beverages => "Beverages",
        Specials => "Specials",
    }
}

label_enum! {
    /// Availability
    pub enum MenuItemStatus("status") {
        Available => "Available",
        Seasonal => "Seasonal",
        OutOfStock => "Out of Stock",
    }
}

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub category: MenuCategory,
    pub price: Decimal,
    /// Preparation time in minutes (> 0)
    pub prep_time: u32,
    /// 0.0..=5.0
    pub rating: f64,
    pub orders: u32,
    pub status: MenuItemStatus,
    pub description: String,
}

/// Add/edit menu item form
///
/// `price` and `prep_time` hold the raw text typed into the form and are
/// parsed on commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDraft {
    pub name: String,
    pub category: MenuCategory,
    pub price: String,
    pub prep_time: String,
    pub description: String,
    pub status: MenuItemStatus,
}

impl Default for MenuItemDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: MenuCategory::MainCourse,
            price: String::new(),
            prep_time: String::new(),
            description: String::new(),
            status: MenuItemStatus::Available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(MenuCategory::MainCourse.as_str(), "Main Course");
        assert_eq!(
            "main course".parse::<MenuCategory>().unwrap(),
            MenuCategory::MainCourse
        );
        assert_eq!(MenuItemStatus::OutOfStock.to_string(), "Out of Stock");
    }

    #[test]
    fn test_draft_defaults() {
        let draft = MenuItemDraft::default();
        assert_eq!(draft.category, MenuCategory::MainCourse);
        assert_eq!(draft.status, MenuItemStatus::Available);
        assert!(draft.price.is_empty());
    }
}
