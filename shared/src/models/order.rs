//! Order Model

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

label_enum! {
    /// Order lifecycle status
    pub enum OrderStatus("status") {
        Pending => "Pending",
        InProgress => "In Progress",
        Completed => "Completed",
        Cancelled => "Cancelled",
    }
}

/// One line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    /// > 0
    pub quantity: u32,
    /// Unit price
    pub price: Decimal,
}

impl OrderItem {
    pub fn new(name: impl Into<String>, quantity: u32, price: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }

    /// quantity × unit price
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order number, e.g. "78943"
    pub id: String,
    pub table: String,
    /// Server (waiter) name
    pub server: String,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    /// Service time in minutes, set on completion
    pub total_time: Option<u32>,
    /// Expected service time in minutes
    pub expected_time: u32,
    /// Sum of line totals
    pub total: Decimal,
    pub discount: Decimal,
    /// Only `Some` while status is Completed
    pub on_time: Option<bool>,
}

impl Order {
    /// Total number of units across all lines
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Business date of the order
    pub fn date(&self) -> NaiveDate {
        self.start_time.date()
    }

    pub fn is_completed(&self) -> bool {
        self.status == OrderStatus::Completed
    }
}

/// Add/edit order form
///
/// `items` is one line per order item (`2 x Grilled Salmon @ 24.99`,
/// separated by `;` or newlines); numeric fields are raw text, parsed on
/// commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub table: String,
    pub server: String,
    pub items: String,
    pub expected_time: String,
    pub discount: String,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            table: String::new(),
            server: String::new(),
            items: String::new(),
            expected_time: String::new(),
            discount: "0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_order() -> Order {
        Order {
            id: "78941".to_string(),
            table: "15".to_string(),
            server: "David Wilson".to_string(),
            items: vec![
                OrderItem::new("Beef Burger", 2, dec("16.99")),
                OrderItem::new("Vegetable Curry", 1, dec("17.99")),
            ],
            status: OrderStatus::Completed,
            start_time: NaiveDate::from_ymd_opt(2025, 4, 23)
                .unwrap()
                .and_hms_opt(11, 48, 0)
                .unwrap(),
            end_time: None,
            total_time: Some(33),
            expected_time: 30,
            total: dec("84.94"),
            discount: dec("5"),
            on_time: Some(false),
        }
    }

    #[test]
    fn test_line_total() {
        let item = OrderItem::new("Fresh Lemonade", 2, dec("4.99"));
        assert_eq!(item.line_total(), dec("9.98"));
    }

    #[test]
    fn test_item_count_and_date() {
        let order = sample_order();
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.date(), NaiveDate::from_ymd_opt(2025, 4, 23).unwrap());
        assert!(order.is_completed());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(OrderStatus::InProgress.as_str(), "In Progress");
        assert_eq!(
            "in progress".parse::<OrderStatus>().unwrap(),
            OrderStatus::InProgress
        );
    }

    #[test]
    fn test_draft_default_discount_is_zero() {
        assert_eq!(OrderDraft::default().discount, "0");
    }
}
