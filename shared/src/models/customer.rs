//! Customer Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

label_enum! {
    /// Loyalty tier
    pub enum CustomerStatus("status") {
        New => "New",
        Regular => "Regular",
        Vip => "VIP",
    }
}

/// Customer entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// May be empty
    pub phone: String,
    pub visits: u32,
    pub last_visit: Option<NaiveDate>,
    pub total_spent: Decimal,
    pub status: CustomerStatus,
    /// Free text (dietary needs, seating, ...)
    pub preferences: String,
}

/// Add/edit customer form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub preferences: String,
}
