//! Demo data set
//!
//! The records each page starts with when `SEED_DEMO_DATA` is on. All
//! orders fall on 2025-04-23.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use shared::models::{
    Customer, CustomerStatus, MenuCategory, MenuItem, MenuItemStatus, Order, OrderItem,
    OrderStatus, Performance, StaffMember, StaffRole, StaffStatus,
};

use crate::utils::money::items_total;

/// Business date of the demo orders
pub const ORDER_DATE: (i32, u32, u32) = (2025, 4, 23);

/// Cents to a two-place decimal
fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn order_time(hour: u32, minute: u32) -> NaiveDateTime {
    let (y, m, d) = ORDER_DATE;
    date(y, m, d).and_time(NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN))
}

fn member(
    id: i64,
    name: &str,
    role: StaffRole,
    status: StaffStatus,
    metrics: (u8, u32, u8),
    performance: Performance,
) -> StaffMember {
    let (efficiency, shifts_completed, on_time_percentage) = metrics;
    StaffMember {
        id,
        name: name.to_string(),
        role,
        status,
        efficiency,
        shifts_completed,
        on_time_percentage,
        performance,
    }
}

pub fn staff() -> Vec<StaffMember> {
    use Performance::*;
    use StaffRole::*;
    use StaffStatus::*;
    vec![
        member(1, "John Smith", Chef, Active, (92, 45, 97), Excellent),
        member(2, "Sarah Johnson", Waiter, Active, (88, 38, 95), Good),
        member(3, "Michael Brown", Chef, Active, (95, 42, 98), Excellent),
        member(4, "Emily Davis", Waiter, Active, (87, 40, 92), Good),
        member(5, "David Wilson", Bartender, Active, (90, 36, 94), Good),
        member(6, "Lisa Martinez", Host, OnLeave, (89, 32, 96), Good),
    ]
}

#[allow(clippy::too_many_arguments)]
fn dish(
    id: i64,
    name: &str,
    category: MenuCategory,
    price_cents: i64,
    prep_time: u32,
    rating: f64,
    orders: u32,
    status: MenuItemStatus,
    description: &str,
) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        category,
        price: cents(price_cents),
        prep_time,
        rating,
        orders,
        status,
        description: description.to_string(),
    }
}

pub fn menu() -> Vec<MenuItem> {
    use MenuCategory::*;
    use MenuItemStatus::*;
    vec![
        dish(
            1,
            "Grilled Salmon",
            MainCourse,
            2499,
            20,
            4.8,
            128,
            Available,
            "Fresh salmon fillet grilled to perfection with lemon and herbs.",
        ),
        dish(
            2,
            "Chicken Alfredo",
            MainCourse,
            1899,
            18,
            4.6,
            96,
            Available,
            "Fettuccine pasta with creamy Alfredo sauce and grilled chicken breast.",
        ),
        dish(
            3,
            "Caesar Salad",
            Appetizers,
            1299,
            10,
            4.3,
            62,
            Available,
            "Romaine lettuce with Caesar dressing, croutons, and parmesan cheese.",
        ),
        dish(
            4,
            "Chocolate Cake",
            Desserts,
            999,
            5,
            4.9,
            73,
            Available,
            "Rich chocolate cake with a molten center, served with vanilla ice cream.",
        ),
        dish(
            5,
            "Beef Burger",
            MainCourse,
            1699,
            15,
            4.7,
            145,
            Available,
            "Juicy beef patty with lettuce, tomato, cheese, and special sauce on a brioche bun.",
        ),
        dish(
            6,
            "Seasonal Fruit Sorbet",
            Desserts,
            899,
            5,
            4.5,
            48,
            Seasonal,
            "Refreshing sorbet made with seasonal fruits, perfect for a light dessert.",
        ),
        dish(
            7,
            "Vegetable Curry",
            MainCourse,
            1799,
            22,
            4.5,
            76,
            Available,
            "Assorted vegetables in a flavorful curry sauce served with basmati rice.",
        ),
        dish(
            8,
            "Fresh Lemonade",
            Beverages,
            499,
            3,
            4.4,
            112,
            Available,
            "Freshly squeezed lemonade with a hint of mint.",
        ),
    ]
}

fn line(name: &str, quantity: u32, price_cents: i64) -> OrderItem {
    OrderItem::new(name, quantity, cents(price_cents))
}

/// Finished order served between `start` and `end`
fn completed(
    id: &str,
    table: &str,
    server: &str,
    items: Vec<OrderItem>,
    (start, end): ((u32, u32), (u32, u32)),
    expected_time: u32,
    discount: i64,
) -> Order {
    let start_time = order_time(start.0, start.1);
    let end_time = order_time(end.0, end.1);
    let total_time = u32::try_from((end_time - start_time).num_minutes()).unwrap_or_default();
    Order {
        id: id.to_string(),
        table: table.to_string(),
        server: server.to_string(),
        total: items_total(&items),
        items,
        status: OrderStatus::Completed,
        start_time,
        end_time: Some(end_time),
        total_time: Some(total_time),
        expected_time,
        discount: Decimal::from(discount),
        on_time: Some(total_time <= expected_time),
    }
}

pub fn orders() -> Vec<Order> {
    let in_progress_items = vec![
        line("Chicken Alfredo", 1, 1899),
        line("Beef Burger", 1, 1699),
        line("Fresh Lemonade", 2, 499),
    ];
    vec![
        completed(
            "78943",
            "12",
            "Sarah Johnson",
            vec![
                line("Grilled Salmon", 2, 2499),
                line("Caesar Salad", 1, 1299),
                line("Fresh Lemonade", 2, 499),
            ],
            ((12, 15), (12, 42)),
            30,
            0,
        ),
        Order {
            id: "78942".to_string(),
            table: "8".to_string(),
            server: "Emily Davis".to_string(),
            total: items_total(&in_progress_items),
            items: in_progress_items,
            status: OrderStatus::InProgress,
            start_time: order_time(12, 22),
            end_time: None,
            total_time: None,
            expected_time: 25,
            discount: Decimal::ZERO,
            on_time: None,
        },
        completed(
            "78941",
            "15",
            "David Wilson",
            vec![
                line("Beef Burger", 2, 1699),
                line("Vegetable Curry", 1, 1799),
                line("Caesar Salad", 1, 1299),
                line("Chocolate Cake", 2, 999),
            ],
            ((11, 48), (12, 21)),
            30,
            5,
        ),
        completed(
            "78940",
            "3",
            "Sarah Johnson",
            vec![line("Caesar Salad", 2, 1299), line("Fresh Lemonade", 2, 499)],
            ((11, 30), (11, 45)),
            15,
            0,
        ),
        completed(
            "78939",
            "7",
            "Emily Davis",
            vec![
                line("Vegetable Curry", 1, 1799),
                line("Chocolate Cake", 1, 999),
                line("Fresh Lemonade", 1, 499),
            ],
            ((11, 15), (11, 42)),
            22,
            3,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn guest(
    id: i64,
    name: &str,
    email: &str,
    phone: &str,
    visits: u32,
    last_visit: NaiveDate,
    spent_cents: i64,
    status: CustomerStatus,
    preferences: &str,
) -> Customer {
    Customer {
        id,
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        visits,
        last_visit: Some(last_visit),
        total_spent: cents(spent_cents),
        status,
        preferences: preferences.to_string(),
    }
}

pub fn customers() -> Vec<Customer> {
    use CustomerStatus::*;
    vec![
        guest(
            1,
            "Alice Johnson",
            "alice.j@example.com",
            "555-123-4567",
            12,
            date(2025, 4, 20),
            34875,
            Regular,
            "Vegetarian, Window seat",
        ),
        guest(
            2,
            "Robert Smith",
            "robert.smith@example.com",
            "555-234-5678",
            8,
            date(2025, 4, 18),
            26730,
            Regular,
            "Allergic to nuts",
        ),
        guest(
            3,
            "Emma Davis",
            "emma.d@example.com",
            "555-345-6789",
            3,
            date(2025, 4, 15),
            11245,
            New,
            "Booth seating preferred",
        ),
        guest(
            4,
            "James Wilson",
            "jwilson@example.com",
            "555-456-7890",
            20,
            date(2025, 4, 22),
            58790,
            Vip,
            "Wine enthusiast, Prefers quiet corner",
        ),
        guest(
            5,
            "Sophia Martinez",
            "sophia.m@example.com",
            "555-567-8901",
            6,
            date(2025, 4, 10),
            19865,
            Regular,
            "Gluten-free options needed",
        ),
        guest(
            6,
            "Daniel Brown",
            "daniel.b@example.com",
            "555-678-9012",
            15,
            date(2025, 4, 21),
            42310,
            Vip,
            "Seafood lover, Birthday: June 15",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_seed_sizes() {
        assert_eq!(staff().len(), 6);
        assert_eq!(menu().len(), 8);
        assert_eq!(orders().len(), 5);
        assert_eq!(customers().len(), 6);
    }

    #[test]
    fn test_order_totals_match_items() {
        let totals: Vec<_> = orders().iter().map(|o| o.total.to_string()).collect();
        assert_eq!(totals, vec!["72.95", "45.96", "84.94", "35.96", "32.97"]);
    }

    #[test]
    fn test_completed_orders_service_times() {
        let orders = orders();
        let times: Vec<_> = orders.iter().map(|o| o.total_time).collect();
        assert_eq!(times, vec![Some(27), None, Some(33), Some(15), Some(27)]);
        let on_time: Vec<_> = orders.iter().map(|o| o.on_time).collect();
        assert_eq!(
            on_time,
            vec![Some(true), None, Some(false), Some(true), Some(false)]
        );
        assert_eq!(orders[2].discount, Decimal::from_str("5").unwrap());
        assert!(orders.iter().all(|o| o.date() == date(2025, 4, 23)));
    }
}
