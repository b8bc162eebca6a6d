//! Dashboard KPIs
//!
//! Derived on demand from the live page stores, so the cards always agree
//! with what the other pages show. The weekly service-time series has no
//! backing store and stays fixed.

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{Customer, CustomerStatus, MenuItem, Order, OrderStatus, StaffMember, StaffStatus};

use crate::classify::{BadgeTone, ORDER_STATUS};
use crate::utils::money::final_total;
use crate::utils::time::format_clock;

/// Average order and service time for one weekday (minutes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPerformance {
    pub day: &'static str,
    pub order_time: u32,
    pub service_time: u32,
}

const fn day(day: &'static str, order_time: u32, service_time: u32) -> WeeklyPerformance {
    WeeklyPerformance {
        day,
        order_time,
        service_time,
    }
}

pub const WEEKLY_PERFORMANCE: [WeeklyPerformance; 7] = [
    day("Mon", 24, 18),
    day("Tue", 22, 20),
    day("Wed", 32, 22),
    day("Thu", 26, 17),
    day("Fri", 35, 25),
    day("Sat", 42, 32),
    day("Sun", 38, 27),
];

/// Menu items shown in the rating chart
const TOP_MENU_ITEMS: usize = 5;
/// Orders shown in the recent list
const RECENT_ORDERS: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuRating {
    pub name: String,
    pub rating: f64,
    pub orders: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffEfficiency {
    pub name: String,
    pub efficiency: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentOrder {
    pub id: String,
    pub table: String,
    pub time: String,
    pub status: OrderStatus,
    pub tone: BadgeTone,
    pub amount: Decimal,
}

/// Everything the dashboard renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_orders: usize,
    pub completed_orders: usize,
    pub in_progress_orders: usize,
    /// Mean service time of completed orders (minutes)
    pub avg_service_time: Option<f64>,
    /// Share of completed orders served on time (percent)
    pub on_time_rate: Option<f64>,
    /// Final totals of completed orders
    pub revenue: Decimal,
    /// Mean efficiency of active staff (percent)
    pub staff_performance: Option<f64>,
    /// Mean rating of menu items that have been rated
    pub customer_satisfaction: Option<f64>,
    pub vip_customers: usize,
    pub top_menu_items: Vec<MenuRating>,
    pub staff_efficiency: Vec<StaffEfficiency>,
    pub recent_orders: Vec<RecentOrder>,
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}

impl DashboardSummary {
    pub fn compute(
        staff: &[StaffMember],
        menu: &[MenuItem],
        orders: &[Order],
        customers: &[Customer],
    ) -> Self {
        let completed: Vec<&Order> = orders.iter().filter(|o| o.is_completed()).collect();

        let avg_service_time = mean(completed.iter().filter_map(|o| o.total_time).map(f64::from));
        let on_time_rate = mean(
            completed
                .iter()
                .filter_map(|o| o.on_time)
                .map(|on_time| if on_time { 100.0 } else { 0.0 }),
        );
        let revenue = completed
            .iter()
            .map(|o| final_total(o.total, o.discount))
            .sum();

        let active_staff = || staff.iter().filter(|s| s.status == StaffStatus::Active);
        let staff_performance = mean(active_staff().map(|s| f64::from(s.efficiency)));

        let customer_satisfaction = mean(menu.iter().map(|m| m.rating).filter(|r| *r > 0.0));

        let mut rated: Vec<&MenuItem> = menu.iter().filter(|m| m.rating > 0.0).collect();
        rated.sort_by(|a, b| {
            b.rating
                .total_cmp(&a.rating)
                .then_with(|| b.orders.cmp(&a.orders))
        });
        let top_menu_items = rated
            .into_iter()
            .take(TOP_MENU_ITEMS)
            .map(|m| MenuRating {
                name: m.name.clone(),
                rating: m.rating,
                orders: m.orders,
            })
            .collect();

        let staff_efficiency = active_staff()
            .map(|s| StaffEfficiency {
                name: s.name.split_whitespace().next().unwrap_or(&s.name).to_string(),
                efficiency: s.efficiency,
            })
            .collect();

        let mut latest: Vec<&Order> = orders.iter().collect();
        latest.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        let recent_orders = latest
            .into_iter()
            .take(RECENT_ORDERS)
            .map(|o| RecentOrder {
                id: o.id.clone(),
                table: o.table.clone(),
                time: format_clock(o.start_time),
                status: o.status,
                tone: ORDER_STATUS.classify(o.status.as_str()),
                amount: final_total(o.total, o.discount),
            })
            .collect();

        DashboardSummary {
            total_orders: orders.len(),
            completed_orders: completed.len(),
            in_progress_orders: orders
                .iter()
                .filter(|o| o.status == OrderStatus::InProgress)
                .count(),
            avg_service_time,
            on_time_rate,
            revenue,
            staff_performance,
            customer_satisfaction,
            vip_customers: customers
                .iter()
                .filter(|c| c.status == CustomerStatus::Vip)
                .count(),
            top_menu_items,
            staff_efficiency,
            recent_orders,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use std::str::FromStr;

    fn close(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|a| (a - b).abs() < 1e-9)
    }

    #[test]
    fn test_summary_from_seed() {
        let s = DashboardSummary::compute(
            &seed::staff(),
            &seed::menu(),
            &seed::orders(),
            &seed::customers(),
        );
        assert_eq!(s.total_orders, 5);
        assert_eq!(s.completed_orders, 4);
        assert_eq!(s.in_progress_orders, 1);
        assert!(close(s.avg_service_time, 25.5));
        assert!(close(s.on_time_rate, 50.0));
        assert_eq!(s.revenue, Decimal::from_str("218.82").unwrap());
        assert!(close(s.staff_performance, 90.4));
        assert!(close(s.customer_satisfaction, 4.5875));
        assert_eq!(s.vip_customers, 2);

        let top: Vec<_> = s.top_menu_items.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            top,
            vec![
                "Chocolate Cake",
                "Grilled Salmon",
                "Beef Burger",
                "Chicken Alfredo",
                "Vegetable Curry"
            ]
        );

        let recent: Vec<_> = s.recent_orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(recent, vec!["78942", "78943", "78941", "78940"]);
        assert_eq!(s.recent_orders[0].time, "12:22 PM");
        assert_eq!(s.staff_efficiency.len(), 5);
        assert_eq!(s.staff_efficiency[0].name, "John");
    }

    #[test]
    fn test_empty_stores() {
        let s = DashboardSummary::compute(&[], &[], &[], &[]);
        assert_eq!(s.total_orders, 0);
        assert!(s.avg_service_time.is_none());
        assert!(s.on_time_rate.is_none());
        assert!(s.staff_performance.is_none());
        assert_eq!(s.revenue, Decimal::ZERO);
        assert!(s.recent_orders.is_empty());
    }

    #[test]
    fn test_weekly_series() {
        assert_eq!(WEEKLY_PERFORMANCE.len(), 7);
        assert_eq!(WEEKLY_PERFORMANCE[5], day("Sat", 42, 32));
    }
}
