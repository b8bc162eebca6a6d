//! Application state
//!
//! [`Backoffice`] owns the four record pages, the current route and the
//! toast queue. Pages never see each other; only the dashboard reads
//! across them.

use chrono::NaiveDateTime;
use shared::error::AppResult;
use shared::models::{Customer, MenuItem, Order, OrderStatus, StaffMember};

use super::config::Config;
use crate::notify::{Notification, Toasts};
use crate::pages::customers::{self, CustomersPage};
use crate::pages::dashboard::DashboardSummary;
use crate::pages::menu::{self, MenuPage};
use crate::pages::orders::{self, OrdersPage};
use crate::pages::staff::{self, StaffPage};
use crate::pages::Route;
use crate::seed;

#[derive(Debug, Clone)]
pub struct Backoffice {
    pub staff: StaffPage,
    pub menu: MenuPage,
    pub orders: OrdersPage,
    pub customers: CustomersPage,
    route: Route,
    toasts: Toasts,
}

impl Backoffice {
    /// Build the state described by `config`
    pub fn new(config: &Config) -> Self {
        if config.seed_demo_data {
            tracing::info!("Seeding pages with demo data");
            Self::with_records(
                seed::staff(),
                seed::menu(),
                seed::orders(),
                seed::customers(),
                config.toast_capacity,
            )
        } else {
            Self::with_records(
                Vec::new(),
                Vec::new(),
                Vec::new(),
                Vec::new(),
                config.toast_capacity,
            )
        }
    }

    pub fn with_records(
        staff_records: Vec<StaffMember>,
        menu_records: Vec<MenuItem>,
        order_records: Vec<Order>,
        customer_records: Vec<Customer>,
        toast_capacity: usize,
    ) -> Self {
        Self {
            staff: staff::new_page(staff_records),
            menu: menu::new_page(menu_records),
            orders: orders::new_page(order_records),
            customers: customers::new_page(customer_records),
            route: Route::default(),
            toasts: Toasts::new(toast_capacity),
        }
    }

    // ========== Navigation ==========

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn navigate(&mut self, route: Route) {
        if self.route != route {
            tracing::debug!(from = %self.route, to = %route, "Navigate");
            self.route = route;
        }
    }

    /// Navigate by path; an unknown path leaves the route unchanged
    pub fn navigate_path(&mut self, path: &str) -> AppResult<Route> {
        match Route::from_path(path) {
            Ok(route) => {
                self.navigate(route);
                Ok(route)
            }
            Err(e) => {
                tracing::error!(path, "404 Error: attempted to access non-existent route");
                Err(e)
            }
        }
    }

    // ========== Notifications ==========

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn notify(&mut self, notification: Notification) {
        self.toasts.push(notification);
    }

    /// Push `notification` if there is one
    pub fn notify_opt(&mut self, notification: Option<Notification>) {
        if let Some(n) = notification {
            self.notify(n);
        }
    }

    pub fn dismiss_toasts(&mut self) {
        self.toasts.dismiss_all();
    }

    // ========== Cross-page ==========

    pub fn dashboard(&self) -> DashboardSummary {
        DashboardSummary::compute(
            self.staff.records(),
            self.menu.records(),
            self.orders.records(),
            self.customers.records(),
        )
    }

    /// Change an order's status and toast the outcome
    pub fn update_order_status(&mut self, id: &str, status: OrderStatus, now: NaiveDateTime) {
        let n = self.orders.update_status(id, status, now);
        self.notify_opt(n);
    }
}
