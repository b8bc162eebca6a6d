//! End-to-end flows over a seeded back office

use backoffice::utils::time::parse_clock;
use backoffice::{Backoffice, CategoryFilter, Config, ErrorCode, NotificationLevel, Route};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use shared::models::{
    CustomerStatus, MenuCategory, OrderStatus, Performance, StaffRole, StaffStatus,
};
use std::str::FromStr;

fn seeded() -> Backoffice {
    Backoffice::new(&Config::with_overrides(true))
}

fn at(clock: &str) -> NaiveDateTime {
    parse_clock(NaiveDate::from_ymd_opt(2025, 4, 23).unwrap(), clock).unwrap()
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn test_add_staff_member_with_defaults() {
    let mut state = seeded();
    state.staff.open_add();
    let session = state.staff.session_mut();
    session.set_field("name", "Ana").unwrap();
    session.set_field("role", "Chef").unwrap();

    let n = state.staff.commit(at("09:00 AM"));
    assert_eq!(n.level, NotificationLevel::Success);
    assert_eq!(n.message, "Staff member added successfully");

    let ana = state.staff.get(&7).unwrap();
    assert_eq!(ana.name, "Ana");
    assert_eq!(ana.role, StaffRole::Chef);
    assert_eq!(ana.status, StaffStatus::Active);
    assert_eq!(ana.efficiency, 85);
    assert_eq!(ana.shifts_completed, 0);
    assert_eq!(ana.on_time_percentage, 100);
    assert_eq!(ana.performance, Performance::New);
    assert!(!state.staff.session().is_open());
}

#[test]
fn test_add_first_staff_member() {
    let mut state = Backoffice::new(&Config::with_overrides(false));
    state.staff.open_add();
    state.staff.session_mut().set_field("name", "Ana").unwrap();
    state.staff.commit(at("09:00 AM"));

    let records = state.staff.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 1);
    assert_eq!(records[0].role, StaffRole::Waiter);
    assert_eq!(records[0].status, StaffStatus::Active);
}

#[test]
fn test_order_final_total_after_discount() {
    let state = seeded();
    let detail = state.orders.detail("78941").unwrap();
    assert_eq!(detail.subtotal, dec("84.94"));
    assert_eq!(detail.discount, dec("5"));
    assert_eq!(detail.final_total, dec("79.94"));
    assert_eq!(detail.service_time, "33 min (Delayed)");

    let err = state.orders.detail("1").unwrap_err();
    assert_eq!(err.code, ErrorCode::OrderNotFound);
}

#[test]
fn test_menu_tab_and_search_combine() {
    let mut state = seeded();
    state.navigate(Route::Menu);
    state.menu.set_category(CategoryFilter::Only(MenuCategory::Desserts));
    state.menu.set_search("CHOC");
    let names: Vec<_> = state.menu.visible().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Chocolate Cake"]);

    state.menu.set_search("");
    assert_eq!(state.menu.visible().len(), 2);
}

#[test]
fn test_customer_phone_search() {
    let mut state = seeded();
    state.customers.set_search("555-123");
    let found = state.customers.visible();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Alice Johnson");
}

#[test]
fn test_failed_validation_leaves_store_untouched() {
    let mut state = seeded();
    let before = state.menu.records().to_vec();

    state.menu.open_add();
    state.menu.session_mut().set_field("name", "Soup").unwrap();
    let n = state.menu.commit(at("09:00 AM"));
    assert_eq!(n.level, NotificationLevel::Error);
    assert!(state.menu.session().is_open());
    assert_eq!(state.menu.records(), before.as_slice());

    state.menu.cancel();
    assert!(!state.menu.session().is_open());
    assert_eq!(state.menu.records(), before.as_slice());
}

#[test]
fn test_ids_are_never_reused() {
    let mut state = seeded();
    state.customers.delete(&6).unwrap();

    state.customers.open_add();
    let session = state.customers.session_mut();
    session.set_field("name", "Zoe Park").unwrap();
    session.set_field("email", "zoe@example.com").unwrap();
    state.customers.commit(at("09:00 AM"));

    let zoe = state.customers.records().last().unwrap();
    assert_eq!(zoe.id, 7);
    assert_eq!(zoe.status, CustomerStatus::New);
    assert!(state.customers.get(&6).is_none());
}

#[test]
fn test_edit_works_on_a_copy() {
    let mut state = seeded();
    state.customers.open_edit(&1).unwrap();
    state.customers.session_mut().set_field("name", "Alice J.").unwrap();
    assert_eq!(state.customers.get(&1).unwrap().name, "Alice Johnson");

    state.customers.cancel();
    assert_eq!(state.customers.get(&1).unwrap().name, "Alice Johnson");

    state.customers.open_edit(&1).unwrap();
    state.customers.session_mut().set_field("name", "Alice J.").unwrap();
    let n = state.customers.commit(at("09:00 AM"));
    assert_eq!(n.message, "Customer updated successfully");
    let alice = state.customers.get(&1).unwrap();
    assert_eq!(alice.name, "Alice J.");
    assert_eq!(alice.visits, 12);
    assert_eq!(state.customers.records().len(), 6);
}

#[test]
fn test_mark_completed_late_order() {
    let mut state = seeded();
    state.orders.open_add();
    let session = state.orders.session_mut();
    session.set_field("table", "4").unwrap();
    session.set_field("server", "Emily Davis").unwrap();
    session.set_field("items", "2 x Beef Burger @ 16.99").unwrap();
    session.set_field("expected_time", "30").unwrap();
    state.orders.commit(at("11:48 AM"));

    let id = state.orders.records().last().unwrap().id.clone();
    assert_eq!(id, "78944");
    assert_eq!(state.orders.get(&id).unwrap().status, OrderStatus::Pending);

    let n = state.orders.mark_completed(&id, at("12:21 PM")).unwrap();
    assert_eq!(n.message, "Order #78944 updated to \"Completed\"");

    let order = state.orders.get(&id).unwrap();
    assert_eq!(order.status, OrderStatus::Completed);
    assert_eq!(order.end_time, Some(at("12:21 PM")));
    assert_eq!(order.total_time, Some(33));
    assert_eq!(order.on_time, Some(false));
    assert_eq!(order.total, dec("33.98"));
}

#[test]
fn test_unknown_route_keeps_current_page() {
    let mut state = seeded();
    state.navigate(Route::Orders);
    let err = state.navigate_path("/reports").unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
    assert_eq!(state.route(), Route::Orders);
}
