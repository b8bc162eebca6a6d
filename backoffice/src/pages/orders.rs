//! Orders page
//!
//! Search over order number, table and server; tabs for In Progress and
//! Completed. Besides the add/edit form, orders move through status
//! transitions, and completing one stamps its service time.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Order, OrderDraft, OrderItem, OrderStatus};

use super::{Cell, RecordPage, TableRow};
use crate::classify::{BadgeTone, ORDER_STATUS, service_time_tone};
use crate::notify::Notification;
use crate::session::{Editable, FormDraft, FormField, unknown_field};
use crate::store::Record;
use crate::utils::money::{final_total, format_currency, items_total};
use crate::utils::time::{elapsed_minutes, format_clock};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, parse_amount, parse_minutes,
    parse_optional_amount, parse_quantity, validate_optional_text, validate_required_text,
};

pub type OrdersPage = RecordPage<Order>;

impl Record for Order {
    type Id = String;
    type Category = OrderStatus;

    const CATEGORY_TABS: &'static [OrderStatus] =
        &[OrderStatus::InProgress, OrderStatus::Completed];

    fn id(&self) -> &String {
        &self.id
    }

    fn category(&self) -> OrderStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.id, &self.table, &self.server]
    }
}

// ========== Item text ==========

/// Parse order lines written as `2 x Grilled Salmon @ 24.99`.
///
/// Lines are separated by `;` or newlines. The `N x` prefix is optional and
/// defaults to a quantity of one.
pub fn parse_items(text: &str) -> AppResult<Vec<OrderItem>> {
    let items = text
        .split([';', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_item_line)
        .collect::<AppResult<Vec<_>>>()?;
    if items.is_empty() {
        return Err(AppError::new(ErrorCode::OrderItemsEmpty));
    }
    Ok(items)
}

fn parse_item_line(line: &str) -> AppResult<OrderItem> {
    let malformed = || {
        AppError::with_message(
            ErrorCode::OrderItemMalformed,
            format!("Cannot read order item {:?}, expected \"2 x Name @ 9.99\"", line),
        )
        .with_detail("line", line)
    };

    let (head, price) = line.rsplit_once('@').ok_or_else(malformed)?;
    let price = parse_amount(price, "Item price")?;
    let head = head.trim();

    // A leading number must be followed by a standalone `x` and whitespace
    let digits = head.find(|c: char| !c.is_ascii_digit()).unwrap_or(head.len());
    let (quantity, name) = if digits == 0 {
        (1, head)
    } else {
        let (qty, rest) = head.split_at(digits);
        let name = rest
            .trim_start()
            .strip_prefix(['x', 'X', '×'])
            .filter(|name| name.starts_with(char::is_whitespace))
            .ok_or_else(malformed)?;
        (parse_quantity(qty, "Quantity")?, name.trim())
    };
    if name.is_empty() {
        return Err(malformed());
    }
    Ok(OrderItem::new(name, quantity, price))
}

/// Inverse of [`parse_items`], one line per item joined by `; `
pub fn format_items(items: &[OrderItem]) -> String {
    items
        .iter()
        .map(|i| format!("{} x {} @ {}", i.quantity, i.name, i.price))
        .collect::<Vec<_>>()
        .join("; ")
}

// ========== Form ==========

impl FormDraft for OrderDraft {
    const FIELDS: &'static [FormField] = &[
        FormField::text("table", "Table").required(),
        FormField::text("server", "Server").required(),
        FormField::text("items", "Items (2 x Name @ 9.99; ...)").required(),
        FormField::text("expected_time", "Expected time (min)").required(),
        FormField::text("discount", "Discount"),
    ];

    fn read(&self, key: &str) -> Option<String> {
        match key {
            "table" => Some(self.table.clone()),
            "server" => Some(self.server.clone()),
            "items" => Some(self.items.clone()),
            "expected_time" => Some(self.expected_time.clone()),
            "discount" => Some(self.discount.clone()),
            _ => None,
        }
    }

    fn write(&mut self, key: &str, value: &str) -> AppResult<()> {
        match key {
            "table" => self.table = value.to_string(),
            "server" => self.server = value.to_string(),
            "items" => self.items = value.to_string(),
            "expected_time" => self.expected_time = value.to_string(),
            "discount" => self.discount = value.to_string(),
            _ => return Err(unknown_field(key)),
        }
        Ok(())
    }
}

struct OrderInput {
    table: String,
    server: String,
    items: Vec<OrderItem>,
    expected_time: u32,
    total: Decimal,
    discount: Decimal,
}

fn parse_draft(draft: &OrderDraft) -> AppResult<OrderInput> {
    validate_required_text(&draft.table, "Table", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&draft.server, "Server", MAX_NAME_LEN)?;
    validate_optional_text(&draft.items, "Items", MAX_NOTE_LEN)?;
    let items = parse_items(&draft.items)?;
    Ok(OrderInput {
        table: draft.table.trim().to_string(),
        server: draft.server.trim().to_string(),
        total: items_total(&items),
        items,
        expected_time: parse_minutes(&draft.expected_time, "Expected time")?,
        discount: parse_optional_amount(&draft.discount, "Discount")?,
    })
}

impl Editable for Order {
    type Draft = OrderDraft;

    const NOUN: &'static str = "Order";

    fn to_draft(&self) -> OrderDraft {
        OrderDraft {
            table: self.table.clone(),
            server: self.server.clone(),
            items: format_items(&self.items),
            expected_time: self.expected_time.to_string(),
            discount: self.discount.to_string(),
        }
    }

    fn create(id: String, draft: &OrderDraft, now: NaiveDateTime) -> AppResult<Self> {
        let input = parse_draft(draft)?;
        Ok(Order {
            id,
            table: input.table,
            server: input.server,
            items: input.items,
            status: OrderStatus::Pending,
            start_time: now,
            end_time: None,
            total_time: None,
            expected_time: input.expected_time,
            total: input.total,
            discount: input.discount,
            on_time: None,
        })
    }

    fn update(&self, draft: &OrderDraft) -> AppResult<Self> {
        let input = parse_draft(draft)?;
        let mut order = Order {
            table: input.table,
            server: input.server,
            items: input.items,
            expected_time: input.expected_time,
            total: input.total,
            discount: input.discount,
            ..self.clone()
        };
        // A new expectation changes the verdict of a completed order
        if let Some(total_time) = order.total_time.filter(|_| order.is_completed()) {
            order.on_time = Some(total_time <= order.expected_time);
        }
        Ok(order)
    }
}

// ========== Status transitions ==========

/// `order` moved to `status` at `now`; `None` when nothing would change.
///
/// Completing stamps the end time and the elapsed whole minutes since the
/// start, and judges them against the expected time. Any other status
/// clears the completion fields.
pub fn with_status(order: &Order, status: OrderStatus, now: NaiveDateTime) -> Option<Order> {
    if order.status == status {
        return None;
    }
    let mut next = order.clone();
    next.status = status;
    if status == OrderStatus::Completed {
        let total_time = elapsed_minutes(order.start_time, now);
        next.end_time = Some(now);
        next.total_time = Some(total_time);
        next.on_time = Some(total_time <= order.expected_time);
    } else {
        next.end_time = None;
        next.total_time = None;
        next.on_time = None;
    }
    Some(next)
}

/// `order` completed at `now`; an already completed order is returned as is
pub fn mark_completed(order: &Order, now: NaiveDateTime) -> Order {
    with_status(order, OrderStatus::Completed, now).unwrap_or_else(|| order.clone())
}

impl RecordPage<Order> {
    /// Move order `id` to `status`
    ///
    /// Returns `None` when the order does not exist or already has `status`.
    pub fn update_status(
        &mut self,
        id: &str,
        status: OrderStatus,
        now: NaiveDateTime,
    ) -> Option<Notification> {
        let id = id.to_string();
        let Some(current) = self.get(&id) else {
            tracing::debug!(page = self.name(), id = %id, "Status change for absent order ignored");
            return None;
        };
        let from = current.status;
        let next = with_status(current, status, now)?;
        let total_time = next.total_time;
        self.store_mut().replace_by_id(&id, next);
        tracing::info!(
            page = self.name(),
            id = %id,
            from = %from,
            to = %status,
            total_time = ?total_time,
            "Order status updated"
        );
        Some(Notification::success(format!(
            "Order #{} updated to \"{}\"",
            id, status
        )))
    }

    pub fn mark_completed(&mut self, id: &str, now: NaiveDateTime) -> Option<Notification> {
        self.update_status(id, OrderStatus::Completed, now)
    }

    /// Detail view of order `id`
    pub fn detail(&self, id: &str) -> AppResult<OrderDetail> {
        self.get(&id.to_string())
            .map(OrderDetail::from)
            .ok_or_else(|| {
                AppError::with_message(ErrorCode::OrderNotFound, format!("Order #{} not found", id))
            })
    }
}

// ========== Presentation ==========

/// Service-time text for the table: `27 min ✓`, `33 min ⚠`, or `-`
pub fn service_time_cell(order: &Order) -> String {
    match (order.is_completed(), order.total_time) {
        (true, Some(minutes)) => {
            let mark = if order.on_time == Some(true) { "✓" } else { "⚠" };
            format!("{} min {}", minutes, mark)
        }
        _ => "-".to_string(),
    }
}

impl TableRow for Order {
    const COLUMNS: &'static [&'static str] = &[
        "Order ID",
        "Table",
        "Server",
        "Items",
        "Status",
        "Start Time",
        "Service Time",
        "Total",
    ];

    fn cells(&self) -> Vec<Cell> {
        let total = if self.discount > Decimal::ZERO {
            format!(
                "{} (-{} off)",
                format_currency(self.total),
                format_currency(self.discount)
            )
        } else {
            format_currency(self.total)
        };
        vec![
            Cell::plain(format!("#{}", self.id)),
            Cell::plain(&self.table),
            Cell::plain(&self.server),
            Cell::plain(format!("{} items", self.item_count())),
            Cell::badge(self.status.as_str(), ORDER_STATUS.classify(self.status.as_str())),
            Cell::plain(format_clock(self.start_time)),
            Cell::badge(
                service_time_cell(self),
                service_time_tone(self.is_completed(), self.on_time),
            ),
            Cell::plain(total),
        ]
    }
}

/// One line of the detail view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

/// Everything the order detail modal shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    pub id: String,
    pub table: String,
    pub server: String,
    pub date: NaiveDate,
    pub status: OrderStatus,
    pub status_tone: BadgeTone,
    /// `12:15 PM - 12:42 PM`, or `12:22 PM - In Progress`
    pub time_range: String,
    pub lines: Vec<DetailLine>,
    pub item_count: u32,
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub final_total: Decimal,
    /// `27 min (On time)`, `33 min (Delayed)` or `In Progress`
    pub service_time: String,
    pub service_tone: BadgeTone,
    pub expected_time: u32,
}

impl From<&Order> for OrderDetail {
    fn from(order: &Order) -> Self {
        let end = order
            .end_time
            .map(format_clock)
            .unwrap_or_else(|| "In Progress".to_string());
        let service_time = match (order.is_completed(), order.total_time) {
            (true, Some(minutes)) => format!(
                "{} min ({})",
                minutes,
                if order.on_time == Some(true) { "On time" } else { "Delayed" }
            ),
            _ => "In Progress".to_string(),
        };
        OrderDetail {
            id: order.id.clone(),
            table: order.table.clone(),
            server: order.server.clone(),
            date: order.date(),
            status: order.status,
            status_tone: ORDER_STATUS.classify(order.status.as_str()),
            time_range: format!("{} - {}", format_clock(order.start_time), end),
            lines: order
                .items
                .iter()
                .map(|i| DetailLine {
                    name: i.name.clone(),
                    quantity: i.quantity,
                    unit_price: i.price,
                    line_total: i.line_total(),
                })
                .collect(),
            item_count: order.item_count(),
            subtotal: order.total,
            discount: order.discount,
            final_total: final_total(order.total, order.discount),
            service_time,
            service_tone: service_time_tone(order.is_completed(), order.on_time),
            expected_time: order.expected_time,
        }
    }
}

pub fn new_page(records: Vec<Order>) -> OrdersPage {
    RecordPage::new("orders", records)
}
