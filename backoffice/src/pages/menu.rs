//! Menu page
//!
//! Search over item name, tabs by menu category.

use chrono::NaiveDateTime;
use shared::error::AppResult;
use shared::models::{MenuCategory, MenuItem, MenuItemDraft, MenuItemStatus};

use super::{Cell, RecordPage, TableRow};
use crate::classify::MENU_STATUS;
use crate::session::{Editable, FormDraft, FormField, unknown_field};
use crate::store::Record;
use crate::utils::money::format_currency;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, parse_amount, parse_minutes, validate_optional_text,
    validate_required_text,
};

pub type MenuPage = RecordPage<MenuItem>;

impl Record for MenuItem {
    type Id = i64;
    type Category = MenuCategory;

    const CATEGORY_TABS: &'static [MenuCategory] = MenuCategory::ALL;

    fn id(&self) -> &i64 {
        &self.id
    }

    fn category(&self) -> MenuCategory {
        self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name]
    }
}

impl FormDraft for MenuItemDraft {
    const FIELDS: &'static [FormField] = &[
        FormField::text("name", "Name").required(),
        FormField::choice("category", "Category", MenuCategory::LABELS),
        FormField::text("price", "Price").required(),
        FormField::text("prep_time", "Prep time (min)").required(),
        FormField::text("description", "Description"),
        FormField::choice("status", "Status", MenuItemStatus::LABELS),
    ];

    fn read(&self, key: &str) -> Option<String> {
        match key {
            "name" => Some(self.name.clone()),
            "category" => Some(self.category.to_string()),
            "price" => Some(self.price.clone()),
            "prep_time" => Some(self.prep_time.clone()),
            "description" => Some(self.description.clone()),
            "status" => Some(self.status.to_string()),
            _ => None,
        }
    }

    fn write(&mut self, key: &str, value: &str) -> AppResult<()> {
        match key {
            "name" => self.name = value.to_string(),
            "category" => self.category = value.parse()?,
            "price" => self.price = value.to_string(),
            "prep_time" => self.prep_time = value.to_string(),
            "description" => self.description = value.to_string(),
            "status" => self.status = value.parse()?,
            _ => return Err(unknown_field(key)),
        }
        Ok(())
    }
}

/// Typed form values shared by create and update
struct MenuInput {
    name: String,
    price: rust_decimal::Decimal,
    prep_time: u32,
    description: String,
}

fn parse_draft(draft: &MenuItemDraft) -> AppResult<MenuInput> {
    validate_required_text(&draft.name, "Name", MAX_NAME_LEN)?;
    validate_optional_text(&draft.description, "Description", MAX_NOTE_LEN)?;
    Ok(MenuInput {
        name: draft.name.trim().to_string(),
        price: parse_amount(&draft.price, "Price")?,
        prep_time: parse_minutes(&draft.prep_time, "Prep time")?,
        description: draft.description.trim().to_string(),
    })
}

impl Editable for MenuItem {
    type Draft = MenuItemDraft;

    const NOUN: &'static str = "Menu item";

    fn to_draft(&self) -> MenuItemDraft {
        MenuItemDraft {
            name: self.name.clone(),
            category: self.category,
            price: self.price.to_string(),
            prep_time: self.prep_time.to_string(),
            description: self.description.clone(),
            status: self.status,
        }
    }

    fn create(id: i64, draft: &MenuItemDraft, _now: NaiveDateTime) -> AppResult<Self> {
        let input = parse_draft(draft)?;
        Ok(MenuItem {
            id,
            name: input.name,
            category: draft.category,
            price: input.price,
            prep_time: input.prep_time,
            rating: 0.0,
            orders: 0,
            status: draft.status,
            description: input.description,
        })
    }

    fn update(&self, draft: &MenuItemDraft) -> AppResult<Self> {
        let input = parse_draft(draft)?;
        Ok(MenuItem {
            name: input.name,
            category: draft.category,
            price: input.price,
            prep_time: input.prep_time,
            status: draft.status,
            description: input.description,
            ..self.clone()
        })
    }
}

impl TableRow for MenuItem {
    const COLUMNS: &'static [&'static str] = &[
        "Name",
        "Category",
        "Price",
        "Prep Time",
        "Rating",
        "Orders",
        "Status",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::plain(&self.name),
            Cell::plain(self.category.as_str()),
            Cell::plain(format_currency(self.price)),
            Cell::plain(format!("{} min", self.prep_time)),
            Cell::plain(format!("{:.1}", self.rating)),
            Cell::plain(self.orders.to_string()),
            Cell::badge(self.status.as_str(), MENU_STATUS.classify(self.status.as_str())),
        ]
    }
}

pub fn new_page(records: Vec<MenuItem>) -> MenuPage {
    RecordPage::new("menu", records)
}
