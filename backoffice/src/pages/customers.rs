//! Customers page
//!
//! Search over name, email and phone, tabs by loyalty status.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use shared::error::AppResult;
use shared::models::{Customer, CustomerDraft, CustomerStatus};

use super::{Cell, RecordPage, TableRow};
use crate::classify::CUSTOMER_STATUS;
use crate::session::{Editable, FormDraft, FormField, unknown_field};
use crate::store::Record;
use crate::utils::money::format_currency;
use crate::utils::time::format_date;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};

pub type CustomersPage = RecordPage<Customer>;

impl Record for Customer {
    type Id = i64;
    type Category = CustomerStatus;

    const CATEGORY_TABS: &'static [CustomerStatus] = CustomerStatus::ALL;

    fn id(&self) -> &i64 {
        &self.id
    }

    fn category(&self) -> CustomerStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.phone]
    }
}

impl FormDraft for CustomerDraft {
    const FIELDS: &'static [FormField] = &[
        FormField::text("name", "Name").required(),
        FormField::text("email", "Email").required(),
        FormField::text("phone", "Phone"),
        FormField::text("preferences", "Preferences"),
    ];

    fn read(&self, key: &str) -> Option<String> {
        match key {
            "name" => Some(self.name.clone()),
            "email" => Some(self.email.clone()),
            "phone" => Some(self.phone.clone()),
            "preferences" => Some(self.preferences.clone()),
            _ => None,
        }
    }

    fn write(&mut self, key: &str, value: &str) -> AppResult<()> {
        match key {
            "name" => self.name = value.to_string(),
            "email" => self.email = value.to_string(),
            "phone" => self.phone = value.to_string(),
            "preferences" => self.preferences = value.to_string(),
            _ => return Err(unknown_field(key)),
        }
        Ok(())
    }
}

fn validate_draft(draft: &CustomerDraft) -> AppResult<()> {
    validate_required_text(&draft.name, "Name", MAX_NAME_LEN)?;
    validate_required_text(&draft.email, "Email", MAX_EMAIL_LEN)?;
    validate_optional_text(&draft.phone, "Phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&draft.preferences, "Preferences", MAX_NOTE_LEN)
}

impl Editable for Customer {
    type Draft = CustomerDraft;

    const NOUN: &'static str = "Customer";
    const MISSING_FIELDS_MESSAGE: &'static str = "Please enter name and email";

    fn to_draft(&self) -> CustomerDraft {
        CustomerDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            preferences: self.preferences.clone(),
        }
    }

    fn create(id: i64, draft: &CustomerDraft, _now: NaiveDateTime) -> AppResult<Self> {
        validate_draft(draft)?;
        Ok(Customer {
            id,
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            phone: draft.phone.trim().to_string(),
            visits: 0,
            last_visit: None,
            total_spent: Decimal::ZERO,
            status: CustomerStatus::New,
            preferences: draft.preferences.trim().to_string(),
        })
    }

    fn update(&self, draft: &CustomerDraft) -> AppResult<Self> {
        validate_draft(draft)?;
        Ok(Customer {
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            phone: draft.phone.trim().to_string(),
            preferences: draft.preferences.trim().to_string(),
            ..self.clone()
        })
    }
}

impl TableRow for Customer {
    const COLUMNS: &'static [&'static str] = &[
        "Name",
        "Contact",
        "Visits",
        "Last Visit",
        "Total Spent",
        "Status",
        "Preferences",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::plain(&self.name),
            Cell::plain(format!("{} / {}", self.email, self.phone)),
            Cell::plain(self.visits.to_string()),
            Cell::plain(format_date(self.last_visit)),
            Cell::plain(format_currency(self.total_spent)),
            Cell::badge(self.status.as_str(), CUSTOMER_STATUS.classify(self.status.as_str())),
            Cell::plain(&self.preferences),
        ]
    }
}

pub fn new_page(records: Vec<Customer>) -> CustomersPage {
    RecordPage::new("customers", records)
}
