//! Staff page
//!
//! Search over name and role, tabs by role.

use chrono::NaiveDateTime;
use shared::error::AppResult;
use shared::models::{Performance, StaffDraft, StaffMember, StaffRole, StaffStatus};

use super::{Cell, RecordPage, TableRow};
use crate::classify::{STAFF_PERFORMANCE, STAFF_STATUS};
use crate::session::{Editable, FormDraft, FormField, unknown_field};
use crate::store::Record;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

pub type StaffPage = RecordPage<StaffMember>;

impl Record for StaffMember {
    type Id = i64;
    type Category = StaffRole;

    const CATEGORY_TABS: &'static [StaffRole] = StaffRole::ALL;

    fn id(&self) -> &i64 {
        &self.id
    }

    fn category(&self) -> StaffRole {
        self.role
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, self.role.as_str()]
    }
}

impl FormDraft for StaffDraft {
    const FIELDS: &'static [FormField] = &[
        FormField::text("name", "Name").required(),
        FormField::choice("role", "Role", StaffRole::LABELS),
        FormField::choice("status", "Status", StaffStatus::LABELS),
    ];

    fn read(&self, key: &str) -> Option<String> {
        match key {
            "name" => Some(self.name.clone()),
            "role" => Some(self.role.to_string()),
            "status" => Some(self.status.to_string()),
            _ => None,
        }
    }

    fn write(&mut self, key: &str, value: &str) -> AppResult<()> {
        match key {
            "name" => self.name = value.to_string(),
            "role" => self.role = value.parse()?,
            "status" => self.status = value.parse()?,
            _ => return Err(unknown_field(key)),
        }
        Ok(())
    }
}

impl Editable for StaffMember {
    type Draft = StaffDraft;

    const NOUN: &'static str = "Staff member";

    fn to_draft(&self) -> StaffDraft {
        StaffDraft {
            name: self.name.clone(),
            role: self.role,
            status: self.status,
        }
    }

    fn create(id: i64, draft: &StaffDraft, _now: NaiveDateTime) -> AppResult<Self> {
        validate_required_text(&draft.name, "Name", MAX_NAME_LEN)?;
        Ok(StaffMember {
            id,
            name: draft.name.trim().to_string(),
            role: draft.role,
            status: draft.status,
            efficiency: StaffMember::INITIAL_EFFICIENCY,
            shifts_completed: 0,
            on_time_percentage: StaffMember::INITIAL_ON_TIME_PERCENTAGE,
            performance: Performance::New,
        })
    }

    fn update(&self, draft: &StaffDraft) -> AppResult<Self> {
        validate_required_text(&draft.name, "Name", MAX_NAME_LEN)?;
        Ok(StaffMember {
            name: draft.name.trim().to_string(),
            role: draft.role,
            status: draft.status,
            ..self.clone()
        })
    }
}

impl TableRow for StaffMember {
    const COLUMNS: &'static [&'static str] = &[
        "Name",
        "Role",
        "Status",
        "Efficiency",
        "Shifts",
        "On-Time %",
        "Performance",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::plain(&self.name),
            Cell::plain(self.role.as_str()),
            Cell::badge(self.status.as_str(), STAFF_STATUS.classify(self.status.as_str())),
            Cell::plain(format!("{}%", self.efficiency)),
            Cell::plain(self.shifts_completed.to_string()),
            Cell::plain(format!("{}%", self.on_time_percentage)),
            Cell::badge(
                self.performance.as_str(),
                STAFF_PERFORMANCE.classify(self.performance.as_str()),
            ),
        ]
    }
}

pub fn new_page(records: Vec<StaffMember>) -> StaffPage {
    RecordPage::new("staff", records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::BadgeTone;
    use crate::filter::CategoryFilter;
    use crate::seed;
    use crate::utils::time::now_local;

    #[test]
    fn test_add_uses_new_hire_defaults() {
        let mut page = new_page(Vec::new());
        page.open_add();
        page.session_mut().set_field("name", "Ana").unwrap();

        let n = page.commit(now_local());
        assert!(!n.is_error());
        assert_eq!(n.message, "Staff member added successfully");

        let ana = &page.records()[0];
        assert_eq!(ana.id, 1);
        assert_eq!(ana.role, StaffRole::Waiter);
        assert_eq!(ana.status, StaffStatus::Active);
        assert_eq!(ana.efficiency, 85);
        assert_eq!(ana.shifts_completed, 0);
        assert_eq!(ana.on_time_percentage, 100);
        assert_eq!(ana.performance, Performance::New);
    }

    #[test]
    fn test_search_matches_role() {
        let mut page = new_page(seed::staff());
        page.set_search("chef");
        let names: Vec<_> = page.visible().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["John Smith", "Michael Brown"]);
    }

    #[test]
    fn test_role_tab() {
        let mut page = new_page(seed::staff());
        page.set_category(CategoryFilter::Only(StaffRole::Waiter));
        assert!(page.visible().iter().all(|s| s.role == StaffRole::Waiter));
        assert_eq!(page.cycle_category(), CategoryFilter::Only(StaffRole::Bartender));
    }

    #[test]
    fn test_edit_keeps_metrics() {
        let mut page = new_page(seed::staff());
        page.open_edit(&2).unwrap();
        page.session_mut().set_field("status", "On Leave").unwrap();
        let n = page.commit(now_local());
        assert_eq!(n.message, "Staff member updated successfully");

        let sarah = page.get(&2).unwrap();
        assert_eq!(sarah.status, StaffStatus::OnLeave);
        assert_eq!(sarah.efficiency, 88);
        assert_eq!(sarah.performance, Performance::Good);
    }

    #[test]
    fn test_invalid_choice_rejected() {
        let mut draft = StaffDraft::default();
        assert!(draft.write("role", "Pilot").is_err());
        assert_eq!(draft.role, StaffRole::Waiter);
    }

    #[test]
    fn test_cells() {
        let cells = seed::staff()[5].cells();
        assert_eq!(cells.len(), StaffMember::COLUMNS.len());
        assert_eq!(cells[2], Cell::badge("On Leave", BadgeTone::Warning));
        assert_eq!(cells[3].text, "89%");
    }
}
