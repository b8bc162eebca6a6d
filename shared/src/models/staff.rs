//! Staff Model

use serde::{Deserialize, Serialize};

label_enum! {
    /// Staff role
    pub enum StaffRole("role") {
        Chef => "Chef",
        Waiter => "Waiter",
        Bartender => "Bartender",
        Host => "Host",
        Manager => "Manager",
    }
}

label_enum! {
    /// Employment status
    pub enum StaffStatus("status") {
        Active => "Active",
        OnLeave => "On Leave",
        Inactive => "Inactive",
    }
}

label_enum! {
    /// Performance rating
    pub enum Performance("performance") {
        /// Freshly hired, not yet rated
        New => "New",
        Average => "Average",
        Good => "Good",
        Excellent => "Excellent",
        Poor => "Poor",
    }
}

/// Staff member entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: i64,
    pub name: String,
    pub role: StaffRole,
    pub status: StaffStatus,
    /// 0..=100
    pub efficiency: u8,
    pub shifts_completed: u32,
    /// 0..=100
    pub on_time_percentage: u8,
    pub performance: Performance,
}

impl StaffMember {
    /// Efficiency a new hire starts with
    pub const INITIAL_EFFICIENCY: u8 = 85;
    /// On-time percentage a new hire starts with
    pub const INITIAL_ON_TIME_PERCENTAGE: u8 = 100;
}

/// Add/edit staff form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffDraft {
    pub name: String,
    pub role: StaffRole,
    pub status: StaffStatus,
}

impl Default for StaffDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            role: StaffRole::Waiter,
            status: StaffStatus::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(StaffStatus::OnLeave.as_str(), "On Leave");
        assert_eq!(StaffStatus::OnLeave.to_string(), "On Leave");
        assert_eq!(StaffRole::LABELS.len(), 5);
    }

    #[test]
    fn test_parse_label_case_insensitive() {
        assert_eq!("on leave".parse::<StaffStatus>().unwrap(), StaffStatus::OnLeave);
        assert_eq!(" Chef ".parse::<StaffRole>().unwrap(), StaffRole::Chef);
        let err = "Pilot".parse::<StaffRole>().unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::InvalidChoice);
    }

    #[test]
    fn test_serialize_uses_labels() {
        let json = serde_json::to_string(&StaffStatus::OnLeave).unwrap();
        assert_eq!(json, "\"On Leave\"");

        let member = StaffMember {
            id: 6,
            name: "Lisa Martinez".to_string(),
            role: StaffRole::Host,
            status: StaffStatus::OnLeave,
            efficiency: 89,
            shifts_completed: 32,
            on_time_percentage: 96,
            performance: Performance::Good,
        };
        let value = serde_json::to_value(&member).unwrap();
        assert_eq!(value["shiftsCompleted"], 32);
        assert_eq!(value["status"], "On Leave");
    }

    #[test]
    fn test_draft_defaults() {
        let draft = StaffDraft::default();
        assert!(draft.name.is_empty());
        assert_eq!(draft.role, StaffRole::Waiter);
        assert_eq!(draft.status, StaffStatus::Active);
    }
}
