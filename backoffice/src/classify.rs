//! Status → badge classification
//!
//! One lookup table per entity field. Any value missing from a table,
//! including text that is not a known enum label, falls back to
//! [`BadgeTone::Neutral`].

use serde::Serialize;

/// Presentation tone of a badge or cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Success,
    Info,
    Warning,
    Danger,
    Accent,
    Muted,
    Neutral,
}

impl BadgeTone {
    /// Utility-class string for HTML renderers
    pub fn class(&self) -> &'static str {
        match self {
            BadgeTone::Success => "bg-green-100 text-green-800",
            BadgeTone::Info => "bg-blue-100 text-blue-800",
            BadgeTone::Warning => "bg-yellow-100 text-yellow-800",
            BadgeTone::Danger => "bg-red-100 text-red-800",
            BadgeTone::Accent => "bg-purple-100 text-purple-800",
            BadgeTone::Muted => "text-gray-500",
            BadgeTone::Neutral => "bg-gray-100 text-gray-800",
        }
    }
}

/// Total mapping from a label to a [`BadgeTone`]
#[derive(Debug, Clone, Copy)]
pub struct StatusClassifier {
    entries: &'static [(&'static str, BadgeTone)],
}

impl StatusClassifier {
    pub const fn new(entries: &'static [(&'static str, BadgeTone)]) -> Self {
        Self { entries }
    }

    pub fn classify(&self, value: &str) -> BadgeTone {
        self.entries
            .iter()
            .find(|(label, _)| *label == value)
            .map(|(_, tone)| *tone)
            .unwrap_or(BadgeTone::Neutral)
    }
}

pub const STAFF_STATUS: StatusClassifier = StatusClassifier::new(&[
    ("Active", BadgeTone::Success),
    ("On Leave", BadgeTone::Warning),
    ("Inactive", BadgeTone::Danger),
]);

pub const STAFF_PERFORMANCE: StatusClassifier = StatusClassifier::new(&[
    ("Excellent", BadgeTone::Success),
    ("Good", BadgeTone::Info),
    ("Average", BadgeTone::Warning),
    ("Poor", BadgeTone::Danger),
]);

pub const MENU_STATUS: StatusClassifier = StatusClassifier::new(&[
    ("Available", BadgeTone::Success),
    ("Seasonal", BadgeTone::Info),
    ("Out of Stock", BadgeTone::Danger),
]);

pub const ORDER_STATUS: StatusClassifier = StatusClassifier::new(&[
    ("Completed", BadgeTone::Success),
    ("In Progress", BadgeTone::Warning),
    ("Pending", BadgeTone::Info),
    ("Cancelled", BadgeTone::Danger),
]);

pub const CUSTOMER_STATUS: StatusClassifier = StatusClassifier::new(&[
    ("VIP", BadgeTone::Accent),
    ("Regular", BadgeTone::Info),
    ("New", BadgeTone::Success),
]);

/// Service-time cell: gray until completed, then green or red
pub fn service_time_tone(completed: bool, on_time: Option<bool>) -> BadgeTone {
    if !completed {
        return BadgeTone::Muted;
    }
    match on_time {
        Some(true) => BadgeTone::Success,
        _ => BadgeTone::Danger,
    }
}
