//! Restaurant back office
//!
//! Four record pages (staff, menu, orders, customers) over one generic
//! record collection, plus a dashboard that reads across them.
//!
//! # Module layout
//!
//! ```text
//! backoffice/src/
//! ├── store/      # RecordStore: ordered records, sequential ids
//! ├── filter.rs   # search term + category tab
//! ├── session.rs  # add/edit form lifecycle
//! ├── classify.rs # status label -> badge tone
//! ├── notify.rs   # toast notifications
//! ├── pages/      # per-entity pages, routes, dashboard
//! ├── core/       # configuration, application state
//! ├── console/    # ratatui front end
//! ├── seed.rs     # demo data
//! └── utils/      # logging, money, time, validation
//! ```

pub mod classify;
pub mod console;
pub mod core;
pub mod filter;
pub mod notify;
pub mod pages;
pub mod seed;
pub mod session;
pub mod store;
pub mod utils;

pub use classify::{BadgeTone, StatusClassifier};
pub use core::{Backoffice, Config};
pub use filter::{CategoryFilter, FilterState};
pub use notify::{Notification, NotificationLevel};
pub use pages::{RecordPage, Route};
pub use session::{EditSession, Editable, FormDraft};
pub use store::{Record, RecordStore};
pub use utils::logger::init_logger;

// Re-export unified error types from shared
pub use shared::error::{AppError, AppResult, ErrorCode};
