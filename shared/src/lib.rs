//! Shared types for the restaurant back-office
//!
//! Record models, form drafts and the error system used by the
//! back-office pages and the console.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
