//! Utilities: validation, money, time and logging

pub mod logger;
pub mod money;
pub mod time;
pub mod validation;

pub use money::format_currency;
pub use time::{format_clock, now_local};
