//! Input validation helpers
//!
//! Text length limits and the parsers that turn raw form text into typed
//! values at commit time. Every failure is a validation error carrying the
//! field label.

use std::str::FromStr;

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};

// ── Text length limits ──────────────────────────────────────────────

/// Names: staff, menu item, customer, server
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions, preferences, order item text
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone, table
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Maximum price of a single menu item or order line
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Maximum quantity of a single order line
pub const MAX_QUANTITY: u32 = 9999;

// ── Text ─────────────────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::required_field(field));
    }
    validate_optional_text(value, field, max_len)
}

/// Validate that an optional string is within the length limit.
pub fn validate_optional_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::out_of_range(
            field,
            format!("{field} is too long ({len} chars, max {max_len})"),
        ));
    }
    Ok(())
}

// ── Numbers ──────────────────────────────────────────────────────────

/// Parse a non-negative money amount such as `24.99` or `$24.99`.
pub fn parse_amount(value: &str, field: &str) -> AppResult<Decimal> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
    let amount =
        Decimal::from_str(digits).map_err(|_| AppError::invalid_format(field, value.trim()))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(AppError::out_of_range(
            field,
            format!("{field} must be non-negative, got {amount}"),
        ));
    }
    if amount > MAX_PRICE {
        return Err(AppError::out_of_range(
            field,
            format!("{field} exceeds maximum allowed ({MAX_PRICE}), got {amount}"),
        ));
    }
    Ok(amount)
}

/// Parse an optional money amount; blank text is zero.
pub fn parse_optional_amount(value: &str, field: &str) -> AppResult<Decimal> {
    if value.trim().is_empty() {
        return Ok(Decimal::ZERO);
    }
    parse_amount(value, field)
}

/// Parse a whole number of minutes that must be positive.
pub fn parse_minutes(value: &str, field: &str) -> AppResult<u32> {
    let minutes = parse_count(value, field)?;
    if minutes == 0 {
        return Err(AppError::out_of_range(
            field,
            format!("{field} must be greater than zero"),
        ));
    }
    Ok(minutes)
}

/// Parse a non-negative whole number.
pub fn parse_count(value: &str, field: &str) -> AppResult<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| AppError::invalid_format(field, value.trim()))
}

/// Parse a positive line quantity.
pub fn parse_quantity(value: &str, field: &str) -> AppResult<u32> {
    let quantity = parse_count(value, field)?;
    if quantity == 0 || quantity > MAX_QUANTITY {
        return Err(AppError::out_of_range(
            field,
            format!("{field} must be between 1 and {MAX_QUANTITY}, got {quantity}"),
        ));
    }
    Ok(quantity)
}
