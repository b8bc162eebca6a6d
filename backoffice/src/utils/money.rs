//! Money calculation and formatting using rust_decimal for precision

use rust_decimal::prelude::*;
use shared::models::OrderItem;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Round to cents, half away from zero
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Sum of quantity × unit price over all lines
pub fn items_total(items: &[OrderItem]) -> Decimal {
    round_money(items.iter().map(OrderItem::line_total).sum())
}

/// Amount due after a flat discount, never below zero
pub fn final_total(total: Decimal, discount: Decimal) -> Decimal {
    round_money((total - discount).max(Decimal::ZERO))
}

/// `$84.94`, always two decimals, thousands separated
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_money(value);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("{}${}.{}", sign, group_thousands(whole), cents)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_items_total_precision() {
        let items = vec![
            OrderItem::new("Beef Burger", 2, dec("16.99")),
            OrderItem::new("Vegetable Curry", 1, dec("17.99")),
            OrderItem::new("Fresh Lemonade", 2, dec("4.99")),
            OrderItem::new("Tiramisu", 1, dec("8.99")),
        ];
        assert_eq!(items_total(&items), dec("70.94"));
        assert_eq!(items_total(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_final_total() {
        assert_eq!(final_total(dec("84.94"), dec("5")), dec("79.94"));
        assert_eq!(final_total(dec("3"), dec("5")), Decimal::ZERO);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec("84.94")), "$84.94");
        assert_eq!(format_currency(dec("5")), "$5.00");
        assert_eq!(format_currency(dec("1245.8")), "$1,245.80");
        assert_eq!(format_currency(dec("1234567.891")), "$1,234,567.89");
        assert_eq!(format_currency(dec("-3")), "-$3.00");
        assert_eq!(format_currency(Decimal::ZERO), "$0.00");
    }
}
