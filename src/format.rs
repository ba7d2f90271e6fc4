//! Display helpers for won amounts and percentages.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

const MAN: Decimal = dec!(10000);

/// Formats a won amount rounded down, e.g. `₩4,231,804`.
///
/// # Examples
///
/// ```
/// use pay_calculator::format::format_won;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_won(Decimal::new(423180428, 2)), "₩4,231,804");
/// assert_eq!(format_won(Decimal::from(-1500)), "-₩1,500");
/// ```
pub fn format_won(amount: Decimal) -> String {
    with_symbol(amount.floor())
}

/// Formats a won amount rounded to the nearest won.
pub fn format_won_rounded(amount: Decimal) -> String {
    with_symbol(amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
}

/// Formats an amount rounded down with thousands separators and no symbol.
pub fn format_amount(amount: Decimal) -> String {
    let whole = amount.floor();
    let sign = if whole.is_sign_negative() && !whole.is_zero() { "-" } else { "" };
    format!("{}{}", sign, group_thousands(&whole.abs().to_string()))
}

/// Formats an amount in units of 10,000 won, e.g. `5,668.892만원`.
///
/// Keeps at most three fraction digits and drops trailing zeros.
pub fn format_man_won(amount: Decimal) -> String {
    let man = (amount / MAN)
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let sign = if man.is_sign_negative() && !man.is_zero() { "-" } else { "" };
    let digits = man.abs().to_string();

    match digits.split_once('.') {
        Some((whole, fraction)) => format!("{}{}.{}만원", sign, group_thousands(whole), fraction),
        None => format!("{}{}만원", sign, group_thousands(&digits)),
    }
}

/// Formats a percentage with a fixed number of decimal places, e.g. `61.96%`.
pub fn format_percent(value: Decimal, decimal_places: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}%", decimal_places as usize, rounded)
}

fn with_symbol(whole: Decimal) -> String {
    if whole.is_sign_negative() && !whole.is_zero() {
        format!("-₩{}", group_thousands(&whole.abs().to_string()))
    } else {
        format!("₩{}", group_thousands(&whole.abs().to_string()))
    }
}

/// Inserts a comma every three digits from the right of an unsigned integer string.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
