//! Per-language price rendering.
//!
//! English prices render as US dollars (`$1,234.50`); Persian prices
//! render in toman with Persian digits and separators (`۱٬۲۳۴٫۵ تومان`),
//! decimals shown only when present. Prices are currency-agnostic numbers
//! in the data model; formatting is purely a display concern.

use crate::model::Language;

const PERSIAN_THOUSANDS_SEPARATOR: char = '\u{66C}';
const PERSIAN_DECIMAL_SEPARATOR: char = '\u{66B}';

/// Render `price` for the given language. Prices are non-negative by
/// invariant; negative inputs clamp to zero.
#[must_use]
pub fn format_price(price: f64, language: Language) -> String {
    let cents = to_cents(price);
    match language {
        Language::En => format_dollars(cents),
        Language::Fa => format_toman(cents),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_cents(price: f64) -> u64 {
    (price.max(0.0) * 100.0).round() as u64
}

fn format_dollars(cents: u64) -> String {
    format!("${}.{:02}", group_digits(&(cents / 100).to_string(), ','), cents % 100)
}

fn format_toman(cents: u64) -> String {
    let mut rendered = group_digits(&(cents / 100).to_string(), PERSIAN_THOUSANDS_SEPARATOR);
    let fraction = cents % 100;
    if fraction != 0 {
        rendered.push(PERSIAN_DECIMAL_SEPARATOR);
        if fraction % 10 == 0 {
            rendered.push_str(&(fraction / 10).to_string());
        } else {
            rendered.push_str(&format!("{fraction:02}"));
        }
    }
    format!("{} تومان", to_persian_digits(&rendered))
}

/// Insert `separator` every three digits from the right.
fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        let remaining = digits.len() - index;
        if index > 0 && remaining % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

fn to_persian_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '0'..='9' => {
                let offset = u32::from(c) - u32::from('0');
                char::from_u32(u32::from('\u{6F0}') + offset).unwrap_or(c)
            }
            other => other,
        })
        .collect()
}

#[cfg(test)]
#[path = "format_test.rs"]
mod tests;
