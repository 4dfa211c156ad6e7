use super::*;

#[test]
fn english_prices_render_as_dollars_with_forced_cents() {
    assert_eq!(format_price(2.5, Language::En), "$2.50");
    assert_eq!(format_price(4.0, Language::En), "$4.00");
    assert_eq!(format_price(0.0, Language::En), "$0.00");
    assert_eq!(format_price(1234.5, Language::En), "$1,234.50");
}

#[test]
fn persian_prices_use_persian_digits_and_toman_suffix() {
    assert_eq!(format_price(4.0, Language::Fa), "۴ تومان");
    assert_eq!(format_price(2.5, Language::Fa), "۲٫۵ تومان");
    assert_eq!(format_price(2.25, Language::Fa), "۲٫۲۵ تومان");
}

#[test]
fn persian_prices_group_thousands_with_the_persian_separator() {
    assert_eq!(format_price(1234.5, Language::Fa), "۱٬۲۳۴٫۵ تومان");
    assert_eq!(format_price(1_000_000.0, Language::Fa), "۱٬۰۰۰٬۰۰۰ تومان");
}

#[test]
fn trailing_zero_decimals_are_trimmed_in_persian_only() {
    // 3.50 shows as ۳٫۵, while English keeps the forced two decimals.
    assert_eq!(format_price(3.5, Language::Fa), "۳٫۵ تومان");
    assert_eq!(format_price(3.5, Language::En), "$3.50");
}

#[test]
fn negative_inputs_clamp_to_zero() {
    assert_eq!(format_price(-1.0, Language::En), "$0.00");
    assert_eq!(format_price(-1.0, Language::Fa), "۰ تومان");
}

#[test]
fn sub_cent_amounts_round_to_the_nearest_cent() {
    assert_eq!(format_price(2.499, Language::En), "$2.50");
    assert_eq!(format_price(2.004, Language::En), "$2.00");
}
