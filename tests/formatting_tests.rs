use rust_decimal::Decimal;
use std::str::FromStr;
use subtracker::utils::formatting::{PriceStyle, format_price, parse_price, renews_in_label};

fn dec(s: &str) -> Option<Decimal> {
    Some(Decimal::from_str(s).expect("valid decimal"))
}

#[test]
fn plain_price_uses_currency_code() {
    assert_eq!(format_price(dec("12.5"), "EUR", PriceStyle::Plain), "12.50 EUR");
    assert_eq!(format_price(None, "USD", PriceStyle::Plain), "0.00 USD");
}

#[test]
fn portuguese_price_uses_comma_and_symbol() {
    assert_eq!(format_price(dec("12.5"), "EUR", PriceStyle::PtPt), "12,50\u{a0}€");
    assert_eq!(format_price(dec("1234.5"), "EUR", PriceStyle::PtPt), "1234,50\u{a0}€");
    assert_eq!(
        format_price(dec("12345.678"), "EUR", PriceStyle::PtPt),
        "12\u{a0}345,68\u{a0}€"
    );
    assert_eq!(format_price(dec("3"), "CHF", PriceStyle::PtPt), "3,00\u{a0}CHF");
}

#[test]
fn user_prices_accept_comma() {
    assert_eq!(parse_price("9,99").ok(), dec("9.99"));
    assert!(parse_price("-1").is_err());
    assert!(parse_price("abc").is_err());
}

#[test]
fn renewal_labels() {
    assert_eq!(renews_in_label(0), "Renews today");
    assert_eq!(renews_in_label(1), "Renews in 1 day");
    assert_eq!(renews_in_label(5), "Renews in 5 days");
}
