//! Formatting utilities used for CLI and export outputs.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Parse a user-typed amount. Both `9.99` and `9,99` are accepted.
pub fn parse_price(input: &str) -> AppResult<Decimal> {
    let normalized = input.trim().replace(',', ".");
    let price =
        Decimal::from_str(&normalized).map_err(|_| AppError::InvalidPrice(input.to_string()))?;

    if price < Decimal::ZERO {
        return Err(AppError::InvalidPrice(format!(
            "{input} (must be zero or positive)"
        )));
    }
    Ok(price)
}

/// How amounts are written on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceStyle {
    /// `12.50 EUR`
    #[default]
    Plain,
    /// `12,50 €`, Portuguese locale currency format
    PtPt,
}

const NBSP: char = '\u{a0}';

fn currency_symbol(code: &str) -> &str {
    match code {
        "EUR" => "€",
        "USD" => "US$",
        "GBP" => "£",
        "BRL" => "R$",
        other => other,
    }
}

/// Integer digits grouped by thousands with a no-break space, only from five
/// digits up (`1234`, `12 345`).
fn group_thousands(digits: &str) -> String {
    if digits.len() < 5 {
        return digits.to_string();
    }

    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(NBSP);
        }
        out.push(c);
    }
    out
}

/// Amount with two decimals and its currency, e.g. `12.50 EUR` or `12,50 €`.
/// A missing price renders as zero.
pub fn format_price(price: Option<Decimal>, currency: &str, style: PriceStyle) -> String {
    let amount = price
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let plain = format!("{:.2}", amount);

    match style {
        PriceStyle::Plain => format!("{} {}", plain, currency),
        PriceStyle::PtPt => {
            let (sign, unsigned) = match plain.strip_prefix('-') {
                Some(rest) => ("-", rest),
                None => ("", plain.as_str()),
            };
            let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

            format!(
                "{}{},{}{}{}",
                sign,
                group_thousands(int_part),
                frac_part,
                NBSP,
                currency_symbol(currency)
            )
        }
    }
}

/// Human label for the distance to a renewal.
pub fn renews_in_label(days: i64) -> String {
    match days {
        d if d <= 0 => "Renews today".to_string(),
        1 => "Renews in 1 day".to_string(),
        d => format!("Renews in {} days", d),
    }
}

