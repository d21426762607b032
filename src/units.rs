use std::str::FromStr;

use chrono::NaiveDate;
use itertools::Itertools;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::Error;

pub type Seconds = u64;

/// Format of the `workDate` column, e.g. `Jan 5, 2024`.
pub const DATE_FORMAT: &str = "%b %d, %Y";

/// Placeholder used by the export for "no value".
const BLANK: &str = "-";

fn is_blank(text: &str) -> bool {
    text.is_empty() || text == BLANK
}

/// Convert duration text like `1m 8s` or `9m` to seconds.
///
/// Tokens are whitespace separated and may appear in any order. Only tokens
/// ending in `m` or `s` count; anything else is ignored.
pub fn parse_duration(text: &str) -> Result<Seconds, Error> {
    let text = text.trim();
    if is_blank(text) {
        return Ok(0);
    }

    text.split_whitespace().try_fold(0, |total, token| -> Result<Seconds, Error> {
        let (number, scale) = if let Some(minutes) = token.strip_suffix('m') {
            (minutes, 60)
        } else if let Some(seconds) = token.strip_suffix('s') {
            (seconds, 1)
        } else {
            return Ok(total);
        };
        let invalid = |reason: String| Error::InvalidDuration {
            text: text.to_string(),
            reason,
        };
        let value: Seconds = number
            .parse()
            .map_err(|e| invalid(format!("token `{}`: {}", token, e)))?;
        value
            .checked_mul(scale)
            .and_then(|value| total.checked_add(value))
            .ok_or_else(|| invalid("overflow".to_string()))
    })
}

/// Render seconds as `1h 2m 3s`, leaving out zero components.
pub fn format_duration(seconds: Seconds) -> String {
    if seconds == 0 {
        return "0m 0s".to_string();
    }

    let hours = seconds / 3600;
    let minutes = seconds % 3600 / 60;
    let seconds = seconds % 60;

    [(hours, 'h'), (minutes, 'm'), (seconds, 's')]
        .iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| format!("{}{}", value, unit))
        .join(" ")
}

/// Convert `$12.50` (or `12.50`) to an amount. Blank values are zero.
pub fn parse_money(text: &str) -> Result<Decimal, Error> {
    let text = text.trim();
    if is_blank(text) {
        return Ok(Decimal::ZERO);
    }
    let amount = text.strip_prefix('$').unwrap_or(text);
    Decimal::from_str(amount).map_err(|_| Error::NumericFormat(text.to_string()))
}

/// Render an amount as `$X.XX`. Exact half cents round to even.
pub fn format_money(amount: Decimal) -> String {
    format!(
        "${:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
    )
}

pub fn parse_date(text: &str) -> Result<NaiveDate, Error> {
    let text = text.trim();
    let invalid = || Error::DateFormat(text.to_string());

    // chrono's `%Y` takes any digit count and its literal space is optional
    let (_, year) = text.rsplit_once(", ").ok_or_else(invalid)?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| invalid())
}
