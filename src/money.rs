//! Amounts are whole cents held in a `u128`.

use crate::TableError;

/// Parses a dollar amount such as `12`, `12.5`, `12.50` or `$12.50` into cents.
pub fn parse_amount(input: &str) -> Result<u128, TableError> {
    let invalid = || TableError::InvalidAmount(input.trim().to_string());

    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let (whole, fraction) = match trimmed.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (trimmed, ""),
    };

    if whole.is_empty()
        || fraction.len() > 2
        || !whole.bytes().all(|b| b.is_ascii_digit())
        || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let dollars: u128 = whole.parse().map_err(|_| invalid())?;
    let cents: u128 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<u128>().map_err(|_| invalid())? * 10,
        _ => fraction.parse().map_err(|_| invalid())?,
    };

    dollars
        .checked_mul(100)
        .and_then(|d| d.checked_add(cents))
        .ok_or_else(invalid)
}

/// Formats cents as `$D.CC`.
pub fn format_amount(cents: u128) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Signed change from `before` to `after`, saturating at the `i128` bounds.
pub fn net_change(before: u128, after: u128) -> i128 {
    if after >= before {
        i128::try_from(after - before).unwrap_or(i128::MAX)
    } else {
        i128::try_from(before - after).map_or(i128::MIN, |loss| -loss)
    }
}

/// Formats a signed change as `+$D.CC` / `-$D.CC`.
pub fn format_delta(delta: i128) -> String {
    let sign = if delta < 0 { '-' } else { '+' };
    format!("{sign}{}", format_amount(delta.unsigned_abs()))
}
