use super::{DEFAULT_AMOUNT, DEFAULT_CURRENCY};

/// Formats an amount in minor units (cents) as a two-decimal string.
pub fn format_minor_units(minor_units: i64) -> String {
    let sign = if minor_units < 0 { "-" } else { "" };
    let abs = minor_units.unsigned_abs();

    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Normalizes a provider decimal string such as `"10"` or `"9.5"` to two places.
/// Values that do not parse fall back to the default amount.
pub fn normalize_decimal(value: Option<&str>) -> String {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return DEFAULT_AMOUNT.to_string();
    };

    let (units, fraction) = match value.split_once('.') {
        Some((units, fraction)) => (units, fraction),
        None => (value, ""),
    };

    let valid = !units.is_empty()
        && units.chars().all(|c| c.is_ascii_digit())
        && fraction.len() <= 2
        && fraction.chars().all(|c| c.is_ascii_digit());

    if !valid {
        tracing::warn!("unparseable amount {:?}, using default", value);
        return DEFAULT_AMOUNT.to_string();
    }

    format!("{}.{:0<2}", units, fraction)
}

pub fn normalize_currency(currency: Option<&str>) -> String {
    currency
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(|c| c.to_uppercase())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())
}

/// Customer-facing amount: `$10.00 USD` for dollars, `10.00 EUR` otherwise.
pub fn display_amount(amount: &str, currency: &str) -> String {
    let amount = amount.trim().trim_start_matches('$').trim();

    if currency == DEFAULT_CURRENCY {
        format!("${} {}", amount, currency)
    } else {
        format!("{} {}", amount, currency)
    }
}

/// Returns the first value that is present and not blank.
pub fn first_present(values: &[Option<&str>]) -> Option<String> {
    values
        .iter()
        .flatten()
        .map(|v| v.trim())
        .find(|v| !v.is_empty())
        .map(|v| v.to_string())
}
