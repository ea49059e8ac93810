//! Abbreviated currency labels for axis ticks ("$1.5k", "$2.3m")

const UNITS: [(f64, &str); 4] = [(1e3, "k"), (1e6, "m"), (1e9, "b"), (1e12, "t")];

/// Format a dollar amount with a magnitude suffix, at most one decimal place
/// and thousands separators, e.g. `1234567.0 -> "$1.2m"`, `950.0 -> "$950"`.
pub fn format_abbreviated_currency(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }

    let abs = value.abs();

    // Index of the largest unit not exceeding the value
    let mut unit = UNITS.iter().rposition(|&(threshold, _)| abs >= threshold);
    let mut rounded = round_one_decimal(scale(abs, unit));

    // 999_960 rounds to 1000.0k; promote to the next unit instead
    if rounded >= 1000.0 {
        let next = unit.map_or(0, |u| u + 1);
        if next < UNITS.len() {
            unit = Some(next);
            rounded = round_one_decimal(scale(abs, unit));
        }
    }

    let sign = if value < 0.0 && rounded != 0.0 { "-" } else { "" };
    let suffix = unit.map_or("", |u| UNITS[u].1);

    format!("{}${}{}", sign, group_thousands(rounded), suffix)
}

fn scale(abs: f64, unit: Option<usize>) -> f64 {
    match unit {
        Some(u) => abs / UNITS[u].0,
        None => abs,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// "1234.5" -> "1,234.5", trailing ".0" dropped
fn group_thousands(value: f64) -> String {
    let text = format!("{:.1}", value);
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "0"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if frac_part != "0" {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}
