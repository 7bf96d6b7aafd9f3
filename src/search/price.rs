//! Price parsing for display strings and free-text queries.

const MILLION_UNITS: &[&str] = &["triệu", "trieu"];
const THOUSAND_UNITS: &[&str] = &["nghìn", "nghin", "k"];

/// `"12.990.000₫"` -> `12990000`. Anything without digits, or too large for
/// a `u64`, is `0`.
pub fn parse_display_price(text: &str) -> u64 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Reads the amount that follows the earliest anchor in `text`,
/// e.g. `"dưới 5 triệu"` with anchor `"dưới"` -> `5_000_000`.
///
/// `,` and `.` inside the number are thousands separators. A trailing
/// `triệu`/`trieu` means millions, `nghìn`/`nghin`/`k` thousands, anything
/// else leaves the number as plain đồng. Returns `0` when no anchor is
/// present or no digits follow it.
pub fn parse_quantity_from_query(text: &str, anchors: &[&str]) -> u64 {
    let start = anchors
        .iter()
        .filter_map(|anchor| text.find(anchor).map(|pos| (pos, pos + anchor.len())))
        .min_by_key(|(pos, _)| *pos)
        .map(|(_, end)| end);

    let Some(start) = start else {
        return 0;
    };

    let rest = &text[start..];
    let mut digits = String::new();
    let mut tail = "";

    for (offset, c) in rest.char_indices() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if digits.is_empty() || c == ',' || c == '.' {
            continue;
        } else {
            tail = &rest[offset..];
            break;
        }
    }

    let Ok(amount) = digits.parse::<u64>() else {
        return 0;
    };

    let unit = tail.trim().to_lowercase();
    let multiplier = if MILLION_UNITS.iter().any(|u| unit.starts_with(u)) {
        1_000_000
    } else if THOUSAND_UNITS.iter().any(|u| unit.starts_with(u)) {
        1_000
    } else {
        1
    };

    amount.checked_mul(multiplier).unwrap_or(0)
}

/// `12990000` -> `"12.990.000₫"`.
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3 + 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push('.');
        }
        formatted.push(c);
    }

    formatted.push('₫');
    formatted
}
