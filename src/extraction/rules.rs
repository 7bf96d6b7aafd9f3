use regex::Regex;
use std::sync::LazyLock;

pub const CABINET_TYPE: &str = "Loại sản phẩm";
pub const TV_TYPE: &str = "Kiểu sản phẩm";
pub const WASHER_TYPE: &str = "Loại máy giặt";
pub const CAPACITY: &str = "Dung tích sử dụng";
pub const SCREEN_SIZE: &str = "Kích cỡ màn hình";
pub const RELEASE_YEAR: &str = "Năm ra mắt";
pub const ORIGIN: &str = "Nơi sản xuất";
pub const HOUSEHOLD_SIZE: &str = "Số người sử dụng";

/// Value emitted by rules that only detect the presence of a phrase.
pub const PRESENT: &str = "Có";

pub const HOUSEHOLD_SMALL: &str = "2 - 3 người";
pub const HOUSEHOLD_MEDIUM: &str = "4 - 5 người";
pub const HOUSEHOLD_LARGE: &str = "Trên 5 người";

/// Checked in this order, the first phrase found wins.
pub const HOUSEHOLD_PHRASES: [&str; 3] = [HOUSEHOLD_SMALL, HOUSEHOLD_MEDIUM, HOUSEHOLD_LARGE];

// Every value runs up to (not including) the next period.
const RULE_TABLE: &[(&str, &str)] = &[
    (CABINET_TYPE, r"Kiểu tủ: ([^.]+)"),
    (TV_TYPE, r"Loại Tivi: ([^.]+)"),
    (WASHER_TYPE, r"Loại máy giặt: ([^.]+)"),
    (CAPACITY, r"Dung tích sử dụng: ([^.]+)"),
    ("Dung tích ngăn đá", r"Dung tích ngăn đá: ([^.]+)"),
    ("Dung tích ngăn lạnh", r"Dung tích ngăn lạnh: ([^.]+)"),
    (SCREEN_SIZE, r"Kích cỡ màn hình: ([^.]+)"),
    ("Độ phân giải", r"Độ phân giải: ([^.]+)"),
    ("Công nghệ hình ảnh", r"Công nghệ hình ảnh: ([^.]+)"),
    ("Khối lượng giặt", r"Khối lượng giặt: ([^.]+)"),
    ("Chất liệu cửa", r"Chất liệu cửa tủ lạnh: ([^.]+)"),
    ("Chất liệu khay", r"Chất liệu khay ngăn lạnh: ([^.]+)"),
    (RELEASE_YEAR, r"Năm ra mắt: ([^.]+)"),
    (ORIGIN, r"Sản xuất tại: ([^.]+)"),
];

/// One entry of the extraction table: a label and the pattern that finds it.
#[derive(Debug, Clone)]
pub struct FactRule {
    pub label: &'static str,
    pub pattern: Regex,
}

impl FactRule {
    pub fn new(label: &'static str, pattern: Regex) -> Self {
        Self { label, pattern }
    }

    /// Returns the trimmed first capture, or [`PRESENT`] when the match
    /// carries no capture. `None` when the pattern does not match.
    pub fn apply(&self, description: &str) -> Option<String> {
        let captures = self.pattern.captures(description)?;
        let value = captures
            .get(1)
            .map(|value| value.as_str().trim().to_string())
            .unwrap_or_else(|| PRESENT.to_string());
        Some(value)
    }
}

/// Compiled once, shared read-only by every caller.
pub static FACT_RULES: LazyLock<Vec<FactRule>> = LazyLock::new(|| {
    RULE_TABLE
        .iter()
        .map(|&(label, pattern)| {
            FactRule::new(
                label,
                Regex::new(pattern).expect("fact rule patterns are valid"),
            )
        })
        .collect()
});

pub fn rule_for(label: &str) -> Option<&'static FactRule> {
    FACT_RULES.iter().find(|rule| rule.label == label)
}
