use serde::{Deserialize, Serialize};

/// A single labeled attribute mined from a product description,
/// e.g. `("Dung tích sử dụng", "300 lít")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

impl Fact {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}
