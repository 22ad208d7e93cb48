use serde::{Deserialize, Serialize};
use std::fmt;

/// Stock below this count is "low".
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Inventory status as reported by the backend. Unknown strings are kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StockStatus {
    Available,
    LowStock,
    OutOfStock,
    Other(String),
}

impl StockStatus {
    pub const KNOWN: [StockStatus; 3] = [
        StockStatus::Available,
        StockStatus::LowStock,
        StockStatus::OutOfStock,
    ];

    /// Threshold classification of a (clamped) stock count.
    pub fn classify(stock: i64) -> Self {
        if stock <= 0 {
            StockStatus::OutOfStock
        } else if stock < LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::Available
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StockStatus::Available => "available",
            StockStatus::LowStock => "low_stock",
            StockStatus::OutOfStock => "out_of_stock",
            StockStatus::Other(s) => s,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            StockStatus::Available => "Available",
            StockStatus::LowStock => "Low stock",
            StockStatus::OutOfStock => "Out of stock",
            StockStatus::Other(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, StockStatus::Other(_))
    }

    /// Low or out of stock.
    pub fn needs_attention(&self) -> bool {
        matches!(self, StockStatus::LowStock | StockStatus::OutOfStock)
    }

    /// Parse a filter select value; empty means "any status".
    pub fn from_filter(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            None
        } else {
            Some(Self::from(raw.to_string()))
        }
    }
}

impl From<String> for StockStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "available" => StockStatus::Available,
            "low_stock" => StockStatus::LowStock,
            "out_of_stock" => StockStatus::OutOfStock,
            _ => StockStatus::Other(value),
        }
    }
}

impl From<StockStatus> for String {
    fn from(value: StockStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(StockStatus::classify(0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::classify(-4), StockStatus::OutOfStock);
        assert_eq!(StockStatus::classify(1), StockStatus::LowStock);
        assert_eq!(StockStatus::classify(9), StockStatus::LowStock);
        assert_eq!(StockStatus::classify(10), StockStatus::Available);
    }

    #[test]
    fn test_unknown_status_round_trips() {
        let s: StockStatus = serde_json::from_str(r#""discontinued""#).unwrap();
        assert_eq!(s, StockStatus::Other("discontinued".to_string()));
        assert_eq!(serde_json::to_string(&s).unwrap(), r#""discontinued""#);
        assert!(!s.is_known());
    }

    #[test]
    fn test_from_filter() {
        assert_eq!(StockStatus::from_filter(""), None);
        assert_eq!(StockStatus::from_filter("low_stock"), Some(StockStatus::LowStock));
    }
}
