use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// KPI card values
// ---------------------------------------------------------------------------

/// How to format the numeric value on a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money,
    Number { decimals: u8 },
    Percent,
    Integer,
}

/// Visual status of the indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
    Warning,
}

/// One summary number shown at the top of a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub label: String,
    pub icon: String,
    pub value: f64,
    pub format: ValueFormat,
    pub status: IndicatorStatus,
    /// Optional secondary text displayed below the value.
    pub subtitle: Option<String>,
}

impl Indicator {
    pub fn new(label: &str, icon: &str, value: f64, format: ValueFormat) -> Self {
        Self {
            label: label.to_string(),
            icon: icon.to_string(),
            value,
            format,
            status: IndicatorStatus::Neutral,
            subtitle: None,
        }
    }

    pub fn with_status(mut self, status: IndicatorStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Warning when `value` is positive, Good otherwise. Used for counts of
    /// problems such as out-of-stock products.
    pub fn warn_if_positive(self) -> Self {
        let status = if self.value > 0.0 {
            IndicatorStatus::Warning
        } else {
            IndicatorStatus::Good
        };
        self.with_status(status)
    }

    pub fn display_value(&self) -> String {
        format_value(self.value, self.format)
    }
}

/// Render a number with thousands separators, e.g. `1 234.50`.
pub fn format_value(value: f64, format: ValueFormat) -> String {
    match format {
        ValueFormat::Money => format!("${}", group_thousands(value, 2)),
        ValueFormat::Number { decimals } => group_thousands(value, decimals as usize),
        ValueFormat::Percent => format!("{}%", value.round() as i64),
        ValueFormat::Integer => group_thousands(value.round(), 0),
    }
}

fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (formatted.clone(), None),
    };

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1234.5, ValueFormat::Money), "$1,234.50");
        assert_eq!(format_value(1234567.0, ValueFormat::Integer), "1,234,567");
        assert_eq!(format_value(999.0, ValueFormat::Integer), "999");
        assert_eq!(format_value(-1500.26, ValueFormat::Number { decimals: 1 }), "-1,500.3");
        assert_eq!(format_value(33.4, ValueFormat::Percent), "33%");
    }

    #[test]
    fn test_warn_if_positive() {
        let none = Indicator::new("Out of stock", "alert", 0.0, ValueFormat::Integer).warn_if_positive();
        assert_eq!(none.status, IndicatorStatus::Good);
        let some = Indicator::new("Out of stock", "alert", 3.0, ValueFormat::Integer).warn_if_positive();
        assert_eq!(some.status, IndicatorStatus::Warning);
    }
}
