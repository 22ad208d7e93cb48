//! Helpers shared by the chart aggregations.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar month used as a grouping key for revenue and order series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn of(dt: &DateTime<Utc>) -> Self {
        Self::new(dt.year(), dt.month())
    }

    /// Parse "YYYY-MM" or anything starting with "YYYY-MM-DD".
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.trim().splitn(3, '-');
        let year = parts.next()?.parse::<i32>().ok()?;
        let month = parts.next()?.get(..2)?.parse::<u32>().ok()?;
        if (1..=12).contains(&month) {
            Some(Self::new(year, month))
        } else {
            None
        }
    }

    /// Chart label, e.g. "Mar 2024".
    pub fn label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%b %Y").to_string())
            .unwrap_or_else(|| self.to_string())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Cut long names for chart axes: first `max_chars` characters plus "...".
pub fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

/// Share of `part` in `total` as a rounded whole percent; 0 when total is 0.
pub fn percentage(part: f64, total: f64) -> u32 {
    if total <= 0.0 {
        return 0;
    }
    (part / total * 100.0).round().max(0.0) as u32
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Keep the last `n` entries of a chronological series.
pub fn last_n<T>(mut series: Vec<T>, n: usize) -> Vec<T> {
    if series.len() > n {
        series.drain(..series.len() - n);
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_month_parse() {
        assert_eq!(YearMonth::parse("2024-03"), Some(YearMonth::new(2024, 3)));
        assert_eq!(
            YearMonth::parse("2024-11-01T00:00:00Z"),
            Some(YearMonth::new(2024, 11))
        );
        assert_eq!(YearMonth::parse("2024-13-01"), None);
        assert_eq!(YearMonth::parse("march"), None);
    }

    #[test]
    fn test_year_month_order_and_label() {
        assert!(YearMonth::new(2023, 12) < YearMonth::new(2024, 1));
        assert_eq!(YearMonth::new(2024, 3).label(), "Mar 2024");
        assert_eq!(YearMonth::new(2024, 3).to_string(), "2024-03");
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("short", 20), "short");
        assert_eq!(
            truncate_label("An extremely long product name", 20),
            "An extremely long pr..."
        );
        assert_eq!(truncate_label("Čokoladni kolač", 5), "Čokol...");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1.0, 3.0), 33);
        assert_eq!(percentage(2.0, 3.0), 67);
        assert_eq!(percentage(5.0, 0.0), 0);
    }

    #[test]
    fn test_last_n() {
        assert_eq!(last_n(vec![1, 2, 3, 4, 5, 6, 7, 8], 6), vec![3, 4, 5, 6, 7, 8]);
        assert_eq!(last_n(vec![1, 2], 6), vec![1, 2]);
    }
}
