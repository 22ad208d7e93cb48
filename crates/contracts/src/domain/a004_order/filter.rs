use super::aggregate::Order;
use super::status::OrderStatus;
use crate::shared::list_query::{
    compare_f64, compare_text, contains_ci, count_non_empty, FilterInputError, Filtered,
    ListFilter, RangeParser, SortDirection,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderSort {
    #[default]
    Date,
    Amount,
    Status,
}

impl OrderSort {
    pub const ALL: [OrderSort; 3] = [OrderSort::Date, OrderSort::Amount, OrderSort::Status];

    pub fn direction(self) -> SortDirection {
        match self {
            OrderSort::Date | OrderSort::Amount => SortDirection::Descending,
            OrderSort::Status => SortDirection::Ascending,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            OrderSort::Date => "date",
            OrderSort::Amount => "amount",
            OrderSort::Status => "status",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderSort::Date => "Newest first",
            OrderSort::Amount => "Highest amount",
            OrderSort::Status => "Status",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.key() == key)
            .unwrap_or_default()
    }
}

/// Parse a `YYYY-MM-DD` filter date. Empty input means no bound.
pub fn parse_filter_date(raw: &str) -> Result<Option<NaiveDate>, FilterInputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| FilterInputError::InvalidDate {
            input: trimmed.to_string(),
        })
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderFilter {
    /// Matches order id, customer name or any item's product name.
    pub search: String,
    pub status: String,
    pub date_from: String,
    pub date_to: String,
    pub amount_min: String,
    pub amount_max: String,
    pub sort: OrderSort,
}

impl OrderFilter {
    fn matches_search(&self, order: &Order) -> bool {
        let needle = self.search.trim();
        needle.is_empty()
            || order.id.to_string().contains(needle)
            || order.user_name.as_deref().map_or(false, |n| contains_ci(n, needle))
            || order
                .items
                .iter()
                .filter_map(|i| i.product_name.as_deref())
                .any(|n| contains_ci(n, needle))
    }
}

impl ListFilter<Order> for OrderFilter {
    fn apply(&self, rows: &[Order]) -> Filtered<Order> {
        let mut parser = RangeParser::new();
        let amount = parser.range("amount_min", &self.amount_min, "amount_max", &self.amount_max);
        let from = parse_filter_date(&self.date_from).unwrap_or_else(|_| {
            parser.mark_invalid("date_from");
            None
        });
        let to = parse_filter_date(&self.date_to).unwrap_or_else(|_| {
            parser.mark_invalid("date_to");
            None
        });
        let status = OrderStatus::from_filter(&self.status);

        let mut kept: Vec<Order> = rows
            .iter()
            .filter(|o| self.matches_search(o))
            .filter(|o| status.as_ref().map_or(true, |s| &o.status == s))
            .filter(|o| {
                if from.is_none() && to.is_none() {
                    return true;
                }
                // Undated orders cannot satisfy a date bound.
                let Some(day) = o.time_created.map(|t| t.date_naive()) else {
                    return false;
                };
                from.map_or(true, |f| day >= f) && to.map_or(true, |t| day <= t)
            })
            .filter(|o| amount.contains(o.total()))
            .cloned()
            .collect();

        let direction = self.sort.direction();
        kept.sort_by(|a, b| {
            let ordering = match self.sort {
                OrderSort::Date => a.time_created.cmp(&b.time_created),
                OrderSort::Amount => compare_f64(a.total(), b.total()),
                OrderSort::Status => compare_text(a.status.as_str(), b.status.as_str()),
            };
            direction.apply(ordering)
        });

        Filtered {
            rows: kept,
            invalid_fields: parser.into_invalid_fields(),
        }
    }

    fn active_count(&self) -> usize {
        count_non_empty(&[
            &self.search,
            &self.status,
            &self.date_from,
            &self.date_to,
            &self.amount_min,
            &self.amount_max,
        ]) + usize::from(self.sort != OrderSort::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_order::aggregate::tests::{item, order};

    fn orders() -> Vec<Order> {
        let mut a = order(101, "2024-03-01T09:00:00Z", vec![item(1, "Blue Kettle", 1, "40.00")]);
        a.user_name = Some("Alice".to_string());
        a.status = OrderStatus::Pending;
        let mut b = order(102, "2024-03-05T23:59:00Z", vec![item(2, "Toaster", 1, "120.00")]);
        b.user_name = Some("Bob".to_string());
        let mut c = order(203, "", vec![item(1, "Blue Kettle", 2, "80.00")]);
        c.status = OrderStatus::Cancelled;
        vec![a, b, c]
    }

    fn ids(filter: &OrderFilter) -> Vec<i64> {
        filter.apply(&orders()).rows.iter().map(|o| o.id).collect()
    }

    #[test]
    fn test_default_sort_newest_first_undated_last() {
        assert_eq!(ids(&OrderFilter::default()), vec![102, 101, 203]);
    }

    #[test]
    fn test_search_fields() {
        let by = |s: &str| {
            ids(&OrderFilter {
                search: s.to_string(),
                ..Default::default()
            })
        };
        assert_eq!(by("10"), vec![102, 101]);
        assert_eq!(by("bob"), vec![102]);
        assert_eq!(by("kettle"), vec![101, 203]);
    }

    #[test]
    fn test_date_range_inclusive_whole_days() {
        let filter = OrderFilter {
            date_from: "2024-03-01".to_string(),
            date_to: "2024-03-05".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter), vec![102, 101]);

        let filter = OrderFilter {
            date_to: "2024-03-04".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter), vec![101]);
    }

    #[test]
    fn test_bad_date_ignored_and_reported() {
        let filter = OrderFilter {
            date_from: "03/01/2024".to_string(),
            ..Default::default()
        };
        let result = filter.apply(&orders());
        assert_eq!(result.rows.len(), 3);
        assert_eq!(result.invalid_fields, vec!["date_from"]);
    }

    #[test]
    fn test_amount_status_and_sorts() {
        let filter = OrderFilter {
            amount_min: "50".to_string(),
            sort: OrderSort::Amount,
            ..Default::default()
        };
        assert_eq!(ids(&filter), vec![102, 203]);

        let filter = OrderFilter {
            sort: OrderSort::Status,
            ..Default::default()
        };
        assert_eq!(ids(&filter), vec![203, 102, 101]);

        let filter = OrderFilter {
            status: "pending".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter), vec![101]);
        assert_eq!(filter.active_count(), 1);
    }
}
