use super::aggregate::InventoryRow;
use super::status::StockStatus;
use crate::shared::list_query::{
    compare_f64, compare_text, contains_ci, count_non_empty, Filtered, ListFilter, RangeParser,
    SortDirection,
};
use serde::{Deserialize, Serialize};

pub const PAGE_SIZE: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InventorySort {
    #[default]
    Name,
    Stock,
    Price,
    Status,
}

impl InventorySort {
    pub const ALL: [InventorySort; 4] = [
        InventorySort::Name,
        InventorySort::Stock,
        InventorySort::Price,
        InventorySort::Status,
    ];

    pub fn direction(self) -> SortDirection {
        match self {
            InventorySort::Name | InventorySort::Status => SortDirection::Ascending,
            InventorySort::Stock | InventorySort::Price => SortDirection::Descending,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            InventorySort::Name => "name",
            InventorySort::Stock => "stock",
            InventorySort::Price => "price",
            InventorySort::Status => "status",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InventorySort::Name => "Product name",
            InventorySort::Stock => "Stock (high to low)",
            InventorySort::Price => "Price (high to low)",
            InventorySort::Status => "Status",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.key() == key)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InventoryFilter {
    /// Matches product name or category name.
    pub search: String,
    pub status: String,
    /// Exact category name from the select, empty for all.
    pub category: String,
    pub stock_min: String,
    pub stock_max: String,
    pub sort: InventorySort,
}

impl ListFilter<InventoryRow> for InventoryFilter {
    fn apply(&self, rows: &[InventoryRow]) -> Filtered<InventoryRow> {
        let mut parser = RangeParser::new();
        let stock = parser.range("stock_min", &self.stock_min, "stock_max", &self.stock_max);
        let status = StockStatus::from_filter(&self.status);
        let category = self.category.trim();

        let mut kept: Vec<InventoryRow> = rows
            .iter()
            .filter(|r| {
                contains_ci(&r.product_name, &self.search) || contains_ci(&r.category_name, &self.search)
            })
            .filter(|r| status.as_ref().map_or(true, |s| &r.status == s))
            .filter(|r| category.is_empty() || r.category_name == category)
            .filter(|r| stock.contains(r.stock as f64))
            .cloned()
            .collect();

        let direction = self.sort.direction();
        kept.sort_by(|a, b| {
            let ordering = match self.sort {
                InventorySort::Name => compare_text(&a.product_name, &b.product_name),
                InventorySort::Stock => a.stock.cmp(&b.stock),
                InventorySort::Price => compare_f64(a.price_value(), b.price_value()),
                InventorySort::Status => a.status.as_str().cmp(b.status.as_str()),
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
            &self.category,
            &self.stock_min,
            &self.stock_max,
        ]) + usize::from(self.sort != InventorySort::default())
    }
}

/// Distinct category names for the category select, sorted.
pub fn category_options(rows: &[InventoryRow]) -> Vec<String> {
    let mut names: Vec<String> = rows.iter().map(|r| r.category_name.clone()).collect();
    names.sort();
    names.dedup();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_inventory::aggregate::tests::record;

    fn row(id: i64, name: &str, category: &str, stock: i64, price: &str) -> InventoryRow {
        let record = record(id, id, stock, 0, "");
        InventoryRow {
            status: record.effective_status(),
            record,
            product_name: name.to_string(),
            category_name: category.to_string(),
            price: price.to_string(),
            stock,
        }
    }

    fn rows() -> Vec<InventoryRow> {
        vec![
            row(1, "webcam", "Electronics", 40, "60"),
            row(2, "Armchair", "Furniture", 4, "300"),
            row(3, "Monitor", "Electronics", 0, "220"),
        ]
    }

    fn ids(filter: &InventoryFilter) -> Vec<i64> {
        filter.apply(&rows()).rows.iter().map(|r| r.record.id).collect()
    }

    #[test]
    fn test_default_sort_name_ascending() {
        assert_eq!(ids(&InventoryFilter::default()), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_keys() {
        let with = |sort| InventoryFilter { sort, ..Default::default() };
        assert_eq!(ids(&with(InventorySort::Stock)), vec![1, 2, 3]);
        assert_eq!(ids(&with(InventorySort::Price)), vec![2, 3, 1]);
        assert_eq!(ids(&with(InventorySort::Status)), vec![1, 2, 3]);
    }

    #[test]
    fn test_search_matches_category_too() {
        let filter = InventoryFilter {
            search: "furn".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter), vec![2]);
    }

    #[test]
    fn test_category_is_exact_and_status() {
        let filter = InventoryFilter {
            category: "Electronics".to_string(),
            status: "out_of_stock".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter), vec![3]);

        let filter = InventoryFilter {
            category: "Electro".to_string(),
            ..Default::default()
        };
        assert!(ids(&filter).is_empty());
    }

    #[test]
    fn test_stock_range_and_options() {
        let filter = InventoryFilter {
            stock_min: "1".to_string(),
            stock_max: "40".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter), vec![2, 1]);
        assert_eq!(category_options(&rows()), vec!["Electronics", "Furniture"]);
    }
}
