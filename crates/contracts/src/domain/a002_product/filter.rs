use super::aggregate::ProductRow;
use crate::domain::a003_inventory::status::StockStatus;
use crate::shared::list_query::{contains_ci, count_non_empty, Filtered, ListFilter, RangeParser};
use serde::{Deserialize, Serialize};

pub const PAGE_SIZE: usize = 8;

/// Products keep the API order; there is no sort selector on this page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductFilter {
    pub name: String,
    pub category: String,
    pub price_min: String,
    pub price_max: String,
    /// Raw status select value, empty for "all".
    pub status: String,
    pub stock_min: String,
    pub stock_max: String,
}

impl ListFilter<ProductRow> for ProductFilter {
    fn apply(&self, rows: &[ProductRow]) -> Filtered<ProductRow> {
        let mut parser = RangeParser::new();
        let price = parser.range("price_min", &self.price_min, "price_max", &self.price_max);
        let stock = parser.range("stock_min", &self.stock_min, "stock_max", &self.stock_max);
        let status = StockStatus::from_filter(&self.status);

        let kept = rows
            .iter()
            .filter(|r| contains_ci(&r.product.name, &self.name))
            .filter(|r| contains_ci(&r.category_name, &self.category))
            .filter(|r| {
                price.is_unbounded()
                    || r.product.price_value().map_or(false, |p| price.contains(p))
            })
            .filter(|r| match &status {
                Some(wanted) => r.status.as_ref() == Some(wanted),
                None => true,
            })
            .filter(|r| stock.contains(r.stock_or_zero() as f64))
            .cloned()
            .collect();

        Filtered {
            rows: kept,
            invalid_fields: parser.into_invalid_fields(),
        }
    }

    fn active_count(&self) -> usize {
        count_non_empty(&[
            &self.name,
            &self.category,
            &self.price_min,
            &self.price_max,
            &self.status,
            &self.stock_min,
            &self.stock_max,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_product::aggregate::tests::product;

    fn row(id: i64, name: &str, price: &str, category: &str, stock: Option<i64>) -> ProductRow {
        ProductRow {
            product: product(id, name, price, Some(1)),
            category_name: category.to_string(),
            stock,
            status: stock.map(StockStatus::classify),
        }
    }

    fn rows() -> Vec<ProductRow> {
        vec![
            row(1, "Laptop Pro", "1299.00", "Electronics", Some(3)),
            row(2, "USB cable", "9.99", "Electronics", Some(120)),
            row(3, "Desk lamp", "45.00", "Home", Some(0)),
            row(4, "Mystery", "n/a", "Home", None),
        ]
    }

    fn ids(filter: &ProductFilter) -> Vec<i64> {
        filter.apply(&rows()).rows.iter().map(|r| r.product.id).collect()
    }

    #[test]
    fn test_price_range_inclusive() {
        let filter = ProductFilter {
            price_min: "9.99".to_string(),
            price_max: "45".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter), vec![2, 3]);
    }

    #[test]
    fn test_unparsable_price_only_excluded_when_bounded() {
        assert_eq!(ids(&ProductFilter::default()), vec![1, 2, 3, 4]);
        let filter = ProductFilter {
            price_min: "0".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter), vec![1, 2, 3]);
    }

    #[test]
    fn test_text_status_and_stock() {
        let filter = ProductFilter {
            name: "LAMP".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter), vec![3]);

        let filter = ProductFilter {
            category: "electr".to_string(),
            status: "low_stock".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter), vec![1]);

        let filter = ProductFilter {
            stock_max: "3".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter), vec![1, 3, 4]);
    }

    #[test]
    fn test_malformed_bound_reported() {
        let filter = ProductFilter {
            price_max: "cheap".to_string(),
            ..Default::default()
        };
        let result = filter.apply(&rows());
        assert_eq!(result.rows.len(), 4);
        assert_eq!(result.invalid_fields, vec!["price_max"]);
        assert_eq!(filter.active_count(), 1);
    }
}
