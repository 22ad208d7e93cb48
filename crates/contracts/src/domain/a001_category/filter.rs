use super::analytics::CategoryAnalytics;
use crate::shared::list_query::{
    compare_f64, compare_text, contains_ci, count_non_empty, Filtered, ListFilter, RangeParser,
    SortDirection,
};
use serde::{Deserialize, Serialize};

pub const PAGE_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategorySort {
    #[default]
    Name,
    Products,
    Revenue,
    AvgPrice,
}

impl CategorySort {
    pub const ALL: [CategorySort; 4] = [
        CategorySort::Name,
        CategorySort::Products,
        CategorySort::Revenue,
        CategorySort::AvgPrice,
    ];

    pub fn direction(self) -> SortDirection {
        match self {
            CategorySort::Name => SortDirection::Ascending,
            _ => SortDirection::Descending,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            CategorySort::Name => "name",
            CategorySort::Products => "products",
            CategorySort::Revenue => "revenue",
            CategorySort::AvgPrice => "avgPrice",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategorySort::Name => "Name",
            CategorySort::Products => "Product count",
            CategorySort::Revenue => "Revenue",
            CategorySort::AvgPrice => "Average price",
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
pub struct CategoryFilter {
    pub search: String,
    pub products_min: String,
    pub products_max: String,
    pub revenue_min: String,
    pub revenue_max: String,
    pub sort: CategorySort,
}

impl ListFilter<CategoryAnalytics> for CategoryFilter {
    fn apply(&self, rows: &[CategoryAnalytics]) -> Filtered<CategoryAnalytics> {
        let mut parser = RangeParser::new();
        let products = parser.range("products_min", &self.products_min, "products_max", &self.products_max);
        let revenue = parser.range("revenue_min", &self.revenue_min, "revenue_max", &self.revenue_max);

        let mut kept: Vec<CategoryAnalytics> = rows
            .iter()
            .filter(|r| contains_ci(&r.name, &self.search))
            .filter(|r| products.contains(r.product_count as f64))
            .filter(|r| revenue.contains(r.total_revenue))
            .cloned()
            .collect();

        let direction = self.sort.direction();
        kept.sort_by(|a, b| {
            let ordering = match self.sort {
                CategorySort::Name => compare_text(&a.name, &b.name),
                CategorySort::Products => a.product_count.cmp(&b.product_count),
                CategorySort::Revenue => compare_f64(a.total_revenue, b.total_revenue),
                CategorySort::AvgPrice => compare_f64(a.average_price, b.average_price),
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
            &self.products_min,
            &self.products_max,
            &self.revenue_min,
            &self.revenue_max,
        ]) + usize::from(self.sort != CategorySort::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, name: &str, products: usize, revenue: f64, avg: f64) -> CategoryAnalytics {
        CategoryAnalytics {
            id,
            name: name.to_string(),
            description: None,
            product_count: products,
            total_revenue: revenue,
            average_price: avg,
            top_product: None,
            recent_items: 0,
            market_share: 0,
        }
    }

    fn rows() -> Vec<CategoryAnalytics> {
        vec![
            row(1, "toys", 4, 300.0, 20.0),
            row(2, "Books", 10, 150.0, 12.0),
            row(3, "Audio", 2, 900.0, 150.0),
        ]
    }

    #[test]
    fn test_default_sort_by_name_ascending() {
        let result = CategoryFilter::default().apply(&rows());
        let names: Vec<_> = result.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Audio", "Books", "toys"]);
    }

    #[test]
    fn test_sort_descending_keys() {
        let mut filter = CategoryFilter {
            sort: CategorySort::Products,
            ..Default::default()
        };
        assert_eq!(filter.apply(&rows()).rows[0].id, 2);
        filter.sort = CategorySort::Revenue;
        assert_eq!(filter.apply(&rows()).rows[0].id, 3);
        filter.sort = CategorySort::AvgPrice;
        assert_eq!(filter.apply(&rows()).rows[2].id, 2);
    }

    #[test]
    fn test_ranges_and_search() {
        let filter = CategoryFilter {
            products_min: "3".to_string(),
            revenue_max: "300".to_string(),
            ..Default::default()
        };
        let ids: Vec<_> = filter.apply(&rows()).rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);

        let filter = CategoryFilter {
            search: "AUD".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&rows()).rows.len(), 1);
    }

    #[test]
    fn test_active_count_includes_sort() {
        let filter = CategoryFilter {
            search: "a".to_string(),
            sort: CategorySort::Revenue,
            ..Default::default()
        };
        assert_eq!(filter.active_count(), 2);
        assert_eq!(CategoryFilter::default().active_count(), 0);
        assert_eq!(CategorySort::from_key("avgPrice"), CategorySort::AvgPrice);
        assert_eq!(CategorySort::from_key("bogus"), CategorySort::Name);
    }
}
