use chrono::{DateTime, Utc};
use crate::domain::a001_category::aggregate::Category;
use crate::domain::a002_product::aggregate::Product;
use crate::domain::a003_inventory::aggregate::InventoryRecord;
use crate::domain::a003_inventory::status::StockStatus;
use crate::domain::a004_order::aggregate::Order;
use crate::domain::a004_order::analytics::{monthly_revenue, total_revenue};
use crate::domain::common::wire_format::de_opt_timestamp;
use crate::shared::analytics::{last_n, YearMonth};
use crate::shared::catalog::CatalogIndex;
use crate::shared::indicators::{Indicator, ValueFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const TREND_MONTHS: usize = 6;
pub const TOP_CATEGORIES: usize = 5;
/// Bucket for products without a category.
pub const OTHER_CATEGORY: &str = "Other";

/// Row of the `/orders-by-month/` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersByMonth {
    /// Start of the month.
    #[serde(default, deserialize_with = "de_opt_timestamp")]
    pub month: Option<DateTime<Utc>>,
    #[serde(default)]
    pub order_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryQuantity {
    pub name: String,
    pub quantity: i64,
}

/// Everything the overview page shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewSummary {
    pub total_products: usize,
    /// Two decimals.
    pub total_revenue: f64,
    pub total_orders: usize,
    pub out_of_stock: usize,
    pub revenue_trend: Vec<MonthPoint>,
    pub orders_by_month: Vec<MonthPoint>,
    pub top_categories: Vec<CategoryQuantity>,
}

impl OverviewSummary {
    pub fn build(
        products: &[Product],
        categories: &[Category],
        inventory: &[InventoryRecord],
        orders: &[Order],
        orders_by_month: &[OrdersByMonth],
    ) -> Self {
        Self {
            total_products: products.len(),
            total_revenue: total_revenue(orders),
            total_orders: orders.len(),
            out_of_stock: inventory
                .iter()
                .filter(|r| r.effective_status() == StockStatus::OutOfStock)
                .count(),
            revenue_trend: revenue_trend(orders),
            orders_by_month: orders_by_month_series(orders_by_month),
            top_categories: top_categories(orders, products, categories),
        }
    }
}

/// Revenue per month, last 6 months that had orders.
pub fn revenue_trend(orders: &[Order]) -> Vec<MonthPoint> {
    let series = monthly_revenue(orders)
        .into_iter()
        .map(|m| MonthPoint {
            label: m.label,
            value: m.revenue,
        })
        .collect();
    last_n(series, TREND_MONTHS)
}

/// Chronological, last 6. Rows without a parsable month are dropped.
pub fn orders_by_month_series(rows: &[OrdersByMonth]) -> Vec<MonthPoint> {
    let mut dated: Vec<(YearMonth, i64)> = rows
        .iter()
        .filter_map(|r| r.month.map(|m| (YearMonth::of(&m), r.order_count)))
        .collect();
    dated.sort_by_key(|(month, _)| *month);
    let series = dated
        .into_iter()
        .map(|(month, count)| MonthPoint {
            label: month.label(),
            value: count as f64,
        })
        .collect();
    last_n(series, TREND_MONTHS)
}

/// Categories by units sold, top 5. Lines whose product no longer exists are
/// skipped.
pub fn top_categories(orders: &[Order], products: &[Product], categories: &[Category]) -> Vec<CategoryQuantity> {
    let index = CatalogIndex::new(products, categories, &[]);
    let mut totals: HashMap<String, i64> = HashMap::new();
    for item in orders.iter().flat_map(|o| o.items.iter()) {
        let Some(product) = item.product.and_then(|id| index.product(id)) else {
            continue;
        };
        let name = product
            .category
            .and_then(|id| index.category(id))
            .map(|c| c.name.clone())
            .unwrap_or_else(|| OTHER_CATEGORY.to_string());
        *totals.entry(name).or_default() += item.quantity;
    }
    let mut ranked: Vec<CategoryQuantity> = totals
        .into_iter()
        .map(|(name, quantity)| CategoryQuantity { name, quantity })
        .collect();
    ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity).then_with(|| a.name.cmp(&b.name)));
    ranked.truncate(TOP_CATEGORIES);
    ranked
}

impl OverviewSummary {
    pub fn indicators(&self) -> Vec<Indicator> {
        vec![
            Indicator::new("Total products", "products", self.total_products as f64, ValueFormat::Integer),
            Indicator::new("Total revenue", "dollar", self.total_revenue, ValueFormat::Money),
            Indicator::new("Total orders", "orders", self.total_orders as f64, ValueFormat::Integer),
            Indicator::new("Out of stock", "package-x", self.out_of_stock as f64, ValueFormat::Integer)
                .warn_if_positive(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_product::aggregate::tests::product;
    use crate::domain::a003_inventory::aggregate::tests::record;
    use crate::domain::a004_order::aggregate::tests::{item, order};

    #[test]
    fn test_orders_by_month_sorted_and_limited() {
        let rows: Vec<OrdersByMonth> = serde_json::from_str(
            r#"[
                {"month":"2024-08-01T00:00:00Z","order_count":8},
                {"month":"2024-01-01T00:00:00Z","order_count":1},
                {"month":"2024-03-01T00:00:00Z","order_count":3},
                {"month":"2024-02-01T00:00:00Z","order_count":2},
                {"month":"2024-05-01T00:00:00Z","order_count":5},
                {"month":"2024-04-01T00:00:00Z","order_count":4},
                {"month":"2024-06-01T00:00:00Z","order_count":6},
                {"month":null,"order_count":99}
            ]"#,
        )
        .unwrap();
        let series = orders_by_month_series(&rows);
        let values: Vec<_> = series.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![2.0, 3.0, 4.0, 5.0, 6.0, 8.0]);
        assert_eq!(series[0].label, "Feb 2024");
    }

    #[test]
    fn test_overview_summary() {
        let categories = vec![Category {
            id: 1,
            name: "Garden".to_string(),
            description: None,
            parent: None,
        }];
        let products = vec![product(1, "Hose", "25", Some(1)), product(2, "Gloves", "5", None)];
        let inventory = vec![record(1, 1, 0, 0, "out_of_stock"), record(2, 2, 40, 1, "available")];
        let orders = vec![
            order(1, "2024-05-02T10:00:00Z", vec![item(1, "Hose", 2, "50.50"), item(2, "Gloves", 3, "15")]),
            order(2, "2024-06-02T10:00:00Z", vec![item(99, "Gone", 10, "1")]),
        ];

        let summary = OverviewSummary::build(&products, &categories, &inventory, &orders, &[]);
        assert_eq!(summary.total_products, 2);
        assert_eq!(summary.total_orders, 2);
        assert_eq!(summary.total_revenue, 66.5);
        assert_eq!(summary.out_of_stock, 1);
        assert_eq!(summary.revenue_trend.len(), 2);
        assert_eq!(
            summary.top_categories,
            vec![
                CategoryQuantity { name: "Other".to_string(), quantity: 3 },
                CategoryQuantity { name: "Garden".to_string(), quantity: 2 },
            ]
        );
        assert!(summary.orders_by_month.is_empty());
    }
}
