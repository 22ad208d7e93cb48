//! Per-category figures for the categories page.

use chrono::{DateTime, Duration, Utc};
use crate::domain::a002_product::aggregate::Product;
use crate::domain::a004_order::aggregate::{Order, OrderItem};
use crate::domain::common::EntityId;
use crate::shared::analytics::{mean, percentage, truncate_label};
use crate::shared::catalog::CatalogIndex;
use crate::shared::indicators::{Indicator, ValueFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use super::aggregate::Category;

pub const PERFORMANCE_LIMIT: usize = 8;
pub const PERFORMANCE_LABEL_CHARS: usize = 12;
pub const MARKET_SHARE_LIMIT: usize = 6;
/// Window for the "recent order lines" column.
pub const RECENT_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAnalytics {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub product_count: usize,
    pub total_revenue: f64,
    /// Rounded average product price; 0 for empty categories.
    pub average_price: f64,
    pub top_product: Option<String>,
    /// Order lines for this category created within the last 30 days.
    pub recent_items: usize,
    /// Rounded percent of the revenue across all categories.
    pub market_share: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPerformance {
    pub label: String,
    pub revenue: f64,
    pub product_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketShareSlice {
    pub name: String,
    pub share: u32,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub name: String,
    pub min: f64,
    pub avg: f64,
    pub max: f64,
}

/// Product the order line refers to: by id first, then by the name snapshot.
pub(crate) fn resolve_product<'a>(
    index: &CatalogIndex<'a>,
    item: &OrderItem,
) -> Option<&'a Product> {
    item.product
        .and_then(|id| index.product(id))
        .or_else(|| item.product_name.as_deref().and_then(|n| index.product_by_name(n)))
}

/// Build one analytics row per category.
pub fn build_category_analytics(
    categories: &[Category],
    products: &[Product],
    orders: &[Order],
    now: DateTime<Utc>,
) -> Vec<CategoryAnalytics> {
    let index = CatalogIndex::new(products, categories, &[]);
    let recent_cutoff = now - Duration::days(RECENT_DAYS);

    let mut revenue_by_category: HashMap<EntityId, f64> = HashMap::new();
    let mut revenue_by_product: HashMap<EntityId, f64> = HashMap::new();
    let mut recent_by_category: HashMap<EntityId, usize> = HashMap::new();

    for order in orders {
        let is_recent = order.time_created.map_or(false, |t| t >= recent_cutoff);
        for item in &order.items {
            let Some(product) = resolve_product(&index, item) else {
                continue;
            };
            let line = item.line_total();
            *revenue_by_product.entry(product.id).or_default() += line;
            if let Some(category_id) = product.category {
                *revenue_by_category.entry(category_id).or_default() += line;
                if is_recent {
                    *recent_by_category.entry(category_id).or_default() += 1;
                }
            }
        }
    }

    let grand_total: f64 = categories
        .iter()
        .filter_map(|c| revenue_by_category.get(&c.id))
        .sum();

    categories
        .iter()
        .map(|category| {
            let members: Vec<&Product> = products
                .iter()
                .filter(|p| p.category == Some(category.id))
                .collect();
            let prices: Vec<f64> = members.iter().filter_map(|p| p.price_value()).collect();
            let top_product = members
                .iter()
                .filter_map(|p| revenue_by_product.get(&p.id).map(|r| (*p, *r)))
                .filter(|(_, r)| *r > 0.0)
                .fold(None::<(&Product, f64)>, |best, cur| match best {
                    Some(b) if b.1 >= cur.1 => Some(b),
                    _ => Some(cur),
                })
                .map(|(p, _)| p.name.clone());
            let total_revenue = revenue_by_category.get(&category.id).copied().unwrap_or(0.0);

            CategoryAnalytics {
                id: category.id,
                name: category.name.clone(),
                description: category.description.clone(),
                product_count: members.len(),
                total_revenue,
                average_price: mean(&prices).map(f64::round).unwrap_or(0.0),
                top_product,
                recent_items: recent_by_category.get(&category.id).copied().unwrap_or(0),
                market_share: percentage(total_revenue, grand_total),
            }
        })
        .collect()
}

/// Categories with products, by revenue, top 8.
pub fn performance(rows: &[CategoryAnalytics]) -> Vec<CategoryPerformance> {
    let mut ranked: Vec<&CategoryAnalytics> = rows.iter().filter(|r| r.product_count > 0).collect();
    ranked.sort_by(|a, b| b.total_revenue.total_cmp(&a.total_revenue));
    ranked
        .into_iter()
        .take(PERFORMANCE_LIMIT)
        .map(|r| CategoryPerformance {
            label: truncate_label(&r.name, PERFORMANCE_LABEL_CHARS),
            revenue: r.total_revenue,
            product_count: r.product_count,
        })
        .collect()
}

/// Categories that earned anything, by share, top 6.
pub fn market_share(rows: &[CategoryAnalytics]) -> Vec<MarketShareSlice> {
    let mut ranked: Vec<&CategoryAnalytics> = rows.iter().filter(|r| r.total_revenue > 0.0).collect();
    ranked.sort_by(|a, b| {
        b.market_share
            .cmp(&a.market_share)
            .then(b.total_revenue.total_cmp(&a.total_revenue))
    });
    ranked
        .into_iter()
        .take(MARKET_SHARE_LIMIT)
        .map(|r| MarketShareSlice {
            name: r.name.clone(),
            share: r.market_share,
            revenue: r.total_revenue,
        })
        .collect()
}

/// Min / average / max price per non-empty category, highest average first.
pub fn price_analysis(categories: &[Category], products: &[Product]) -> Vec<PriceRange> {
    let mut ranges: Vec<PriceRange> = categories
        .iter()
        .filter_map(|category| {
            let prices: Vec<f64> = products
                .iter()
                .filter(|p| p.category == Some(category.id))
                .filter_map(|p| p.price_value())
                .collect();
            let avg = mean(&prices)?;
            Some(PriceRange {
                name: category.name.clone(),
                min: prices.iter().copied().fold(f64::INFINITY, f64::min),
                avg: avg.round(),
                max: prices.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            })
        })
        .collect();
    ranges.sort_by(|a, b| b.avg.total_cmp(&a.avg));
    ranges
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryStats {
    pub total_categories: usize,
    pub active_categories: usize,
    pub total_revenue: f64,
    pub average_products: f64,
}

impl CategoryStats {
    pub fn build(rows: &[CategoryAnalytics]) -> Self {
        let active = rows.iter().filter(|r| r.product_count > 0).count();
        let products: usize = rows.iter().map(|r| r.product_count).sum();
        Self {
            total_categories: rows.len(),
            active_categories: active,
            total_revenue: rows.iter().map(|r| r.total_revenue).sum(),
            average_products: if rows.is_empty() {
                0.0
            } else {
                (products as f64 / rows.len() as f64 * 10.0).round() / 10.0
            },
        }
    }
}

impl CategoryStats {
    pub fn indicators(&self) -> Vec<Indicator> {
        vec![
            Indicator::new("Categories", "categories", self.total_categories as f64, ValueFormat::Integer),
            Indicator::new("Active categories", "trending-up", self.active_categories as f64, ValueFormat::Integer)
                .with_subtitle("with at least one product"),
            Indicator::new("Total revenue", "dollar", self.total_revenue, ValueFormat::Money),
            Indicator::new("Avg products", "products", self.average_products, ValueFormat::Number { decimals: 1 })
                .with_subtitle("per category"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_product::aggregate::tests::product;
    use crate::domain::a004_order::aggregate::tests::{item, order};
    use chrono::TimeZone;

    fn category(id: EntityId, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            description: None,
            parent: None,
        }
    }

    fn fixture() -> (Vec<Category>, Vec<Product>, Vec<Order>) {
        let categories = vec![
            category(1, "Electronics"),
            category(2, "Books"),
            category(3, "Empty shelf"),
        ];
        let products = vec![
            product(10, "Laptop", "1000.00", Some(1)),
            product(11, "Mouse", "20.00", Some(1)),
            product(12, "Novel", "15.00", Some(2)),
        ];
        let orders = vec![
            order(1, "2024-05-20T10:00:00Z", vec![item(10, "Laptop", 1, "900.00")]),
            order(2, "2024-03-01T10:00:00Z", vec![
                item(11, "Mouse", 2, "40.00"),
                item(12, "Novel", 1, "60.00"),
            ]),
        ];
        (categories, products, orders)
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_category_analytics() {
        let (categories, products, orders) = fixture();
        let rows = build_category_analytics(&categories, &products, &orders, now());

        let electronics = &rows[0];
        assert_eq!(electronics.product_count, 2);
        assert_eq!(electronics.total_revenue, 940.0);
        assert_eq!(electronics.average_price, 510.0);
        assert_eq!(electronics.top_product.as_deref(), Some("Laptop"));
        assert_eq!(electronics.recent_items, 1);
        assert_eq!(electronics.market_share, 94);

        let books = &rows[1];
        assert_eq!(books.market_share, 6);
        assert_eq!(books.recent_items, 0);

        let empty = &rows[2];
        assert_eq!(empty.product_count, 0);
        assert_eq!(empty.average_price, 0.0);
        assert_eq!(empty.top_product, None);
    }

    #[test]
    fn test_performance_and_share_skip_empty() {
        let (categories, products, orders) = fixture();
        let rows = build_category_analytics(&categories, &products, &orders, now());

        let perf = performance(&rows);
        assert_eq!(perf.len(), 2);
        assert_eq!(perf[0].label, "Electronics");

        let share = market_share(&rows);
        assert_eq!(share.iter().map(|s| s.share).collect::<Vec<_>>(), vec![94, 6]);
    }

    #[test]
    fn test_performance_truncates_labels() {
        let rows = vec![CategoryAnalytics {
            id: 1,
            name: "Home & Garden Supplies".to_string(),
            description: None,
            product_count: 1,
            total_revenue: 5.0,
            average_price: 5.0,
            top_product: None,
            recent_items: 0,
            market_share: 100,
        }];
        assert_eq!(performance(&rows)[0].label, "Home & Garde...");
    }

    #[test]
    fn test_price_analysis() {
        let (categories, products, _) = fixture();
        let ranges = price_analysis(&categories, &products);
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0].name, "Electronics");
        assert_eq!((ranges[0].min, ranges[0].avg, ranges[0].max), (20.0, 510.0, 1000.0));
        assert_eq!(ranges[1].name, "Books");
    }

    #[test]
    fn test_stats() {
        let (categories, products, orders) = fixture();
        let rows = build_category_analytics(&categories, &products, &orders, now());
        let stats = CategoryStats::build(&rows);
        assert_eq!(stats.total_categories, 3);
        assert_eq!(stats.active_categories, 2);
        assert_eq!(stats.total_revenue, 1000.0);
        assert_eq!(stats.average_products, 1.0);
    }
}
