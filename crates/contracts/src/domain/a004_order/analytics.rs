//! Chart data for the orders page. Undated orders count towards totals but
//! are skipped by every time series.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use crate::domain::a001_category::aggregate::Category;
use crate::domain::a001_category::analytics::resolve_product;
use crate::domain::a002_product::aggregate::Product;
use crate::shared::analytics::{last_n, percentage, truncate_label, YearMonth};
use crate::shared::catalog::CatalogIndex;
use crate::shared::indicators::{Indicator, ValueFormat};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use super::aggregate::Order;
use super::status::OrderStatus;

pub const TOP_PRODUCTS_LIMIT: usize = 10;
pub const TOP_CATEGORIES_LIMIT: usize = 8;
pub const NAME_LABEL_CHARS: usize = 20;
pub const TREND_WINDOW_DAYS: i64 = 30;
pub const TREND_VISIBLE_DAYS: usize = 15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub month: YearMonth,
    pub label: String,
    pub revenue: f64,
    pub orders: usize,
    pub average_order_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRevenue {
    pub label: String,
    pub revenue: f64,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSlice {
    pub status: OrderStatus,
    pub count: usize,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRevenue {
    pub name: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub label: String,
    pub orders: usize,
    pub revenue: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Revenue, order count and average order value per calendar month.
pub fn monthly_revenue(orders: &[Order]) -> Vec<MonthlyRevenue> {
    let mut months: BTreeMap<YearMonth, (f64, usize)> = BTreeMap::new();
    for order in orders {
        let Some(created) = order.time_created else {
            continue;
        };
        let entry = months.entry(YearMonth::of(&created)).or_default();
        entry.0 += order.total();
        entry.1 += 1;
    }
    months
        .into_iter()
        .map(|(month, (revenue, count))| MonthlyRevenue {
            month,
            label: month.label(),
            revenue: round2(revenue),
            orders: count,
            average_order_value: round2(revenue / count as f64),
        })
        .collect()
}

/// Best sellers by revenue, keyed by the item's name snapshot.
pub fn top_products(orders: &[Order]) -> Vec<ProductRevenue> {
    let mut totals: HashMap<String, (f64, i64)> = HashMap::new();
    for item in orders.iter().flat_map(|o| o.items.iter()) {
        let entry = totals.entry(item.display_name()).or_default();
        entry.0 += item.line_total();
        entry.1 += item.quantity;
    }
    let mut ranked: Vec<(String, (f64, i64))> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.total_cmp(&a.1 .0).then_with(|| a.0.cmp(&b.0)));
    ranked
        .into_iter()
        .take(TOP_PRODUCTS_LIMIT)
        .map(|(name, (revenue, quantity))| ProductRevenue {
            label: truncate_label(&name, NAME_LABEL_CHARS),
            revenue: round2(revenue),
            quantity,
        })
        .collect()
}

/// Order count per status with rounded share, most frequent first.
pub fn status_breakdown(orders: &[Order]) -> Vec<StatusSlice> {
    let mut counts: Vec<(OrderStatus, usize)> = Vec::new();
    for order in orders {
        match counts.iter_mut().find(|(s, _)| *s == order.status) {
            Some((_, n)) => *n += 1,
            None => counts.push((order.status.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .map(|(status, count)| StatusSlice {
            status,
            count,
            percent: percentage(count as f64, orders.len() as f64),
        })
        .collect()
}

/// Revenue per product category, top 8. Lines whose product is gone are
/// skipped.
pub fn category_revenue(
    orders: &[Order],
    products: &[Product],
    categories: &[Category],
) -> Vec<CategoryRevenue> {
    let index = CatalogIndex::new(products, categories, &[]);
    let mut totals: HashMap<String, f64> = HashMap::new();
    for item in orders.iter().flat_map(|o| o.items.iter()) {
        if let Some(product) = resolve_product(&index, item) {
            *totals.entry(index.category_name_of(product)).or_default() += item.line_total();
        }
    }
    let mut ranked: Vec<CategoryRevenue> = totals
        .into_iter()
        .map(|(name, revenue)| CategoryRevenue {
            name,
            revenue: round2(revenue),
        })
        .collect();
    ranked.sort_by(|a, b| b.revenue.total_cmp(&a.revenue).then_with(|| a.name.cmp(&b.name)));
    ranked.truncate(TOP_CATEGORIES_LIMIT);
    ranked
}

/// Orders of the last 30 days by day; only the latest 15 days with orders
/// are returned.
pub fn daily_trend(orders: &[Order], now: DateTime<Utc>) -> Vec<DailyPoint> {
    let cutoff = now - Duration::days(TREND_WINDOW_DAYS);
    let mut days: BTreeMap<NaiveDate, (usize, f64)> = BTreeMap::new();
    for order in orders {
        let Some(created) = order.time_created.filter(|t| *t >= cutoff && *t <= now) else {
            continue;
        };
        let entry = days.entry(created.date_naive()).or_default();
        entry.0 += 1;
        entry.1 += order.total();
    }
    let series = days
        .into_iter()
        .map(|(date, (count, revenue))| DailyPoint {
            date,
            label: date.format("%b %d").to_string(),
            orders: count,
            revenue: round2(revenue),
        })
        .collect();
    last_n(series, TREND_VISIBLE_DAYS)
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderStats {
    pub total_revenue: f64,
    pub average_order_value: f64,
    pub orders_this_month: usize,
    pub total_orders: usize,
}

impl OrderStats {
    pub fn build(orders: &[Order], now: DateTime<Utc>) -> Self {
        let total: f64 = orders.iter().map(Order::total).sum();
        let this_month = YearMonth::of(&now);
        Self {
            total_revenue: round2(total),
            average_order_value: if orders.is_empty() {
                0.0
            } else {
                round2(total / orders.len() as f64)
            },
            orders_this_month: orders
                .iter()
                .filter(|o| o.time_created.map(|t| YearMonth::of(&t)) == Some(this_month))
                .count(),
            total_orders: orders.len(),
        }
    }
}

/// Total revenue across all orders, two decimals.
pub fn total_revenue(orders: &[Order]) -> f64 {
    round2(orders.iter().map(Order::total).sum())
}

impl OrderStats {
    pub fn indicators(&self) -> Vec<Indicator> {
        vec![
            Indicator::new("Total revenue", "dollar", self.total_revenue, ValueFormat::Money),
            Indicator::new("Avg order value", "trending-up", self.average_order_value, ValueFormat::Money),
            Indicator::new("Orders this month", "orders", self.orders_this_month as f64, ValueFormat::Integer),
            Indicator::new("Total orders", "orders", self.total_orders as f64, ValueFormat::Integer),
        ]
    }
}
