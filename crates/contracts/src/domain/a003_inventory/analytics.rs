//! Chart data for the inventory page.

use crate::domain::a004_order::aggregate::Order;
use crate::domain::common::EntityId;
use crate::shared::analytics::percentage;
use crate::shared::indicators::{Indicator, ValueFormat};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use super::aggregate::InventoryRow;
use super::status::StockStatus;

pub const CRITICAL_STOCK_LIMIT: usize = 15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockLevel {
    pub status: StockStatus,
    pub count: usize,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalItem {
    pub product_name: String,
    pub raw_stock: i64,
    pub status: StockStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStockSummary {
    pub name: String,
    pub total: i64,
    /// Records that are low or out of stock.
    pub attention: usize,
}

/// Available / low / out counts with their share of all records.
pub fn stock_levels(rows: &[InventoryRow]) -> Vec<StockLevel> {
    StockStatus::KNOWN
        .iter()
        .map(|status| {
            let count = rows.iter().filter(|r| &r.status == status).count();
            StockLevel {
                status: status.clone(),
                count,
                percent: percentage(count as f64, rows.len() as f64),
            }
        })
        .collect()
}

/// The 15 records with the lowest raw stock, lowest first.
pub fn critical_stock(rows: &[InventoryRow]) -> Vec<CriticalItem> {
    let mut sorted: Vec<&InventoryRow> = rows.iter().collect();
    sorted.sort_by_key(|r| r.record.raw_stock());
    sorted
        .into_iter()
        .take(CRITICAL_STOCK_LIMIT)
        .map(|r| CriticalItem {
            product_name: r.product_name.clone(),
            raw_stock: r.record.raw_stock(),
            status: r.status.clone(),
        })
        .collect()
}

/// Clamped stock and attention count per category, categories holding
/// stock only.
pub fn category_stock(rows: &[InventoryRow]) -> Vec<CategoryStockSummary> {
    let mut by_category: BTreeMap<&str, (i64, usize)> = BTreeMap::new();
    for row in rows {
        let entry = by_category.entry(row.category_name.as_str()).or_default();
        entry.0 = entry.0.saturating_add(row.stock);
        if row.status.needs_attention() {
            entry.1 += 1;
        }
    }
    by_category
        .into_iter()
        .filter(|(_, (total, _))| *total > 0)
        .map(|(name, (total, attention))| CategoryStockSummary {
            name: name.to_string(),
            total,
            attention,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InventoryStats {
    pub records: usize,
    pub total_stock: i64,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

impl InventoryStats {
    pub fn build(rows: &[InventoryRow]) -> Self {
        Self {
            records: rows.len(),
            total_stock: rows.iter().fold(0_i64, |total, r| total.saturating_add(r.stock)),
            low_stock: rows.iter().filter(|r| r.status == StockStatus::LowStock).count(),
            out_of_stock: rows.iter().filter(|r| r.status == StockStatus::OutOfStock).count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductOrders {
    pub orders: Vec<Order>,
    pub total_quantity: i64,
}

/// Orders containing a product, matched by product id or, for lines without
/// an id, by the name snapshot.
pub fn orders_for_product(orders: &[Order], product_id: Option<EntityId>, product_name: &str) -> ProductOrders {
    let matches_line = |product: Option<EntityId>, name: Option<&str>| match (product, product_id) {
        (Some(line), Some(wanted)) => line == wanted,
        _ => name.map_or(false, |n| n == product_name),
    };

    let matched: Vec<Order> = orders
        .iter()
        .filter(|order| {
            order
                .items
                .iter()
                .any(|i| matches_line(i.product, i.product_name.as_deref()))
        })
        .cloned()
        .collect();
    let total_quantity = matched
        .iter()
        .flat_map(|order| order.items.iter())
        .filter(|i| matches_line(i.product, i.product_name.as_deref()))
        .map(|i| i.quantity)
        .sum();

    ProductOrders {
        orders: matched,
        total_quantity,
    }
}

impl InventoryStats {
    pub fn indicators(&self) -> Vec<Indicator> {
        vec![
            Indicator::new("Records", "inventory", self.records as f64, ValueFormat::Integer),
            Indicator::new("Total stock", "products", self.total_stock as f64, ValueFormat::Integer),
            Indicator::new("Low stock", "alert", self.low_stock as f64, ValueFormat::Integer)
                .warn_if_positive(),
            Indicator::new("Out of stock", "package-x", self.out_of_stock as f64, ValueFormat::Integer)
                .warn_if_positive(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_inventory::aggregate::tests::record;
    use crate::domain::a004_order::aggregate::tests::{item, order};

    fn row(id: i64, category: &str, qty_in: i64, qty_out: i64) -> InventoryRow {
        let record = record(id, id, qty_in, qty_out, "");
        InventoryRow {
            product_name: format!("Item {}", id),
            category_name: category.to_string(),
            price: "1".to_string(),
            stock: record.current_stock(),
            status: record.effective_status(),
            record,
        }
    }

    fn rows() -> Vec<InventoryRow> {
        vec![
            row(1, "A", 50, 0),
            row(2, "A", 5, 0),
            row(3, "B", 0, 4),
            row(4, "C", 2, 2),
        ]
    }

    #[test]
    fn test_stock_levels() {
        let levels = stock_levels(&rows());
        let counts: Vec<_> = levels.iter().map(|l| (l.count, l.percent)).collect();
        assert_eq!(counts, vec![(1, 25), (1, 25), (2, 50)]);
    }

    #[test]
    fn test_critical_stock_uses_raw_stock() {
        let critical = critical_stock(&rows());
        assert_eq!(critical[0].product_name, "Item 3");
        assert_eq!(critical[0].raw_stock, -4);
        assert_eq!(critical.last().map(|c| c.raw_stock), Some(50));

        let many: Vec<InventoryRow> = (1..=20).map(|i| row(i, "A", i, 0)).collect();
        assert_eq!(critical_stock(&many).len(), CRITICAL_STOCK_LIMIT);
    }

    #[test]
    fn test_category_stock_drops_empty() {
        let summary = category_stock(&rows());
        assert_eq!(
            summary,
            vec![CategoryStockSummary { name: "A".to_string(), total: 55, attention: 1 }]
        );
    }

    #[test]
    fn test_stats() {
        let stats = InventoryStats::build(&rows());
        assert_eq!(stats.records, 4);
        assert_eq!(stats.total_stock, 55);
        assert_eq!(stats.low_stock, 1);
        assert_eq!(stats.out_of_stock, 2);
    }

    #[test]
    fn test_stock_totals_saturate() {
        let huge = vec![row(1, "A", i64::MAX, 0), row(2, "A", i64::MAX, 0)];
        assert_eq!(InventoryStats::build(&huge).total_stock, i64::MAX);
        assert_eq!(category_stock(&huge)[0].total, i64::MAX);
    }

    #[test]
    fn test_orders_for_product() {
        let mut by_name = item(0, "Lamp", 3, "30");
        by_name.product = None;
        let orders = vec![
            order(1, "2024-01-01T00:00:00Z", vec![item(7, "Lamp", 2, "20"), item(8, "Bulb", 1, "2")]),
            order(2, "2024-01-02T00:00:00Z", vec![item(8, "Bulb", 5, "10")]),
            order(3, "2024-01-03T00:00:00Z", vec![by_name]),
        ];
        let found = orders_for_product(&orders, Some(7), "Lamp");
        let ids: Vec<_> = found.orders.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(found.total_quantity, 5);
    }
}
