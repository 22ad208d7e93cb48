use super::status::StockStatus;
use crate::domain::a001_category::aggregate::Category;
use crate::domain::a002_product::aggregate::Product;
use crate::domain::common::{parse_decimal, AggregateRoot, EntityId, HasId};
use crate::shared::catalog::CatalogIndex;
use serde::{Deserialize, Serialize};

pub const UNKNOWN_CATEGORY: &str = "Unknown category";

// ============================================================================
// Aggregate Root
// ============================================================================

/// Stock record of one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: EntityId,
    #[serde(default)]
    pub product: Option<EntityId>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub quantity_in: i64,
    #[serde(default)]
    pub quantity_out: i64,
    pub status: StockStatus,
}

impl InventoryRecord {
    /// `quantity_in - quantity_out`, may be negative. Saturates at the `i64`
    /// bounds.
    pub fn raw_stock(&self) -> i64 {
        self.quantity_in.saturating_sub(self.quantity_out)
    }

    /// Stock shown to the user, never below zero.
    pub fn current_stock(&self) -> i64 {
        self.raw_stock().max(0)
    }

    pub fn computed_status(&self) -> StockStatus {
        StockStatus::classify(self.current_stock())
    }

    /// Server status when it is one we know, otherwise the threshold
    /// classification.
    pub fn effective_status(&self) -> StockStatus {
        if self.status.is_known() {
            self.status.clone()
        } else {
            self.computed_status()
        }
    }

    pub fn to_dto(&self) -> InventoryDto {
        InventoryDto {
            product: self.product,
            quantity_in: self.quantity_in,
            quantity_out: self.quantity_out,
            status: self.status.clone(),
        }
    }
}

impl HasId for InventoryRecord {
    fn entity_id(&self) -> EntityId {
        self.id
    }
}

impl AggregateRoot for InventoryRecord {
    fn display_name(&self) -> String {
        match (&self.product_name, self.product) {
            (Some(name), _) if !name.is_empty() => name.clone(),
            (_, Some(product_id)) => format!("Product {}", product_id),
            _ => format!("Record {}", self.id),
        }
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "inventory"
    }

    fn element_name() -> &'static str {
        "Inventory record"
    }

    fn list_name() -> &'static str {
        "Inventory"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body of POST / PUT on the inventory collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryDto {
    pub product: Option<EntityId>,
    pub quantity_in: i64,
    pub quantity_out: i64,
    pub status: StockStatus,
}

// ============================================================================
// List rows
// ============================================================================

/// Inventory record joined with its product and category.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRow {
    pub record: InventoryRecord,
    pub product_name: String,
    pub category_name: String,
    /// Product price as text, "0" when the product is unknown.
    pub price: String,
    pub stock: i64,
    pub status: StockStatus,
}

impl InventoryRow {
    pub fn price_value(&self) -> f64 {
        parse_decimal(&self.price).unwrap_or(0.0)
    }
}

impl HasId for InventoryRow {
    fn entity_id(&self) -> EntityId {
        self.record.id
    }
}

pub fn enrich_inventory(
    inventory: &[InventoryRecord],
    products: &[Product],
    categories: &[Category],
) -> Vec<InventoryRow> {
    let index = CatalogIndex::new(products, categories, &[]);
    inventory
        .iter()
        .map(|record| {
            let product = record.product.and_then(|id| index.product(id));
            let product_name = product
                .map(|p| p.name.clone())
                .or_else(|| record.product_name.clone().filter(|n| !n.is_empty()))
                .unwrap_or_else(|| format!("Product {}", record.product.unwrap_or(record.id)));
            let category_name = product
                .map(|p| match p.category_name.as_deref().filter(|n| !n.is_empty()) {
                    Some(name) => name.to_string(),
                    None => p
                        .category
                        .and_then(|id| index.category(id))
                        .map(|c| c.name.clone())
                        .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string()),
                })
                .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string());

            InventoryRow {
                record: record.clone(),
                product_name,
                category_name,
                price: product.map(|p| p.price.clone()).unwrap_or_else(|| "0".to_string()),
                stock: record.current_stock(),
                status: record.effective_status(),
            }
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(id: EntityId, product: EntityId, qty_in: i64, qty_out: i64, status: &str) -> InventoryRecord {
        InventoryRecord {
            id,
            product: Some(product),
            product_name: None,
            quantity_in: qty_in,
            quantity_out: qty_out,
            status: StockStatus::from(status.to_string()),
        }
    }

    #[test]
    fn test_current_stock_is_clamped() {
        let r = record(1, 1, 3, 8, "out_of_stock");
        assert_eq!(r.raw_stock(), -5);
        assert_eq!(r.current_stock(), 0);
        assert_eq!(r.computed_status(), StockStatus::OutOfStock);
    }

    #[test]
    fn test_raw_stock_saturates() {
        assert_eq!(record(1, 1, i64::MAX, -1, "").raw_stock(), i64::MAX);
        assert_eq!(record(2, 1, i64::MIN, 1, "").raw_stock(), i64::MIN);
        assert_eq!(record(2, 1, i64::MIN, 1, "").current_stock(), 0);
    }

    #[test]
    fn test_server_status_wins() {
        let r = record(1, 1, 50, 0, "low_stock");
        assert_eq!(r.computed_status(), StockStatus::Available);
        assert_eq!(r.effective_status(), StockStatus::LowStock);

        let unknown = record(2, 1, 5, 0, "reserved");
        assert_eq!(unknown.effective_status(), StockStatus::LowStock);
    }

    #[test]
    fn test_deserialize() {
        let r: InventoryRecord = serde_json::from_str(
            r#"{"id":7,"product":3,"product_name":"Mouse","quantity_in":12,"quantity_out":4,"status":"available"}"#,
        )
        .unwrap();
        assert_eq!(r.current_stock(), 8);
        assert_eq!(r.display_name(), "Mouse");
        assert_eq!(
            r.delete_prompt(),
            "Delete inventory record 'Mouse'? This cannot be undone."
        );
    }

    #[test]
    fn test_enrich_fallbacks() {
        use crate::domain::a002_product::aggregate::tests::product;

        let categories = vec![Category {
            id: 1,
            name: "Office".to_string(),
            description: None,
            parent: None,
        }];
        let products = vec![product(5, "Stapler", "12.50", Some(1))];
        let inventory = vec![record(1, 5, 30, 2, "available"), record(2, 77, 3, 0, "low_stock")];

        let rows = enrich_inventory(&inventory, &products, &categories);
        assert_eq!(rows[0].product_name, "Stapler");
        assert_eq!(rows[0].category_name, "Office");
        assert_eq!(rows[0].price_value(), 12.5);
        assert_eq!(rows[0].stock, 28);

        assert_eq!(rows[1].product_name, "Product 77");
        assert_eq!(rows[1].category_name, UNKNOWN_CATEGORY);
        assert_eq!(rows[1].price, "0");
        assert_eq!(rows[1].status, StockStatus::LowStock);
    }
}
