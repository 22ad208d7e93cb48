use crate::domain::a001_category::aggregate::Category;
use crate::domain::a003_inventory::aggregate::InventoryRecord;
use crate::domain::a003_inventory::status::StockStatus;
use crate::domain::common::wire_format::{de_decimal_string, de_opt_timestamp};
use crate::domain::common::{parse_decimal, AggregateRoot, EntityId, HasId};
use crate::shared::catalog::CatalogIndex;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    /// Decimal as sent by the backend, e.g. "19.99".
    #[serde(deserialize_with = "de_decimal_string")]
    pub price: String,
    #[serde(default)]
    pub category: Option<EntityId>,
    /// Read-only, filled in by the backend.
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de_opt_timestamp")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de_opt_timestamp")]
    pub updated: Option<DateTime<Utc>>,
}

impl Product {
    /// Parsed price; `None` when the string is not a number.
    pub fn price_value(&self) -> Option<f64> {
        parse_decimal(&self.price)
    }

    pub fn to_dto(&self) -> ProductDto {
        ProductDto {
            name: self.name.clone(),
            price: self.price.clone(),
            category: self.category,
            sku: self.sku.clone(),
            description: self.description.clone(),
        }
    }
}

impl HasId for Product {
    fn entity_id(&self) -> EntityId {
        self.id
    }
}

impl AggregateRoot for Product {
    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "products"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body of POST / PUT on the products collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub name: String,
    pub price: String,
    pub category: Option<EntityId>,
    pub sku: Option<String>,
    pub description: Option<String>,
}

// ============================================================================
// List rows
// ============================================================================

/// Product joined with its category name and inventory record.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub product: Product,
    pub category_name: String,
    /// Clamped stock, `None` when the product has no inventory record.
    pub stock: Option<i64>,
    pub status: Option<StockStatus>,
}

impl ProductRow {
    pub fn stock_or_zero(&self) -> i64 {
        self.stock.unwrap_or(0)
    }
}

impl HasId for ProductRow {
    fn entity_id(&self) -> EntityId {
        self.product.id
    }
}

pub fn enrich_products(
    products: &[Product],
    categories: &[Category],
    inventory: &[InventoryRecord],
) -> Vec<ProductRow> {
    let index = CatalogIndex::new(products, categories, inventory);
    products
        .iter()
        .map(|product| {
            let record = index.inventory_for(product.id);
            ProductRow {
                product: product.clone(),
                category_name: index.category_name_of(product),
                stock: record.map(InventoryRecord::current_stock),
                status: record.map(InventoryRecord::effective_status),
            }
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::a003_inventory::aggregate::tests::record;

    pub(crate) fn product(id: EntityId, name: &str, price: &str, category: Option<EntityId>) -> Product {
        Product {
            id,
            name: name.to_string(),
            price: price.to_string(),
            category,
            category_name: None,
            sku: None,
            description: None,
            created: None,
            updated: None,
        }
    }

    #[test]
    fn test_deserialize_price_variants() {
        let p: Product = serde_json::from_str(
            r#"{"id":1,"name":"Lamp","price":"19.99","category":2,"category_name":"Home","created":"2024-01-02T03:04:05Z"}"#,
        )
        .unwrap();
        assert_eq!(p.price_value(), Some(19.99));
        assert!(p.created.is_some());

        let p: Product = serde_json::from_str(r#"{"id":2,"name":"Cup","price":7.5}"#).unwrap();
        assert_eq!(p.price, "7.5");

        let p: Product = serde_json::from_str(r#"{"id":3,"name":"Ghost","price":null}"#).unwrap();
        assert_eq!(p.price_value(), Some(0.0));
    }

    #[test]
    fn test_enrich_products() {
        let categories = vec![Category {
            id: 1,
            name: "Audio".to_string(),
            description: None,
            parent: None,
        }];
        let products = vec![
            product(1, "Speaker", "50", Some(1)),
            product(2, "Cable", "5", None),
        ];
        let inventory = vec![record(1, 1, 4, 10, "out_of_stock"), record(2, 1, 99, 0, "available")];

        let rows = enrich_products(&products, &categories, &inventory);
        assert_eq!(rows[0].category_name, "Audio");
        assert_eq!(rows[0].stock, Some(0));
        assert_eq!(rows[0].status, Some(StockStatus::OutOfStock));
        assert_eq!(rows[1].category_name, "Uncategorized");
        assert_eq!(rows[1].stock, None);
        assert_eq!(rows[1].stock_or_zero(), 0);
    }
}
