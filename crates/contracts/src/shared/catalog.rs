//! Lookup tables used to join products, categories and inventory records
//! that the API returns as separate collections.

use crate::domain::a001_category::aggregate::Category;
use crate::domain::a002_product::aggregate::Product;
use crate::domain::a003_inventory::aggregate::InventoryRecord;
use crate::domain::common::EntityId;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct CatalogIndex<'a> {
    products: HashMap<EntityId, &'a Product>,
    products_by_name: HashMap<&'a str, &'a Product>,
    categories: HashMap<EntityId, &'a Category>,
    inventory_by_product: HashMap<EntityId, &'a InventoryRecord>,
}

impl<'a> CatalogIndex<'a> {
    pub fn new(
        products: &'a [Product],
        categories: &'a [Category],
        inventory: &'a [InventoryRecord],
    ) -> Self {
        let mut index = Self::default();
        for product in products {
            index.products.entry(product.id).or_insert(product);
            index
                .products_by_name
                .entry(product.name.as_str())
                .or_insert(product);
        }
        for category in categories {
            index.categories.entry(category.id).or_insert(category);
        }
        // First record wins when the backend returns duplicates.
        for record in inventory {
            if let Some(product_id) = record.product {
                index.inventory_by_product.entry(product_id).or_insert(record);
            }
        }
        index
    }

    pub fn product(&self, id: EntityId) -> Option<&'a Product> {
        self.products.get(&id).copied()
    }

    pub fn product_by_name(&self, name: &str) -> Option<&'a Product> {
        self.products_by_name.get(name).copied()
    }

    pub fn category(&self, id: EntityId) -> Option<&'a Category> {
        self.categories.get(&id).copied()
    }

    pub fn inventory_for(&self, product_id: EntityId) -> Option<&'a InventoryRecord> {
        self.inventory_by_product.get(&product_id).copied()
    }

    /// Category display name of a product: the embedded name, then the
    /// category table, then "Uncategorized".
    pub fn category_name_of(&self, product: &Product) -> String {
        if let Some(name) = product.category_name.as_deref().filter(|n| !n.is_empty()) {
            return name.to_string();
        }
        product
            .category
            .and_then(|id| self.category(id))
            .map(|c| c.name.clone())
            .unwrap_or_else(|| UNCATEGORIZED.to_string())
    }
}

pub const UNCATEGORIZED: &str = "Uncategorized";
