use crate::shared::api_utils::{api_base, item_url};
use crate::shared::http::{self, ApiError};
use crate::shared::query_cache::{QueryClient, Resource};
use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::Product;
use contracts::domain::a003_inventory::InventoryRecord;
use contracts::domain::a004_order::Order;
use contracts::domain::common::EntityId;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryPageData {
    pub inventory: Vec<InventoryRecord>,
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    /// Backs the "orders for product" view.
    pub orders: Vec<Order>,
}

pub async fn load_page(client: QueryClient) -> Result<InventoryPageData, ApiError> {
    let (inventory, products, categories, orders) = futures::try_join!(
        client.fetch::<InventoryRecord>(Resource::Inventory),
        client.fetch::<Product>(Resource::Products),
        client.fetch::<Category>(Resource::Categories),
        client.fetch::<Order>(Resource::Orders),
    )?;
    Ok(InventoryPageData {
        inventory,
        products,
        categories,
        orders,
    })
}

/// Refetch the inventory collection alone, bypassing the cache.
pub async fn refresh_inventory(client: QueryClient) -> Result<Vec<InventoryRecord>, ApiError> {
    client.invalidate(Resource::Inventory);
    client.fetch::<InventoryRecord>(Resource::Inventory).await
}

pub async fn delete_record(id: EntityId) -> Result<(), String> {
    http::delete(&item_url(&api_base(), Resource::Inventory.path(), id))
        .await
        .map_err(|e| format!("Failed to delete inventory record: {}", e))
}
