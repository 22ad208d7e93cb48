use crate::shared::api_utils::{api_base, item_url};
use crate::shared::http::{self, ApiError};
use crate::shared::query_cache::{QueryClient, Resource};
use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::Product;
use contracts::domain::a003_inventory::InventoryRecord;
use contracts::domain::common::EntityId;

/// Everything the products page renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPageData {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub inventory: Vec<InventoryRecord>,
}

pub async fn load_page(client: QueryClient) -> Result<ProductPageData, ApiError> {
    let (products, categories, inventory) = futures::try_join!(
        client.fetch::<Product>(Resource::Products),
        client.fetch::<Category>(Resource::Categories),
        client.fetch::<InventoryRecord>(Resource::Inventory),
    )?;
    Ok(ProductPageData {
        products,
        categories,
        inventory,
    })
}

pub async fn delete_product(id: EntityId) -> Result<(), String> {
    http::delete(&item_url(&api_base(), Resource::Products.path(), id))
        .await
        .map_err(|e| format!("Failed to delete product: {}", e))
}
