use crate::shared::api_utils::{api_base, collection_url, item_url};
use crate::shared::http;
use crate::shared::query_cache::Resource;
use contracts::domain::a002_product::{Product, ProductDto};
use contracts::domain::common::EntityId;

/// POST for new products, PUT (full replace) for existing ones.
pub async fn save_product(id: Option<EntityId>, dto: &ProductDto) -> Result<Product, String> {
    let base = api_base();
    let resource = Resource::Products.path();
    let result = match id {
        Some(id) => http::update(&item_url(&base, resource, id), dto).await,
        None => http::create(&collection_url(&base, resource), dto).await,
    };
    result.map_err(|e| format!("Failed to save product: {}", e))
}
