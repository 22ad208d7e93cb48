use crate::shared::api_utils::{api_base, collection_url, item_url};
use crate::shared::http;
use crate::shared::query_cache::Resource;
use contracts::domain::a003_inventory::{InventoryDto, InventoryRecord};
use contracts::domain::common::EntityId;

pub async fn save_record(id: Option<EntityId>, dto: &InventoryDto) -> Result<InventoryRecord, String> {
    let base = api_base();
    let resource = Resource::Inventory.path();
    let result = match id {
        Some(id) => http::update(&item_url(&base, resource, id), dto).await,
        None => http::create(&collection_url(&base, resource), dto).await,
    };
    result.map_err(|e| format!("Failed to save inventory record: {}", e))
}
