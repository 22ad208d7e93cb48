use crate::shared::http::ApiError;
use crate::shared::query_cache::{QueryClient, Resource};
use contracts::dashboards::d400_overview::{OrdersByMonth, OverviewSummary};
use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::Product;
use contracts::domain::a003_inventory::InventoryRecord;
use contracts::domain::a004_order::Order;

/// Load the five collections the overview needs and summarize them.
pub async fn load_summary(client: QueryClient) -> Result<OverviewSummary, ApiError> {
    let (products, categories, inventory, orders, by_month) = futures::try_join!(
        client.fetch::<Product>(Resource::Products),
        client.fetch::<Category>(Resource::Categories),
        client.fetch::<InventoryRecord>(Resource::Inventory),
        client.fetch::<Order>(Resource::Orders),
        client.fetch::<OrdersByMonth>(Resource::OrdersByMonth),
    )?;
    Ok(OverviewSummary::build(
        &products,
        &categories,
        &inventory,
        &orders,
        &by_month,
    ))
}
