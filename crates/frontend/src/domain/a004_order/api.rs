use crate::shared::http::ApiError;
use crate::shared::query_cache::{QueryClient, Resource};
use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::Product;
use contracts::domain::a004_order::Order;

/// Products and categories resolve order lines to a category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderPageData {
    pub orders: Vec<Order>,
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
}

pub async fn load_page(client: QueryClient) -> Result<OrderPageData, ApiError> {
    let (orders, products, categories) = futures::try_join!(
        client.fetch::<Order>(Resource::Orders),
        client.fetch::<Product>(Resource::Products),
        client.fetch::<Category>(Resource::Categories),
    )?;
    Ok(OrderPageData {
        orders,
        products,
        categories,
    })
}
