use crate::shared::http::ApiError;
use crate::shared::query_cache::{QueryClient, Resource};
use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::Product;
use contracts::domain::a004_order::Order;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryPageData {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
}

pub async fn load_page(client: QueryClient) -> Result<CategoryPageData, ApiError> {
    let (categories, products, orders) = futures::try_join!(
        client.fetch::<Category>(Resource::Categories),
        client.fetch::<Product>(Resource::Products),
        client.fetch::<Order>(Resource::Orders),
    )?;
    Ok(CategoryPageData {
        categories,
        products,
        orders,
    })
}
