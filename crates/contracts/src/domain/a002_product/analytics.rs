//! Chart data for the products page.

use crate::domain::a001_category::aggregate::Category;
use crate::domain::a003_inventory::status::StockStatus;
use crate::shared::analytics::{mean, truncate_label};
use crate::shared::indicators::{Indicator, ValueFormat};
use serde::{Deserialize, Serialize};
use super::aggregate::{Product, ProductRow};

pub const NAME_LABEL_CHARS: usize = 20;

/// Price buckets: lower bound inclusive, upper bound exclusive.
const PRICE_BUCKETS: [(&str, f64, Option<f64>); 4] = [
    ("0-100", 0.0, Some(100.0)),
    ("100-500", 100.0, Some(500.0)),
    ("500-1000", 500.0, Some(1000.0)),
    ("1000+", 1000.0, None),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBucket {
    pub range: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub name: String,
    pub count: usize,
    pub avg_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStock {
    pub name: String,
    pub stock: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceStockPoint {
    pub label: String,
    pub price: f64,
    pub stock: i64,
}

pub fn price_distribution(products: &[Product]) -> Vec<PriceBucket> {
    let prices: Vec<f64> = products.iter().filter_map(Product::price_value).collect();
    PRICE_BUCKETS
        .iter()
        .map(|(label, low, high)| PriceBucket {
            range: label.to_string(),
            count: prices
                .iter()
                .filter(|p| **p >= *low && high.map_or(true, |h| **p < h))
                .count(),
        })
        .filter(|b| b.count > 0)
        .collect()
}

/// Products per category with their rounded average price. Categories
/// without products are left out.
pub fn category_distribution(categories: &[Category], products: &[Product]) -> Vec<CategoryShare> {
    categories
        .iter()
        .filter_map(|category| {
            let members: Vec<&Product> = products
                .iter()
                .filter(|p| p.category == Some(category.id))
                .collect();
            if members.is_empty() {
                return None;
            }
            let prices: Vec<f64> = members.iter().filter_map(|p| p.price_value()).collect();
            Some(CategoryShare {
                name: category.name.clone(),
                count: members.len(),
                avg_price: mean(&prices).map(f64::round).unwrap_or(0.0),
            })
        })
        .collect()
}

/// Sum of clamped stock per category, categories with stock only.
pub fn stock_by_category(categories: &[Category], rows: &[ProductRow]) -> Vec<CategoryStock> {
    categories
        .iter()
        .map(|category| CategoryStock {
            name: category.name.clone(),
            stock: rows
                .iter()
                .filter(|r| r.product.category == Some(category.id))
                .map(ProductRow::stock_or_zero)
                .sum(),
        })
        .filter(|c| c.stock > 0)
        .collect()
}

pub fn price_vs_stock(rows: &[ProductRow]) -> Vec<PriceStockPoint> {
    rows.iter()
        .filter_map(|r| {
            Some(PriceStockPoint {
                label: truncate_label(&r.product.name, NAME_LABEL_CHARS),
                price: r.product.price_value()?,
                stock: r.stock_or_zero(),
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductStats {
    pub total_products: usize,
    pub average_price: f64,
    pub total_categories: usize,
    pub out_of_stock: usize,
}

impl ProductStats {
    pub fn build(rows: &[ProductRow], categories: &[Category]) -> Self {
        let prices: Vec<f64> = rows.iter().filter_map(|r| r.product.price_value()).collect();
        Self {
            total_products: rows.len(),
            average_price: mean(&prices).map(f64::round).unwrap_or(0.0),
            total_categories: categories.len(),
            out_of_stock: rows
                .iter()
                .filter(|r| r.status == Some(StockStatus::OutOfStock))
                .count(),
        }
    }
}

impl ProductStats {
    pub fn indicators(&self) -> Vec<Indicator> {
        vec![
            Indicator::new("Products", "products", self.total_products as f64, ValueFormat::Integer),
            Indicator::new("Average price", "dollar", self.average_price, ValueFormat::Money),
            Indicator::new("Categories", "categories", self.total_categories as f64, ValueFormat::Integer),
            Indicator::new("Out of stock", "package-x", self.out_of_stock as f64, ValueFormat::Integer)
                .warn_if_positive(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_product::aggregate::enrich_products;
    use crate::domain::a002_product::aggregate::tests::product;
    use crate::domain::a003_inventory::aggregate::tests::record;

    fn category(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            description: None,
            parent: None,
        }
    }

    #[test]
    fn test_price_buckets_bounds() {
        let products = vec![
            product(1, "a", "0", None),
            product(2, "b", "99.99", None),
            product(3, "c", "100", None),
            product(4, "d", "1000", None),
            product(5, "e", "oops", None),
        ];
        let buckets = price_distribution(&products);
        assert_eq!(
            buckets,
            vec![
                PriceBucket { range: "0-100".to_string(), count: 2 },
                PriceBucket { range: "100-500".to_string(), count: 1 },
                PriceBucket { range: "1000+".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_category_distribution_rounds_average() {
        let categories = vec![category(1, "Kitchen")];
        let products = vec![
            product(1, "Pan", "10.40", Some(1)),
            product(2, "Pot", "11.00", Some(1)),
        ];
        let shares = category_distribution(&categories, &products);
        assert_eq!(shares[0].count, 2);
        assert_eq!(shares[0].avg_price, 11.0);
    }

    #[test]
    fn test_stock_by_category_and_stats() {
        let categories = vec![category(1, "Tools"), category(2, "Garden")];
        let products = vec![
            product(1, "Hammer", "12", Some(1)),
            product(2, "Rake", "30", Some(2)),
        ];
        let inventory = vec![record(1, 1, 20, 5, "available"), record(2, 2, 1, 4, "out_of_stock")];
        let rows = enrich_products(&products, &categories, &inventory);

        let stock = stock_by_category(&categories, &rows);
        assert_eq!(stock, vec![CategoryStock { name: "Tools".to_string(), stock: 15 }]);

        let stats = ProductStats::build(&rows, &categories);
        assert_eq!(stats.total_products, 2);
        assert_eq!(stats.average_price, 21.0);
        assert_eq!(stats.out_of_stock, 1);

        let points = price_vs_stock(&rows);
        assert_eq!(points[0].stock, 15);
        assert_eq!(points[1].price, 30.0);
    }
}
