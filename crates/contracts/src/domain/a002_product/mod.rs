pub mod aggregate;
pub mod analytics;
pub mod filter;
pub mod form;

pub use aggregate::{Product, ProductDto, ProductRow};
pub use analytics::ProductStats;
pub use filter::ProductFilter;
pub use form::ProductForm;
