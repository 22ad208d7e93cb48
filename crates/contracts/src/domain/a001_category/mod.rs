pub mod aggregate;
pub mod analytics;
pub mod filter;

pub use aggregate::Category;
pub use analytics::{CategoryAnalytics, CategoryStats};
pub use filter::{CategoryFilter, CategorySort};
