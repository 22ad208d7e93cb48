pub mod aggregate;
pub mod analytics;
pub mod filter;
pub mod status;

pub use aggregate::{Order, OrderItem};
pub use analytics::OrderStats;
pub use filter::{OrderFilter, OrderSort};
pub use status::OrderStatus;
