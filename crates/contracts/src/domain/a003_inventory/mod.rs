pub mod aggregate;
pub mod analytics;
pub mod filter;
pub mod form;
pub mod status;

pub use aggregate::{InventoryDto, InventoryRecord, InventoryRow};
pub use analytics::InventoryStats;
pub use filter::{InventoryFilter, InventorySort};
pub use form::InventoryForm;
pub use status::StockStatus;
