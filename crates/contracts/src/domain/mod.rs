pub mod a001_category;
pub mod a002_product;
pub mod a003_inventory;
pub mod a004_order;
pub mod common;
