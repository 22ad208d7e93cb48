pub mod details;
pub mod list;
pub mod orders_modal;
