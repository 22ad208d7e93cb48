pub mod badge;

pub use badge::{Badge, OrderStatusBadge, StockStatusBadge};
