pub mod api_utils;
pub mod components;
pub mod confirm;
pub mod date_utils;
pub mod http;
pub mod icons;
pub mod list_state;
pub mod list_utils;
pub mod load_state;
pub mod modal;
pub mod page_frame;
pub mod page_standard;
pub mod query_cache;
