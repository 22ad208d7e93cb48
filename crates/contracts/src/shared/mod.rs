pub mod analytics;
pub mod catalog;
pub mod delete_guard;
pub mod indicators;
pub mod list_query;
pub mod validation;
