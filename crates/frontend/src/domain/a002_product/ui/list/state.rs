use contracts::domain::a002_product::ProductFilter;
use contracts::shared::list_query::ListControls;
use leptos::prelude::*;

/// Which modal the products page has open.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductModal {
    View(i64),
    Edit(i64),
    Create,
}

// Create state within component scope instead of thread-local
// This ensures state is properly disposed when component unmounts
pub fn create_state() -> RwSignal<ListControls<ProductFilter>> {
    RwSignal::new(ListControls::new())
}
