use contracts::domain::a004_order::OrderFilter;
use contracts::shared::list_query::ListControls;
use leptos::prelude::*;

pub fn create_state() -> RwSignal<ListControls<OrderFilter>> {
    RwSignal::new(ListControls::new())
}
