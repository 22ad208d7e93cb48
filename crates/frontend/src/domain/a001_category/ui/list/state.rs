use contracts::domain::a001_category::CategoryFilter;
use contracts::shared::list_query::ListControls;
use leptos::prelude::*;

pub fn create_state() -> RwSignal<ListControls<CategoryFilter>> {
    RwSignal::new(ListControls::new())
}
