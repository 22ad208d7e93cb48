use contracts::domain::a003_inventory::InventoryFilter;
use contracts::domain::common::EntityId;
use contracts::shared::list_query::ListControls;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum InventoryModal {
    Orders(EntityId),
    Edit(EntityId),
    Create,
}

pub fn create_state() -> RwSignal<ListControls<InventoryFilter>> {
    RwSignal::new(ListControls::new())
}
