use super::view_model::InventoryDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a002_product::Product;
use contracts::domain::a003_inventory::{InventoryRecord, StockStatus};
use leptos::prelude::*;

fn field_error_view(vm: InventoryDetailsViewModel, field: &'static str) -> impl IntoView {
    move || vm.field_error(field).map(|e| view! { <div class="form-group__error">{e}</div> })
}

#[component]
pub fn InventoryDetails(
    record: Option<InventoryRecord>,
    products: Vec<Product>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = InventoryDetailsViewModel::new(record.as_ref());
    let title = if vm.is_edit_mode() { "Edit inventory record" } else { "New inventory record" };

    view! {
        <Modal title=title on_close=on_cancel>
            <div class="details-container inventory-details">
                {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

                <div class="details-form">
                    <div class="form-group">
                        <label for="inventory-product">"Product"</label>
                        <select
                            id="inventory-product"
                            prop:value=move || vm.form.get().product
                            on:change=move |ev| vm.form.update(|f| f.product = event_target_value(&ev))
                        >
                            <option value="">"Select a product"</option>
                            {products.into_iter().map(|p| {
                                let value = p.id.to_string();
                                let selected_value = value.clone();
                                view! {
                                    <option
                                        value=value
                                        selected=move || vm.form.with(|f| f.product == selected_value)
                                    >
                                        {p.name}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                        {field_error_view(vm, "product")}
                    </div>

                    <div class="form-group">
                        <label for="inventory-in">"Quantity in"</label>
                        <input
                            type="number"
                            id="inventory-in"
                            min="0"
                            prop:value=move || vm.form.get().quantity_in
                            on:input=move |ev| vm.form.update(|f| f.quantity_in = event_target_value(&ev))
                            placeholder="0"
                        />
                        {field_error_view(vm, "quantity_in")}
                    </div>

                    <div class="form-group">
                        <label for="inventory-out">"Quantity out"</label>
                        <input
                            type="number"
                            id="inventory-out"
                            min="0"
                            prop:value=move || vm.form.get().quantity_out
                            on:input=move |ev| vm.form.update(|f| f.quantity_out = event_target_value(&ev))
                            placeholder="0"
                        />
                        {field_error_view(vm, "quantity_out")}
                    </div>

                    <div class="form-group">
                        <label for="inventory-status">"Status"</label>
                        <select
                            id="inventory-status"
                            prop:value=move || vm.form.get().status
                            on:change=move |ev| vm.form.update(|f| f.status = event_target_value(&ev))
                        >
                            <option value="">"Use suggestion"</option>
                            {StockStatus::KNOWN.iter().map(|s| {
                                let value = s.as_str().to_string();
                                let selected_value = value.clone();
                                view! {
                                    <option
                                        value=value
                                        selected=move || vm.form.with(|f| f.status == selected_value)
                                    >
                                        {s.label().to_string()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                        <div class="form-group__hint">
                            "Suggested: "
                            <a href="#" on:click=move |ev| {
                                ev.prevent_default();
                                vm.apply_suggestion();
                            }>{move || vm.suggestion()}</a>
                        </div>
                    </div>
                </div>

                <div class="details-actions">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| vm.save_command(on_saved)
                        disabled=move || vm.saving.get()
                    >
                        {icon("plus")}
                        {move || if vm.is_edit_mode() { " Save" } else { " Create" }}
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                        {icon("x")}
                        " Cancel"
                    </button>
                </div>
            </div>
        </Modal>
    }
}
