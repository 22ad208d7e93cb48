use super::view_model::ProductDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::Product;
use leptos::prelude::*;

/// Inline error under a form field.
fn field_error_view(vm: ProductDetailsViewModel, field: &'static str) -> impl IntoView {
    move || vm.field_error(field).map(|e| view! { <div class="form-group__error">{e}</div> })
}

#[component]
pub fn ProductDetails(
    /// Product being edited, `None` for a new one
    product: Option<Product>,
    categories: Vec<Category>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(product.as_ref());
    let title = if vm.is_edit_mode() { "Edit product" } else { "New product" };

    view! {
        <Modal title=title on_close=on_cancel>
            <div class="details-container product-details">
                {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

                <div class="details-form">
                    <div class="form-group">
                        <label for="product-name">"Name"</label>
                        <input
                            type="text"
                            id="product-name"
                            prop:value=move || vm.form.get().name
                            on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                            placeholder="Product name"
                        />
                        {field_error_view(vm, "name")}
                    </div>

                    <div class="form-group">
                        <label for="product-price">"Price"</label>
                        <input
                            type="number"
                            id="product-price"
                            step="0.01"
                            min="0"
                            prop:value=move || vm.form.get().price
                            on:input=move |ev| vm.form.update(|f| f.price = event_target_value(&ev))
                            placeholder="0.00"
                        />
                        {field_error_view(vm, "price")}
                    </div>

                    <div class="form-group">
                        <label for="product-category">"Category"</label>
                        <select
                            id="product-category"
                            prop:value=move || vm.form.get().category
                            on:change=move |ev| vm.form.update(|f| f.category = event_target_value(&ev))
                        >
                            <option value="">"Select a category"</option>
                            {categories.into_iter().map(|c| {
                                let value = c.id.to_string();
                                let selected_value = value.clone();
                                view! {
                                    <option
                                        value=value
                                        selected=move || vm.form.with(|f| f.category == selected_value)
                                    >
                                        {c.name}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                        {field_error_view(vm, "category")}
                    </div>

                    <div class="form-group">
                        <label for="product-sku">"SKU"</label>
                        <input
                            type="text"
                            id="product-sku"
                            prop:value=move || vm.form.get().sku
                            on:input=move |ev| vm.form.update(|f| f.sku = event_target_value(&ev))
                            placeholder="Optional"
                        />
                    </div>

                    <div class="form-group">
                        <label for="product-description">"Description"</label>
                        <textarea
                            id="product-description"
                            prop:value=move || vm.form.get().description
                            on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                            placeholder="Optional"
                            rows="3"
                        />
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
