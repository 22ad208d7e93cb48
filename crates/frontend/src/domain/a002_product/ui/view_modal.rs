//! Read-only product card.

use crate::shared::components::ui::{Badge, StockStatusBadge};
use crate::shared::date_utils::format_opt_date;
use crate::shared::modal::Modal;
use contracts::domain::a002_product::ProductRow;
use contracts::shared::indicators::{format_value, ValueFormat};
use leptos::prelude::*;

#[component]
pub fn ProductViewModal(row: ProductRow, on_close: Callback<()>) -> impl IntoView {
    let price = row
        .product
        .price_value()
        .map(|p| format_value(p, ValueFormat::Money))
        .unwrap_or_else(|| row.product.price.clone());
    let stock = row
        .stock
        .map(|s| s.to_string())
        .unwrap_or_else(|| "No inventory record".to_string());

    view! {
        <Modal title=row.product.name.clone() on_close=on_close>
            <dl class="details-list">
                <dt>"Price"</dt>
                <dd>{price}</dd>
                <dt>"Category"</dt>
                <dd>{row.category_name.clone()}</dd>
                <dt>"SKU"</dt>
                <dd>{row.product.sku.clone().unwrap_or_else(|| "—".to_string())}</dd>
                <dt>"Current stock"</dt>
                <dd>{stock}</dd>
                <dt>"Status"</dt>
                <dd>
                    {match row.status.clone() {
                        Some(status) => view! { <StockStatusBadge status=status /> }.into_any(),
                        None => view! { <Badge>"Untracked"</Badge> }.into_any(),
                    }}
                </dd>
                <dt>"Created"</dt>
                <dd>{format_opt_date(row.product.created.as_ref())}</dd>
            </dl>
            {row.product.description.clone().map(|d| view! { <p class="details-description">{d}</p> })}
        </Modal>
    }
}
