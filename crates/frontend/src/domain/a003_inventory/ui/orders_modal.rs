//! Orders that contain one inventory record's product.

use crate::shared::components::ui::OrderStatusBadge;
use crate::shared::date_utils::format_opt_date;
use crate::shared::modal::Modal;
use contracts::domain::a003_inventory::analytics::orders_for_product;
use contracts::domain::a003_inventory::InventoryRow;
use contracts::domain::a004_order::Order;
use contracts::shared::indicators::{format_value, ValueFormat};
use leptos::prelude::*;

#[component]
pub fn ProductOrdersModal(row: InventoryRow, orders: Vec<Order>, on_close: Callback<()>) -> impl IntoView {
    let matched = orders_for_product(&orders, row.record.product, &row.product_name);
    let title = format!("Orders for {}", row.product_name);
    let summary = format!(
        "{} orders, {} units ordered",
        matched.orders.len(),
        matched.total_quantity
    );

    view! {
        <Modal title=title on_close=on_close>
            <p class="details-summary">{summary}</p>
            {if matched.orders.is_empty() {
                view! { <p class="text-muted">"No orders contain this product."</p> }.into_any()
            } else {
                view! {
                    <table class="details-table">
                        <thead>
                            <tr>
                                <th>"Order"</th>
                                <th>"Date"</th>
                                <th>"Customer"</th>
                                <th>"Status"</th>
                                <th class="text-right">"Total"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {matched.orders.into_iter().map(|order| view! {
                                <tr>
                                    <td>{format!("#{}", order.id)}</td>
                                    <td>{format_opt_date(order.time_created.as_ref())}</td>
                                    <td>{order.customer().to_string()}</td>
                                    <td><OrderStatusBadge status=order.status.clone() /></td>
                                    <td class="text-right">{format_value(order.total(), ValueFormat::Money)}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_any()
            }}
        </Modal>
    }
}
