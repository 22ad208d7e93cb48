//! Read-only order detail modal.

use crate::shared::components::ui::OrderStatusBadge;
use crate::shared::date_utils::{format_datetime, format_opt_datetime};
use crate::shared::modal::Modal;
use contracts::domain::a004_order::Order;
use contracts::domain::common::parse_decimal;
use contracts::shared::indicators::{format_value, ValueFormat};
use leptos::prelude::*;

fn money(raw: Option<&str>) -> String {
    raw.and_then(parse_decimal)
        .map(|v| format_value(v, ValueFormat::Money))
        .unwrap_or_else(|| "—".to_string())
}

#[component]
pub fn OrderDetails(order: Order, on_close: Callback<()>) -> impl IntoView {
    let title = format!("Order #{}", order.id);
    let total = format_value(order.total(), ValueFormat::Money);
    let created = format_opt_datetime(order.time_created.as_ref());
    let updated = order.time_updated.as_ref().map(format_datetime);

    view! {
        <Modal title=title on_close=on_close>
            <div class="details-container order-details">
                <dl class="details-grid">
                    <dt>"Customer"</dt>
                    <dd>{order.customer().to_string()}</dd>
                    <dt>"Status"</dt>
                    <dd><OrderStatusBadge status=order.status.clone() /></dd>
                    <dt>"Created"</dt>
                    <dd>{created}</dd>
                    {updated.map(|u| view! {
                        <dt>"Updated"</dt>
                        <dd>{u}</dd>
                    })}
                </dl>

                <table class="details-table">
                    <thead>
                        <tr>
                            <th>"Product"</th>
                            <th class="text-right">"Quantity"</th>
                            <th class="text-right">"Price"</th>
                            <th class="text-right">"Final price"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {order.items.iter().map(|item| view! {
                            <tr>
                                <td>{item.display_name()}</td>
                                <td class="text-right">{item.quantity}</td>
                                <td class="text-right">{money(item.price.as_deref())}</td>
                                <td class="text-right">{money(item.final_price.as_deref())}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                    <tfoot>
                        <tr>
                            <td colspan="3" class="text-right"><strong>"Total"</strong></td>
                            <td class="text-right"><strong>{total}</strong></td>
                        </tr>
                    </tfoot>
                </table>
            </div>
        </Modal>
    }
}
