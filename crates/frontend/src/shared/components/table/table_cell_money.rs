//! Table cell for money values.
//!
//! ```ignore
//! <TableCellMoney value=row.price_value() />
//! <TableCellMoney value=Some(order.total()) bold=true />
//! ```

use contracts::shared::indicators::{format_value, ValueFormat};
use leptos::prelude::*;
use thaw::*;

/// Right-aligned `$1,234.50`, or a dash when the API value did not parse.
#[component]
pub fn TableCellMoney(
    value: Option<f64>,

    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let text = value
        .map(|v| format_value(v, ValueFormat::Money))
        .unwrap_or_else(|| "—".to_string());
    let style = if bold { "font-weight: 600" } else { "" };

    view! {
        <TableCell class="text-right">
            <span style=style>{text}</span>
        </TableCell>
    }
}
