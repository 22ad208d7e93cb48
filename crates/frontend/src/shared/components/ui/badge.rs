use contracts::domain::a003_inventory::StockStatus;
use contracts::domain::a004_order::OrderStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge badge--primary",
        "success" => "badge badge--success",
        "warning" => "badge badge--warning",
        "error" => "badge badge--error",
        _ => "badge badge--neutral",
    };

    view! {
        <span class=variant_class>
            {children()}
        </span>
    }
}

pub fn stock_variant(status: &StockStatus) -> &'static str {
    match status {
        StockStatus::Available => "success",
        StockStatus::LowStock => "warning",
        StockStatus::OutOfStock => "error",
        StockStatus::Other(_) => "neutral",
    }
}

pub fn order_variant(status: &OrderStatus) -> &'static str {
    match status {
        OrderStatus::Completed => "success",
        OrderStatus::Processing => "primary",
        OrderStatus::Pending => "warning",
        OrderStatus::Cancelled => "error",
        OrderStatus::Other(_) => "neutral",
    }
}

#[component]
pub fn StockStatusBadge(status: StockStatus) -> impl IntoView {
    let variant = stock_variant(&status);
    view! { <Badge variant=variant>{status.label().to_string()}</Badge> }
}

#[component]
pub fn OrderStatusBadge(status: OrderStatus) -> impl IntoView {
    let variant = order_variant(&status);
    view! { <Badge variant=variant>{status.label().to_string()}</Badge> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants() {
        assert_eq!(stock_variant(&StockStatus::OutOfStock), "error");
        assert_eq!(stock_variant(&StockStatus::Other("discontinued".into())), "neutral");
        assert_eq!(order_variant(&OrderStatus::Completed), "success");
    }
}
