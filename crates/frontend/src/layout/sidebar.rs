//! Sidebar navigation between the dashboard pages.

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Copy, Debug, PartialEq)]
struct MenuItem {
    path: &'static str,
    label: &'static str,
    icon: &'static str,
}

const MENU_ITEMS: &[MenuItem] = &[
    MenuItem { path: "/", label: "Dashboard", icon: "dashboard" },
    MenuItem { path: "/products", label: "Products", icon: "products" },
    MenuItem { path: "/inventory", label: "Inventory", icon: "inventory" },
    MenuItem { path: "/orders", label: "Orders", icon: "orders" },
    MenuItem { path: "/categories", label: "Categories", icon: "categories" },
];

/// Whether `item_path` is the page currently shown at `current`.
///
/// `current` may still carry the router base, so only the tail is compared.
fn is_active(item_path: &str, current: &str) -> bool {
    let current = current.trim_end_matches('/');
    let current = current
        .strip_prefix(crate::routes::routes::BASE_PATH)
        .unwrap_or(current);
    if item_path == "/" {
        current.is_empty() || current == "/"
    } else {
        current == item_path || current.starts_with(&format!("{item_path}/"))
    }
}

/// Label of the menu entry matching `current`, if any.
pub fn section_label(current: &str) -> Option<&'static str> {
    MENU_ITEMS
        .iter()
        .find(|item| is_active(item.path, current))
        .map(|item| item.label)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="app-sidebar__content">
            {MENU_ITEMS.iter().map(|item| {
                let item = *item;
                let pathname = location.pathname;
                view! {
                    <A href=item.path>
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || is_active(item.path, &pathname.get())
                        >
                            <div class="app-sidebar__item-content">
                                {icon(item.icon)}
                                <span>{item.label}</span>
                            </div>
                        </div>
                    </A>
                }
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_active_only_on_root() {
        assert!(is_active("/", "/ecommerce-dashboard"));
        assert!(is_active("/", "/ecommerce-dashboard/"));
        assert!(!is_active("/", "/ecommerce-dashboard/products"));
    }

    #[test]
    fn test_section_matches_nested_paths() {
        assert!(is_active("/orders", "/ecommerce-dashboard/orders"));
        assert!(is_active("/orders", "/orders/"));
        assert!(!is_active("/orders", "/ecommerce-dashboard/orders-archive"));
    }

    #[test]
    fn test_section_label_follows_route() {
        assert_eq!(section_label("/ecommerce-dashboard"), Some("Dashboard"));
        assert_eq!(section_label("/ecommerce-dashboard/inventory"), Some("Inventory"));
        assert_eq!(section_label("/ecommerce-dashboard/nowhere"), None);
    }
}
