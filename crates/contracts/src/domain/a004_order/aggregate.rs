use super::status::OrderStatus;
use crate::domain::common::wire_format::{de_opt_decimal_string, de_opt_timestamp};
use crate::domain::common::{parse_decimal, AggregateRoot, EntityId, HasId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_quantity() -> i64 {
    1
}

/// One order line. Name and prices are snapshots taken when the order was
/// placed; the product may no longer exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub product: Option<EntityId>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default, deserialize_with = "de_opt_decimal_string")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "de_opt_decimal_string")]
    pub final_price: Option<String>,
}

impl OrderItem {
    /// Revenue of the line: final price, else price, else 0.
    pub fn line_total(&self) -> f64 {
        self.final_price
            .as_deref()
            .and_then(parse_decimal)
            .or_else(|| self.price.as_deref().and_then(parse_decimal))
            .unwrap_or(0.0)
    }

    pub fn display_name(&self) -> String {
        match (&self.product_name, self.product) {
            (Some(name), _) if !name.is_empty() => name.clone(),
            (_, Some(id)) => format!("Product {}", id),
            _ => "Unknown product".to_string(),
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: EntityId,
    #[serde(default, deserialize_with = "de_opt_timestamp")]
    pub time_created: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de_opt_timestamp")]
    pub time_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Sum of line totals. Never read from a stored total.
    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn customer(&self) -> &str {
        self.user_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or("Guest")
    }
}

impl HasId for Order {
    fn entity_id(&self) -> EntityId {
        self.id
    }
}

impl AggregateRoot for Order {
    fn display_name(&self) -> String {
        format!("Order #{}", self.id)
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "orders"
    }

    fn element_name() -> &'static str {
        "Order"
    }

    fn list_name() -> &'static str {
        "Orders"
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::common::wire_format::parse_timestamp;

    pub(crate) fn item(product: EntityId, name: &str, quantity: i64, final_price: &str) -> OrderItem {
        OrderItem {
            id: None,
            product: Some(product),
            product_name: Some(name.to_string()),
            quantity,
            price: Some(final_price.to_string()),
            final_price: Some(final_price.to_string()),
        }
    }

    pub(crate) fn order(id: EntityId, created: &str, items: Vec<OrderItem>) -> Order {
        Order {
            id,
            time_created: parse_timestamp(created),
            time_updated: None,
            user_name: None,
            status: OrderStatus::Completed,
            items,
        }
    }

    #[test]
    fn test_line_total_fallbacks() {
        let json = r#"{"id":1,"time_created":"2024-02-03T10:00:00Z","status":"pending","items":[
            {"product":1,"product_name":"A","quantity":2,"price":"10.00","final_price":"18.00"},
            {"product":2,"product_name":"B","price":"5.50","final_price":null},
            {"product":3,"product_name":"C","price":null,"final_price":null}
        ]}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.items[0].line_total(), 18.0);
        assert_eq!(order.items[1].line_total(), 5.5);
        assert_eq!(order.items[1].quantity, 1);
        assert_eq!(order.items[2].line_total(), 0.0);
        assert_eq!(order.total(), 23.5);
        assert_eq!(order.customer(), "Guest");
    }

    #[test]
    fn test_missing_or_bad_timestamp() {
        let order: Order =
            serde_json::from_str(r#"{"id":2,"time_created":"not a date","status":"x"}"#).unwrap();
        assert_eq!(order.time_created, None);
        assert_eq!(order.status, OrderStatus::Other("x".to_string()));
        assert_eq!(order.total(), 0.0);
    }
}
