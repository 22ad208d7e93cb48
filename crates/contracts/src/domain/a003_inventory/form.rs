use super::aggregate::{InventoryDto, InventoryRecord};
use super::status::StockStatus;
use crate::domain::common::EntityId;
use crate::shared::validation::FormErrors;
use serde::{Deserialize, Serialize};

/// Raw input of the inventory create/edit form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InventoryForm {
    pub id: Option<EntityId>,
    /// Product select value (the id as text).
    pub product: String,
    pub quantity_in: String,
    pub quantity_out: String,
    /// Status select value; empty until the user picks one.
    pub status: String,
}

fn parse_quantity(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        Some(0)
    } else {
        raw.parse::<i64>().ok()
    }
}

impl InventoryForm {
    pub fn from_record(record: &InventoryRecord) -> Self {
        Self {
            id: Some(record.id),
            product: record.product.map(|p| p.to_string()).unwrap_or_default(),
            quantity_in: record.quantity_in.to_string(),
            quantity_out: record.quantity_out.to_string(),
            status: record.status.as_str().to_string(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Threshold status for the quantities typed so far.
    pub fn suggested_status(&self) -> StockStatus {
        let stock_in = parse_quantity(&self.quantity_in).unwrap_or(0);
        let stock_out = parse_quantity(&self.quantity_out).unwrap_or(0);
        StockStatus::classify(stock_in.saturating_sub(stock_out).max(0))
    }

    pub fn validate(&self) -> Result<InventoryDto, FormErrors> {
        let mut errors = FormErrors::new();
        let product = self.product.trim().parse::<EntityId>().ok();
        if product.is_none() {
            errors.push("product", "Product is required");
        }
        let quantity_in = parse_quantity(&self.quantity_in);
        if quantity_in.is_none() {
            errors.push("quantity_in", "Quantity in must be a whole number");
        }
        let quantity_out = parse_quantity(&self.quantity_out);
        if quantity_out.is_none() {
            errors.push("quantity_out", "Quantity out must be a whole number");
        }

        let status = StockStatus::from_filter(&self.status).unwrap_or_else(|| self.suggested_status());
        errors.into_result(|| InventoryDto {
            product,
            quantity_in: quantity_in.unwrap_or(0),
            quantity_out: quantity_out.unwrap_or(0),
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_inventory::aggregate::tests::record;

    #[test]
    fn test_product_required() {
        let errors = InventoryForm::default().validate().unwrap_err();
        assert_eq!(errors.message_for("product"), Some("Product is required"));
        assert_eq!(errors.fields.len(), 1);
    }

    #[test]
    fn test_suggested_status_used_when_unset() {
        let form = InventoryForm {
            product: "4".to_string(),
            quantity_in: "12".to_string(),
            quantity_out: "5".to_string(),
            ..Default::default()
        };
        assert_eq!(form.suggested_status(), StockStatus::LowStock);
        let dto = form.validate().unwrap();
        assert_eq!(dto.product, Some(4));
        assert_eq!(dto.status, StockStatus::LowStock);
    }

    #[test]
    fn test_explicit_status_kept() {
        let mut form = InventoryForm::from_record(&record(9, 4, 100, 0, "available"));
        form.status = "out_of_stock".to_string();
        assert!(form.is_edit());
        assert_eq!(form.validate().unwrap().status, StockStatus::OutOfStock);
    }

    #[test]
    fn test_bad_quantity() {
        let form = InventoryForm {
            product: "1".to_string(),
            quantity_in: "ten".to_string(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.message_for("quantity_in").is_some());
    }

    #[test]
    fn test_extreme_quantities_do_not_overflow() {
        let form = InventoryForm {
            product: "1".to_string(),
            quantity_in: i64::MAX.to_string(),
            quantity_out: "-1".to_string(),
            ..Default::default()
        };
        assert_eq!(form.suggested_status(), StockStatus::Available);
        let dto = form.validate().unwrap();
        assert_eq!(dto.quantity_in, i64::MAX);
        assert_eq!(dto.status, StockStatus::Available);

        let drained = InventoryForm {
            quantity_in: i64::MIN.to_string(),
            quantity_out: "5".to_string(),
            ..form
        };
        assert_eq!(drained.suggested_status(), StockStatus::OutOfStock);
    }
}
