use super::aggregate::{Product, ProductDto};
use crate::domain::common::EntityId;
use crate::shared::validation::{optional_text, FormErrors};
use serde::{Deserialize, Serialize};

/// Raw input of the product create/edit form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductForm {
    /// Set when editing an existing product.
    pub id: Option<EntityId>,
    pub name: String,
    pub price: String,
    /// Category select value (the id as text).
    pub category: String,
    pub sku: String,
    pub description: String,
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name.clone(),
            price: product.price.clone(),
            category: product.category.map(|c| c.to_string()).unwrap_or_default(),
            sku: product.sku.clone().unwrap_or_default(),
            description: product.description.clone().unwrap_or_default(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Check required fields and build the request body.
    pub fn validate(&self) -> Result<ProductDto, FormErrors> {
        let mut errors = FormErrors::new();
        errors.require("name", "Name", &self.name);
        errors.require("price", "Price", &self.price);
        let category = self.category.trim().parse::<EntityId>().ok();
        if category.is_none() {
            errors.push("category", "Category is required");
        }

        errors.into_result(|| ProductDto {
            name: self.name.trim().to_string(),
            price: self.price.trim().to_string(),
            category,
            sku: optional_text(&self.sku),
            description: optional_text(&self.description),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_product::aggregate::tests::product;

    #[test]
    fn test_empty_form_lists_every_required_field() {
        let errors = ProductForm::default().validate().unwrap_err();
        let fields: Vec<_> = errors.fields.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "price", "category"]);
    }

    #[test]
    fn test_valid_form_builds_dto() {
        let form = ProductForm {
            name: " Kettle ".to_string(),
            price: "34.50".to_string(),
            category: "2".to_string(),
            sku: "".to_string(),
            description: "Steel".to_string(),
            ..Default::default()
        };
        let dto = form.validate().unwrap();
        assert_eq!(dto.name, "Kettle");
        assert_eq!(dto.category, Some(2));
        assert_eq!(dto.sku, None);
        assert_eq!(dto.description.as_deref(), Some("Steel"));
        assert!(!form.is_edit());
    }

    #[test]
    fn test_edit_form_prefilled() {
        let form = ProductForm::from_product(&product(5, "Mug", "8.00", Some(3)));
        assert!(form.is_edit());
        assert_eq!(form.category, "3");
        assert_eq!(form.validate().unwrap().price, "8.00");
    }
}
