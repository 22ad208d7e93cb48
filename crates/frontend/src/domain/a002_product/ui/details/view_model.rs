use super::model;
use contracts::domain::a002_product::{Product, ProductForm};
use contracts::shared::validation::FormErrors;
use leptos::prelude::*;

/// ViewModel for the product form
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductForm>,
    pub field_errors: RwSignal<FormErrors>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ProductDetailsViewModel {
    pub fn new(product: Option<&Product>) -> Self {
        let form = product.map(ProductForm::from_product).unwrap_or_default();
        Self {
            form: RwSignal::new(form),
            field_errors: RwSignal::new(FormErrors::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.is_edit())
    }

    pub fn field_error(&self, field: &str) -> Option<String> {
        self.field_errors
            .with(|errors| errors.message_for(field).map(str::to_string))
    }

    /// Validate, then save to the server
    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        let dto = match current.validate() {
            Ok(dto) => dto,
            Err(errors) => {
                self.field_errors.set(errors);
                return;
            }
        };
        self.field_errors.set(FormErrors::new());
        self.error.set(None);
        self.saving.set(true);

        let error = self.error;
        let saving = self.saving;
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::save_product(current.id, &dto).await;
            saving.set(false);
            match result {
                Ok(saved) => {
                    log::info!("saved product {} ({})", saved.id, saved.name);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("{}", e);
                    error.set(Some("Could not save the product. Please try again.".to_string()));
                }
            }
        });
    }
}
