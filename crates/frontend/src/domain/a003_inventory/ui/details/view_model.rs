use super::model;
use contracts::domain::a003_inventory::{InventoryForm, InventoryRecord};
use contracts::shared::validation::FormErrors;
use leptos::prelude::*;

/// ViewModel for the inventory form
#[derive(Clone, Copy)]
pub struct InventoryDetailsViewModel {
    pub form: RwSignal<InventoryForm>,
    pub field_errors: RwSignal<FormErrors>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl InventoryDetailsViewModel {
    pub fn new(record: Option<&InventoryRecord>) -> Self {
        let form = record.map(InventoryForm::from_record).unwrap_or_default();
        Self {
            form: RwSignal::new(form),
            field_errors: RwSignal::new(FormErrors::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with_untracked(|f| f.is_edit())
    }

    pub fn field_error(&self, field: &str) -> Option<String> {
        self.field_errors
            .with(|errors| errors.message_for(field).map(str::to_string))
    }

    /// Status the threshold rule proposes for the typed quantities.
    pub fn suggestion(&self) -> String {
        self.form.with(|f| f.suggested_status().label().to_string())
    }

    pub fn apply_suggestion(&self) {
        self.form.update(|f| f.status = f.suggested_status().as_str().to_string());
    }

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
            let result = model::save_record(current.id, &dto).await;
            saving.set(false);
            match result {
                Ok(saved) => {
                    log::info!("saved inventory record {}", saved.id);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("{}", e);
                    error.set(Some("Could not save the inventory record. Please try again.".to_string()));
                }
            }
        });
    }
}
