use super::model;
use super::state::StructureFormState;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the salary structure editor
#[derive(Clone)]
pub struct StructureFormViewModel {
    pub structure_id: RwSignal<Option<i64>>,
    pub form: RwSignal<StructureFormState>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl StructureFormViewModel {
    pub fn new() -> Self {
        Self {
            structure_id: RwSignal::new(None),
            form: RwSignal::new(StructureFormState::new_blank()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.structure_id.get().is_some()
    }

    /// Load form data from server if an id is present; a fresh form with one
    /// blank component group otherwise.
    pub fn load_if_needed(&self, id: Option<i64>) {
        let Some(existing_id) = id else {
            self.form.set(StructureFormState::new_blank());
            return;
        };
        self.structure_id.set(Some(existing_id));

        let form = self.form;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_by_id(existing_id).await {
                Ok(structure) => form.set(StructureFormState::from_structure(&structure)),
                Err(e) => {
                    log::error!("failed to load structure {existing_id}: {e}");
                    error.set(Some(format!("Failed to load structure: {e}")));
                }
            }
        });
    }

    /// Save form data to server: one write carrying the whole structure.
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let current = self.form.get();

        if let Err(e) = current.validate() {
            self.error.set(Some(e));
            return;
        }
        let draft = current.to_draft();

        let id = self.structure_id.get();
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match id {
                Some(id) => model::update_structure(id, &draft).await,
                None => model::create_structure(&draft).await,
            };
            saving.set(false);
            match result {
                Ok(_) => (on_saved)(()),
                Err(e) => {
                    log::error!("failed to save structure: {e}");
                    error.set(Some(format!("Failed to save structure: {e}")));
                }
            }
        });
    }
}
