use super::model;
use super::reconcile::{build_draft, reconcile, rows_for_selection, ValueRow};
use contracts::domain::c001_salary_structure::{ComponentId, SalaryStructure, StructureId};
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the compensation assignment editor.
///
/// Holds the structure catalog, the current selection and the derived value
/// rows. All row manipulation goes through the pure functions in
/// `reconcile`; the view model only moves their results in and out of
/// signals.
#[derive(Clone)]
pub struct CompensationFormViewModel {
    pub employee_id: String,
    pub edit_mode: bool,

    pub catalog: RwSignal<Vec<SalaryStructure>>,
    pub structure_id: RwSignal<Option<StructureId>>,
    pub effective_from: RwSignal<String>,
    pub rows: RwSignal<Vec<ValueRow>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl CompensationFormViewModel {
    pub fn new(employee_id: String, edit_mode: bool) -> Self {
        Self {
            employee_id,
            edit_mode,
            catalog: RwSignal::new(Vec::new()),
            structure_id: RwSignal::new(None),
            effective_from: RwSignal::new(String::new()),
            rows: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(true),
            saving: RwSignal::new(false),
        }
    }

    /// Load everything the editor needs. In edit mode the catalog and the
    /// employee's history are fetched concurrently and joined; reconciliation
    /// runs only after both have settled, so it cannot observe a half-loaded
    /// state no matter which response arrives first. Either failure takes the
    /// error path and leaves the editor in its default state.
    pub fn load(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if vm.edit_mode {
                let (catalog, history) = futures::join!(
                    model::fetch_structures(),
                    model::fetch_history(&vm.employee_id)
                );
                vm.loading.set(false);

                let catalog = match catalog {
                    Ok(catalog) => catalog,
                    Err(e) => {
                        log::error!("failed to load structure catalog: {e}");
                        vm.error
                            .set(Some(format!("Failed to load salary structures: {e}")));
                        return;
                    }
                };
                let history = match history {
                    Ok(history) => history,
                    Err(e) => {
                        log::error!("failed to load compensation history: {e}");
                        vm.catalog.set(catalog);
                        vm.error
                            .set(Some(format!("Failed to load compensation history: {e}")));
                        return;
                    }
                };
                vm.catalog.set(catalog.clone());

                // No history: stay in the default new-assignment state.
                if let Some(reconciled) = reconcile(&catalog, &history) {
                    vm.structure_id.set(Some(reconciled.structure_id));
                    vm.effective_from.set(reconciled.effective_from);
                    vm.rows.set(reconciled.rows);
                }
            } else {
                match model::fetch_structures().await {
                    Ok(catalog) => vm.catalog.set(catalog),
                    Err(e) => {
                        log::error!("failed to load structure catalog: {e}");
                        vm.error
                            .set(Some(format!("Failed to load salary structures: {e}")));
                    }
                }
                vm.loading.set(false);
            }
        });
    }

    /// Replace the row set from the newly selected structure. Entered values
    /// do not survive a switch; there is no cross-structure value mapping.
    pub fn select_structure(&self, raw: &str) {
        let id = raw.trim().parse::<i64>().ok().map(StructureId);
        self.structure_id.set(id);
        let rows = self
            .catalog
            .with_untracked(|catalog| rows_for_selection(catalog, id));
        self.rows.set(rows);
    }

    pub fn set_row_value(&self, component_id: ComponentId, value: String) {
        self.rows.update(|rows| {
            if let Some(row) = rows.iter_mut().find(|r| r.component_id == component_id) {
                row.value = value;
            }
        });
    }

    /// Validate, coerce and issue exactly one write. Validation failures
    /// never leave the client; only a successful write triggers `on_saved`.
    pub fn submit_command(&self, on_saved: Rc<dyn Fn(())>) {
        let draft = {
            let structure_id = self.structure_id.get_untracked();
            let effective_from = self.effective_from.get_untracked();
            let result = self.rows.with_untracked(|rows| {
                build_draft(&self.employee_id, structure_id, &effective_from, rows)
            });
            match result {
                Ok(draft) => draft,
                Err(e) => {
                    self.error.set(Some(e));
                    return;
                }
            }
        };

        let vm = self.clone();
        vm.saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = if vm.edit_mode {
                model::update_compensation(&vm.employee_id, &draft).await
            } else {
                model::create_compensation(&vm.employee_id, &draft).await
            };
            vm.saving.set(false);
            match result {
                Ok(_) => (on_saved)(()),
                Err(e) => {
                    log::error!("failed to save compensation: {e}");
                    vm.error
                        .set(Some(format!("Failed to save compensation: {e}")));
                }
            }
        });
    }
}
