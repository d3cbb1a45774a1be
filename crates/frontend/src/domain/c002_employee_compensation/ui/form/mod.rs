//! Compensation assignment editor (EditDetails MVVM Standard)
//!
//! - reconcile.rs: pure field-set derivation and record reconciliation
//! - model.rs: API functions (catalog, history, create, update)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod model;
mod reconcile;
mod view;
mod view_model;

pub use reconcile::{ReconciledForm, ValueRow};
pub use view::CompensationForm;
pub use view_model::CompensationFormViewModel;
