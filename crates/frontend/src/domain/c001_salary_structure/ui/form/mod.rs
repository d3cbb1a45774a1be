//! Salary Structure editor (EditDetails MVVM Standard)
//!
//! - state.rs: pure form state (ordered component field groups)
//! - model.rs: API functions (fetch, create, update)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod model;
mod state;
mod view;
mod view_model;

pub use state::{ComponentFields, StructureFormState};
pub use view::StructureForm;
pub use view_model::StructureFormViewModel;
