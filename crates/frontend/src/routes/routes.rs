use crate::domain::c001_salary_structure::ui::details::StructureDetails;
use crate::domain::c001_salary_structure::ui::form::StructureForm;
use crate::domain::c001_salary_structure::ui::list::StructureList;
use crate::domain::c002_employee_compensation::ui::form::CompensationForm;
use crate::domain::c002_employee_compensation::ui::history::CompensationHistory;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

/// Route table of the admin UI. No guards, no resolvers: every path maps
/// straight to a view, and create-vs-edit mode for the compensation editor is
/// carried by the route itself.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/structures" /> } />
                    <Route path=path!("/structures") view=StructureList />
                    <Route path=path!("/structures/new") view=StructureForm />
                    <Route path=path!("/structures/:id") view=StructureDetails />
                    <Route path=path!("/structures/:id/edit") view=StructureForm />
                    <Route path=path!("/employees/:id/compensation") view=CompensationHistory />
                    <Route
                        path=path!("/employees/:id/compensation/new")
                        view=|| view! { <CompensationForm edit_mode=false /> }
                    />
                    <Route
                        path=path!("/employees/:id/compensation/edit")
                        view=|| view! { <CompensationForm edit_mode=true /> }
                    />
                </Routes>
            </Shell>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1>{"Page not found"}</h1>
        </div>
    }
}
