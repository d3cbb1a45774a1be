use crate::domain::c002_employee_compensation::ui::lookup::EmployeeLookup;
use leptos::prelude::*;
use leptos_router::components::A;

/// Application chrome: brand header, catalog navigation and the employee
/// lookup box. Views render into the main area below.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app">
            <header class="app-header">
                <div class="app-header__brand">
                    <A href="/structures">{"Compensation Admin"}</A>
                </div>
                <nav class="app-header__nav">
                    <A href="/structures">{"Salary structures"}</A>
                </nav>
                <EmployeeLookup />
            </header>
            <main class="app-main">{children()}</main>
        </div>
    }
}
