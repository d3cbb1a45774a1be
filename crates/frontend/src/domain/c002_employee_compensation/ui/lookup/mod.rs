use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Header widget: jump to an employee's compensation history by id. Employee
/// ids are issued elsewhere; no validation beyond non-empty.
#[component]
#[allow(non_snake_case)]
pub fn EmployeeLookup() -> impl IntoView {
    let (employee_id, set_employee_id) = signal(String::new());
    let navigate = use_navigate();

    let on_search = move |_| {
        let id = employee_id.get_untracked().trim().to_string();
        if id.is_empty() {
            return;
        }
        navigate(
            &format!("/employees/{}/compensation", id),
            Default::default(),
        );
    };

    view! {
        <div class="employee-lookup">
            <input
                type="text"
                placeholder="Employee id"
                prop:value=move || employee_id.get()
                on:input=move |ev| set_employee_id.set(event_target_value(&ev))
            />
            <button class="button button--secondary" on:click=on_search>
                {"Compensation"}
            </button>
        </div>
    }
}
