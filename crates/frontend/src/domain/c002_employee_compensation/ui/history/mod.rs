//! Compensation history view for one employee.

mod lookup;
mod model;

pub use lookup::NameIndex;

use crate::shared::date_utils::{format_date, format_datetime};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use contracts::domain::c002_employee_compensation::EmployeeCompensation;

/// Lists every compensation record of an employee, newest last (the
/// backend's order). Structure and component ids are resolved to names
/// through a view-scoped index built from the catalog fetched alongside the
/// history; both fetches are joined before anything renders.
#[component]
#[allow(non_snake_case)]
pub fn CompensationHistory() -> impl IntoView {
    let params = use_params_map();
    let employee_id = params.get_untracked().get("id").unwrap_or_default();

    let (records, set_records) = signal::<Vec<EmployeeCompensation>>(Vec::new());
    let (names, set_names) = signal(NameIndex::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loaded, set_loaded) = signal(false);

    {
        let employee_id = employee_id.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let (catalog, history) =
                futures::join!(model::fetch_structures(), model::fetch_history(&employee_id));

            match catalog {
                Ok(catalog) => set_names.set(NameIndex::build(&catalog)),
                // Names degrade to raw ids; the history itself still renders.
                Err(e) => log::warn!("structure catalog unavailable, showing raw ids: {e}"),
            }
            match history {
                Ok(history) => set_records.set(history),
                Err(e) => {
                    log::error!("failed to load compensation history: {e}");
                    set_error.set(Some(format!("Failed to load compensation history: {e}")));
                }
            }
            set_loaded.set(true);
        });
    }

    let new_href = format!("/employees/{}/compensation/new", employee_id);
    let edit_href = format!("/employees/{}/compensation/edit", employee_id);
    let has_records = move || !records.get().is_empty();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Compensation history"}</h1>
                    <span class="header__subtitle">{format!("Employee {}", employee_id)}</span>
                </div>
                <div class="header__actions">
                    <A href=new_href attr:class="button button--primary">{"Assign compensation"}</A>
                    <Show when=has_records>
                        <A href=edit_href.clone() attr:class="button button--secondary">{"Edit latest"}</A>
                    </Show>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Show when=move || loaded.get() && records.get().is_empty() && error.get().is_none()>
                <div class="empty-state">
                    {"No compensation records for this employee yet."}
                </div>
            </Show>

            {move || {
                let index = names.get();
                records.get().into_iter().map(|record| {
                    let structure = index.structure_name(record.structure_id);
                    let created = record
                        .created_at
                        .as_deref()
                        .map(format_datetime)
                        .unwrap_or_default();
                    view! {
                        <div class="card">
                            <div class="card__header">
                                <h3>{structure}</h3>
                                <span class="card__meta">
                                    {format!("Effective from {}", format_date(&record.effective_from.to_string()))}
                                </span>
                                <span class="card__meta">{created}</span>
                            </div>
                            <table class="table__data">
                                <tbody>
                                    {record.component_values.iter().map(|v| view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{index.component_name(v.component_id)}</td>
                                            <td class="table__cell table__cell--number">{v.value}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }
                }).collect_view()
            }}
        </div>
    }
}
