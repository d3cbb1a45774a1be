use crate::shared::api_utils::{self, ApiError};
use crate::shared::date_utils::format_datetime;
use contracts::domain::c001_salary_structure::SalaryStructure;
use leptos::prelude::*;
use leptos_router::components::A;

/// Salary structure catalog. Deletion is guarded twice: a browser confirm
/// first, and the backend refuses with 409 while the structure is still
/// assigned to any employee. The conflict is reported inline and the list is
/// left untouched; only a successful delete triggers a re-fetch.
#[component]
#[allow(non_snake_case)]
pub fn StructureList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<SalaryStructure>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_structures().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load structure catalog: {e}");
                    set_error.set(Some(format!("Failed to load salary structures: {e}")));
                }
            }
        });
    };

    let handle_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Are you sure you want to delete this salary structure?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            match delete_structure(id).await {
                Ok(()) => {
                    set_error.set(None);
                    fetch();
                }
                Err(e) if e.is_conflict() => {
                    set_error.set(Some(
                        "Cannot delete: this structure is still assigned to one or more employees."
                            .to_string(),
                    ));
                }
                Err(e) => {
                    log::error!("failed to delete structure {id}: {e}");
                    set_error.set(Some(format!("Failed to delete structure: {e}")));
                }
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Salary structures"}</h1>
                </div>
                <div class="header__actions">
                    <A href="/structures/new" attr:class="button button--primary">
                        {"New structure"}
                    </A>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Name"}</th>
                            <th class="table__header-cell">{"Country"}</th>
                            <th class="table__header-cell">{"Components"}</th>
                            <th class="table__header-cell">{"Created"}</th>
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|s| {
                            let id = s.id.map(|i| i.value()).unwrap_or_default();
                            let name = s.name.clone();
                            let country = s.country.as_str();
                            let component_count = s.component_count();
                            let created_at = s.created_at.as_deref().map(format_datetime).unwrap_or_default();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">
                                        <A href=format!("/structures/{id}")>{name}</A>
                                    </td>
                                    <td class="table__cell">{country}</td>
                                    <td class="table__cell">{component_count}</td>
                                    <td class="table__cell">
                                        {created_at}
                                    </td>
                                    <td class="table__cell table__cell--actions">
                                        <A href=format!("/structures/{id}/edit") attr:class="button button--secondary">
                                            {"Edit"}
                                        </A>
                                        <button
                                            class="button button--danger"
                                            on:click=move |_| handle_delete(id)
                                        >
                                            {"Delete"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

async fn fetch_structures() -> Result<Vec<SalaryStructure>, ApiError> {
    api_utils::get_json("/structures/").await
}

async fn delete_structure(id: i64) -> Result<(), ApiError> {
    api_utils::delete(&format!("/structures/{id}")).await
}
