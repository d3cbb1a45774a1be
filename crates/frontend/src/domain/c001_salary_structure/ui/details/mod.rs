use crate::shared::api_utils::{self, ApiError};
use crate::shared::date_utils::format_datetime;
use contracts::domain::c001_salary_structure::SalaryStructure;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

/// Read-only view of one salary structure and its component list.
#[component]
#[allow(non_snake_case)]
pub fn StructureDetails() -> impl IntoView {
    let params = use_params_map();
    let id = params
        .get_untracked()
        .get("id")
        .and_then(|s| s.parse::<i64>().ok());

    let (structure, set_structure) = signal::<Option<SalaryStructure>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    match id {
        Some(id) => {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_by_id(id).await {
                    Ok(s) => set_structure.set(Some(s)),
                    Err(e) => {
                        log::error!("failed to load structure {id}: {e}");
                        set_error.set(Some(format!("Failed to load structure: {e}")));
                    }
                }
            });
        }
        None => set_error.set(Some("Invalid structure id".to_string())),
    }

    let edit_href = id
        .map(|id| format!("/structures/{id}/edit"))
        .unwrap_or_else(|| "/structures".to_string());

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">
                        {move || structure.get().map(|s| s.name).unwrap_or_else(|| "Salary structure".to_string())}
                    </h1>
                </div>
                <div class="header__actions">
                    <A href=edit_href attr:class="button button--primary">{"Edit"}</A>
                    <A href="/structures" attr:class="button button--secondary">{"Back to list"}</A>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            {move || structure.get().map(|s| view! {
                <div class="details-container">
                    <dl class="details-meta">
                        <dt>{"Country"}</dt>
                        <dd>{s.country.as_str()}</dd>
                        <dt>{"Created"}</dt>
                        <dd>{s.created_at.as_deref().map(format_datetime).unwrap_or_default()}</dd>
                        <dt>{"Updated"}</dt>
                        <dd>{s.updated_at.as_deref().map(format_datetime).unwrap_or_else(|| "-".to_string())}</dd>
                    </dl>

                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">{"Component"}</th>
                                    <th class="table__header-cell">{"Type"}</th>
                                    <th class="table__header-cell">{"Rule"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {s.components.into_iter().map(|c| view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{c.name}</td>
                                        <td class="table__cell">{c.kind.as_str()}</td>
                                        <td class="table__cell">
                                            {c.rule_kind.map(|r| r.as_str()).unwrap_or("-")}
                                        </td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                </div>
            })}
        </div>
    }
}

async fn fetch_by_id(id: i64) -> Result<SalaryStructure, ApiError> {
    api_utils::get_json(&format!("/structures/{id}")).await
}
