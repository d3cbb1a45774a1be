use super::reconcile::ValueRow;
use super::view_model::CompensationFormViewModel;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use std::rc::Rc;

/// Assignment editor for one employee. `edit_mode` comes from the route:
/// `/new` creates a record, `/edit` resubmits a full replacement of the
/// latest one.
#[component]
#[allow(non_snake_case)]
pub fn CompensationForm(edit_mode: bool) -> impl IntoView {
    let params = use_params_map();
    let employee_id = params.get_untracked().get("id").unwrap_or_default();

    let vm = CompensationFormViewModel::new(employee_id.clone(), edit_mode);
    vm.load();

    let history_href = format!("/employees/{}/compensation", employee_id);
    let navigate = use_navigate();
    let on_saved: Rc<dyn Fn(())> = Rc::new({
        let href = history_href.clone();
        move |_| navigate(&href, Default::default())
    });

    let catalog = vm.catalog;
    let structure_id = vm.structure_id;
    let effective_from = vm.effective_from;
    let rows = vm.rows;
    let error = vm.error;
    let loading = vm.loading;
    let saving = vm.saving;

    let vm_select = vm.clone();
    let vm_rows = vm.clone();
    let vm_submit = vm.clone();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">
                        {if edit_mode { "Edit compensation" } else { "Assign compensation" }}
                    </h1>
                    <span class="header__subtitle">{format!("Employee {}", employee_id)}</span>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Show when=move || !loading.get()>
                <div class="details-form">
                    <div class="form-group">
                        <label for="structure">{"Salary structure"}</label>
                        <select
                            id="structure"
                            prop:value=move || {
                                structure_id.get().map(|id| id.to_string()).unwrap_or_default()
                            }
                            on:change={
                                let vm = vm_select.clone();
                                move |ev| vm.select_structure(&event_target_value(&ev))
                            }
                        >
                            <option value="">{"Select a structure"}</option>
                            {move || catalog.get().into_iter().map(|s| {
                                let id = s.id.map(|i| i.to_string()).unwrap_or_default();
                                view! {
                                    <option value=id>
                                        {format!("{} ({})", s.name, s.country.as_str())}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="effective_from">{"Effective from"}</label>
                        <input
                            type="date"
                            id="effective_from"
                            prop:value=move || effective_from.get()
                            on:input=move |ev| effective_from.set(event_target_value(&ev))
                        />
                    </div>

                    <For
                        each=move || rows.get()
                        key=|row| row.component_id.value()
                        children={
                            let vm_rows = vm_rows.clone();
                            move |row: ValueRow| {
                                let vm = vm_rows.clone();
                                let component_id = row.component_id;
                                view! {
                                    <div class="component-group">
                                        <label>{row.name.clone()}</label>
                                        <input
                                            type="number"
                                            step="any"
                                            prop:value=row.value.clone()
                                            on:input=move |ev| {
                                                vm.set_row_value(component_id, event_target_value(&ev))
                                            }
                                        />
                                    </div>
                                }
                            }
                        }
                    />
                </div>
            </Show>

            <div class="form-actions">
                <button
                    class="button button--primary"
                    disabled=move || saving.get() || loading.get()
                    on:click={
                        let vm = vm_submit.clone();
                        move |_| vm.submit_command(on_saved.clone())
                    }
                >
                    {if edit_mode { "Update" } else { "Assign" }}
                </button>
                <A href=history_href.clone() attr:class="button button--secondary">
                    {"Cancel"}
                </A>
            </div>
        </div>
    }
}
