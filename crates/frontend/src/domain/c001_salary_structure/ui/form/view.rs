use super::view_model::StructureFormViewModel;
use contracts::domain::c001_salary_structure::{ComponentKind, Country, RuleKind};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use std::rc::Rc;

/// Structure editor used for both `/structures/new` and
/// `/structures/:id/edit`; the mode is decided by the presence of the id
/// parameter, like the route table promises.
#[component]
#[allow(non_snake_case)]
pub fn StructureForm() -> impl IntoView {
    let params = use_params_map();
    let id = params
        .get_untracked()
        .get("id")
        .and_then(|s| s.parse::<i64>().ok());

    let vm = StructureFormViewModel::new();
    vm.load_if_needed(id);

    let navigate = use_navigate();
    let on_saved: Rc<dyn Fn(())> = Rc::new(move |_| navigate("/structures", Default::default()));

    let form = vm.form;
    // Rows are re-rendered only when a group is added or removed, not on
    // every keystroke inside a group.
    let row_count = Memo::new(move |_| form.with(|f| f.components.len()));

    let vm_title = vm.clone();
    let vm_save = vm.clone();
    let saving = vm.saving;

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">
                        {move || if vm_title.is_edit_mode()() {
                            "Edit salary structure"
                        } else {
                            "New salary structure"
                        }}
                    </h1>
                </div>
            </div>

            {move || vm.error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="details-form">
                <div class="form-group">
                    <label for="name">{"Name"}</label>
                    <input
                        type="text"
                        id="name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        placeholder="e.g. UAE Standard 2024"
                    />
                </div>

                <div class="form-group">
                    <label for="country">{"Country"}</label>
                    <select
                        id="country"
                        prop:value=move || form.with(|f| f.country.as_str().to_string())
                        on:change=move |ev| {
                            if let Some(country) = Country::parse(&event_target_value(&ev)) {
                                form.update(|f| f.country = country);
                            }
                        }
                    >
                        {Country::ALL.into_iter().map(|c| view! {
                            <option value=c.as_str()>{c.as_str()}</option>
                        }).collect_view()}
                    </select>
                </div>

                <h2>{"Components"}</h2>

                {move || (0..row_count.get()).map(|index| view! {
                    <div class="component-group">
                        <div class="form-group">
                            <label>{"Name"}</label>
                            <input
                                type="text"
                                prop:value=move || form.with(|f| {
                                    f.components.get(index).map(|c| c.name.clone()).unwrap_or_default()
                                })
                                on:input=move |ev| form.update(|f| {
                                    if let Some(c) = f.components.get_mut(index) {
                                        c.name = event_target_value(&ev);
                                    }
                                })
                                placeholder="Component name"
                            />
                        </div>
                        <div class="form-group">
                            <label>{"Type"}</label>
                            <select
                                prop:value=move || form.with(|f| {
                                    f.components.get(index).map(|c| c.kind.as_str().to_string()).unwrap_or_default()
                                })
                                on:change=move |ev| {
                                    if let Some(kind) = ComponentKind::parse(&event_target_value(&ev)) {
                                        form.update(|f| {
                                            if let Some(c) = f.components.get_mut(index) {
                                                c.kind = kind;
                                            }
                                        });
                                    }
                                }
                            >
                                {ComponentKind::ALL.into_iter().map(|k| view! {
                                    <option value=k.as_str()>{k.as_str()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label>{"Rule"}</label>
                            <select
                                prop:value=move || form.with(|f| {
                                    f.components.get(index)
                                        .and_then(|c| c.rule_kind)
                                        .map(|r| r.as_str().to_string())
                                        .unwrap_or_default()
                                })
                                on:change=move |ev| {
                                    let rule = RuleKind::parse(&event_target_value(&ev));
                                    form.update(|f| {
                                        if let Some(c) = f.components.get_mut(index) {
                                            c.rule_kind = rule;
                                        }
                                    });
                                }
                            >
                                <option value="">{"-"}</option>
                                {RuleKind::ALL.into_iter().map(|r| view! {
                                    <option value=r.as_str()>{r.as_str()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <button
                            class="button button--secondary"
                            on:click=move |_| form.update(|f| f.remove_component(index))
                        >
                            {"Remove"}
                        </button>
                    </div>
                }).collect_view()}

                <button
                    class="button button--secondary"
                    on:click=move |_| form.update(|f| f.add_component())
                >
                    {"Add component"}
                </button>

                <div class="form-actions">
                    <button
                        class="button button--primary"
                        disabled=move || saving.get()
                        on:click={
                            let vm = vm_save.clone();
                            let on_saved = on_saved.clone();
                            move |_| vm.save_command(on_saved.clone())
                        }
                    >
                        {"Save"}
                    </button>
                    <A href="/structures" attr:class="button button--secondary">{"Cancel"}</A>
                </div>
            </div>
        </div>
    }
}
