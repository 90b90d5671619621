use super::view_model::EmployeeDetailsViewModel;
use crate::shared::components::{Notice, PageHeader, SelectField, TextField};
use crate::shared::form_state::{FormMode, FormPhase, FormState};
use crate::shared::gateway::use_gateway;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use contracts::domain::a002_employee::aggregate::fields;
use contracts::enums::Gender;
use leptos::prelude::*;
use std::rc::Rc;

/// Gender as radio buttons; a seeded "Female" checks the female option
#[component]
fn GenderField(form: RwSignal<FormState>) -> impl IntoView {
    let name = fields::GENDER;
    let disabled = move || form.with(|f| f.phase() != FormPhase::Editing);

    view! {
        <div class=move || if form.with(|f| f.visible_error(name).is_some()) { "form-group form-group--invalid" } else { "form-group" }>
            <label>"Gender"</label>
            <div class="radio-group">
                {Gender::all().into_iter().map(|gender| {
                    view! {
                        <label class="radio-group__option">
                            <input
                                type="radio"
                                name=name
                                value=gender.code()
                                disabled=disabled
                                prop:checked=move || form.with(|f| Gender::parse(f.value(name)) == Some(gender))
                                on:change=move |_| form.update(|f| {
                                    f.set_value(name, gender.code());
                                    f.touch(name);
                                })
                            />
                            {gender.display_name()}
                        </label>
                    }
                }).collect_view()}
            </div>
            {move || form.with(|f| f.visible_error(name)).map(|message| view! {
                <div class="form-group__error">{message}</div>
            })}
        </div>
    }
}

/// Create form when `id` is `None`, edit form otherwise
#[component]
pub fn EmployeeDetails(
    #[prop(into)] id: Signal<Option<String>>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let mode = if id.get_untracked().is_some() {
        FormMode::Edit
    } else {
        FormMode::Create
    };
    let vm = EmployeeDetailsViewModel::new(use_gateway(), mode);
    let form = vm.form;
    let cafes = vm.cafes;
    let is_edit = vm.is_edit_mode();
    let title = if is_edit { "Edit Employee" } else { "Add New Employee" };

    vm.load_cafes();
    {
        let vm = vm.clone();
        Effect::new(move |_| {
            if let Some(id) = id.get() {
                vm.load(id);
            }
        });
    }

    // keep a seeded café selectable even if it is missing from the list
    let cafe_options = Signal::derive(move || {
        let mut options = cafes.get();
        let current = form.with(|f| f.value(fields::CAFE_ID).to_string());
        if !current.is_empty() && !options.iter().any(|(id, _)| *id == current) {
            options.push((current.clone(), current));
        }
        options
    });

    let phase = move || form.with(|f| f.phase());
    let notice = Signal::derive(move || {
        form.with(|f| match f.phase() {
            FormPhase::LoadFailed => None,
            _ => f.notice().map(str::to_string),
        })
    });

    let on_saved = StoredValue::new_local(on_saved);
    let on_cancel = StoredValue::new_local(on_cancel);

    view! {
        <PageFrame page_id="a002_employee--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title=title.to_string()>
                {()}
            </PageHeader>

            <div class="page__content details-container">
                <Notice
                    message=notice
                    on_dismiss=Callback::new(move |_| form.update(FormState::dismiss_notice))
                />

                {move || (phase() == FormPhase::Loading).then(|| view! {
                    <div class="details-loading">"Loading..."</div>
                })}

                {move || (phase() == FormPhase::LoadFailed).then(|| view! {
                    <div class="alert alert--error">
                        {form.with(|f| f.notice().unwrap_or_default().to_string())}
                    </div>
                })}

                <div
                    class="details-form"
                    class:hidden=move || matches!(phase(), FormPhase::Loading | FormPhase::LoadFailed)
                >
                    <TextField form=form name=fields::NAME label="Name" />
                    <TextField
                        form=form
                        name=fields::EMAIL_ADDRESS
                        label="Email Address"
                        input_type="email"
                        placeholder="name@example.com"
                    />
                    <TextField
                        form=form
                        name=fields::PHONE_NUMBER
                        label="Phone Number"
                        input_type="tel"
                    />
                    <GenderField form=form />
                    <SelectField
                        form=form
                        name=fields::CAFE_ID
                        label="Cafe"
                        options=cafe_options
                        placeholder="Select a café"
                    />
                </div>

                <div class="details-actions">
                    <button
                        class="button button--primary"
                        on:click={
                            let vm = vm.clone();
                            let on_saved = on_saved.clone();
                            move |_| vm.save_command(on_saved.get_value())
                        }
                        disabled=move || phase() != FormPhase::Editing
                    >
                        {icon("save")}
                        {move || match (phase(), is_edit) {
                            (FormPhase::Submitting, _) => "Saving...",
                            (_, true) => "Save",
                            (_, false) => "Create",
                        }}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click={
                            let vm = vm.clone();
                            move |_| vm.cancel_command(on_cancel.get_value())
                        }
                        disabled=move || phase() == FormPhase::Submitting
                    >
                        {icon("x")}
                        "Cancel"
                    </button>
                </div>
            </div>
        </PageFrame>
    }
}
