use super::logo::LogoPicker;
use super::view_model::CafeDetailsViewModel;
use crate::shared::components::{Notice, PageHeader, TextField};
use crate::shared::form_state::{FormMode, FormPhase, FormState};
use crate::shared::gateway::use_gateway;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use contracts::domain::a001_cafe::aggregate::fields;
use leptos::prelude::*;
use std::rc::Rc;

/// Create form when `id` is `None`, edit form otherwise
#[component]
pub fn CafeDetails(
    #[prop(into)] id: Signal<Option<String>>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let mode = if id.get_untracked().is_some() {
        FormMode::Edit
    } else {
        FormMode::Create
    };
    let vm = CafeDetailsViewModel::new(use_gateway(), mode);
    let form = vm.form;
    let is_edit = vm.is_edit_mode();
    let title = if is_edit { "Edit Café" } else { "Add Café" };

    {
        let vm = vm.clone();
        Effect::new(move |_| {
            if let Some(id) = id.get() {
                vm.load(id);
            }
        });
    }

    let phase = move || form.with(|f| f.phase());
    let locked = Signal::derive(move || phase() != FormPhase::Editing);
    let notice = Signal::derive(move || {
        form.with(|f| match f.phase() {
            FormPhase::LoadFailed => None,
            _ => f.notice().map(str::to_string),
        })
    });

    let on_saved = StoredValue::new_local(on_saved);
    let on_cancel = StoredValue::new_local(on_cancel);

    view! {
        <PageFrame page_id="a001_cafe--detail" category=PAGE_CAT_DETAIL>
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
                    <TextField form=form name=fields::NAME label="Name" placeholder="6 to 10 characters" />
                    <TextField
                        form=form
                        name=fields::DESCRIPTION
                        label="Description"
                        multiline=true
                        placeholder="Up to 256 characters"
                    />
                    <TextField form=form name=fields::LOCATION label="Location" />
                    <LogoPicker state=vm.logo disabled=locked />
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
