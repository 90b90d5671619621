use crate::shared::form_state::{FormPhase, FormState};
use leptos::prelude::*;

fn group_class(form: RwSignal<FormState>, name: &'static str) -> impl Fn() -> &'static str {
    move || {
        if form.with(|f| f.visible_error(name).is_some()) {
            "form-group form-group--invalid"
        } else {
            "form-group"
        }
    }
}

fn field_error(form: RwSignal<FormState>, name: &'static str) -> impl IntoView {
    move || {
        form.with(|f| f.visible_error(name))
            .map(|message| view! { <div class="form-group__error">{message}</div> })
    }
}

/// Text input (or textarea) bound to one field of a `FormState`
#[component]
pub fn TextField(
    form: RwSignal<FormState>,
    name: &'static str,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let value = move || form.with(|f| f.value(name).to_string());
    let disabled = move || form.with(|f| f.phase() != FormPhase::Editing);
    let on_input = move |ev| {
        let text = event_target_value(&ev);
        form.update(|f| f.set_value(name, text));
    };
    let on_blur = move |_| form.update(|f| f.touch(name));

    let control = if multiline {
        view! {
            <textarea
                id=name
                rows="3"
                placeholder=placeholder
                prop:value=value
                disabled=disabled
                on:input=on_input
                on:blur=on_blur
            />
        }
        .into_any()
    } else {
        view! {
            <input
                type=input_type.unwrap_or("text")
                id=name
                placeholder=placeholder
                prop:value=value
                disabled=disabled
                on:input=on_input
                on:blur=on_blur
            />
        }
        .into_any()
    };

    view! {
        <div class=group_class(form, name)>
            <label for=name>{label}</label>
            {control}
            {field_error(form, name)}
        </div>
    }
}

/// Drop-down bound to one field; `options` are `(value, caption)` pairs
#[component]
pub fn SelectField(
    form: RwSignal<FormState>,
    name: &'static str,
    label: &'static str,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let disabled = move || form.with(|f| f.phase() != FormPhase::Editing);

    view! {
        <div class=group_class(form, name)>
            <label for=name>{label}</label>
            <select
                id=name
                disabled=disabled
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| {
                        f.set_value(name, value);
                        f.touch(name);
                    });
                }
                on:blur=move |_| form.update(|f| f.touch(name))
            >
                <option value="" selected=move || form.with(|f| f.value(name).is_empty())>
                    {placeholder}
                </option>
                <For
                    each=move || options.get()
                    key=|(value, _)| value.clone()
                    children=move |(value, caption)| {
                        let current = value.clone();
                        view! {
                            <option
                                value=value
                                selected=move || form.with(|f| f.value(name) == current)
                            >
                                {caption}
                            </option>
                        }
                    }
                />
            </select>
            {field_error(form, name)}
        </div>
    }
}
