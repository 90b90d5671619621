use crate::shared::icons::icon;
use leptos::prelude::*;

/// Page-level error banner with a close button.
/// Renders nothing while `message` is `None`.
#[component]
pub fn Notice(
    #[prop(into)] message: Signal<Option<String>>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="notice notice--error" role="alert">
                    {icon("alert")}
                    <span class="notice__text">{text}</span>
                    <button
                        class="button button--icon notice__close"
                        title="Dismiss"
                        on:click=move |_| on_dismiss.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
            }
        })
    }
}
