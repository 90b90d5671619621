use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Confirmation dialog for destructive actions.
///
/// Rendered only while `open` is true. Escape and the overlay act like
/// "Cancel"; both buttons are disabled while `busy`.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] message: Signal<String>,
    /// Label of the destructive button
    #[prop(into, optional)]
    confirm_label: Option<String>,
    #[prop(into)] busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "Delete".to_string());

    // Handle Escape key
    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" && open.get_untracked() && !busy.get_untracked() {
            on_cancel.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    let cancel = move || {
        if !busy.get_untracked() {
            on_cancel.run(());
        }
    };

    // Prevent click propagation from modal content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| cancel()>
                <div class="modal modal--confirm" role="dialog" on:click=stop_propagation>
                    <div class="modal-header">
                        <h2 class="modal-title">{move || title.get()}</h2>
                        <div class="modal-header-actions">
                            <button
                                class="button button--icon modal__close"
                                disabled=move || busy.get()
                                on:click=move |_| cancel()
                            >
                                {icon("x")}
                            </button>
                        </div>
                    </div>
                    <div class="modal-body">
                        <p>{move || message.get()}</p>
                    </div>
                    <div class="modal-footer">
                        <button
                            class="button button--secondary"
                            disabled=move || busy.get()
                            on:click=move |_| cancel()
                        >
                            "Cancel"
                        </button>
                        <button
                            class="button button--danger"
                            disabled=move || busy.get()
                            on:click=move |_| on_confirm.run(())
                        >
                            {icon("delete")}
                            {
                                let label = confirm_label.clone();
                                move || if busy.get() { "Deleting...".to_string() } else { label.clone() }
                            }
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
