use leptos::prelude::*;

/// Title row of list and form pages; children are the action buttons
#[component]
pub fn PageHeader(
    #[prop(into)] title: Signal<String>,
    /// Shown under the title, e.g. the café an employee list is limited to
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let subtitle_view = move || {
        subtitle
            .get()
            .filter(|s| !s.is_empty())
            .map(|s| view! { <p class="page-header__subtitle">{s}</p> })
    };

    view! {
        <header class="page__header page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{move || title.get()}</h1>
                {subtitle_view}
            </div>
            <div class="page-header__actions">{children()}</div>
        </header>
    }
}
