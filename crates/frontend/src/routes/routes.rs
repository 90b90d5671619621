use crate::domain::a001_cafe::ui::details::CafeDetails;
use crate::domain::a001_cafe::ui::list::CafeList;
use crate::domain::a002_employee::ui::details::EmployeeDetails;
use crate::domain::a002_employee::ui::list::EmployeeList;
use crate::layout::Shell;
use crate::routes::{AppRoute, CAFE_ID_QUERY};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes, A};
use leptos_router::hooks::{use_location, use_navigate, use_params_map, use_query_map};
use leptos_router::path;
use std::rc::Rc;

/// Callback that leaves a form for its owning list
fn back_from(form: &AppRoute) -> Rc<dyn Fn(())> {
    let navigate = use_navigate();
    let path = form.owning_list().path();
    Rc::new(move |_| navigate(&path, Default::default()))
}

fn route_id() -> Signal<Option<String>> {
    let params = use_params_map();
    Signal::derive(move || params.read().get("id"))
}

#[component]
fn CafeAddPage() -> impl IntoView {
    let back = back_from(&AppRoute::CafeAdd);
    view! { <CafeDetails id={None::<String>} on_saved=back.clone() on_cancel=back /> }
}

#[component]
fn CafeEditPage() -> impl IntoView {
    let id = route_id();
    let back = back_from(&AppRoute::CafeEdit(id.get_untracked().unwrap_or_default()));
    view! { <CafeDetails id=id on_saved=back.clone() on_cancel=back /> }
}

#[component]
fn EmployeeListPage() -> impl IntoView {
    let query = use_query_map();
    let cafe_id = Signal::derive(move || {
        query
            .read()
            .get(CAFE_ID_QUERY)
            .filter(|id| !id.trim().is_empty())
    });
    view! { <EmployeeList cafe_id=cafe_id /> }
}

#[component]
fn EmployeeAddPage() -> impl IntoView {
    let back = back_from(&AppRoute::EmployeeAdd);
    view! { <EmployeeDetails id={None::<String>} on_saved=back.clone() on_cancel=back /> }
}

#[component]
fn EmployeeEditPage() -> impl IntoView {
    let id = route_id();
    let back = back_from(&AppRoute::EmployeeEdit(id.get_untracked().unwrap_or_default()));
    view! { <EmployeeDetails id=id on_saved=back.clone() on_cancel=back /> }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--detail" category=PAGE_CAT_DETAIL>
            <div class="page__content">
                <h2>"Page not found"</h2>
                <A href=AppRoute::Cafes.path()>"Back to cafés"</A>
            </div>
        </PageFrame>
    }
}

/// Unmatched locations: a known page in other letter case is redirected to
/// its canonical path, anything else is not found
#[component]
fn RouteFallback() -> impl IntoView {
    let location = use_location();
    let search = location.search.get_untracked();
    let search = search.trim_start_matches('?');
    let current = if search.is_empty() {
        location.pathname.get_untracked()
    } else {
        format!("{}?{}", location.pathname.get_untracked(), search)
    };
    let route = AppRoute::parse(&current);
    let canonical = route.path();

    if route == AppRoute::NotFound || canonical == current {
        log::warn!("No page for {}", current);
        view! { <NotFoundPage /> }.into_any()
    } else {
        log::debug!("Redirecting {} to {}", current, canonical);
        view! { <Redirect path=canonical /> }.into_any()
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <RouteFallback /> }>
                    <Route path=path!("/") view=CafeList />
                    <Route path=path!("/cafes") view=CafeList />
                    <Route path=path!("/cafes/add") view=CafeAddPage />
                    <Route path=path!("/cafes/edit/:id") view=CafeEditPage />
                    <Route path=path!("/employees") view=EmployeeListPage />
                    <Route path=path!("/employees/add") view=EmployeeAddPage />
                    <Route path=path!("/employees/edit/:id") view=EmployeeEditPage />
                </Routes>
            </Shell>
        </Router>
    }
}
