pub mod state;

use self::state::{create_state, sort_fields};
use crate::domain::a001_cafe::api;
use crate::routes::AppRoute;
use crate::shared::components::{Notice, PageHeader, PaginationControls};
use crate::shared::delete_gate::{DeleteGate, DeleteOutcome};
use crate::shared::gateway::{use_gateway, Operation};
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, highlight_matches};
use crate::shared::modal::ConfirmDialog;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a001_cafe::aggregate::Cafe;
use contracts::domain::common::Record;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

/// Shown when a logo URL fails to load
const LOGO_FALLBACK: &str = "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' width='40' height='40'><rect width='40' height='40' rx='6' fill='%23e0e0e0'/><text x='20' y='26' font-size='16' text-anchor='middle' fill='%23888'>☕</text></svg>";

#[component]
pub fn CafeList() -> impl IntoView {
    let gateway = StoredValue::new(use_gateway());
    let state = create_state();
    let gate = RwSignal::new(DeleteGate::<Cafe>::new());

    let load_data = move || {
        let Some(ticket) = state.try_update(|s| s.begin_fetch()) else {
            return;
        };
        let gateway = gateway.get_value();
        spawn_local(async move {
            let result = api::fetch_all(&gateway).await.map_err(|e| {
                log::error!("Failed to load cafes: {}", e);
                e.user_message(Operation::List, Cafe::message_noun())
            });
            state.try_update(|s| s.apply_fetch(ticket, result));
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let filter = RwSignal::new(String::new());
    Effect::new(move || {
        let v = filter.get();
        untrack(move || state.update(|s| s.set_filter(v)));
    });

    let confirm_delete = move |_: ()| {
        let Some((ticket, id)) = gate.try_update(|g| g.confirm()).flatten() else {
            return;
        };
        let gateway = gateway.get_value();
        spawn_local(async move {
            let result = api::delete(&gateway, &id).await;
            match gate.try_update(|g| g.finish(ticket, result)) {
                Some(DeleteOutcome::Refresh) => load_data(),
                Some(DeleteOutcome::Failed(message)) => {
                    state.try_update(|s| s.error = Some(message));
                }
                _ => {}
            }
        });
    };

    let sort_header = move |field: &'static str, caption: &'static str| {
        view! {
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| state.update(|s| s.toggle_sort(field))
            >
                {caption}
                <span>
                    {move || state.with(|s| get_sort_indicator(&s.sort_field, field, s.sort_ascending))}
                </span>
            </div>
        }
    };

    view! {
        <PageFrame page_id="a001_cafe--list" category=PAGE_CAT_LIST>
            <PageHeader title=Cafe::list_name().to_string()>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_data()
                    disabled=Signal::derive(move || state.with(|s| s.loading))
                >
                    {icon("refresh")}
                    {move || if state.with(|s| s.loading) { " Loading..." } else { " Refresh" }}
                </Button>
                <A href=AppRoute::CafeAdd.path() attr:class="button button--primary">
                    {icon("plus")}
                    " Add New Café"
                </A>
            </PageHeader>

            <div class="page__content">
                <Notice
                    message=Signal::derive(move || state.with(|s| s.error.clone()))
                    on_dismiss=Callback::new(move |_| state.update(|s| s.dismiss_error()))
                />

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <Label>"Filter by Location:"</Label>
                        <Input value=filter placeholder="Location..." />
                    </Flex>
                    <PaginationControls
                        current_page=Signal::derive(move || state.with(|s| s.page))
                        total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                        total_count=Signal::derive(move || state.with(|s| s.total_count()))
                        page_size=Signal::derive(move || state.with(|s| s.page_size))
                        on_page_change=Callback::new(move |page| state.update(|s| s.go_to_page(page)))
                        on_page_size_change=Callback::new(move |size| state.update(|s| s.set_page_size(size)))
                    />
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=70.0>"Logo"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>
                                    {sort_header(sort_fields::NAME, "Name")}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>
                                    {sort_header(sort_fields::DESCRIPTION, "Description")}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>
                                    {sort_header(sort_fields::EMPLOYEES, "Employees")}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>
                                    {sort_header(sort_fields::LOCATION, "Location")}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.with(|s| s.visible())
                                key=|cafe| cafe.clone()
                                children=move |cafe: Cafe| {
                                    let employees_href = AppRoute::EmployeesOfCafe(cafe.id.clone()).path();
                                    let edit_href = AppRoute::CafeEdit(cafe.id.clone()).path();
                                    let location = cafe.location.clone();
                                    let logo = if cafe.logo.is_empty() {
                                        LOGO_FALLBACK.to_string()
                                    } else {
                                        cafe.logo.clone()
                                    };
                                    let target = cafe.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <img
                                                    class="cafe-logo"
                                                    src=logo
                                                    alt="café logo"
                                                    width="40"
                                                    height="40"
                                                    on:error=|ev| {
                                                        use wasm_bindgen::JsCast;
                                                        if let Some(img) = ev
                                                            .target()
                                                            .and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok())
                                                        {
                                                            if img.src() != LOGO_FALLBACK {
                                                                img.set_src(LOGO_FALLBACK);
                                                            }
                                                        }
                                                    }
                                                />
                                            </TableCell>
                                            <TableCell>{cafe.name.clone()}</TableCell>
                                            <TableCell>{cafe.description.clone()}</TableCell>
                                            <TableCell>
                                                <A href=employees_href attr:class="button button--link">
                                                    {format!("{} Employees", cafe.employee_count)}
                                                </A>
                                            </TableCell>
                                            <TableCell>
                                                {move || filter.with(|f| highlight_matches(&location, f))}
                                            </TableCell>
                                            <TableCell>
                                                <div class="table__actions">
                                                    <A href=edit_href attr:class="button button--icon" attr:title="Edit">
                                                        {icon("edit")}
                                                    </A>
                                                    <button
                                                        class="button button--icon button--danger"
                                                        title="Delete"
                                                        on:click=move |_| {
                                                            let target = target.clone();
                                                            gate.update(|g| g.open(target));
                                                        }
                                                    >
                                                        {icon("delete")}
                                                    </button>
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || state.with(|s| s.is_loaded && s.total_count() == 0).then(|| view! {
                        <div class="table__empty">"No cafés found"</div>
                    })}
                </div>
            </div>

            <ConfirmDialog
                open=Signal::derive(move || gate.with(|g| g.is_open()))
                title=Signal::derive(move || gate.with(|g| g.title()))
                message=Signal::derive(move || gate.with(|g| g.message().unwrap_or_default()))
                busy=Signal::derive(move || gate.with(|g| g.in_flight()))
                on_confirm=Callback::new(confirm_delete)
                on_cancel=Callback::new(move |_| gate.update(|g| g.cancel()))
            />
        </PageFrame>
    }
}
