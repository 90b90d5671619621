pub mod state;

use self::state::{create_state, days_worked, gender_label, sort_fields, start_date};
use crate::domain::a002_employee::api;
use crate::routes::AppRoute;
use crate::shared::components::{Notice, PageHeader, PaginationControls};
use crate::shared::delete_gate::{DeleteGate, DeleteOutcome};
use crate::shared::gateway::{use_gateway, Operation};
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, highlight_matches};
use crate::shared::modal::ConfirmDialog;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a002_employee::aggregate::Employee;
use contracts::domain::common::Record;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

/// Employees of every café, or of `cafe_id` only
#[component]
pub fn EmployeeList(#[prop(into)] cafe_id: Signal<Option<String>>) -> impl IntoView {
    let gateway = StoredValue::new(use_gateway());
    let state = create_state();
    let gate = RwSignal::new(DeleteGate::<Employee>::new());

    let load_data = move || {
        let Some(ticket) = state.try_update(|s| s.begin_fetch()) else {
            return;
        };
        let gateway = gateway.get_value();
        let cafe_id = cafe_id.get_untracked();
        spawn_local(async move {
            let result = match &cafe_id {
                Some(cafe_id) => api::fetch_by_cafe(&gateway, cafe_id).await,
                None => api::fetch_all(&gateway).await,
            };
            let result = result.map_err(|e| {
                log::error!("Failed to load employees: {}", e);
                e.user_message(Operation::List, Employee::message_noun())
            });
            state.try_update(|s| s.apply_fetch(ticket, result));
        });
    };

    // refetch whenever the café filter in the URL changes
    Effect::new(move |_| {
        cafe_id.track();
        untrack(load_data);
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

    let subtitle = Signal::derive(move || {
        let id = cafe_id.get()?;
        let name = state.with(|s| {
            s.items()
                .iter()
                .find_map(|e| e.cafe_name.clone().filter(|n| !n.is_empty()))
        });
        Some(format!("Café: {}", name.unwrap_or(id)))
    });

    view! {
        <PageFrame page_id="a002_employee--list" category=PAGE_CAT_LIST>
            <PageHeader title=Employee::list_name().to_string() subtitle=subtitle>
                {move || cafe_id.get().is_some().then(|| view! {
                    <A href=AppRoute::Employees.path() attr:class="button button--secondary">
                        "Show all"
                    </A>
                })}
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_data()
                    disabled=Signal::derive(move || state.with(|s| s.loading))
                >
                    {icon("refresh")}
                    {move || if state.with(|s| s.loading) { " Loading..." } else { " Refresh" }}
                </Button>
                <A href=AppRoute::EmployeeAdd.path() attr:class="button button--primary">
                    {icon("plus")}
                    " Add New Employee"
                </A>
            </PageHeader>

            <div class="page__content">
                <Notice
                    message=Signal::derive(move || state.with(|s| s.error.clone()))
                    on_dismiss=Callback::new(move |_| state.update(|s| s.dismiss_error()))
                />

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <Label>"Filter by Name:"</Label>
                        <Input value=filter placeholder="Name..." />
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
                                <TableHeaderCell resizable=false min_width=140.0>
                                    {sort_header(sort_fields::NAME, "Name")}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=180.0>
                                    {sort_header(sort_fields::EMAIL, "Email")}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>
                                    {sort_header(sort_fields::PHONE, "Phone")}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>
                                    {sort_header(sort_fields::GENDER, "Gender")}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>
                                    {sort_header(sort_fields::DAYS_WORKED, "Days worked")}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>
                                    {sort_header(sort_fields::CAFE, "Café")}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>
                                    {sort_header(sort_fields::START_DATE, "Start Date")}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.with(|s| s.visible())
                                key=|employee| employee.clone()
                                children=move |employee: Employee| {
                                    let edit_href = AppRoute::EmployeeEdit(employee.id.clone()).path();
                                    let name = employee.name.clone();
                                    let target = employee.clone();
                                    let email_address = employee.email_address.clone();
                                    let phone_number = employee.phone_number.clone();
                                    let gender = gender_label(&employee);
                                    let days = days_worked(&employee);
                                    let cafe_name = employee.cafe_name.clone().unwrap_or_default();
                                    let started = start_date(&employee);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                {move || filter.with(|f| highlight_matches(&name, f))}
                                            </TableCell>
                                            <TableCell>{email_address}</TableCell>
                                            <TableCell>{phone_number}</TableCell>
                                            <TableCell>{gender}</TableCell>
                                            <TableCell>{days}</TableCell>
                                            <TableCell>{cafe_name}</TableCell>
                                            <TableCell>{started}</TableCell>
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
                        <div class="table__empty">"No employees found"</div>
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
